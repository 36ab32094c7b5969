//! Supported scope-page origins.
//!
//! Only two platforms are recognized; any other origin is a blocking
//! user-input error and no extraction is attempted.

use crate::errors::{Result, ScopeSweepError};

/// A supported bug-bounty platform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum Site {
    Bugcrowd,
    HackerOne,
}

/// Bugcrowd scope-table selectors, most specific first.
const BUGCROWD_SELECTORS: &[&str] = &[
    r#"[data-testid="target-groups"] [data-testid="in-scope-table"] td:first-child"#,
    ".target-group .scope-table td:first-child",
    ".bc-panel .bc-table .bc-table__row td:first-child",
    ".target-table tbody tr td:first-child",
    ".in-scope-table tbody tr td:first-child",
];

/// HackerOne scope-table selectors, most specific first.
const HACKERONE_SELECTORS: &[&str] = &[
    r#"[data-testid="policy-scopes"] tbody tr td:first-child"#,
    ".policy-scopes tbody tr td:first-child",
    ".structured-scope-list tbody tr td:first-child",
    ".scope-list tbody tr td:first-child",
    ".spec-scope-table tbody tr td:first-child",
];

/// Origin-agnostic carrier-attribute selectors used on both platforms.
pub const ATTRIBUTE_SELECTORS: &[(&str, &str)] = &[
    ("[data-asset-identifier]", "data-asset-identifier"),
    ("[aria-label]", "aria-label"),
    ("[title]", "title"),
];

impl Site {
    /// Infer the site from a page URL. Unknown origins are an error, surfaced
    /// before any extraction happens.
    pub fn from_url(url: &str) -> Result<Self> {
        let host = host_of(url);
        if host_matches(&host, "bugcrowd.com") {
            Ok(Site::Bugcrowd)
        } else if host_matches(&host, "hackerone.com") {
            Ok(Site::HackerOne)
        } else {
            Err(ScopeSweepError::unsupported_origin(url))
        }
    }

    /// Site-specific scope-table selectors.
    pub fn scope_selectors(&self) -> &'static [&'static str] {
        match self {
            Site::Bugcrowd => BUGCROWD_SELECTORS,
            Site::HackerOne => HACKERONE_SELECTORS,
        }
    }

    /// Label used in export filenames and batch output.
    pub fn label(&self) -> &'static str {
        match self {
            Site::Bugcrowd => "bugcrowd",
            Site::HackerOne => "hackerone",
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Extract the host portion of a URL without a full URL parser.
fn host_of(url: &str) -> String {
    let rest = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    rest.split(['/', '?', '#'])
        .next()
        .unwrap_or("")
        .split(':')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// True when `host` is `domain` or a subdomain of it.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}
