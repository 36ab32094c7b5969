//! Candidate-to-domain extraction.
//!
//! Turns raw text fragments into zero or more normalized domains:
//! regex match, scheme/port/path strip, wildcard collapse, re-anchoring to
//! the longest valid domain-shaped prefix, boundary checks, then the
//! validity filter. Malformed input never errors; it is simply excluded.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::FilterConfig;
use crate::validator::is_valid_domain;

/// Domain-shaped substrings, optionally scheme-prefixed, wildcard-prefixed,
/// port-suffixed and path-suffixed.
static CANDIDATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:[a-z][a-z0-9+\-.]*://)?(?:\*+\.?)?[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+(?::\d{1,5})?(?:[/?#][^\s"'<>]*)?"#,
    )
    .expect("candidate regex is valid")
});

/// Longest valid domain-shaped prefix: optional `*.`, labels of at most 24
/// chars, then a 2-24 letter TLD.
static ANCHOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*\.)?(?:[a-z0-9](?:[a-z0-9-]{0,22}[a-z0-9])?\.)+[a-z]{2,24}")
        .expect("anchor regex is valid")
});

/// Stateless extraction pass over text fragments.
pub struct Extractor<'a> {
    filter: &'a FilterConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(filter: &'a FilterConfig) -> Self {
        Self { filter }
    }

    /// All validated domains found in one fragment, in match order.
    /// Duplicates are left for the result set to collapse.
    pub fn extract_fragment(&self, fragment: &str) -> Vec<String> {
        CANDIDATE_RE
            .find_iter(fragment)
            .filter_map(|m| self.extract_match(fragment, m))
            .collect()
    }

    fn extract_match(&self, fragment: &str, m: regex::Match<'_>) -> Option<String> {
        // Concatenation artifact guard: a match that ends flush against more
        // word characters in the source has no clean right boundary.
        if let Some(next) = fragment[m.end()..].chars().next() {
            let last = m.as_str().chars().last()?;
            if is_word_char(last) && is_word_char(next) {
                return None;
            }
        }

        let normalized = normalize(m.as_str())?;
        let anchored = reanchor(&normalized)?;
        is_valid_domain(&anchored, self.filter).then_some(anchored)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Strip scheme, port and path, trim stray punctuation, lowercase, collapse
/// the wildcard prefix to exactly `*.`, drop trailing dots.
fn normalize(raw: &str) -> Option<String> {
    let mut s = raw.trim();

    if let Some(idx) = s.find("://") {
        s = &s[idx + 3..];
    }
    s = s.split(['/', '#', '?']).next().unwrap_or("");
    s = s.split(':').next().unwrap_or("");
    s = s.trim_start_matches(['(', '[', '{', '<', '"', '\'', '`']);
    s = s.trim_end_matches([')', ']', '}', '>', '"', '\'', '`', ',', ';', '!']);

    let mut s = s.to_ascii_lowercase();

    if s.starts_with('*') {
        let rest = s.trim_start_matches('*');
        let rest = rest.strip_prefix('.').unwrap_or(rest);
        s = format!("*.{rest}");
    }

    let s = s.trim_end_matches('.');
    if s.is_empty() || s == "*." {
        return None;
    }
    Some(s.to_string())
}

/// Re-anchor to the longest valid domain-shaped prefix. A leftover tail that
/// begins with a word character means the boundary is dirty (layout text ran
/// together) and the candidate is dropped entirely.
fn reanchor(candidate: &str) -> Option<String> {
    let m = ANCHOR_RE.find(candidate)?;
    let rest = &candidate[m.end()..];
    if let Some(first) = rest.chars().next() {
        if is_word_char(first) {
            return None;
        }
    }
    Some(m.as_str().to_string())
}
