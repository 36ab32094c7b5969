//! Configuration management for scopesweep.
//!
//! Structured configuration that can be loaded from environment variables or
//! command-line arguments. It centralizes the scan bounds, the validity-filter
//! thresholds and word lists (which the source material treats as evolving
//! tuning knobs, not fixed law), and export preferences.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::errors::{Result, ScopeSweepError};

/// Main configuration structure for scopesweep.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Candidate-scanner bounds and toggles
    pub scan: ScanConfig,

    /// Validity-filter thresholds and denylists
    pub filter: FilterConfig,

    /// Re-scan coalescing settings
    pub debounce: DebounceConfig,

    /// Export preferences
    pub export: ExportConfig,
}

/// Candidate-scanner configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Hard cap on the number of text nodes visited in the full-text walk
    pub max_text_nodes: usize,

    /// Whether to scan `a[href]` values
    pub scan_links: bool,

    /// Whether to scan carrier attributes (`data-asset-identifier`,
    /// `aria-label`, `title`)
    pub scan_attributes: bool,
}

/// Validity-filter configuration.
///
/// Defaults follow the most permissive variant of the filter: multi-label TLD
/// support, 3-repeat threshold, explicit placeholder denylist.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Minimum accepted candidate length
    pub min_len: usize,

    /// Maximum accepted candidate length
    pub max_len: usize,

    /// Maximum length of a single label
    pub label_max: usize,

    /// Minimum TLD length (letters)
    pub tld_min: usize,

    /// Maximum TLD length (letters)
    pub tld_max: usize,

    /// A label longer than 3 chars ending in this many repeated identical
    /// letters is treated as placeholder noise ("xxxx")
    pub repeat_threshold: usize,

    /// Placeholder/UI words; a base domain whose labels are ALL denylisted
    /// words is rejected (`dashboard.targets`), while a single denylisted
    /// label in an otherwise real domain is fine (`dashboard.example.com`)
    pub denylist_words: Vec<String>,

    /// Brand / platform / CDN base domains rejected by suffix match
    pub denylist_suffixes: Vec<String>,

    /// File extensions that disqualify a candidate when they appear as the
    /// final label (`report-2024.json`)
    pub extension_denylist: Vec<String>,

    /// Bare scheme tokens; a candidate whose first label is one of these is
    /// scheme-shaped noise (`chrome.extension`)
    pub scheme_tokens: Vec<String>,

    /// Legacy TLD stems used by the glued-suffix heuristic: a final label
    /// extending one of these with extra letters is a concatenation artifact
    pub glued_tld_stems: Vec<String>,

    /// Real modern TLDs that happen to extend a legacy stem and must survive
    /// the glued-suffix heuristic (`network`, `company`, ...)
    pub glued_tld_allow: Vec<String>,
}

/// Re-scan coalescing configuration
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// Quiet interval after the last mutation notification before a re-scan
    /// becomes due
    pub quiet_interval: Duration,
}

/// Export configuration
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Directory export files are written into (current dir when unset)
    pub directory: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_text_nodes: 800,
            scan_links: true,
            scan_attributes: true,
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_len: 4,
            max_len: 253,
            label_max: 24,
            tld_min: 2,
            tld_max: 24,
            repeat_threshold: 3,
            denylist_words: to_strings(&[
                "dashboard",
                "assistance",
                "date",
                "issues",
                "services",
                "eligible",
                "ineligible",
                "targets",
                "rewards",
                "submissions",
                "bugcrowd",
                "hackerone",
                "localhost",
                "example",
                "test",
                "invalid",
                "scope",
                "details",
            ]),
            denylist_suffixes: to_strings(&[
                "bugcrowd.com",
                "bugcrowdusercontent.com",
                "hackerone.com",
                "hackerone-user-content.com",
                "cloudfront.net",
                "hacker101.com",
            ]),
            extension_denylist: to_strings(&[
                "js", "json", "css", "html", "htm", "xml", "yml", "yaml", "map", "txt", "csv",
                "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "woff", "woff2", "ttf", "eot",
                "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "tar", "gz", "rar",
                "exe", "dll", "bin", "mp3", "mp4", "webm", "avi", "mov", "php", "asp", "aspx",
                "jsp",
            ]),
            scheme_tokens: to_strings(&["http", "https", "ftp", "chrome", "file", "about"]),
            glued_tld_stems: to_strings(&["com", "net", "org", "edu", "gov", "mil", "biz", "info"]),
            glued_tld_allow: to_strings(&[
                "network",
                "company",
                "community",
                "computer",
                "education",
                "organic",
            ]),
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            quiet_interval: Duration::from_millis(1200),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration with environment-variable overrides applied on top
    /// of the defaults.
    ///
    /// Recognized variables:
    ///   SCOPESWEEP_MAX_TEXT_NODES, SCOPESWEEP_DEBOUNCE_MS,
    ///   SCOPESWEEP_REPEAT_THRESHOLD, SCOPESWEEP_EXPORT_DIR
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SCOPESWEEP_MAX_TEXT_NODES") {
            if let Ok(n) = v.parse::<usize>() {
                config.scan.max_text_nodes = n;
            }
        }
        if let Ok(v) = std::env::var("SCOPESWEEP_DEBOUNCE_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                config.debounce.quiet_interval = Duration::from_millis(ms);
            }
        }
        if let Ok(v) = std::env::var("SCOPESWEEP_REPEAT_THRESHOLD") {
            if let Ok(n) = v.parse::<usize>() {
                config.filter.repeat_threshold = n;
            }
        }
        if let Ok(v) = std::env::var("SCOPESWEEP_EXPORT_DIR") {
            if !v.is_empty() {
                config.export.directory = Some(PathBuf::from(v));
            }
        }

        config
    }

    /// Overlay CLI arguments onto the loaded configuration.
    pub fn merge_with_cli(&mut self, cli: &Cli) {
        if let Some(n) = cli.max_text_nodes {
            self.scan.max_text_nodes = n;
        }
        if let Some(ref dir) = cli.export {
            self.export.directory = Some(dir.clone());
        }
    }

    /// Sanity-check the assembled configuration.
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_text_nodes == 0 {
            return Err(ScopeSweepError::configuration(
                "max_text_nodes must be greater than zero",
            ));
        }
        if self.filter.min_len >= self.filter.max_len {
            return Err(ScopeSweepError::configuration(
                "filter min_len must be below max_len",
            ));
        }
        if self.filter.tld_min < 2 || self.filter.tld_min > self.filter.tld_max {
            return Err(ScopeSweepError::configuration(
                "TLD length bounds are inconsistent",
            ));
        }
        if self.filter.repeat_threshold < 2 {
            return Err(ScopeSweepError::configuration(
                "repeat_threshold below 2 would reject any doubled letter",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.max_text_nodes, 800);
        assert_eq!(config.filter.repeat_threshold, 3);
        assert_eq!(config.debounce.quiet_interval, Duration::from_millis(1200));
    }

    #[test]
    fn validation_rejects_zero_node_cap() {
        let mut config = Config::default();
        config.scan.max_text_nodes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_tiny_repeat_threshold() {
        let mut config = Config::default();
        config.filter.repeat_threshold = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn denylists_contain_expected_entries() {
        let filter = FilterConfig::default();
        assert!(filter.denylist_words.iter().any(|w| w == "dashboard"));
        assert!(filter.denylist_suffixes.iter().any(|s| s == "cloudfront.net"));
        assert!(filter.extension_denylist.iter().any(|e| e == "json"));
    }
}
