//! Classified domain sets.
//!
//! Container for validated domains with case-insensitive dedup and
//! wildcard/exact classification. The result set is rebuilt wholesale on
//! every extraction; there is no incremental update path.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Retrieval mode for a classified result set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Wildcard and exact entries together
    All,
    /// Wildcard entries as-is (`*.example.com`)
    Wildcards,
    /// Exact entries as-is
    Exact,
    /// Wildcard entries with the `*.` prefix stripped
    Clean,
}

impl Mode {
    /// Label used in export filenames.
    pub fn file_label(&self) -> &'static str {
        match self {
            Mode::All => "all_domains",
            Mode::Wildcards => "wildcards",
            Mode::Exact => "exact_domains",
            Mode::Clean => "clean_wildcards",
        }
    }

    /// Parse the wire-format mode string (`"all"`, `"wildcards"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Mode::All),
            "wildcards" => Some(Mode::Wildcards),
            "exact" => Some(Mode::Exact),
            "clean" => Some(Mode::Clean),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::All => "all",
            Mode::Wildcards => "wildcards",
            Mode::Exact => "exact",
            Mode::Clean => "clean",
        };
        f.write_str(s)
    }
}

/// Per-mode entry counts. Normalization collapses wildcard prefixes to
/// exactly `*.`, so the clean view maps one-to-one onto the wildcard set and
/// `clean == wildcards`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultCounts {
    pub all: usize,
    pub wildcards: usize,
    pub exact: usize,
    pub clean: usize,
}

/// Accumulator for validated, normalized domains.
///
/// Entries arrive already lowercased (the extractor normalizes), so the
/// BTreeSets give dedup and lexicographic order in one move. Classification
/// happens at insert: a `*.` prefix routes to the wildcard set, everything
/// else to the exact set. The two sets are disjoint by construction.
#[derive(Default, Debug, Clone)]
pub struct DomainSet {
    wildcards: BTreeSet<String>,
    exact: BTreeSet<String>,
}

impl DomainSet {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized domain, classifying on the `*.` prefix.
    pub fn insert(&mut self, domain: &str) {
        let d = domain.trim().to_ascii_lowercase();
        if d.is_empty() {
            return;
        }
        if d.starts_with("*.") {
            self.wildcards.insert(d);
        } else {
            self.exact.insert(d);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wildcards.is_empty() && self.exact.is_empty()
    }

    pub fn len(&self) -> usize {
        self.wildcards.len() + self.exact.len()
    }

    /// Freeze into sorted result lists.
    pub fn into_results(self) -> ScanResults {
        let wildcards: Vec<String> = self.wildcards.into_iter().collect();
        let exact: Vec<String> = self.exact.into_iter().collect();

        let mut all: Vec<String> = Vec::with_capacity(wildcards.len() + exact.len());
        all.extend(wildcards.iter().cloned());
        all.extend(exact.iter().cloned());
        all.sort();

        let clean: Vec<String> = wildcards
            .iter()
            .map(|w| w.trim_start_matches("*.").to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        ScanResults {
            all,
            wildcards,
            exact,
            clean,
        }
    }
}

/// One extraction's classified output: three disjoint sets plus the derived
/// clean view, each sorted ascending and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResults {
    pub all: Vec<String>,
    pub wildcards: Vec<String>,
    pub exact: Vec<String>,
    pub clean: Vec<String>,
}

impl ScanResults {
    /// Entry counts across all four views.
    pub fn counts(&self) -> ResultCounts {
        ResultCounts {
            all: self.all.len(),
            wildcards: self.wildcards.len(),
            exact: self.exact.len(),
            clean: self.clean.len(),
        }
    }

    /// The list for one retrieval mode.
    pub fn list(&self, mode: Mode) -> &[String] {
        match mode {
            Mode::All => &self.all,
            Mode::Wildcards => &self.wildcards,
            Mode::Exact => &self.exact,
            Mode::Clean => &self.clean,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Holder for the most recent scan's results.
///
/// Overwritten atomically on each re-scan; last writer wins, no merging.
#[derive(Debug, Default)]
pub struct ResultCache {
    latest: Option<ScanResults>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached results wholesale.
    pub fn store(&mut self, results: ScanResults) {
        self.latest = Some(results);
    }

    pub fn latest(&self) -> Option<&ScanResults> {
        self.latest.as_ref()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScanResults {
        let mut set = DomainSet::new();
        set.insert("*.example.com");
        set.insert("api.example.com");
        set.insert("API.EXAMPLE.COM"); // dup, different case
        set.insert("*.shop.example.co.uk");
        set.insert("zeta.example.org");
        set.into_results()
    }

    #[test]
    fn classification_and_counts() {
        let results = sample();
        let counts = results.counts();
        assert_eq!(counts.wildcards, 2);
        assert_eq!(counts.exact, 2);
        assert_eq!(counts.all, counts.wildcards + counts.exact);
        assert_eq!(counts.clean, 2);
    }

    #[test]
    fn sets_are_disjoint() {
        let results = sample();
        for w in &results.wildcards {
            assert!(!results.exact.contains(w));
        }
    }

    #[test]
    fn lists_sorted_and_lowercase() {
        let results = sample();
        for list in [&results.all, &results.wildcards, &results.exact] {
            let mut sorted = list.clone();
            sorted.sort();
            assert_eq!(&sorted, list);
            assert!(list.iter().all(|d| d == &d.to_ascii_lowercase()));
        }
    }

    #[test]
    fn clean_mirrors_wildcards() {
        let results = sample();
        for c in &results.clean {
            assert!(results
                .wildcards
                .iter()
                .any(|w| w.trim_start_matches("*.") == c));
        }
    }

    #[test]
    fn clean_count_matches_wildcard_count() {
        let mut set = DomainSet::new();
        set.insert("*.example.com");
        set.insert("*.EXAMPLE.com"); // case dup collapses before the clean view
        set.insert("*.other.org");
        let results = set.into_results();
        assert_eq!(results.counts().wildcards, 2);
        assert_eq!(results.counts().clean, 2);

        let mut set = DomainSet::new();
        set.insert("*.a.example.com");
        set.insert("*.example.com");
        let results = set.into_results();
        assert_eq!(results.counts().clean, results.counts().wildcards);
    }

    #[test]
    fn cache_is_last_writer_wins() {
        let mut cache = ResultCache::new();
        let first = sample();
        cache.store(first.clone());
        assert_eq!(cache.latest(), Some(&first));

        let mut set = DomainSet::new();
        set.insert("solo.example.net");
        let second = set.into_results();
        cache.store(second.clone());
        assert_eq!(cache.latest(), Some(&second));
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::All.file_label(), "all_domains");
        assert_eq!(Mode::Clean.file_label(), "clean_wildcards");
        assert_eq!(Mode::parse("exact"), Some(Mode::Exact));
        assert_eq!(Mode::parse("bogus"), None);
    }
}
