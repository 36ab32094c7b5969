//! High-level façade providing library-consumable entry points.
//!
//! This is the stable API for embedding the pipeline outside the CLI: hand
//! it a page snapshot (or any `CandidateSource`) and get a `ScanReport`
//! back. Extraction is total — malformed or empty input produces an empty
//! result set, never an error. Errors exist only ahead of extraction
//! (unsupported origin, I/O in the caller).

use std::time::Instant;

use scraper::Html;

use crate::config::Config;
use crate::domains::{DomainSet, Mode, ScanResults};
use crate::errors::Result;
use crate::extractor::Extractor;
use crate::origin::Site;
use crate::protocol::DomainResponse;
use crate::scanner::{CandidateSource, HtmlScanner};

/// Entry points for one-shot extraction runs.
pub struct ScopeSweep;

impl ScopeSweep {
    /// Scan an HTML snapshot for a known site.
    pub fn extract_from_html(html: &str, site: Site, config: &Config) -> ScanReport {
        let start = Instant::now();
        let document = Html::parse_document(html);
        let scanner = HtmlScanner::new(&document, site, &config.scan);
        Self::run(&scanner, site, config, start)
    }

    /// Infer the site from the page URL first; unknown origins fail before
    /// any extraction is attempted.
    pub fn extract_for_url(url: &str, html: &str, config: &Config) -> Result<ScanReport> {
        let site = Site::from_url(url)?;
        Ok(Self::extract_from_html(html, site, config))
    }

    /// Scan an arbitrary candidate source (synthetic fixtures, pre-tokenized
    /// text) through the same extraction and classification path.
    pub fn extract_from_source(
        source: &dyn CandidateSource,
        site: Site,
        config: &Config,
    ) -> ScanReport {
        Self::run(source, site, config, Instant::now())
    }

    fn run(
        source: &dyn CandidateSource,
        site: Site,
        config: &Config,
        start: Instant,
    ) -> ScanReport {
        let extractor = Extractor::new(&config.filter);
        let mut set = DomainSet::new();
        let mut stats = ScanStats::default();

        for candidate in source.candidates() {
            stats.candidates_scanned += 1;
            let found = extractor.extract_fragment(&candidate.text);
            if !found.is_empty() {
                stats.fragments_matched += 1;
            }
            for domain in found {
                set.insert(&domain);
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        ScanReport {
            site,
            results: set.into_results(),
            stats,
        }
    }
}

/// One extraction's classified output plus scan diagnostics.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub site: Site,
    pub results: ScanResults,
    pub stats: ScanStats,
}

impl ScanReport {
    /// Build the wire response for one retrieval mode.
    pub fn respond(&self, mode: Mode) -> DomainResponse {
        DomainResponse::from_results(&self.results, mode)
    }

    /// Zero domains is a valid outcome, reported as informational.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Diagnostic counters for one scan.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Candidate fragments the scanner emitted
    pub candidates_scanned: usize,

    /// Fragments that yielded at least one accepted domain
    pub fragments_matched: usize,

    /// Wall time of the scan
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{Candidate, CandidateKind};

    const SCOPE_PAGE: &str = r#"
        <html><body>
          <table class="target-table"><tbody>
            <tr><td>*.example.com</td><td>Web</td></tr>
            <tr><td>api.example.com</td><td>API</td></tr>
            <tr><td>Dashboard.Targets</td><td>noise</td></tr>
            <tr><td>report-2024.json</td><td>noise</td></tr>
          </tbody></table>
          <a href="https://shop.example.co.uk/cart">shop</a>
        </body></html>"#;

    #[test]
    fn end_to_end_extraction() {
        let config = Config::default();
        let report = ScopeSweep::extract_from_html(SCOPE_PAGE, Site::Bugcrowd, &config);
        assert_eq!(
            report.results.all,
            vec![
                "*.example.com".to_string(),
                "api.example.com".to_string(),
                "shop.example.co.uk".to_string(),
            ]
        );
        assert_eq!(report.results.wildcards, vec!["*.example.com".to_string()]);
        assert_eq!(report.results.clean, vec!["example.com".to_string()]);
        assert!(report.stats.candidates_scanned > 0);
    }

    #[test]
    fn rerun_on_unchanged_input_is_identical() {
        let config = Config::default();
        let first = ScopeSweep::extract_from_html(SCOPE_PAGE, Site::Bugcrowd, &config);
        let second = ScopeSweep::extract_from_html(SCOPE_PAGE, Site::Bugcrowd, &config);
        assert_eq!(first.results, second.results);
        assert_eq!(first.results.counts(), second.results.counts());
    }

    #[test]
    fn count_invariant_holds() {
        let config = Config::default();
        let report = ScopeSweep::extract_from_html(SCOPE_PAGE, Site::Bugcrowd, &config);
        let counts = report.results.counts();
        assert_eq!(counts.all, counts.wildcards + counts.exact);
    }

    #[test]
    fn url_entry_point_rejects_unknown_origin() {
        let config = Config::default();
        let err = ScopeSweep::extract_for_url("https://example.org/p", "<body/>", &config);
        assert!(err.is_err());
        let ok = ScopeSweep::extract_for_url("https://bugcrowd.com/p", "<body/>", &config);
        assert!(ok.unwrap().is_empty());
    }

    #[test]
    fn synthetic_source_bypasses_html() {
        let config = Config::default();
        let source = vec![
            Candidate {
                kind: CandidateKind::Text,
                text: "reach us at *.example.com or mail.example.com".to_string(),
            },
            Candidate {
                kind: CandidateKind::Text,
                text: "junk eligible.ineligible".to_string(),
            },
        ];
        let report = ScopeSweep::extract_from_source(&source, Site::HackerOne, &config);
        assert_eq!(report.stats.candidates_scanned, 2);
        assert_eq!(report.stats.fragments_matched, 1);
        assert_eq!(report.results.counts().all, 2);
    }

    #[test]
    fn empty_page_is_total_not_error() {
        let config = Config::default();
        let report = ScopeSweep::extract_from_html("<body></body>", Site::HackerOne, &config);
        assert!(report.is_empty());
        assert_eq!(report.results.counts().all, 0);
    }
}
