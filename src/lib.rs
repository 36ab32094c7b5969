//! ScopeSweep Library
//!
//! A Rust library for extracting in-scope domain names from bug-bounty
//! program scope pages (Bugcrowd, HackerOne). This library provides
//! functionality to:
//!
//! - Scan a page snapshot for domain-like candidates (targeted selectors,
//!   link attributes, bounded full-text walk)
//! - Normalize and validate candidates through a strict heuristic filter
//! - Classify survivors into wildcard vs. exact sets with per-mode counts
//! - Render and export filtered, sorted domain lists
//!
//! # Example
//!
//! ```rust
//! use scopesweep::config::Config;
//! use scopesweep::domains::Mode;
//! use scopesweep::facade::ScopeSweep;
//! use scopesweep::origin::Site;
//!
//! let html = r#"<table class="target-table"><tbody>
//!     <tr><td>*.example.com</td></tr>
//! </tbody></table>"#;
//!
//! let report = ScopeSweep::extract_from_html(html, Site::Bugcrowd, &Config::default());
//! assert_eq!(report.results.list(Mode::Clean), ["example.com"]);
//! ```

// Re-export all modules for library use
pub mod app;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod domains;
pub mod errors;
pub mod extractor;
pub mod facade;
pub mod origin;
pub mod output;
pub mod protocol;
pub mod scanner;
pub mod styled_output;
pub mod validator;

// Re-export commonly used types and functions for convenience
pub use config::{Config, FilterConfig, ScanConfig};
pub use domains::{DomainSet, Mode, ResultCounts, ScanResults};
pub use errors::{Result, ScopeSweepError};
pub use facade::{ScanReport, ScopeSweep};
pub use origin::Site;
pub use protocol::{DomainRequest, DomainResponse};
pub use scanner::{Candidate, CandidateKind, CandidateSource, HtmlScanner};
pub use validator::is_valid_domain;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
