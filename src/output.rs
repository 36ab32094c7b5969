//! Output formatting and export for scan results.
//!
//! Plain text (one domain per line), batch (single line for shell
//! pipelines), JSON (the wire response), and the export-file writer that
//! mirrors the extension's download naming:
//! `{site}_{mode_label}_{timestamp}.txt` with the ISO-8601 timestamp's
//! colons replaced by hyphens.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domains::Mode;
use crate::errors::{IoResultExt, Result};
use crate::facade::ScanReport;
use crate::origin::Site;

/// Rendering style for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Styled,
    Plain,
    Batch,
    Json,
}

/// Newline-joined sorted list, one domain per line, no trailing metadata.
pub fn render_plain(report: &ScanReport, mode: Mode) -> String {
    report.results.list(mode).join("\n")
}

/// Single line `site:domain1,domain2,...` for shell pipelines.
pub fn render_batch(report: &ScanReport, mode: Mode) -> String {
    format!(
        "{}:{}",
        report.site.label(),
        report.results.list(mode).join(",")
    )
}

/// Pretty-printed wire response.
pub fn render_json(report: &ScanReport, mode: Mode) -> Result<String> {
    report.respond(mode).to_json()
}

/// Export filename: `{site}_{mode_label}_{timestamp}.txt`.
pub fn export_filename(site: Site, mode: Mode, timestamp: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}.txt",
        site.label(),
        mode.file_label(),
        timestamp.format("%Y-%m-%dT%H-%M-%S")
    )
}

/// Write the newline-joined list for `mode` into `dir`, returning the path.
pub fn write_export(
    dir: &Path,
    report: &ScanReport,
    mode: Mode,
    timestamp: DateTime<Utc>,
) -> Result<PathBuf> {
    let path = dir.join(export_filename(report.site, mode, timestamp));
    let body = render_plain(report, mode);
    fs::write(&path, body).with_path(path.display().to_string(), "write")?;
    Ok(path)
}
