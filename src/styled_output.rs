//! Styled terminal output using anstyle.
//!
//! Colored, human-oriented rendering of scan reports. Color is a
//! constructor flag so `--plain` and non-TTY callers get the same layout
//! uncolored.

use std::fmt::Write;

use anstyle::{AnsiColor, Color, Style};

use crate::domains::Mode;
use crate::facade::ScanReport;

/// Style definitions for the report elements.
pub struct Styles {
    pub header: Style,
    pub success: Style,
    pub warning: Style,
    pub muted: Style,
    pub domain: Style,
    pub count: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
            success: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            warning: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
            domain: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
            count: Style::new().bold(),
        }
    }
}

/// Formatter turning scan reports into colored terminal text.
pub struct StyledFormatter {
    styles: Styles,
    use_color: bool,
}

impl StyledFormatter {
    pub fn new(use_color: bool) -> Self {
        Self {
            styles: Styles::default(),
            use_color,
        }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.use_color {
            format!("{style}{text}{style:#}")
        } else {
            text.to_string()
        }
    }

    /// Full report: header, per-mode counts, the selected list, a summary line.
    pub fn format_report(&self, report: &ScanReport, mode: Mode) -> String {
        let mut out = String::new();
        let counts = report.results.counts();

        let _ = writeln!(
            out,
            "{} {}",
            self.paint(&self.styles.header, "Scope scan:"),
            report.site.label()
        );
        let _ = writeln!(
            out,
            "  {} wildcards, {} exact, {} all, {} clean",
            self.paint(&self.styles.count, &counts.wildcards.to_string()),
            self.paint(&self.styles.count, &counts.exact.to_string()),
            self.paint(&self.styles.count, &counts.all.to_string()),
            self.paint(&self.styles.count, &counts.clean.to_string()),
        );
        out.push('\n');

        for domain in report.results.list(mode) {
            let _ = writeln!(out, "  {}", self.paint(&self.styles.domain, domain));
        }
        out.push('\n');

        let summary = format!(
            "{} domains (mode: {mode}) in {} ms",
            report.results.list(mode).len(),
            report.stats.duration_ms
        );
        let _ = writeln!(out, "{}", self.paint(&self.styles.success, &summary));
        out
    }

    /// Informational empty-result message, distinct from an error.
    pub fn format_empty(&self, report: &ScanReport) -> String {
        self.paint(
            &self.styles.warning,
            &format!(
                "No in-scope domains found on this {} page ({} candidates scanned).",
                report.site.label(),
                report.stats.candidates_scanned
            ),
        )
    }

    /// Muted diagnostics line.
    pub fn format_note(&self, note: &str) -> String {
        self.paint(&self.styles.muted, note)
    }
}
