//! High-level application orchestration layer.
//!
//! CLI-facing `App` façade. Major steps in `App::run`:
//!   1. Schema generation early-exit
//!   2. Config load / validation
//!   3. Input read (file or stdin, one retry on a failed file read)
//!   4. Site determination (forced via --site, inferred via --url)
//!   5. Pipeline execution through the façade
//!   6. Rendering (styled / plain / batch / JSON) and optional export
//!
//! Empty results are informational, not errors; an unsupported origin is a
//! blocking input error raised before extraction.

use std::fs;
use std::io::Read;

use chrono::Utc;

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::{IoResultExt, Result, ScopeSweepError};
use crate::facade::{ScanReport, ScopeSweep};
use crate::origin::Site;
use crate::output::{self, OutputFormat};
use crate::protocol::DomainResponse;
use crate::styled_output::StyledFormatter;

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    /// Assemble the app: load config from the environment, overlay CLI
    /// arguments, validate.
    pub fn new(cli: Cli) -> Result<Self> {
        let mut config = Config::from_env();
        config.merge_with_cli(&cli);
        config.validate()?;
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        if self.cli.generate_schema {
            println!("{}", DomainResponse::json_schema()?);
            return Ok(());
        }

        let html = self.read_input()?;
        let site = self.determine_site()?;

        if self.cli.is_trace() {
            eprintln!("Scanning {} byte snapshot as {site}", html.len());
        }

        let report = ScopeSweep::extract_from_html(&html, site, &self.config);
        self.render(&report)?;
        self.export(&report)?;
        Ok(())
    }

    /// Read the HTML snapshot. A failed file read is retried once before the
    /// error is surfaced.
    fn read_input(&self) -> Result<String> {
        let input = self
            .cli
            .input
            .as_deref()
            .ok_or_else(|| ScopeSweepError::configuration("no input file given"))?;

        if input == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .with_path("<stdin>", "read")?;
            return Ok(buf);
        }

        match fs::read_to_string(input) {
            Ok(html) => Ok(html),
            Err(first) => {
                if self.cli.warn_enabled() {
                    eprintln!("Read failed ({first}), retrying once: {input}");
                }
                fs::read_to_string(input).with_path(input, "read")
            }
        }
    }

    fn determine_site(&self) -> Result<Site> {
        match (self.cli.site, self.cli.url.as_deref()) {
            (Some(site), _) => Ok(site),
            (None, Some(url)) => Site::from_url(url),
            (None, None) => Err(ScopeSweepError::UnknownSite),
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.cli.json {
            OutputFormat::Json
        } else if self.cli.batch {
            OutputFormat::Batch
        } else if self.cli.plain {
            OutputFormat::Plain
        } else {
            OutputFormat::Styled
        }
    }

    fn render(&self, report: &ScanReport) -> Result<()> {
        let mode = self.cli.mode;

        match self.output_format() {
            OutputFormat::Json => println!("{}", output::render_json(report, mode)?),
            OutputFormat::Batch => println!("{}", output::render_batch(report, mode)),
            OutputFormat::Plain => {
                let body = output::render_plain(report, mode);
                if !body.is_empty() {
                    println!("{body}");
                }
                if report.is_empty() && self.cli.error_enabled() {
                    eprintln!("No in-scope domains found.");
                }
            }
            OutputFormat::Styled => {
                let formatter = StyledFormatter::new(true);
                if report.is_empty() {
                    println!("{}", formatter.format_empty(report));
                } else {
                    print!("{}", formatter.format_report(report, mode));
                }
            }
        }
        Ok(())
    }

    fn export(&self, report: &ScanReport) -> Result<()> {
        let Some(ref dir) = self.config.export.directory else {
            return Ok(());
        };
        fs::create_dir_all(dir).with_path(dir.display().to_string(), "create_dir")?;
        let path = output::write_export(dir, report, self.cli.mode, Utc::now())?;
        if self.cli.error_enabled() {
            let formatter = StyledFormatter::new(self.output_format() == OutputFormat::Styled);
            let note = format!(
                "Exported {} domains to {}",
                report.results.list(self.cli.mode).len(),
                path.display()
            );
            eprintln!("{}", formatter.format_note(&note));
        }
        Ok(())
    }
}
