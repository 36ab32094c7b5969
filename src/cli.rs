use std::path::PathBuf;

use clap::Parser;

use crate::domains::Mode;
use crate::origin::Site;

/// Command-line interface definition.
///
/// Verbosity levels:
/// 0 - silent (only final output)
/// 1 - errors (default)
/// 2 - warnings + errors
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Extract, validate and classify in-scope domain names from a saved Bugcrowd or HackerOne scope page"
)]
pub struct Cli {
    /// Path to a saved scope-page HTML file ("-" reads stdin).
    #[arg(required_unless_present = "generate_schema")]
    pub input: Option<String>,

    /// Page URL the snapshot came from; used to infer the site.
    #[arg(long, value_name = "URL", conflicts_with = "site")]
    pub url: Option<String>,

    /// Force the site instead of inferring it from --url.
    #[arg(long, value_enum)]
    pub site: Option<Site>,

    /// Retrieval mode for the output list.
    #[arg(long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Plain output: newline-joined sorted list, no styling.
    #[arg(long)]
    pub plain: bool,

    /// Batch output: single line "site:domain1,domain2".
    #[arg(long, conflicts_with = "plain")]
    pub batch: bool,

    /// JSON output: the getDomains response shape.
    #[arg(long, conflicts_with_all = ["plain", "batch"])]
    pub json: bool,

    /// Also write the list into DIR as {site}_{mode}_{timestamp}.txt.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Override the text-node scan cap.
    #[arg(long, value_name = "N")]
    pub max_text_nodes: Option<usize>,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Print the JSON schema of the response shape and exit.
    #[arg(long)]
    pub generate_schema: bool,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbose >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }
}
