//! Message contract between the UI glue and the extraction core.
//!
//! The mode strings are the only coupling surface: the popup sends
//! `{ "action": "getDomains", "mode": "all" | "wildcards" | "exact" |
//! "clean" }` and gets back the sorted list plus per-mode counts. Modeled
//! with serde so the CLI's `--json` output and any embedding host speak the
//! same shape, with a JSON schema available for consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domains::{Mode, ResultCounts, ScanResults};
use crate::errors::{Result, ScopeSweepError};

/// The only supported action.
pub const ACTION_GET_DOMAINS: &str = "getDomains";

/// Extraction request as sent by the popup glue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DomainRequest {
    pub action: String,
    pub mode: Mode,
}

impl DomainRequest {
    pub fn new(mode: Mode) -> Self {
        Self {
            action: ACTION_GET_DOMAINS.to_string(),
            mode,
        }
    }

    /// Parse and validate a request from its JSON wire form. The mode travels
    /// as a plain string so an unknown value surfaces as a mode error rather
    /// than an opaque decode failure.
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct RawRequest {
            action: String,
            mode: String,
        }

        let raw: RawRequest = serde_json::from_str(json)?;
        if raw.action != ACTION_GET_DOMAINS {
            return Err(ScopeSweepError::decode(
                "request",
                format!("unknown action '{}'", raw.action),
            ));
        }
        let mode =
            Mode::parse(&raw.mode).ok_or_else(|| ScopeSweepError::invalid_mode(&raw.mode))?;
        Ok(Self {
            action: raw.action,
            mode,
        })
    }
}

/// Extraction response: one mode's sorted, deduplicated list plus the counts
/// for every mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DomainResponse {
    pub domains: Vec<String>,
    pub counts: ResultCounts,
}

impl DomainResponse {
    /// Build the response for one mode from a finished result set.
    pub fn from_results(results: &ScanResults, mode: Mode) -> Self {
        Self {
            domains: results.list(mode).to_vec(),
            counts: results.counts(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON schema for the response shape, for downstream consumers.
    pub fn json_schema() -> Result<String> {
        let schema = schemars::schema_for!(DomainResponse);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
