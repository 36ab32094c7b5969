//! Unified error handling for scopesweep.
//!
//! A `thiserror`-based model with:
//!   * Typed variants for the failure domains we actually have
//!   * A categorization layer (`ErrorCategory`) for structured reporting
//!   * Helper constructors
//!   * `From` conversions for common lower-level errors
//!
//! Design goals:
//!   * Keep end-user messages clear & actionable
//!   * Candidate rejection is NOT an error — the pipeline is total and
//!     silently drops anything that fails the validity filter. Errors here
//!     cover input/IO problems raised *before* extraction starts.
//!
//! Categories are intentionally coarse:
//!   - Input: user / page-origin validation issues
//!   - Parse: malformed structured data (JSON contract, schema)
//!   - Io: filesystem reads and export writes
//!   - Internal: logic bugs or unexpected states

use std::io;

use thiserror::Error;

/// High-level classification for structured reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Io,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Io => "io",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum ScopeSweepError {
    // ------------------------ Input / Validation ----------------------------
    #[error("Unsupported page origin: {url} (expected a bugcrowd.com or hackerone.com page)")]
    UnsupportedOrigin { url: String },

    #[error("No site given and none could be inferred; pass --site or --url")]
    UnknownSite,

    #[error("Unknown extraction mode: {mode}")]
    InvalidMode { mode: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ---------------------------- Parsing -----------------------------------
    #[error("Failed to decode {context}: {reason}")]
    Decode { context: String, reason: String },

    // ----------------------------- I/O / FS ---------------------------------
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        path: String,
        operation: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------- Internal ----------------------------------
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ScopeSweepError {
    /// Categorize the error for structured output.
    pub fn category(&self) -> ErrorCategory {
        use ScopeSweepError::*;
        match self {
            UnsupportedOrigin { .. } | UnknownSite | InvalidMode { .. } | Configuration { .. } => {
                ErrorCategory::Input
            }
            Decode { .. } => ErrorCategory::Parse,
            Io { .. } => ErrorCategory::Io,
            Internal { .. } => ErrorCategory::Internal,
        }
    }

    // ---------------------------- Constructors -----------------------------

    pub fn unsupported_origin(url: impl Into<String>) -> Self {
        Self::UnsupportedOrigin { url: url.into() }
    }

    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode { mode: mode.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn decode(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            context: context.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<String>, operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, ScopeSweepError>;

/// Map standard IO errors into `Io` variant (generic context).
impl From<io::Error> for ScopeSweepError {
    fn from(e: io::Error) -> Self {
        ScopeSweepError::Io {
            path: "<unknown>".into(),
            operation: "unspecified".into(),
            source: e,
        }
    }
}

impl From<serde_json::Error> for ScopeSweepError {
    fn from(e: serde_json::Error) -> Self {
        ScopeSweepError::Decode {
            context: "json".into(),
            reason: e.to_string(),
        }
    }
}

/// Extension trait for enriching IO results with path + operation context.
pub trait IoResultExt<T> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_path(self, path: impl Into<String>, operation: impl Into<String>) -> Result<T> {
        self.map_err(|e| ScopeSweepError::io(path.into(), operation.into(), e))
    }
}
