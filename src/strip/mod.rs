//! Statement stripping for debug-output calls
//!
//! Two strategies rewrite a file's text in memory:
//! - [`Strategy::Scan`] - lexical scanner that balances parentheses, skips
//!   strings and comments, and counts every statement it replaces
//! - [`Strategy::Legacy`] - the four regex passes of the original cleanup
//!   script, kept for output parity with earlier runs
//!
//! Both are pure: no I/O happens here.

mod legacy;
mod scan;

use serde::{Deserialize, Serialize};

pub use scan::{Span, find_statements};

/// How statements are located in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Parenthesis-aware scanner
    #[default]
    Scan,
    /// Regex passes, counting only the single-line ones
    Legacy,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan => write!(f, "scan"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scan" => Ok(Self::Scan),
            "legacy" => Ok(Self::Legacy),
            _ => Err(format!("Invalid strategy: {s}. Use: scan, legacy")),
        }
    }
}

/// Rewritten text plus the number of statements reported as removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// Text after replacement
    pub text: String,
    /// Reported removal count
    ///
    /// Exact for [`Strategy::Scan`]. For [`Strategy::Legacy`] this is an
    /// estimate: the multi-line passes rewrite text without being counted.
    pub removed: usize,
}

/// Replace every debug-output statement in `text` with the marker comment
#[must_use]
pub fn strip(text: &str, strategy: Strategy) -> Stripped {
    match strategy {
        Strategy::Scan => scan::strip(text),
        Strategy::Legacy => legacy::strip(text),
    }
}
