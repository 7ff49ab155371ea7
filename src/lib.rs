//! printstrip - strip debug-output statements from Dart sources
//!
//! Walks a source tree, replaces every `print(...);` and `debugPrint(...);`
//! statement with a marker comment, leaves the logging-utility file alone and
//! reports how much was removed.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cleaner;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod strip;

pub use cleaner::{Cleaner, FileTask, OutcomeStatus, ReplacementOutcome, RunSummary, discover};
pub use config::Config;
pub use error::CleanError;
pub use strip::{Strategy, Stripped};
