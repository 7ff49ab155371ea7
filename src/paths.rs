//! Centralized names and paths for printstrip
//!
//! Every fixed token the tool relies on lives here: the two debug-output
//! call names, the statement terminator, the marker comment, the source
//! extension, the logging-utility file and the default root.

use std::path::{Path, PathBuf};

// =============================================================================
// Source syntax
// =============================================================================

/// Debug-output call names that get stripped
pub const TARGET_CALLS: [&str; 2] = ["print", "debugPrint"];

/// Statement terminator
pub const TERMINATOR: u8 = b';';

/// Comment written in place of each removed statement
pub const MARKER: &str = "// Debug logging removed";

/// Extension of files picked up by discovery
pub const SOURCE_EXTENSION: &str = "dart";

// =============================================================================
// Project layout
// =============================================================================

/// Substring identifying the logging-utility file, which is never modified
pub const LOGGER_FILE: &str = "app_logger.dart";

/// Root walked when nothing else is given
pub const DEFAULT_ROOT: &str = "ruwaq_jawi/lib/core";

/// Optional project configuration filename
pub const CONFIG_FILE: &str = ".printstrip.toml";

/// Get path to `.printstrip.toml` in the current directory.
#[must_use]
pub fn config_file() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Whether `path` has the source extension.
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
}

/// Follow-up command an operator can run to look for leftovers.
#[must_use]
pub fn verify_command(root: &Path) -> String {
    format!("grep -r 'print(' {} --include='*.{SOURCE_EXTENSION}' | wc -l", root.display())
}
