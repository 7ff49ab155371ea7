//! Regex passes matching the original cleanup script
//!
//! Four passes run in order: single-line `print`, single-line `debugPrint`,
//! then the multi-line variants of each. Only the first two are counted.
//!
//! The multi-line patterns stop at the first `;`, so a call whose arguments
//! contain one (a closure body, say) is cut short and the rest of its
//! arguments are left behind. The scanner strategy does not have this
//! problem.

use std::sync::LazyLock;

use regex::Regex;

use super::Stripped;
use crate::paths::MARKER;

/// Passes whose matches feed the reported count
static COUNTED: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [compile(r"(\s*)print\([^)]*\);"), compile(r"(\s*)debugPrint\([^)]*\);")]
});

/// Broader passes applied after the counted ones
static UNCOUNTED: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [compile(r"(\s*)print\([^;]*\);"), compile(r"(\s*)debugPrint\([^;]*\);")]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("legacy patterns are valid regexes")
}

pub(super) fn strip(text: &str) -> Stripped {
    let replacement = format!("${{1}}{MARKER}");
    let mut content = text.to_string();
    let mut removed = 0;

    for re in COUNTED.iter() {
        removed += re.find_iter(&content).count();
        content = re.replace_all(&content, replacement.as_str()).into_owned();
    }

    for re in UNCOUNTED.iter() {
        content = re.replace_all(&content, replacement.as_str()).into_owned();
    }

    Stripped {
        text: content,
        removed,
    }
}
