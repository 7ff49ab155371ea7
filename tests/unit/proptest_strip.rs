//! Property-based tests for statement stripping
//!
//! Uses proptest to verify properties that should hold for all inputs.

use printstrip::strip::strip;
use proptest::prelude::*;

/// Lines a Dart file might plausibly contain
fn dart_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|s| format!("print('{s}');")),
        "[a-z]{1,8}".prop_map(|s| format!("debugPrint(\"{s}\");")),
        "[a-z]{1,8}".prop_map(|s| format!("print('$s: ${{{s}.length}}');")),
        "[a-z]{1,8}".prop_map(|s| format!("debugPrint({s}.toString());")),
        "[a-z]{1,8}".prop_map(|s| format!("print('{s}'\n    '{s}');")),
        "[a-z]{1,8}".prop_map(|s| format!("final {s} = compute({s});")),
        "[a-z]{1,8}".prop_map(|s| format!("// {s}")),
        Just("if (kDebugMode) {".to_string()),
        Just("}".to_string()),
    ]
}

fn dart_file() -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..3, dart_line()), 0..20).prop_map(|lines| {
        lines
            .into_iter()
            .map(|(indent, line)| format!("{}{line}\n", "  ".repeat(indent)))
            .collect()
    })
}

fn any_strategy() -> impl Strategy<Value = printstrip::strip::Strategy> {
    prop_oneof![Just(printstrip::strip::Strategy::Scan), Just(printstrip::strip::Strategy::Legacy)]
}

proptest! {
    /// Stripping twice changes nothing the second time
    #[test]
    fn strip_is_idempotent(src in dart_file(), strategy in any_strategy()) {
        let once = strip(&src, strategy);
        let twice = strip(&once.text, strategy);
        prop_assert_eq!(&twice.text, &once.text);
        prop_assert_eq!(twice.removed, 0);
    }

    /// No target call statement survives a scan
    #[test]
    fn scan_leaves_no_calls(src in dart_file()) {
        let out = strip(&src, printstrip::strip::Strategy::Scan);
        for line in out.text.lines() {
            let code = line.split("//").next().unwrap_or("");
            prop_assert!(!code.contains("print("), "leftover call in {:?}", line);
        }
    }

    /// The scanner counts exactly the statements it replaced
    #[test]
    fn scan_count_matches_markers(src in dart_file()) {
        let out = strip(&src, printstrip::strip::Strategy::Scan);
        let added = out.text.matches("// Debug logging removed").count();
        prop_assert_eq!(out.removed, added);
    }

    /// Line count never grows
    #[test]
    fn strip_never_adds_lines(src in dart_file(), strategy in any_strategy()) {
        let out = strip(&src, strategy);
        prop_assert!(out.text.lines().count() <= src.lines().count());
    }
}
