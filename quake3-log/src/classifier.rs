//! Classification of raw log lines into the recognized [ActionKind]s

use crate::model::ActionKind;
use once_cell::sync::Lazy;
use regex::Regex;


/// A recognizable line starts with optional whitespace, a `minutes:seconds` timestamp,
/// whitespace and one of the three action keywords -- case-insensitively, as the
/// original server is not consistent about keyword casing.
static ACTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^\s*\d+:\d+\s+(Kill|InitGame|ShutdownGame)"#)
        .expect("ACTION_REGEX compilation failed")
});

/// Tells which lifecycle/event keyword (if any) `log_line` represents.\
/// Returns `None` for every line outside the recognized shape: other event keywords,
/// comment separators, missing or mangled timestamps... -- classification never fails,
/// it only declines.
pub fn classify(log_line: &str) -> Option<ActionKind> {
    ACTION_REGEX.captures(log_line)
        .and_then(|captures| captures.get(1))
        .map(|action| {
            let action = action.as_str();
            if action.eq_ignore_ascii_case("Kill") {
                ActionKind::Kill
            } else if action.eq_ignore_ascii_case("InitGame") {
                ActionKind::InitGame
            } else {
                ActionKind::ShutdownGame
            }
        })
}
