//! Structural parsing of lines already classified as [ActionKind::Kill](crate::model::ActionKind::Kill)

use crate::model::KillParts;
use once_cell::sync::Lazy;
use regex::Regex;


/// The structural pattern of a kill record:
/// `Kill: <killer_id> <victim_id> <reason_id>: <killer> killed <victim> by <MOD_reason>`.\
/// Player tokens admit word characters, digits and angle brackets -- the latter so the
/// `"<world>"` sentinel is accepted as a killer.
static KILL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)Kill:\s+\d+\s+\d+\s+\d+:\s+([\w<>]+)\s+killed\s+([\w<>]+)\s+by\s+(MOD_\w+)"#)
        .expect("KILL_REGEX compilation failed")
});

/// Extracts the `(killer, victim, reason)` payload of a kill line.\
/// All three captures must be present; structurally deviating lines yield `None`,
/// in which case callers must treat the whole kill event as a no-op: it counts
/// towards no aggregate whatsoever.
pub fn parse_kill(log_line: &str) -> Option<KillParts<'_>> {
    KILL_REGEX.captures(log_line)
        .and_then(|captures| {
            let capture = |group| captures.get(group).map(|matched| matched.as_str());
            match (capture(1), capture(2), capture(3)) {
                (Some(killer), Some(victim), Some(reason)) => Some(KillParts { killer, victim, reason }),
                _ => None,
            }
        })
}
