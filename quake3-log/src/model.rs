//! Resting place for [ActionKind] & [KillParts]


/// The three log line kinds that drive the match lifecycle.\
/// Any other event present in Quake 3 server logs is, by definition, ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A single kill happened -- see [crate::kill_parser::parse_kill] for the line's payload
    Kill,
    /// A new game match has started
    InitGame,
    /// The current game match has ended
    ShutdownGame,
}

/// The structured payload of a `Kill` log line.\
/// Borrows from the line it was parsed out of.
#[derive(Debug, PartialEq, Eq)]
pub struct KillParts<'a> {
    /// Who scored the kill -- possibly the `"<world>"` sentinel, for environment-caused deaths
    pub killer: &'a str,
    /// Who died
    pub victim: &'a str,
    /// The `MOD_*` death-cause token (weapon or environment hazard)
    pub reason: &'a str,
}
