//! Contains summary data used to build reports

use std::collections::BTreeMap;


/// Immutable projection of a finalized match, as taken by [crate::game::Game::snapshot].\
/// Carries exactly the four externally reported fields.
#[derive(Debug, PartialEq)]
pub struct GameSnapshot {
    /// The `"game_<n>"` identification, where `n` counts the finalized matches
    pub id: String,
    /// Sum of all kill events recorded during the match -- world kills included
    pub total_kills: u32,
    /// Distinct player names, in first-seen order. Never contains the `"<world>"` sentinel
    pub players: Vec<String>,
    /// The frag score of each of the [Self::players] -- possibly negative, due to world kills
    pub kills: BTreeMap<String, i32>,
}

/// The finalized matches, in the order their `ShutdownGame` events were observed.\
/// Matches still open when the input ends are discarded and never show up here.
pub type MatchSequence = Vec<GameSnapshot>;

/// Global tally of kills per death-cause (`MOD_*`) token, over the whole input --
/// not scoped per match and not reset on match boundaries.
pub type ReasonTally = BTreeMap<String, u32>;
