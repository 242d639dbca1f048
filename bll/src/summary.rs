//! Builds the per-match summaries & the global death-cause tally, according to the specs
//!
//! Both analyses are deterministic folds over an already-materialized, ordered sequence
//! of log lines: no IO, no shared state, no possibility of partial results. Acquiring
//! the lines (and failing at it) is the `dal` crate's business.

use crate::Config;
use model::{
    game::Game,
    report::{MatchSequence, ReasonTally},
};
use quake3_log::{
    classifier::classify,
    kill_parser::parse_kill,
    model::ActionKind,
};
use log::warn;


/// Replays `lines` through the match lifecycle state machine, yielding the finalized
/// matches in the order their `ShutdownGame` events were observed.
///
/// The two states are "no active match" ([None]) and "in match" ([Some]):
///   * `InitGame` always opens a fresh [Game] -- an unfinalized predecessor (double init)
///     is silently discarded;
///   * `Kill` lines mutate the active match; without one they have no context to be
///     attributed to and are ignored, as are kill lines failing structural parsing;
///   * `ShutdownGame` finalizes the active match into the output sequence; without an
///     active match it is ignored;
///   * a match still open when the input ends is discarded -- an unterminated match
///     produces no record.
///
/// Match ids are `"game_<n>"` with `n` = number of finalized matches + 1 at creation
/// time, so discarded fragments never consume an id.
pub fn summarize_matches<'a>(config: &Config, lines: impl IntoIterator<Item=&'a str>) -> MatchSequence {
    let mut matches = MatchSequence::new();
    let mut current_game: Option<Game> = None;
    for (line_number, line) in lines.into_iter().enumerate() {
        let Some(action) = classify(line)
            else {
                continue
            };
        match action {

            ActionKind::InitGame => {
                current_game.replace(Game::new(format!("game_{}", matches.len() + 1)));
            },

            ActionKind::Kill => {
                let Some(ref mut game) = current_game
                    else {
                        continue
                    };
                match parse_kill(line) {
                    Some(kill) => game.record_kill(kill.killer, kill.victim),
                    None => if config.log_issues {
                        warn!("Skipping structurally malformed `Kill` line #{}: '{line}'", line_number + 1);
                    },
                }
            },

            ActionKind::ShutdownGame => {
                if let Some(finished_game) = current_game.take() {
                    matches.push(finished_game.snapshot());
                }
            },

        }
    }
    matches
}

/// Independent pass counting the occurrences of each `MOD_*` death-cause token:
/// every structurally parseable kill line in the whole input counts exactly once,
/// regardless of match boundaries or whether any match was active at all.
pub fn tally_kill_reasons<'a>(lines: impl IntoIterator<Item=&'a str>) -> ReasonTally {
    let mut tally = ReasonTally::new();
    for line in lines {
        if let Some(kill) = parse_kill(line) {
            tally.entry(kill.reason.to_owned())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }
    tally
}

/// The full analysis: a pure function from the input line sequence to the pair of
/// reportable aggregates. The two passes are independent by design -- see
/// [tally_kill_reasons] for why the tally must not be scoped by match lifecycle.
pub fn analyse_log(config: &Config, lines: &[String]) -> (MatchSequence, ReasonTally) {
    let matches = summarize_matches(config, lines.iter().map(String::as_str));
    let reasons = tally_kill_reasons(lines.iter().map(String::as_str));
    (matches, reasons)
}
