//! Resting place for [Game] -- the accumulator for a single, in-progress match

use crate::report::GameSnapshot;
use std::collections::BTreeMap;


/// The sentinel pseudo-player the game server uses when the environment causes a death
/// (falling, hurt triggers, ...). Never a real participant: it must not show up in
/// [Game::players] nor [Game::kills].
pub const WORLD_PLAYER: &str = "<world>";


/// Holds the mutable state of a single match while its events are being replayed.\
/// Created on `InitGame`, mutated by `Kill` events, consumed into a [GameSnapshot]
/// on `ShutdownGame` -- see the state machine in the `bll` crate.
///
/// Invariant: the key set of [Self::kills] is exactly the set of [Self::players]
/// at every observable point.
#[derive(Debug)]
pub struct Game {
    id: String,
    total_kills: u32,
    players: Vec<String>,
    kills: BTreeMap<String, i32>,
}

impl Game {

    /// Creates the accumulator for a new match, identified by `id` (in the `"game_<n>"` form)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            total_kills: 0,
            players: Vec::new(),
            kills: BTreeMap::new(),
        }
    }

    /// Registers `player` as a participant of this match, preserving first-seen order
    /// and opening their score at 0.\
    /// Idempotent: a second call with the same name is a no-op.\
    /// Callers must never pass [WORLD_PLAYER] here -- see [Self::record_kill].
    pub fn add_player(&mut self, player: &str) {
        if !self.players.iter().any(|existing| existing == player) {
            self.players.push(player.to_owned());
        }
        self.kills.entry(player.to_owned()).or_insert(0);
    }

    /// Accounts for one successfully parsed `Kill` event:
    ///   * [Self::total_kills] is bumped unconditionally -- world kills included;
    ///   * if the killer is [WORLD_PLAYER], the victim loses a frag (and the killer
    ///     is never registered);
    ///   * otherwise the killer gains a frag; the victim is registered but their
    ///     score is left untouched.
    pub fn record_kill(&mut self, killer: &str, victim: &str) {
        self.total_kills += 1;
        if killer == WORLD_PLAYER {
            self.add_player(victim);
            self.kills.entry(victim.to_owned()).and_modify(|frags| *frags -= 1);
        } else {
            self.add_player(killer);
            self.add_player(victim);
            self.kills.entry(killer.to_owned()).and_modify(|frags| *frags += 1);
        }
    }

    /// Consumes this match into its immutable, serializable projection.\
    /// Replaces the runtime-reflection trick of the original implementation with a
    /// statically-defined enumeration of the four reported fields.
    pub fn snapshot(self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            total_kills: self.total_kills,
            players: self.players,
            kills: self.kills,
        }
    }

}
