//! Recognition of Quake 3 server log lines.
//!
//! Only three kinds of lines carry meaning for the match statistics: `InitGame`,
//! `ShutdownGame` and `Kill`. Everything else in the log (item pickups, chat,
//! client connections, comments, ...) is out of scope and classified as "no match".
//!
//! Two operations are exposed:
//!  1) [classifier::classify] -- tells which of the three recognized actions (if any) a line represents,
//!  2) [kill_parser::parse_kill] -- extracts the structured `(killer, victim, reason)` out of a kill line.
//!
//! Both are total: any input -- however malformed -- yields `None` rather than an error.
//! Regular expressions were kept for both (see `benches/classification_strategies.rs`
//! for the trade-off study against `str::split*()` alternatives): the volume of
//! recognized lines is small and the patterns double as the format documentation.

pub mod model;
pub mod classifier;
pub mod kill_parser;
