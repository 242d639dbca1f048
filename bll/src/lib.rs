//! Business logic: replays a materialized sequence of Quake 3 server log lines
//! into per-match summaries and a global death-cause tally

mod config;
pub use config::*;

pub mod summary;
