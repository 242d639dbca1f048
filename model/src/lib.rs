//! Domain entities for the Quake3 log match-statistics analyser:
//! the in-progress match accumulator and the finished report types

pub mod game;
pub mod report;
