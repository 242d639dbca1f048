//! Common utilities shared by all the crates in this workspace

pub mod types;
