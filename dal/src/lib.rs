//! Data access implementations for acquiring Quake 3 server log lines.
//!
//! Each implementation fully materializes the line sequence before handing it
//! to the analysers, so any transport failure aborts the run before the core
//! sees a single line.

pub mod factory;
pub mod http_fetcher;
pub mod sync_file_reader;
pub mod stdin_reader;

mod sync_reader;
