//! The abstraction the core works against when acquiring log lines:
//! whatever the transport (HTTP, file, stdin), the core only ever sees a
//! fully-materialized, ordered sequence of text lines -- retrieval failures
//! must surface here, before the core is ever invoked.

mod config;
pub use config::*;

use common::types::Result;


/// A source of Quake 3 server log lines.
pub trait Quake3LogLines {

    /// Consumes this object, returning the complete, ordered sequence of log lines --
    /// one per log record, with no record ever split across two elements.\
    /// All transport and decoding failures are reported through the `Result`:
    /// a successful return means the downstream analysers receive well-defined input.
    fn log_lines(self: Box<Self>) -> Result<Vec<String>>;
}
