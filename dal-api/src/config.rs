//! Resting place for DAL's [Config] & friends

/// Configuration for the DAL crate
pub struct Config {

    /// The implementation to use when getting a log-lines source instance
    pub log_lines_implementation: Quake3LogLinesImplementations,

    /// If true, traces source acquisition details to the logger
    pub debug: bool,

}

/// The available transports for acquiring the raw log text
pub enum Quake3LogLinesImplementations {
    /// Fetches the log over HTTP -- the default, as the reference log lives in a public gist
    HttpFetcher,
    /// Reads the log from a local file
    SyncLogFileReader,
    /// Reads the log from the process' standard input
    StdinReader,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_lines_implementation: Quake3LogLinesImplementations::HttpFetcher,
            debug: false,
        }
    }
}
