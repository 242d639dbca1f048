//! Factory for obtaining one of the implementations of our log-lines sources

use dal_api::{Config, Quake3LogLines, Quake3LogLinesImplementations};
use std::sync::Arc;

/// Instantiates a log-lines source able to work on the contents of `log_locator` --
/// a URL or a file path, depending on the configured implementation (ignored for stdin).
pub fn instantiate_log_source(config: &Arc<Config>, log_locator: &str) -> Box<dyn Quake3LogLines> {
    match config.log_lines_implementation {
        Quake3LogLinesImplementations::HttpFetcher => crate::http_fetcher::Quake3LogHttpFetcher::new(config.clone(), log_locator),
        Quake3LogLinesImplementations::SyncLogFileReader => crate::sync_file_reader::Quake3LogFileSyncReader::new(config.clone(), log_locator),
        Quake3LogLinesImplementations::StdinReader => crate::stdin_reader::Quake3LogStdinReader::new(config.clone()),
    }
}
