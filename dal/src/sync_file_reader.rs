//! Resting place for [Quake3LogFileSyncReader]


use crate::sync_reader::Quake3LogSyncReader;
use common::types::Result;
use dal_api::{Config, Quake3LogLines};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;


/// Size for buffering IO (the larger, more RAM is used, but fewer system calls / context switches / hardware requests are required)
const BUFFER_SIZE: usize = 1024*1024;


/// [Quake3LogLines] implementation for reading Quake 3 Server log lines from a local file
pub struct Quake3LogFileSyncReader {
    config: Arc<Config>,
    log_file_path: String,
}

impl Quake3LogFileSyncReader {

    pub fn new(config: Arc<Config>, log_file_path: &str) -> Box<Self> {
        Box::new(Self {
            config,
            log_file_path: log_file_path.into(),
        })
    }

}

impl Quake3LogLines for Quake3LogFileSyncReader {

    fn log_lines(self: Box<Self>) -> Result<Vec<String>> {
        let file = File::open(&self.log_file_path)
            .map_err(|err| format!("Couldn't open Quake3 Server log file '{}' for reading: {err}", self.log_file_path))?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);
        Quake3LogSyncReader::new(self.config, &self.log_file_path, reader)
            .log_lines()
    }

}


/// Unit tests the [sync_file_reader](super) implementation of [dal_api::Quake3LogLines]
#[cfg(test)]
mod tests {
    use super::*;


    /// The location of a good log file, with all lines OK
    const GOOD_LOG_FILE_LOCATION: &str = "tests/resources/qgames_excerpt.log";
    const NON_EXISTING_FILE_LOCATION: &str = "/tmp/non-existing.log";


    /// Tests that an existing & valid file (for which there will be no IO errors) may be correctly read from beginning to end
    #[test]
    fn read_file() {
        let log_source = Quake3LogFileSyncReader::new(config(), GOOD_LOG_FILE_LOCATION);
        let lines = log_source.log_lines().expect("Couldn't materialize the log lines");
        assert_eq!(lines.len(), 22, "Unexpected number of log lines");
        assert!(lines.iter().all(|line| !line.contains('\n')), "No line may span log records");
    }

    /// Tests that opening a non-existing file yields the expected error result & message
    #[test]
    fn non_existing_file() {
        let expected_err = "Couldn't open Quake3 Server log file '/tmp/non-existing.log' for reading: No such file or directory (os error 2)";
        let log_source = Quake3LogFileSyncReader::new(config(), NON_EXISTING_FILE_LOCATION);
        match log_source.log_lines() {
            Ok(_lines) => panic!("Opening a non-existing file was expected to fail, but the operation succeeded"),
            Err(lines_err) => assert_eq!(lines_err.to_string(), expected_err.to_string(), "Unexpected error"),
        }
    }


    fn config() -> Arc<Config> {
        Arc::new(Config {
            debug: false,
            ..Config::default()
        })
    }

}
