//! Resting place for [Quake3LogSyncReader]


use common::types::Result;
use dal_api::{Config, Quake3LogLines};
use std::io::BufRead;
use std::sync::Arc;
use log::trace;


/// [Quake3LogLines] implementation materializing the log lines out of any [BufRead] --
/// the common ground for the file & stdin sources.
pub struct Quake3LogSyncReader<Reader: BufRead> {
    config: Arc<Config>,
    source_name: String,
    reader: Reader,
}

impl<Reader: BufRead> Quake3LogSyncReader<Reader> {

    pub fn new(config: Arc<Config>, source_name: &str, reader: Reader) -> Box<Self> {
        Box::new(Self {
            config,
            source_name: source_name.into(),
            reader,
        })
    }

}

impl<Reader: BufRead> Quake3LogLines for Quake3LogSyncReader<Reader> {

    fn log_lines(self: Box<Self>) -> Result<Vec<String>> {
        let debug = self.config.debug;
        let source_name = self.source_name;
        let lines = self.reader.lines().enumerate()
            .map(|(line_number, line_result)| line_result
                .map_err(|read_err| Box::from(format!("IO read error when processing Quake3 Server log '{source_name}' at line {}: {read_err:?}", line_number + 1))))
            .collect::<Result<Vec<String>>>()?;
        if debug {
            trace!("Materialized {} log lines out of '{source_name}'", lines.len());
        }
        Ok(lines)
    }

}

// for unit tests, see sync_file_reader.rs
// (the tests were delegated there as it is easier to test from files)
