//! Simple application to demonstrate the powers of the architecture:
//!
//! ================================================================
//! Builds per-match statistics out of Quake3 Server log files.
//! By default, fetches the reference log over HTTP.
//! ================================================================
//!
//! USAGE:
//!     app [FLAGS] [OPTIONS]
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!         --stdin      Reads the log from stdin instead of fetching it
//!     -V, --version    Prints version information
//!         --verbose    Outputs any non-fatal inconsistencies in the log lines to stderr
//!
//! OPTIONS:
//!         --log-file <log-file>    Local file with Quake3 Server log messages -- takes precedence over --url
//!         --url <url>              URL to fetch the Quake3 Server log from
//!
//!
//! Explore some execution options:
//!  - ./target/debug/app --help
//!  - ./target/debug/app                                            # fetches & analyses the reference log
//!  - ./target/debug/app --log-file '<path_to_quake3_log_file>'     # analyses a local log file
//!  - cat games.log | ./target/debug/app --stdin                    # analyses whatever comes through stdin
//!  - ./target/debug/app --verbose                                  # reports skipped malformed `Kill` lines to stderr

mod command_line;

use std::io::BufWriter;
use std::sync::Arc;

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // start the logger
    simple_logger::SimpleLogger::new().with_utc_timestamps().init().unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let command_line_options = command_line::parse_from_args();

    let dal_config = Arc::new(dal_api::Config {
        log_lines_implementation: if command_line_options.stdin {
            dal_api::Quake3LogLinesImplementations::StdinReader
        } else if command_line_options.log_file.is_some() {
            dal_api::Quake3LogLinesImplementations::SyncLogFileReader
        } else {
            dal_api::Quake3LogLinesImplementations::HttpFetcher
        },
        debug: command_line_options.verbose,
    });
    let logic_config = bll::Config {
        log_issues: command_line_options.verbose,
    };
    let presentation_writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, std::io::stdout());

    let log_locator = command_line_options.log_file.as_deref()
        .unwrap_or(&command_line_options.url);
    let log_source = dal::factory::instantiate_log_source(&dal_config, log_locator);

    // any transport failure aborts here: the analysers only ever run on a complete line sequence
    let log_lines = log_source.log_lines()?;
    let (match_sequence, reason_tally) = bll::summary::analyse_log(&logic_config, &log_lines);
    presentation::to_json(&match_sequence, &reason_tally, presentation_writer)?;

    Ok(())
}
