//! Resting place for [Quake3LogHttpFetcher]


use common::types::Result;
use dal_api::{Config, Quake3LogLines};
use std::sync::Arc;
use log::trace;


/// [Quake3LogLines] implementation fetching the raw log text over HTTP.\
/// The whole body is retrieved & split into lines before anything is handed
/// downstream: a transport failure, a non-success status or an empty body all
/// prevent the analysers from ever running on degenerate input.
pub struct Quake3LogHttpFetcher {
    config: Arc<Config>,
    url: String,
}

impl Quake3LogHttpFetcher {

    pub fn new(config: Arc<Config>, url: &str) -> Box<Self> {
        Box::new(Self {
            config,
            url: url.into(),
        })
    }

}

impl Quake3LogLines for Quake3LogHttpFetcher {

    fn log_lines(self: Box<Self>) -> Result<Vec<String>> {
        if self.config.debug {
            trace!("Fetching Quake3 Server log from '{}'", self.url);
        }
        let response = reqwest::blocking::get(&self.url)
            .map_err(|err| format!("Couldn't fetch Quake3 Server log from '{}': {err}", self.url))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Box::from(format!("Cannot get data. HTTP status: {}", status.as_u16())));
        }
        let body = response.text()
            .map_err(|err| format!("Couldn't decode the Quake3 Server log fetched from '{}' as text: {err}", self.url))?;
        if body.is_empty() {
            return Err(Box::from("No data received."));
        }
        Ok(body.lines().map(str::to_owned).collect())
    }

}


/// Unit tests for the [http_fetcher](super) module.\
/// NOTE: fetching from the real source is exercised manually through the `app` crate --
///       tests here are restricted to failures that don't require network access.
#[cfg(test)]
mod tests {
    use super::*;


    /// Tests that an unusable URL is reported as a fetch error (and not as a panic nor as degenerate input)
    #[test]
    fn unusable_url() {
        let log_source = Quake3LogHttpFetcher::new(config(), "not-an-url");
        match log_source.log_lines() {
            Ok(lines) => panic!("Fetching from an unusable URL was expected to fail, but {} lines were returned", lines.len()),
            Err(fetch_err) => assert!(fetch_err.to_string().starts_with("Couldn't fetch Quake3 Server log from 'not-an-url'"),
                                      "Unexpected fetch error: {fetch_err}"),
        }
    }


    fn config() -> Arc<Config> {
        Arc::new(Config::default())
    }

}
