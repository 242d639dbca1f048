//! Resting place for [Config] & friends


/// Configuration to dictate the tunable behaviors of the Business Logic Layer
pub struct Config {

    /// Log::warn! of any log lines that looked like events but couldn't be structurally parsed.\
    /// Such lines never stop the processing -- they are dropped without touching any aggregate --
    /// but with this setting you have the option to visualize them.
    pub log_issues: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: false,
        }
    }
}
