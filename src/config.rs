use crate::interactive_ratatui::constants::{
    DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use std::time::Duration;

/// Runtime settings resolved from the command line and environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub debounce: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}
