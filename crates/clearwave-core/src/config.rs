//! Configuration module
//!
//! Client configuration is read from the environment with named defaults,
//! so a bare `clearwave process` against a local service needs no setup.

use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 100 * 1024 * 1024;

/// Configuration for the processing client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the processing service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Largest file accepted for submission, in bytes.
    pub max_file_size_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment: CLEARWAVE_API_URL (or API_URL),
    /// CLEARWAVE_TIMEOUT_SECS, CLEARWAVE_MAX_FILE_SIZE_BYTES. Unset or
    /// unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url = env::var("CLEARWAVE_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("CLEARWAVE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let max_file_size_bytes = env::var("CLEARWAVE_MAX_FILE_SIZE_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            base_url,
            timeout_secs,
            max_file_size_bytes,
        }
    }

    /// Replace the base URL, keeping the remaining settings.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
