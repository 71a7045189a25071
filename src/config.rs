//! Runtime configuration.

use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_LOG_FILE: &str = "quiz-admin.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one admin console session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the question store; `/questions` is appended.
    pub base_url: Url,
    /// Ask before deleting a question.
    pub confirm_delete: bool,
    /// Where tracing output goes while the TUI owns the terminal.
    pub log_file: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn new(base_url: &str, confirm_delete: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            confirm_delete,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        })
    }

    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            confirm_delete: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::BaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::BaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}
