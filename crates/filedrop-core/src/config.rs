//! Configuration module
//!
//! All settings are read once at startup, from the process environment (after loading
//! an optional `.env` file), into a [`Config`] that is then handed to the application
//! state. Nothing reads the environment after startup.

use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{DEFAULT_UPLOAD_FOLDER, UNKNOWN_RELEASE_VERSION};
use crate::storage_types::StorageBackend;

// Defaults mirror the process supervisor settings the service was deployed with
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_WORKERS: usize = 4;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOAD_TEST_MAX_DELAY_SECS: u64 = 3;

/// Console log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!(
                "LOG_FORMAT must be 'compact' or 'json', got '{}'",
                s
            )),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    release_version: String,
    environment: String,
    host: String,
    port: u16,
    workers: usize,
    request_timeout_secs: u64,
    http_concurrency_limit: usize,
    log_level: String,
    log_format: LogFormat,
    storage_backend: StorageBackend,
    upload_folder: String,
    load_test_max_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_version: UNKNOWN_RELEASE_VERSION.to_string(),
            environment: "development".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            http_concurrency_limit: DEFAULT_HTTP_CONCURRENCY_LIMIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            storage_backend: StorageBackend::default(),
            upload_folder: DEFAULT_UPLOAD_FOLDER.to_string(),
            load_test_max_delay_secs: DEFAULT_LOAD_TEST_MAX_DELAY_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::default(),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        let config = Config {
            release_version: lookup("RELEASE_VERSION")
                .unwrap_or_else(|| UNKNOWN_RELEASE_VERSION.to_string()),
            environment,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            workers: parse_or(&lookup, "WORKERS", DEFAULT_WORKERS)?,
            request_timeout_secs: parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            http_concurrency_limit: parse_or(
                &lookup,
                "HTTP_CONCURRENCY_LIMIT",
                DEFAULT_HTTP_CONCURRENCY_LIMIT,
            )?,
            log_level: lookup("LOG_LEVEL")
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            storage_backend,
            upload_folder: lookup("UPLOAD_FOLDER")
                .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string()),
            load_test_max_delay_secs: parse_or(
                &lookup,
                "LOAD_TEST_MAX_DELAY_SECS",
                DEFAULT_LOAD_TEST_MAX_DELAY_SECS,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.workers == 0 {
            return Err(anyhow::anyhow!("WORKERS must be at least 1"));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS cannot be 0"));
        }

        if self.http_concurrency_limit == 0 {
            return Err(anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT cannot be 0"));
        }

        if self.upload_folder.trim().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_FOLDER cannot be empty"));
        }

        Ok(())
    }

    /// Point the storage directory somewhere else (used by tests and tooling).
    pub fn with_upload_folder(mut self, folder: impl AsRef<Path>) -> Self {
        self.upload_folder = folder.as_ref().to_string_lossy().into_owned();
        self
    }

    /// Override the release version reported by `/health` and `/test`.
    pub fn with_release_version(mut self, version: impl Into<String>) -> Self {
        self.release_version = version.into();
        self
    }

    /// Override the upper bound of the `/test` delay.
    pub fn with_load_test_max_delay_secs(mut self, secs: u64) -> Self {
        self.load_test_max_delay_secs = secs;
        self
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn release_version(&self) -> &str {
        &self.release_version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port` the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.http_concurrency_limit
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn upload_folder(&self) -> &str {
        &self.upload_folder
    }

    pub fn load_test_max_delay_secs(&self) -> u64 {
        self.load_test_max_delay_secs
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} must be a valid number ({}): {}", key, raw, e)),
        None => Ok(default),
    }
}
