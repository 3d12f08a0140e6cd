//! Configuration validation
//!
//! Validates configuration at startup to catch misconfigurations early.

use anyhow::Result;
use filedrop_core::constants::UNKNOWN_RELEASE_VERSION;
use filedrop_core::Config;

/// Validate configuration values
///
/// Hard errors come from [`Config::validate`]; combinations that work but are
/// probably unintended only produce warnings.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.load_test_max_delay_secs() >= config.request_timeout_secs() {
        tracing::warn!(
            load_test_max_delay_secs = config.load_test_max_delay_secs(),
            request_timeout_secs = config.request_timeout_secs(),
            "LOAD_TEST_MAX_DELAY_SECS is not below REQUEST_TIMEOUT_SECS - some /test requests will time out"
        );
    }

    if let Ok(cores) = std::thread::available_parallelism() {
        if config.workers() > cores.get() * 4 {
            tracing::warn!(
                workers = config.workers(),
                cores = cores.get(),
                "WORKERS is much higher than the number of CPU cores"
            );
        }
    }

    if config.is_production() && config.release_version() == UNKNOWN_RELEASE_VERSION {
        tracing::warn!("RELEASE_VERSION is not set in production");
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config::from_lookup(|key| (key == "WORKERS").then(|| "1".to_string()))
            .unwrap()
            .with_upload_folder("");
        assert!(validate_config(&config).is_err());
    }
}
