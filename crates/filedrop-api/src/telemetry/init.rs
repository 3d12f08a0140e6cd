use filedrop_core::LogFormat;
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Filter used when `RUST_LOG` is unset: our crates and tower_http at `level`.
pub fn default_filter(level: &str) -> String {
    format!("filedrop={level},tower_http={level}")
}

/// Initialize tracing.
///
/// `RUST_LOG` takes precedence over `log_level`. Fails if a global subscriber is
/// already installed.
pub fn init_telemetry(log_level: &str, format: LogFormat) -> Result<(), anyhow::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level).into());

    let result = match format {
        LogFormat::Compact => {
            let console_fmt = tracing_subscriber::fmt::layer()
                .event_format(Format::default().compact().with_target(false));
            tracing_subscriber::registry()
                .with(filter)
                .with(console_fmt)
                .try_init()
        }
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::debug!(log_level, ?format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = default_filter("warn");
        assert_eq!(filter, "filedrop=warn,tower_http=warn");
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
