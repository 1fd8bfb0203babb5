//! Structured logging setup
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any component-specific log levels configured in the LoggingConfig.
///
/// # Examples
///
/// ```
/// use rng_analyzer::config::{LogFormat, LoggingConfig};
/// use rng_analyzer::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("client".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "warn".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "warn,rng_analyzer::client=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",rng_analyzer::{}={}", component, level));
        }
    }

    filter_str
}

/// Initialize tracing based on configuration
///
/// `RUST_LOG` takes precedence over the configured directives.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
