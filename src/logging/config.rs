use derive_builder::Builder;

use super::level::LogLevel;
use super::types::LoggingError;

/// Name of the environment variable consulted by [`LogConfig::from_env`].
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Configuration handed to the logger provider.
///
/// The logging core never reads the environment itself; callers parse it
/// once at the process entry point (typically via [`LogConfig::from_env`])
/// and pass the result in.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct LogConfig {
    /// Minimum level a message must reach to be emitted
    #[builder(default)]
    pub(crate) min_level: LogLevel,
}

impl LogConfig {
    /// Creates a config with an explicit minimum level.
    pub fn new(min_level: LogLevel) -> Self {
        LogConfig { min_level }
    }

    /// Reads `LOG_LEVEL` from the environment.
    ///
    /// Defaults to [`LogLevel::Info`] when the variable is unset; an
    /// unparseable value is a configuration error, not a fallback.
    pub fn from_env() -> Result<Self, LoggingError> {
        match std::env::var(LOG_LEVEL_ENV) {
            Ok(raw) => Ok(LogConfig {
                min_level: raw.parse()?,
            }),
            Err(_) => Ok(LogConfig::default()),
        }
    }

    /// Returns the configured minimum level.
    #[inline]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            min_level: LogLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        let config = LogConfig::default();
        assert_eq!(config.min_level(), LogLevel::Info);
    }

    #[test]
    fn test_builder() {
        let config = LogConfigBuilder::default()
            .min_level(LogLevel::Debug)
            .build()
            .unwrap();
        assert_eq!(config.min_level(), LogLevel::Debug);

        let config = LogConfigBuilder::default().build().unwrap();
        assert_eq!(config.min_level(), LogLevel::Info);
    }

    #[test]
    fn test_from_env() {
        // Only valid values are ever set here; other tests may call
        // from_env concurrently.
        std::env::set_var(LOG_LEVEL_ENV, "debug");
        let config = LogConfig::from_env().unwrap();
        assert_eq!(config.min_level(), LogLevel::Debug);

        std::env::remove_var(LOG_LEVEL_ENV);
        let config = LogConfig::from_env().unwrap();
        assert_eq!(config.min_level(), LogLevel::Info);
    }
}
