use std::str::FromStr;
use std::sync::{Arc, Once};

use tracing_subscriber::EnvFilter;

use super::config::LogConfig;
use super::level::LogLevel;
use super::types::LoggingError;

/// The logging capability set pipelines depend on.
///
/// Callers hold `Arc<dyn Logger>` and never see the concrete backend;
/// swapping backends changes rendering only. The same logger instance may
/// be shared across pipelines.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

impl std::fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Logger")
    }
}

/// Library selector choosing which backend a logger is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBackend {
    /// Structured logging via the `tracing` ecosystem.
    Structured,
    /// Plain logging via the `log` facade and `env_logger`.
    Standard,
}

impl FromStr for LogBackend {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(LogBackend::Structured),
            "standard" => Ok(LogBackend::Standard),
            _ => Err(LoggingError::UnknownBackend(s.to_string())),
        }
    }
}

/// Builds a logger for `service_name` from a library selector string.
///
/// An unrecognized selector fails with [`LoggingError::UnknownBackend`];
/// there is no silent fallback to a default backend.
pub fn get_logger(
    service_name: &str,
    library: &str,
    config: &LogConfig,
) -> Result<Arc<dyn Logger>, LoggingError> {
    let backend = library.parse::<LogBackend>()?;
    Ok(logger_for(service_name, backend, config))
}

/// Builds a logger for an already-resolved backend selector.
///
/// Installs the backend's process-wide subscriber on first use; repeated
/// calls reuse the installed one rather than stacking duplicates.
pub fn logger_for(service_name: &str, backend: LogBackend, config: &LogConfig) -> Arc<dyn Logger> {
    match backend {
        LogBackend::Structured => {
            init_structured(config.min_level());
            Arc::new(TracingLogger {
                service: service_name.to_string(),
                min_level: config.min_level(),
            })
        }
        LogBackend::Standard => {
            init_standard(config.min_level());
            Arc::new(StdLogger {
                service: service_name.to_string(),
                min_level: config.min_level(),
            })
        }
    }
}

/// Default logger used when a pipeline is constructed without one:
/// structured backend, level from the environment.
pub fn default_logger(service_name: &str) -> Result<Arc<dyn Logger>, LoggingError> {
    let config = LogConfig::from_env()?;
    Ok(logger_for(service_name, LogBackend::Structured, &config))
}

static STRUCTURED_INIT: Once = Once::new();
static STANDARD_INIT: Once = Once::new();

fn init_structured(min_level: LogLevel) {
    STRUCTURED_INIT.call_once(|| {
        // try_init tolerates a subscriber installed elsewhere in the process
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(min_level.as_filter_str()))
            .try_init();
    });
}

fn init_standard(min_level: LogLevel) {
    STANDARD_INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(min_level.to_level_filter())
            .try_init();
    });
}

/// Structured backend: forwards to `tracing` with the service name as a field.
struct TracingLogger {
    service: String,
    min_level: LogLevel,
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        if LogLevel::Info.is_enabled(self.min_level) {
            tracing::info!(service = %self.service, "{}", message);
        }
    }

    fn debug(&self, message: &str) {
        if LogLevel::Debug.is_enabled(self.min_level) {
            tracing::debug!(service = %self.service, "{}", message);
        }
    }

    fn error(&self, message: &str) {
        if LogLevel::Error.is_enabled(self.min_level) {
            tracing::error!(service = %self.service, "{}", message);
        }
    }
}

/// Standard backend: forwards to the `log` facade with the service name
/// as the record target.
struct StdLogger {
    service: String,
    min_level: LogLevel,
}

impl Logger for StdLogger {
    fn info(&self, message: &str) {
        if LogLevel::Info.is_enabled(self.min_level) {
            log::info!(target: self.service.as_str(), "{}", message);
        }
    }

    fn debug(&self, message: &str) {
        if LogLevel::Debug.is_enabled(self.min_level) {
            log::debug!(target: self.service.as_str(), "{}", message);
        }
    }

    fn error(&self, message: &str) {
        if LogLevel::Error.is_enabled(self.min_level) {
            log::error!(target: self.service.as_str(), "{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selector_parsing() {
        assert_eq!(
            "structured".parse::<LogBackend>().unwrap(),
            LogBackend::Structured
        );
        assert_eq!(
            "Standard".parse::<LogBackend>().unwrap(),
            LogBackend::Standard
        );
    }

    #[test]
    fn test_unknown_selector_is_configuration_error() {
        let err = get_logger("svc", "nonexistent", &LogConfig::default()).unwrap_err();
        assert_eq!(err, LoggingError::UnknownBackend("nonexistent".to_string()));
    }

    #[test]
    fn test_get_logger_returns_usable_logger() {
        let config = LogConfig::default();
        let logger = get_logger("provider_test", "structured", &config).unwrap();
        logger.info("info message");
        logger.debug("debug message");
        logger.error("error message");
    }

    #[test]
    fn test_repeated_construction_is_idempotent() {
        let config = LogConfig::default();
        // Both calls must succeed; the second reuses the installed subscriber.
        let first = get_logger("svc_a", "standard", &config).unwrap();
        let second = get_logger("svc_b", "standard", &config).unwrap();
        first.info("from svc_a");
        second.info("from svc_b");
    }

    #[test]
    fn test_default_logger_uses_env_config() {
        let logger = default_logger("defaulted").unwrap();
        logger.info("constructed without an explicit backend");
    }
}
