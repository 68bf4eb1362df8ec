pub mod config;
pub mod level;
pub mod provider;
pub mod types;

pub use config::{LogConfig, LogConfigBuilder, LOG_LEVEL_ENV};
pub use level::LogLevel;
pub use provider::{default_logger, get_logger, logger_for, LogBackend, Logger};
pub use types::LoggingError;
