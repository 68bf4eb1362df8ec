use std::fmt;
use std::str::FromStr;

use super::types::LoggingError;

/// Minimum-level threshold shared by all logging backends.
///
/// Ordering follows severity: `Debug < Info < Error`. A message is
/// emitted when its level is at or above the configured minimum, with
/// identical semantics across backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Error,
}

impl LogLevel {
    /// Returns true if a message at this level passes the given minimum.
    #[inline]
    pub fn is_enabled(self, min_level: LogLevel) -> bool {
        self >= min_level
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }

    /// Equivalent filter for the `log` facade.
    pub(crate) fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!(" Error ".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_parse_unknown_level_fails() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, LoggingError::InvalidLevel("verbose".to_string()));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Error);
    }

    #[test]
    fn test_is_enabled_against_minimum() {
        assert!(LogLevel::Info.is_enabled(LogLevel::Info));
        assert!(LogLevel::Error.is_enabled(LogLevel::Info));
        assert!(!LogLevel::Debug.is_enabled(LogLevel::Info));
        assert!(LogLevel::Debug.is_enabled(LogLevel::Debug));
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
