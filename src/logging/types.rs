use thiserror::Error;

/// Errors that can occur while configuring logging.
///
/// These are configuration failures: they happen at logger construction
/// time, before any pipeline step runs. There is no silent fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// The library selector did not name a known backend.
    #[error("unrecognized logging backend '{0}'")]
    UnknownBackend(String),

    /// A log level string could not be parsed.
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggingError::UnknownBackend("nonexistent".to_string());
        assert_eq!(err.to_string(), "unrecognized logging backend 'nonexistent'");

        let err = LoggingError::InvalidLevel("verbose".to_string());
        assert_eq!(err.to_string(), "invalid log level 'verbose'");
    }
}
