use crate::logging::LoggingError;

/// Opaque step error.
///
/// Extract/transform/load failures are of unconstrained kind, defined by
/// the pipeline implementation's domain. The runner logs them once and
/// returns them unchanged, so callers can downcast to the original type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors reported by the pipeline manager.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Pipeline '{0}' execution failed: {1}")]
    Execution(String, String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] LoggingError),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}
