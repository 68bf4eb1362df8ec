use async_trait::async_trait;
use std::sync::Arc;

use crate::logging::{default_logger, Logger, LoggingError};

use super::types::BoxError;

/// Defines an ETL (Extract-Transform-Load) pipeline.
///
/// # Type Parameters
///
/// * `E` - Type of the value produced by extraction
/// * `T` - Type of the value after transformation
///
/// # Lifecycle
///
/// 1. `extract()` - Produce a value from the source
/// 2. `transform()` - Apply business logic to the extracted value
/// 3. `load()` - Deliver the transformed value to the destination
///
/// The template imposes no schema on the data flowing through; defining
/// and validating it is the implementation's responsibility. Any step may
/// fail with any error kind, which the runner propagates unchanged.
#[async_trait]
pub trait Pipeline<E, T>: Send + Sync {
    /// Extracts data from the source.
    async fn extract(&self) -> Result<E, BoxError>;

    /// Transforms the extracted value.
    async fn transform(&self, data: E) -> Result<T, BoxError>;

    /// Loads the transformed value into the destination.
    async fn load(&self, data: T) -> Result<(), BoxError>;
}

/// Executor for a [`Pipeline`], enforcing the fixed step order with
/// centralized logging.
///
/// The runner is immutable after construction. The logger is shared, not
/// owned; the same instance may back several runners. [`run`](Self::run)
/// may be called any number of times, each call being an independent,
/// fully logged attempt.
pub struct PipelineRunner<E, T> {
    service_name: String,
    logger: Arc<dyn Logger>,
    pipeline: Arc<dyn Pipeline<E, T> + Send + Sync>,
}

impl<E, T> PipelineRunner<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    /// Creates a runner with an explicitly injected logger.
    pub fn new(
        service_name: impl Into<String>,
        pipeline: Arc<dyn Pipeline<E, T> + Send + Sync>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        PipelineRunner {
            service_name: service_name.into(),
            logger,
            pipeline,
        }
    }

    /// Creates a runner from a boxed pipeline implementation.
    ///
    /// Convenience constructor for when you have a `Box<dyn Pipeline>`.
    pub fn from_box(
        service_name: impl Into<String>,
        pipeline: Box<dyn Pipeline<E, T> + Send + Sync>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::new(service_name, Arc::from(pipeline), logger)
    }

    /// Creates a runner whose logger comes from the provider, using the
    /// service name as context.
    ///
    /// Fails fast on logging configuration errors, before any step runs.
    pub fn with_default_logger(
        service_name: impl Into<String>,
        pipeline: Arc<dyn Pipeline<E, T> + Send + Sync>,
    ) -> Result<Self, LoggingError> {
        let service_name = service_name.into();
        let logger = default_logger(&service_name)?;
        Ok(PipelineRunner {
            service_name,
            logger,
            pipeline,
        })
    }

    /// Returns the service name this runner logs under.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Orchestrates one pipeline execution: extract, transform, load.
    ///
    /// Logs a start entry, then runs the three steps as a single linear
    /// attempt. On success it logs a completion entry; on failure it logs
    /// one error entry naming the service and the error, then returns the
    /// original error unchanged. No retries, no step timeouts.
    pub async fn run(&self) -> Result<(), BoxError> {
        self.logger
            .info(&format!("Starting pipeline: {}", self.service_name));

        match self.execute().await {
            Ok(()) => {
                self.logger.info(&format!(
                    "Pipeline {} completed successfully.",
                    self.service_name
                ));
                Ok(())
            }
            Err(err) => {
                self.logger
                    .error(&format!("Pipeline {} failed: {}", self.service_name, err));
                Err(err)
            }
        }
    }

    async fn execute(&self) -> Result<(), BoxError> {
        let extracted = self.pipeline.extract().await?;
        let transformed = self.pipeline.transform(extracted).await?;
        self.pipeline.load(transformed).await
    }
}
