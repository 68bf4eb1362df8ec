use std::sync::Arc;

use derive_builder::Builder;
use tokio::sync::Semaphore;

use crate::logging::Logger;

use super::runner::{Pipeline, PipelineRunner};
use super::types::{BoxError, PipelineError};

/// Configuration for multi-pipeline execution
#[derive(Clone, Builder)]
pub struct ManagerConfig {
    /// Maximum number of pipelines running at the same time
    #[builder(default = "num_cpus::get()")]
    pub(crate) worker_num: usize,
}

impl ManagerConfig {
    /// Creates a new config with the specified concurrency limit
    pub fn new(worker_num: usize) -> Self {
        ManagerConfig {
            worker_num: worker_num.max(1),
        }
    }

    /// Returns the concurrency limit
    #[inline]
    pub fn worker_num(&self) -> usize {
        self.worker_num
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            worker_num: num_cpus::get(),
        }
    }
}

/// A named, type-erased pipeline the manager can execute.
#[async_trait::async_trait]
pub trait RunnablePipeline: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self) -> Result<(), BoxError>;
}

#[async_trait::async_trait]
impl<E, T> RunnablePipeline for PipelineRunner<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    fn name(&self) -> &str {
        self.service_name()
    }

    async fn run(&self) -> Result<(), BoxError> {
        PipelineRunner::run(self).await
    }
}

/// Runs a set of pipelines with bounded concurrency.
///
/// Each pipeline attempt is independently logged by its runner; one
/// pipeline failing does not stop the others. `run_all` reports the
/// first failure after every runner has finished.
pub struct PipelineManager {
    runners: Vec<Arc<dyn RunnablePipeline>>,
    cfg: ManagerConfig,
}

impl PipelineManager {
    pub fn new(cfg: &ManagerConfig) -> Self {
        PipelineManager {
            runners: Vec::new(),
            cfg: cfg.clone(),
        }
    }

    /// Add a pipeline with specific types E and T.
    ///
    /// Convenience method that wraps the pipeline in a [`PipelineRunner`]
    /// with the given logger.
    pub fn add_pipeline<E, T>(
        &mut self,
        service_name: impl Into<String>,
        pipeline: Arc<dyn Pipeline<E, T> + Send + Sync>,
        logger: Arc<dyn Logger>,
    ) where
        E: Send + 'static,
        T: Send + 'static,
    {
        let runner = PipelineRunner::new(service_name, pipeline, logger);
        self.runners.push(Arc::new(runner));
    }

    /// Add a pipeline whose logger comes from the provider.
    pub fn add_pipeline_with_default_logger<E, T>(
        &mut self,
        service_name: impl Into<String>,
        pipeline: Arc<dyn Pipeline<E, T> + Send + Sync>,
    ) -> Result<(), PipelineError>
    where
        E: Send + 'static,
        T: Send + 'static,
    {
        let runner = PipelineRunner::with_default_logger(service_name, pipeline)?;
        self.runners.push(Arc::new(runner));
        Ok(())
    }

    /// Add a runner directly to the manager
    pub fn add_runner(&mut self, runner: Arc<dyn RunnablePipeline>) {
        self.runners.push(runner);
    }

    /// Number of registered pipelines.
    pub fn len(&self) -> usize {
        self.runners.len()
    }

    /// True when no pipelines are registered.
    pub fn is_empty(&self) -> bool {
        self.runners.is_empty()
    }

    /// Runs every registered pipeline, at most `worker_num` at a time.
    pub async fn run_all(&self) -> Result<(), PipelineError> {
        let semaphore = Arc::new(Semaphore::new(self.cfg.worker_num));
        let mut handles = Vec::with_capacity(self.runners.len());

        for runner in &self.runners {
            let runner = Arc::clone(runner);
            let sem = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = sem
                    .acquire_owned()
                    .await
                    .map_err(|e| PipelineError::WorkerPool(e.to_string()))?;
                runner.run().await.map_err(|e| {
                    PipelineError::Execution(runner.name().to_string(), e.to_string())
                })
            }));
        }

        let mut errors = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => errors.push(e),
                Err(e) => errors.push(PipelineError::WorkerPool(e.to_string())),
            }
        }

        if let Some(err) = errors.into_iter().next() {
            return Err(err);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
