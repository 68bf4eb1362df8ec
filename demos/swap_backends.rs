//! Runs the same pipeline under both logging backends.
//!
//! The pipeline extracts a small record, passes it through unchanged, and
//! loads it with a no-op. Business logic does not change when the backend
//! is swapped; only the log rendering differs.
//!
//! Run with: cargo run --example swap_backends

use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use etl_template::logging::{get_logger, LogConfig};
use etl_template::pipeline::{BoxError, Pipeline, PipelineRunner};

struct DemoPipeline;

#[async_trait]
impl Pipeline<HashMap<String, i32>, HashMap<String, i32>> for DemoPipeline {
    async fn extract(&self) -> Result<HashMap<String, i32>, BoxError> {
        Ok(HashMap::from([("data".to_string(), 123)]))
    }

    async fn transform(
        &self,
        data: HashMap<String, i32>,
    ) -> Result<HashMap<String, i32>, BoxError> {
        Ok(data)
    }

    async fn load(&self, _data: HashMap<String, i32>) -> Result<(), BoxError> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Environment is parsed once here, not inside the logging core.
    let config = LogConfig::from_env()?;

    println!("--- Running with the structured backend ---");
    let logger = get_logger("structured_service", "structured", &config)?;
    let runner = PipelineRunner::new("structured_service", Arc::new(DemoPipeline), logger);
    runner.run().await?;

    println!("--- Running with the standard backend ---");
    let logger = get_logger("std_service", "standard", &config)?;
    let runner = PipelineRunner::new("std_service", Arc::new(DemoPipeline), logger);
    runner.run().await?;

    Ok(())
}
