pub mod manager;
pub mod runner;
pub mod types;

pub use manager::{ManagerConfig, ManagerConfigBuilder, PipelineManager, RunnablePipeline};
pub use runner::{Pipeline, PipelineRunner};
pub use types::{BoxError, PipelineError};
