//! # etl-template
//!
//! A minimal template for Extract-Transform-Load (ETL) pipelines.
//!
//! ## Features
//!
//! - **Fixed three-step lifecycle** (extract, transform, load) behind a trait
//! - **Orchestrated execution** with centralized start/success/failure logging
//! - **Pluggable logging backends** (tracing-based or `log`-facade based)
//!   selected by name at construction time
//! - **Multi-pipeline manager** for running several pipelines with bounded
//!   concurrency
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use etl_template::logging::{get_logger, LogConfig};
//! use etl_template::pipeline::{Pipeline, PipelineRunner};
//! use std::sync::Arc;
//!
//! // Build a logger from the "structured" backend
//! let config = LogConfig::from_env()?;
//! let logger = get_logger("my_service", "structured", &config)?;
//!
//! // Wrap a Pipeline implementation and run it
//! let runner = PipelineRunner::new("my_service", Arc::new(MyPipeline), logger);
//! runner.run().await?;
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`] - Pipeline trait, runner, and multi-pipeline manager
//! - [`logging`] - Logger capability trait and backend provider

pub mod logging;
pub mod pipeline;
