pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::Config;
pub use error::{ExportError, Result};
pub use pipeline::{Pipeline, PipelineResult};
