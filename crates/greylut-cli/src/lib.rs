//! Greylut CLI: argument handling and the batch driver around
//! `greylut-core`.

pub mod args;
pub mod batch;
pub mod config;
pub mod error;
pub mod logging;

pub use args::Args;
pub use batch::{BatchSummary, run_batch};
pub use config::RunConfig;
pub use error::{AppError, ConfigError};
