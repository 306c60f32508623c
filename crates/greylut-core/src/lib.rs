//! Greylut Core: domain layer for tone-curve application.
//!
//! This crate contains the curve table construction, the CSV sample
//! reader, the greyscale pixel pipeline, and the thin image I/O
//! collaborators the batch driver needs. No CLI or logging-subscriber
//! dependencies.

pub mod curve;
pub mod error;
pub mod image;
pub mod io;
pub mod pipeline;

// Re-exports for convenience.
pub use curve::csv::load_samples;
pub use curve::table::{CurveSample, CurveTable};
pub use error::{ImageError, TableError};
pub use crate::image::{ColorBuffer, GreyscaleBuffer, ProcessedImage};
pub use io::{OutputFormat, list_images, load_greyscale, save_image};
pub use pipeline::tint::{HsvTint, TintRangeError};
pub use pipeline::{PipelineOptions, process};
