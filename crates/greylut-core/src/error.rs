//! Error types for table loading and image I/O.

use std::path::PathBuf;

/// Errors raised while reading curve samples or building a [`CurveTable`].
///
/// [`CurveTable`]: crate::curve::table::CurveTable
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV must have columns 'Idea' and 'Scan'")]
    MissingColumns,
    #[error("CSV has no data rows")]
    NoDataRows,
    #[error("invalid number {value:?} in column '{column}' on line {line}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("curve needs at least one sample")]
    EmptyTable,
}

/// Errors raised while decoding or encoding a single image file.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
