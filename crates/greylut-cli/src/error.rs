//! Error types for the batch driver.

use std::path::PathBuf;

use greylut_core::{ImageError, TableError, TintRangeError};

/// Problems with the command line or the paths it names.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("input directory does not exist: {}", .0.display())]
    MissingInputDir(PathBuf),
    #[error("LUT file does not exist: {}", .0.display())]
    MissingLut(PathBuf),
    #[error("--hsv must be H,S,V (e.g. 30,100,100)")]
    HsvArity,
    #[error("--hsv values must be numbers: {0:?}")]
    HsvNumber(String),
    #[error("--hsv {0}")]
    HsvRange(#[from] TintRangeError),
}

/// Any error that ends a run with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("error loading LUT: {0}")]
    Table(#[from] TableError),
    #[error("error processing {}: {source}", path.display())]
    Image { path: PathBuf, source: ImageError },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AppError {
    pub(crate) fn image(path: &std::path::Path, source: ImageError) -> Self {
        Self::Image {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
