//! File-system collaborators: directory listing, decoding, and encoding.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::ImageError;
use crate::image::{GreyscaleBuffer, ProcessedImage};

/// Encoding used when writing a processed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// `.jpg`/`.jpeg` (any case) map to JPEG; everything else to PNG.
    pub fn from_path(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some("jpg" | "jpeg") => Self::Jpeg,
            _ => Self::Png,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// Normalize a user-supplied extension: trimmed, lowercase, no leading dot.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

/// List regular files directly inside `dir` whose extension is in
/// `extensions`, sorted by path.
///
/// `extensions` are compared after [`normalize_extension`]. Subdirectories
/// are not descended into.
pub fn list_images(dir: &Path, extensions: &[String]) -> std::io::Result<Vec<PathBuf>> {
    let accepted: Vec<String> = extensions
        .iter()
        .map(|e| normalize_extension(e))
        .filter(|e| !e.is_empty())
        .collect();

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if extension_of(&path).is_some_and(|ext| accepted.contains(&ext)) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Decode an image and flatten it to one luminance channel.
pub fn load_greyscale(path: &Path) -> Result<GreyscaleBuffer, ImageError> {
    let img = image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(GreyscaleBuffer::from(img.to_luma8()))
}

/// Write `image` to `output_dir`, keeping the file name of `input`.
///
/// The encoding follows the input extension (see [`OutputFormat::from_path`]).
/// Returns the path written.
pub fn save_image(
    image: ProcessedImage,
    input: &Path,
    output_dir: &Path,
) -> Result<PathBuf, ImageError> {
    let name = input.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("no file name in {}", input.display()),
        )
    })?;
    let out_path = output_dir.join(name);
    let format = OutputFormat::from_path(input);

    let encoded = image.into_dynamic().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "pixel buffer does not match image dimensions",
        )
    })?;
    encoded
        .save_with_format(&out_path, format.image_format())
        .map_err(|source| ImageError::Encode {
            path: out_path.clone(),
            source,
        })?;
    Ok(out_path)
}
