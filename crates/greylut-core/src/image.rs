//! Image representation for the greyscale pipeline.

use std::fmt;

use image::{GrayImage, RgbImage};

/// Single-channel 8-bit image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreyscaleBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel intensities, `width * height` entries.
    pub pixels: Vec<u8>,
}

impl GreyscaleBuffer {
    /// Wrap raw pixels. Returns `None` if the length does not match the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl From<GrayImage> for GreyscaleBuffer {
    fn from(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }
}

/// Three-channel 8-bit image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[r, g, b]`, `width * height` entries.
    pub pixels: Vec<[u8; 3]>,
}

/// Output of the pixel pipeline: grey unless a tint was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedImage {
    Grey(GreyscaleBuffer),
    Color(ColorBuffer),
}

impl ProcessedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Grey(buf) => (buf.width, buf.height),
            Self::Color(buf) => (buf.width, buf.height),
        }
    }

    /// Convert into an `image` buffer ready for encoding.
    ///
    /// Returns `None` if the pixel count does not match the dimensions.
    pub fn into_dynamic(self) -> Option<image::DynamicImage> {
        match self {
            Self::Grey(buf) => GrayImage::from_raw(buf.width, buf.height, buf.pixels)
                .map(image::DynamicImage::ImageLuma8),
            Self::Color(buf) => {
                let raw: Vec<u8> = buf.pixels.into_iter().flatten().collect();
                RgbImage::from_raw(buf.width, buf.height, raw).map(image::DynamicImage::ImageRgb8)
            }
        }
    }
}

impl fmt::Display for ProcessedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        match self {
            Self::Grey(_) => write!(f, "{w}x{h} grey"),
            Self::Color(_) => write!(f, "{w}x{h} rgb"),
        }
    }
}

/// Round to the nearest integer (ties to even) and clamp into `u8`.
///
/// Every real-to-intensity conversion in the crate goes through here so
/// table entries, normalized pixels, and tint channels agree on ties.
pub fn quantize(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
