//! Per-image pixel pipeline.
//!
//! Stages run in a fixed order and nothing is carried between images:
//! 1. Range normalization
//! 2. Curve table lookup
//! 3. Horizontal mirror (optional)
//! 4. HSV tint (optional)

pub mod mirror;
pub mod normalize;
pub mod tint;

use crate::curve::table::CurveTable;
use crate::image::{GreyscaleBuffer, ProcessedImage};

use self::mirror::mirror_horizontal;
use self::normalize::normalize_range;
use self::tint::HsvTint;

/// Optional pipeline stages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PipelineOptions {
    /// Reverse each row after the curve is applied.
    pub mirror: bool,
    /// Convert to color with a fixed hue and saturation.
    pub tint: Option<HsvTint>,
}

/// Map every pixel through `table` in place.
pub fn apply_curve(buf: &mut GreyscaleBuffer, table: &CurveTable) {
    for p in &mut buf.pixels {
        *p = table.get(*p);
    }
}

/// Run the full pipeline on one decoded image.
pub fn process(
    buf: &GreyscaleBuffer,
    table: &CurveTable,
    options: &PipelineOptions,
) -> ProcessedImage {
    let mut out = normalize_range(buf);
    apply_curve(&mut out, table);
    if options.mirror {
        mirror_horizontal(&mut out);
    }
    match &options.tint {
        Some(tint) => ProcessedImage::Color(tint.apply(&out)),
        None => ProcessedImage::Grey(out),
    }
}
