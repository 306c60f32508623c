//! Full-range contrast normalization.

use crate::image::{GreyscaleBuffer, quantize};

/// Stretch pixel values so the darkest becomes 0 and the brightest 255.
///
/// ```text
/// out = round((p - min) × 255 / (max - min))
/// ```
///
/// A constant image (including an empty one) maps to all zeros.
pub fn normalize_range(buf: &GreyscaleBuffer) -> GreyscaleBuffer {
    let (min, max) = buf
        .pixels
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)));

    let pixels = if buf.is_empty() || min == max {
        vec![0; buf.pixels.len()]
    } else {
        let scale = 255.0 / f64::from(max - min);
        buf.pixels
            .iter()
            .map(|&p| quantize(f64::from(p - min) * scale))
            .collect()
    };

    tracing::debug!("normalized {}x{} from [{min}, {max}]", buf.width, buf.height);

    GreyscaleBuffer {
        width: buf.width,
        height: buf.height,
        pixels,
    }
}
