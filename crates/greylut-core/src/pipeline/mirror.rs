//! Horizontal mirroring.

use crate::image::GreyscaleBuffer;

/// Reverse the pixel order of every row in place.
pub fn mirror_horizontal(buf: &mut GreyscaleBuffer) {
    if buf.width == 0 {
        return;
    }
    for row in buf.pixels.chunks_exact_mut(buf.width as usize) {
        row.reverse();
    }
}
