//! HSV tinting of greyscale images.
//!
//! Each pixel keeps a fixed hue and saturation; its intensity drives the
//! HSV value channel:
//!
//! ```text
//! V = (L / 255) × v_scale
//! (r, g, b) = hsv_to_rgb(h, s, V) × 255
//! ```

use crate::image::{ColorBuffer, GreyscaleBuffer, quantize};

/// Fixed hue/saturation tint with a brightness scale, all in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvTint {
    /// Hue as a fraction of a full turn.
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Multiplier applied to the normalized pixel intensity.
    pub value_scale: f64,
}

/// A tint parameter outside its allowed range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TintRangeError {
    #[error("H must be in [0, 360], got {0}")]
    Hue(f64),
    #[error("S and V must be in [0, 100], got S={0} V={1}")]
    SaturationValue(f64, f64),
}

impl HsvTint {
    /// Build from user-facing units: hue in degrees `[0, 360]`, saturation
    /// and value in percent `[0, 100]`.
    pub fn from_degrees_percent(
        hue_deg: f64,
        sat_pct: f64,
        value_pct: f64,
    ) -> Result<Self, TintRangeError> {
        if !(0.0..=360.0).contains(&hue_deg) {
            return Err(TintRangeError::Hue(hue_deg));
        }
        if !(0.0..=100.0).contains(&sat_pct) || !(0.0..=100.0).contains(&value_pct) {
            return Err(TintRangeError::SaturationValue(sat_pct, value_pct));
        }
        Ok(Self {
            hue: hue_deg / 360.0,
            saturation: sat_pct / 100.0,
            value_scale: value_pct / 100.0,
        })
    }

    /// Color for a single intensity.
    pub fn color_for(&self, intensity: u8) -> [u8; 3] {
        let value = f64::from(intensity) / 255.0 * self.value_scale;
        let [r, g, b] = hsv_to_rgb(self.hue, self.saturation, value);
        [quantize(r * 255.0), quantize(g * 255.0), quantize(b * 255.0)]
    }

    /// Color every possible intensity once.
    pub fn palette(&self) -> [[u8; 3]; 256] {
        let mut out = [[0u8; 3]; 256];
        for (i, entry) in out.iter_mut().enumerate() {
            *entry = self.color_for(i as u8);
        }
        out
    }

    /// Convert a greyscale buffer into a tinted color buffer.
    pub fn apply(&self, buf: &GreyscaleBuffer) -> ColorBuffer {
        let palette = self.palette();
        ColorBuffer {
            width: buf.width,
            height: buf.height,
            pixels: buf.pixels.iter().map(|&p| palette[p as usize]).collect(),
        }
    }
}

/// Convert HSV (all components in `[0, 1]`) to RGB in `[0, 1]`.
///
/// Hexcone model: the hue picks one of six sectors, `f` is the position
/// inside it. The operation order is fixed so ties land the same way for
/// every channel that shares a formula.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
