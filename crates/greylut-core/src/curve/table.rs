//! Piecewise-linear curve evaluation and 256-entry table baking.
//!
//! Samples are `(input, output)` pairs in intensity units. The curve is
//! flat outside the sampled input range and linear between consecutive
//! samples. Samples sharing an input value form a zero-width segment that
//! evaluates to the earlier sample's output.
//!
//! # Complexity
//! - Evaluate: O(N) scan over sorted samples
//! - Bake to table: O(N × 256)

use serde::{Serialize, Serializer};

use crate::error::TableError;
use crate::image::quantize;

/// Number of entries in a [`CurveTable`].
pub const TABLE_SIZE: usize = 256;

/// One `(input, output)` point of a tone curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    /// Input intensity. Not clamped.
    pub input: f64,
    /// Output intensity, clamped to `[0, 255]`.
    pub output: f64,
}

impl CurveSample {
    /// A NaN output clamps to 255.
    pub fn new(input: f64, output: f64) -> Self {
        let output = if output.is_nan() {
            255.0
        } else {
            output.clamp(0.0, 255.0)
        };
        Self { input, output }
    }
}

/// Evaluates a piecewise-linear curve through samples sorted by input.
///
/// Borrows the samples so baking does not copy them per query.
pub struct LinearCurve<'a> {
    /// Samples sorted ascending by input, ties in encounter order.
    pub samples: &'a [CurveSample],
}

impl LinearCurve<'_> {
    /// Evaluate the curve at intensity `x`.
    ///
    /// Returns 0 for an empty sample set; [`CurveTable::build`] rejects
    /// that case before getting here.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return 0.0;
        };

        if x <= first.input {
            return first.output;
        }
        if x >= last.input {
            return last.output;
        }
        if self.samples.len() == 1 {
            return first.output;
        }

        // First segment whose right end reaches x wins.
        self.samples
            .windows(2)
            .find(|pair| pair[1].input >= x)
            .map(|pair| interpolate(pair[0], pair[1], x))
            .unwrap_or(last.output)
    }
}

fn interpolate(a: CurveSample, b: CurveSample, x: f64) -> f64 {
    if a.input == b.input {
        return a.output;
    }
    a.output + (b.output - a.output) * (x - a.input) / (b.input - a.input)
}

/// Dense mapping from input intensity `0..=255` to output intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveTable([u8; TABLE_SIZE]);

impl CurveTable {
    /// Bake samples into a table.
    ///
    /// Outputs are clamped to `[0, 255]`, samples are stable-sorted by
    /// input, and each integer input is evaluated on the resulting curve
    /// and rounded half-to-even.
    pub fn build(samples: impl IntoIterator<Item = CurveSample>) -> Result<Self, TableError> {
        let mut samples: Vec<CurveSample> = samples
            .into_iter()
            .map(|s| CurveSample::new(s.input, s.output))
            .collect();
        if samples.is_empty() {
            return Err(TableError::EmptyTable);
        }
        samples.sort_by(|a, b| a.input.total_cmp(&b.input));

        let curve = LinearCurve {
            samples: &samples,
        };
        let mut entries = [0u8; TABLE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = quantize(curve.evaluate(i as f64).clamp(0.0, 255.0));
        }
        Ok(Self(entries))
    }

    #[cfg(test)]
    pub(crate) fn identity() -> Self {
        let mut entries = [0u8; TABLE_SIZE];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self(entries)
    }

    /// Table with every entry replaced by `255 - v`.
    pub fn inverted(&self) -> Self {
        let mut entries = self.0;
        for entry in &mut entries {
            *entry = 255 - *entry;
        }
        Self(entries)
    }

    /// Look up the output for one input intensity.
    #[inline]
    pub fn get(&self, input: u8) -> u8 {
        self.0[input as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for CurveTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn samples(points: &[(f64, f64)]) -> Vec<CurveSample> {
        points.iter().map(|&(i, o)| CurveSample::new(i, o)).collect()
    }

    #[test]
    fn test_build_rejects_empty() {
        let err = CurveTable::build(Vec::new()).unwrap_err();
        assert!(matches!(err, TableError::EmptyTable));
    }

    #[test]
    fn test_three_point_curve_pins_values() {
        let table = CurveTable::build(samples(&[(0.0, 0.0), (128.0, 200.0), (255.0, 255.0)]))
            .unwrap();
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(64), 100);
        assert_eq!(table.get(128), 200);
        assert_eq!(table.get(255), 255);
        // 200 + 55 * 64 / 127 = 227.716...
        assert_eq!(table.get(192), 228);
    }

    #[test]
    fn test_unsorted_samples_are_sorted() {
        let sorted = CurveTable::build(samples(&[(0.0, 0.0), (128.0, 200.0), (255.0, 255.0)]))
            .unwrap();
        let shuffled = CurveTable::build(samples(&[(255.0, 255.0), (0.0, 0.0), (128.0, 200.0)]))
            .unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_single_sample_is_constant() {
        let table = CurveTable::build(samples(&[(100.0, 42.0)])).unwrap();
        assert!(table.as_slice().iter().all(|&v| v == 42));
    }

    #[test]
    fn test_single_sample_output_is_clamped() {
        let table = CurveTable::build(samples(&[(10.0, 400.0)])).unwrap();
        assert!(table.as_slice().iter().all(|&v| v == 255));
        let table = CurveTable::build(samples(&[(10.0, -5.0)])).unwrap();
        assert!(table.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_nan_output_clamps_to_max() {
        assert_eq!(CurveSample::new(0.0, f64::NAN).output, 255.0);
        let table = CurveTable::build([CurveSample {
            input: 0.0,
            output: f64::NAN,
        }])
        .unwrap();
        assert!(table.as_slice().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_outside_sample_range_is_flat() {
        let table = CurveTable::build(samples(&[(50.0, 20.0), (200.0, 220.0)])).unwrap();
        assert!(table.as_slice()[..=50].iter().all(|&v| v == 20));
        assert!(table.as_slice()[200..].iter().all(|&v| v == 220));
    }

    #[test]
    fn test_duplicate_input_uses_min_then_max() {
        let table = CurveTable::build(samples(&[(50.0, 10.0), (50.0, 90.0)])).unwrap();
        assert!(table.as_slice()[..=50].iter().all(|&v| v == 10));
        assert!(table.as_slice()[51..].iter().all(|&v| v == 90));
    }

    #[test]
    fn test_zero_width_segment_takes_left_output() {
        // The (100, 50) -> (100, 150) segment is zero width; x = 100 hits the
        // first segment whose right end reaches it, which is (0, 0) -> (100, 50).
        let table = CurveTable::build(samples(&[
            (0.0, 0.0),
            (100.0, 50.0),
            (100.0, 150.0),
            (200.0, 250.0),
        ]))
        .unwrap();
        assert_eq!(table.get(100), 50);
        assert_eq!(table.get(101), 151);
        assert_eq!(table.get(150), 200);
    }

    #[test]
    fn test_equal_inputs_keep_encounter_order() {
        let a = CurveTable::build(samples(&[(0.0, 0.0), (100.0, 50.0), (100.0, 150.0)]))
            .unwrap();
        let b = CurveTable::build(samples(&[(0.0, 0.0), (100.0, 150.0), (100.0, 50.0)]))
            .unwrap();
        // x >= max input takes the last sample after a stable sort.
        assert_eq!(a.get(200), 150);
        assert_eq!(b.get(200), 50);
    }

    #[test]
    fn test_interpolation_rounds_half_to_even() {
        // 0 -> 0, 4 -> 2 gives 0.5 at x = 1 and 1.5 at x = 3.
        let table = CurveTable::build(samples(&[(0.0, 0.0), (4.0, 2.0)])).unwrap();
        assert_eq!(table.get(1), 0);
        assert_eq!(table.get(2), 1);
        assert_eq!(table.get(3), 2);
    }

    #[test]
    fn test_monotonic_samples_give_monotonic_table() {
        let table = CurveTable::build(samples(&[
            (-20.0, 5.0),
            (30.0, 40.0),
            (90.0, 41.0),
            (180.0, 230.0),
            (300.0, 250.0),
        ]))
        .unwrap();
        assert!(table.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_fractional_inputs() {
        let table = CurveTable::build(samples(&[(0.5, 0.0), (254.5, 254.0)])).unwrap();
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(255), 254);
        assert_eq!(table.as_slice().len(), TABLE_SIZE);
    }

    #[test]
    fn test_inverted_is_involutive() {
        let table = CurveTable::build(samples(&[(0.0, 30.0), (128.0, 200.0), (255.0, 240.0)]))
            .unwrap();
        let inverted = table.inverted();
        assert_eq!(inverted.get(0), 225);
        assert_eq!(inverted.inverted(), table);
    }

    #[test]
    fn test_identity_table() {
        let table = CurveTable::identity();
        for i in 0..=255u8 {
            assert_eq!(table.get(i), i);
        }
    }

    #[test]
    fn test_linear_curve_evaluate_midpoint() {
        let points = samples(&[(0.0, 0.0), (10.0, 100.0)]);
        let curve = LinearCurve {
            samples: &points,
        };
        assert!((curve.evaluate(2.5) - 25.0).abs() < EPSILON);
        assert!((curve.evaluate(-1.0) - 0.0).abs() < EPSILON);
        assert!((curve.evaluate(11.0) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_linear_curve_empty_is_zero() {
        let curve = LinearCurve { samples: &[] };
        assert!(curve.evaluate(12.0).abs() < EPSILON);
    }

    #[test]
    fn test_serializes_as_sequence() {
        let json = serde_json::to_string(&CurveTable::identity()).unwrap();
        assert!(json.starts_with("[0,1,2,"));
        assert!(json.ends_with(",254,255]"));
    }
}
