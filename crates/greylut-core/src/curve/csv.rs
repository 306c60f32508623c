//! Curve sample reader for `Scan`/`Idea` CSV tables.
//!
//! The table must have a header row naming a `Scan` column (input
//! intensity) and an `Idea` column (output intensity). Other columns are
//! ignored. Fields may be separated by commas or tabs; the delimiter is
//! detected from the leading part of the file.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::curve::table::CurveSample;
use crate::error::TableError;

/// Column holding the input intensity.
pub const INPUT_COLUMN: &str = "Scan";
/// Column holding the output intensity.
pub const OUTPUT_COLUMN: &str = "Idea";

/// How much of the file the delimiter sniffer looks at.
const SNIFF_BYTES: usize = 4096;

/// Read curve samples from a CSV file on disk.
pub fn load_samples(path: &Path) -> Result<Vec<CurveSample>, TableError> {
    let text = std::fs::read_to_string(path)?;
    let samples = parse_samples(&text)?;
    tracing::debug!("read {} curve samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse curve samples from CSV text.
///
/// Outputs are clamped to `[0, 255]`; inputs are kept as written. Fails
/// if either required column is missing, if there are no data rows, or
/// if a required cell is not a finite number.
pub fn parse_samples(text: &str) -> Result<Vec<CurveSample>, TableError> {
    let sample = head(text, SNIFF_BYTES);
    let delimiter = sniff_delimiter(sample, sample.len() < text.len());

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(input_idx), Some(output_idx)) = (column(INPUT_COLUMN), column(OUTPUT_COLUMN)) else {
        return Err(TableError::MissingColumns);
    };

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let input = parse_cell(&record, input_idx, INPUT_COLUMN, line)?;
        let output = parse_cell(&record, output_idx, OUTPUT_COLUMN, line)?;
        samples.push(CurveSample::new(input, output));
    }

    if samples.is_empty() {
        return Err(TableError::NoDataRows);
    }
    Ok(samples)
}

fn parse_cell(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    line: u64,
) -> Result<f64, TableError> {
    let raw = record.get(idx).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TableError::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
        }),
    }
}

/// Longest prefix of `text` no longer than `max` bytes, cut on a char boundary.
fn head(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Pick comma or tab as the field delimiter.
///
/// A candidate wins if it appears in the header and the same number of
/// times on every complete line of the sample. When `truncated` is set
/// the sample was cut from a longer file and its last line is ignored.
/// Comma is tried first.
/// Otherwise whichever one the header contains is used, and tab when the
/// header contains neither.
fn sniff_delimiter(sample: &str, truncated: bool) -> u8 {
    let mut lines: Vec<&str> = sample.lines().filter(|l| !l.trim().is_empty()).collect();
    if truncated && lines.len() > 1 && !sample.ends_with('\n') {
        lines.pop();
    }
    let Some(header) = lines.first() else {
        return b'\t';
    };

    for delim in [',', '\t'] {
        let expected = header.matches(delim).count();
        if expected > 0 && lines.iter().all(|l| l.matches(delim).count() == expected) {
            return delim as u8;
        }
    }

    if header.contains(',') { b',' } else { b'\t' }
}
