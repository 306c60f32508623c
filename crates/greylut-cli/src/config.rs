//! Validated run configuration.
//!
//! [`RunConfig::from_args`] checks everything that can be checked before
//! the LUT is read, so a bad flag never leaves a half-written output
//! directory behind.

use std::path::PathBuf;

use greylut_core::HsvTint;
use greylut_core::io::normalize_extension;

use crate::args::Args;
use crate::error::ConfigError;

/// Everything the batch driver needs, in parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub lut: PathBuf,
    /// Invert the curve table and mirror each image.
    pub negative: bool,
    /// Lowercase extensions without a leading dot.
    pub extensions: Vec<String>,
    pub tint: Option<HsvTint>,
}

impl RunConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if !args.input_dir.is_dir() {
            return Err(ConfigError::MissingInputDir(args.input_dir.clone()));
        }
        if !args.lut.is_file() {
            return Err(ConfigError::MissingLut(args.lut.clone()));
        }

        let tint = args.hsv.as_deref().map(parse_hsv).transpose()?;

        Ok(Self {
            input_dir: args.input_dir.clone(),
            output_dir: args.output_dir.clone(),
            lut: args.lut.clone(),
            negative: args.negative,
            extensions: parse_extensions(&args.extensions),
            tint,
        })
    }
}

/// Split a comma list of extensions, dropping empty entries.
pub fn parse_extensions(list: &str) -> Vec<String> {
    let mut exts: Vec<String> = list
        .split(',')
        .map(normalize_extension)
        .filter(|e| !e.is_empty())
        .collect();
    exts.sort();
    exts.dedup();
    exts
}

/// Parse `H,S,V` with H in degrees and S, V in percent.
pub fn parse_hsv(text: &str) -> Result<HsvTint, ConfigError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    let [h, s, v] = parts.as_slice() else {
        return Err(ConfigError::HsvArity);
    };
    let number = |part: &str| {
        part.parse::<f64>()
            .map_err(|_| ConfigError::HsvNumber(part.to_string()))
    };
    Ok(HsvTint::from_degrees_percent(
        number(*h)?,
        number(*s)?,
        number(*v)?,
    )?)
}
