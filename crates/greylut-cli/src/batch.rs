//! Sequential batch driver.
//!
//! Loads the curve once, then decodes, transforms, and writes each image
//! in sorted file-name order. The first failing image ends the run.

use std::path::{Path, PathBuf};

use greylut_core::{
    CurveTable, ImageError, PipelineOptions, list_images, load_greyscale, load_samples, process,
    save_image,
};
use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::error::AppError;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files written, in processing order.
    pub written: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

/// Build the curve table for a run, inverted when `negative` is set.
pub fn load_table(lut: &Path, negative: bool) -> Result<CurveTable, AppError> {
    let samples = load_samples(lut)?;
    let count = samples.len();
    let table = CurveTable::build(samples)?;
    info!(
        "loaded curve from {} ({count} samples{})",
        lut.display(),
        if negative { ", inverted" } else { "" }
    );
    Ok(if negative { table.inverted() } else { table })
}

/// Run the whole batch described by `config`.
pub fn run_batch(config: &RunConfig) -> Result<BatchSummary, AppError> {
    let table = load_table(&config.lut, config.negative)?;
    let options = PipelineOptions {
        mirror: config.negative,
        tint: config.tint,
    };

    let images = list_images(&config.input_dir, &config.extensions)
        .map_err(|e| AppError::io(&config.input_dir, e))?;

    let mut summary = BatchSummary {
        written: Vec::with_capacity(images.len()),
        output_dir: config.output_dir.clone(),
    };

    if images.is_empty() {
        warn!("no images found in {}", config.input_dir.display());
        println!("No images found in input directory. Exiting.");
        return Ok(summary);
    }
    info!("found {} image(s) in {}", images.len(), config.input_dir.display());

    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| AppError::io(&config.output_dir, e))?;

    for path in &images {
        let written = process_file(path, &table, &options, &config.output_dir)
            .map_err(|e| AppError::image(path, e))?;
        println!("{}", display_name(path));
        summary.written.push(written);
    }

    println!(
        "Processed {} image(s) -> {}",
        summary.written.len(),
        config.output_dir.display()
    );
    Ok(summary)
}

/// Decode, transform, and write one image. Returns the path written.
pub fn process_file(
    path: &Path,
    table: &CurveTable,
    options: &PipelineOptions,
    output_dir: &Path,
) -> Result<PathBuf, ImageError> {
    let grey = load_greyscale(path)?;
    debug!("decoded {} ({}x{})", path.display(), grey.width, grey.height);

    let out = process(&grey, table, options);
    debug!("processed {}: {out}", display_name(path));

    let written = save_image(out, path, output_dir)?;
    debug!("wrote {}", written.display());
    Ok(written)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
