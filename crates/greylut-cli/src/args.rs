//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Default extensions accepted in the input directory.
pub const DEFAULT_EXTENSIONS: &str = "jpg,jpeg,png";

#[derive(Parser, Debug, Clone)]
#[command(name = "greylut")]
#[command(version, about = "Apply a CSV tone curve to greyscale JPG/PNG images from a directory", long_about = None)]
pub struct Args {
    /// Directory containing input images (JPG/PNG)
    #[arg(long, value_name = "DIR", env = "GREYLUT_INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory where processed images will be saved (created if missing)
    #[arg(long, value_name = "DIR", env = "GREYLUT_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// CSV curve with columns 'Scan' (input) and 'Idea' (output)
    #[arg(long, value_name = "FILE", env = "GREYLUT_LUT")]
    pub lut: PathBuf,

    /// Invert output pixel values (negative) and flip images left-right
    #[arg(long)]
    pub negative: bool,

    /// Comma-separated file extensions to process
    #[arg(long, value_name = "LIST", default_value = DEFAULT_EXTENSIONS)]
    pub extensions: String,

    /// Tint output to an HSV color: H 0-360, S 0-100, V 0-100 (V scales luminance)
    #[arg(long, value_name = "H,S,V")]
    pub hsv: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info", env = "GREYLUT_LOG")]
    pub log_level: String,
}
