//! Command-line interface implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{XbrConfig, XBR_EQ_THRESHOLD, XBR_Y_WEIGHT};
use crate::filter::upscale;
use crate::output::{generate_output_path, load_image, save_png, scale_nearest};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Upscaling filter selection.
///
/// | Filter | Edges | Speed |
/// |-----------|----------|---------|
/// | `nearest` | blocky | fastest |
/// | `xbr` | directed | fast |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterChoice {
    /// Nearest-neighbor scaling (no edge handling)
    Nearest,
    /// xBR level-1 edge-directed filter
    #[default]
    Xbr,
}

impl std::fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterChoice::Nearest => write!(f, "nearest"),
            FilterChoice::Xbr => write!(f, "xbr"),
        }
    }
}

/// xbrup - Edge-directed xBR upscaling for pixel art images
#[derive(Parser)]
#[command(name = "xbrup")]
#[command(about = "Edge-directed xBR upscaling for pixel art images")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upscale an image file
    Upscale {
        /// Input image (PNG or anything the image crate decodes)
        input: PathBuf,

        /// Output file. If omitted: {input}_x{scale}.png
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scale output by integer factor (1-16, default: 2)
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: u8,

        /// Filter to apply
        #[arg(long, default_value_t = FilterChoice::Xbr)]
        filter: FilterChoice,

        /// Emit the selected pixel's true color instead of the reference
        /// filter's red-channel replication
        #[arg(long)]
        full_color: bool,

        /// Luma gain applied before edge comparisons
        #[arg(long, default_value_t = XBR_Y_WEIGHT)]
        luma_gain: f32,

        /// Luma equality threshold (relative to the gain)
        #[arg(long, default_value_t = XBR_EQ_THRESHOLD)]
        eq_threshold: f32,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Upscale {
            input,
            output,
            scale,
            filter,
            full_color,
            luma_gain,
            eq_threshold,
        } => {
            let config = XbrConfig {
                luma_gain,
                eq_threshold,
                mono_output: !full_color,
            };
            ExitCode::from(run_upscale(
                &input,
                output.as_deref(),
                u32::from(scale),
                filter,
                &config,
            ))
        }
    }
}

/// Execute the upscale command, returning the process exit code
fn run_upscale(
    input: &Path,
    output: Option<&Path>,
    scale: u32,
    filter: FilterChoice,
    config: &XbrConfig,
) -> u8 {
    let image = match load_image(input) {
        Ok(img) => img,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return EXIT_INVALID_ARGS;
        }
    };

    let scaled = match filter {
        FilterChoice::Nearest => scale_nearest(&image, scale),
        FilterChoice::Xbr => upscale(&image, scale, config),
    };

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => generate_output_path(input, scale),
    };

    if let Err(e) = save_png(&scaled, &output_path) {
        eprintln!("Error: Cannot write '{}': {}", output_path.display(), e);
        return EXIT_ERROR;
    }

    println!(
        "Wrote {} ({}x{}, {} filter, x{})",
        output_path.display(),
        scaled.width(),
        scaled.height(),
        filter,
        scale
    );

    EXIT_SUCCESS
}
