//! inkcam: CLI for exercising the comic stylization pipeline.
//!
//! Runs the stylizer over a still image with configurable parameters
//! and writes the result. Useful for:
//!
//! - Tuning Canny thresholds, blur sigma, and stripe spacing
//! - Measuring per-frame throughput (`--frames`)
//! - Exercising the full capture -> stylize -> display loop against a
//!   synthetic tracked camera (`--ticks`)
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin inkcam -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use inkcam_pipeline::{Dimensions, Stylizer, StylizerConfig};

mod simulate;

/// Comic/line-art stylization of a still image.
#[derive(Parser)]
#[command(name = "inkcam", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Where to write the stylized PNG.
    #[arg(short, long, default_value = "styled.png")]
    output: PathBuf,

    /// Gaussian blur sigma applied before edge detection.
    #[arg(long, default_value_t = StylizerConfig::DEFAULT_BLUR_SIGMA)]
    blur_sigma: f32,

    /// Canny low threshold.
    #[arg(long, default_value_t = StylizerConfig::DEFAULT_CANNY_LOW)]
    canny_low: f32,

    /// Canny high threshold.
    #[arg(long, default_value_t = StylizerConfig::DEFAULT_CANNY_HIGH)]
    canny_high: f32,

    /// Spacing between background stripes, in pixels.
    #[arg(long, default_value_t = StylizerConfig::DEFAULT_STRIPE_SPACING)]
    stripe_spacing: u32,

    /// Re-run the transform this many times, printing per-frame timing.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Instead of a direct transform, run the full viewer loop against
    /// a synthetic tracked camera for this many ticks.
    #[arg(long)]
    ticks: Option<u32>,
}

impl Cli {
    fn config(&self) -> StylizerConfig {
        StylizerConfig {
            blur_sigma: self.blur_sigma,
            canny_low: self.canny_low,
            canny_high: self.canny_high,
            stripe_spacing: self.stripe_spacing,
            ..StylizerConfig::default()
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("inkcam: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let image = image::open(&cli.image_path)?.to_rgba8();
    let dimensions = Dimensions::new(image.width(), image.height());
    let config = cli.config();

    if let Some(ticks) = cli.ticks {
        return simulate::run(&image, dimensions, config, ticks, &cli.output);
    }

    let mut stylizer = Stylizer::new(dimensions, config)?;
    let mut total = std::time::Duration::ZERO;
    for frame in 0..cli.frames.max(1) {
        let start = Instant::now();
        stylizer.process(image.as_raw())?;
        let elapsed = start.elapsed();
        total += elapsed;
        println!("frame {frame}: {elapsed:?}");
    }
    let runs = cli.frames.max(1);
    println!("average over {runs} frame(s): {:?}", total / runs);

    let styled = stylizer.process(image.as_raw())?;
    styled.save(&cli.output)?;
    println!("wrote {}", cli.output.display());
    Ok(())
}
