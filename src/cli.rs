use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::sample::SampleSize;
use crate::pipeline::{BackgroundRegion, ExtractOptions};

/// Derive an interface color palette from cover artwork.
#[derive(Parser, Debug)]
#[command(name = "cover-palette", version, about)]
pub struct Args {
    /// Path to the input image
    pub image: PathBuf,

    /// Sample width in pixels (derived from a 250px width if omitted)
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Sample height in pixels
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Pick the background from the left edge strip instead of the whole image
    #[arg(long)]
    pub edge_strip: bool,

    /// Write the palette to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette
    #[arg(long)]
    pub preview: bool,

    /// Launch the interactive palette viewer
    #[arg(long)]
    pub tui: bool,

    /// Use this color for every slot if the image cannot be sampled
    #[arg(long, value_name = "HEX")]
    pub fallback: Option<String>,

    /// Log pipeline decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn extract_options(&self) -> ExtractOptions {
        let sample_size = match (self.width, self.height) {
            (Some(width), Some(height)) => SampleSize::new(width, height),
            _ => SampleSize::ZERO,
        };
        let background_region = if self.edge_strip {
            BackgroundRegion::LeftEdge
        } else {
            BackgroundRegion::Whole
        };
        ExtractOptions {
            sample_size,
            background_region,
        }
    }
}
