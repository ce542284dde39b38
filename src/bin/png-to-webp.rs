//! Convert every PNG in `resume-images/` to a full-size WebP next to it.

use anyhow::Result;
use clap::Parser;
use resume_imagegen::cli::{self, CommonArgs};
use resume_imagegen::Preset;

/// Convert PNGs to full-size lossy WebP (quality 85).
#[derive(Parser, Debug)]
#[command(
    name = "png-to-webp",
    version,
    about = "Convert every *.png in the image directory to <name>.webp",
    color = clap::ColorChoice::Auto
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli: Cli = cli::parse_args();
    cli::run(Preset::FullSize, &cli.common)
}
