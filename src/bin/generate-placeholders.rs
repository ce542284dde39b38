//! Generate tiny blurred WebP placeholders (`page-XX-40.webp`) for
//! progressive loading of the resume page images.

use anyhow::Result;
use clap::Parser;
use resume_imagegen::cli::{self, CommonArgs};
use resume_imagegen::Preset;

const AFTER_HELP: &str = r#"OUTPUT:
  page-01.png  →  page-01-40.webp  (40 px wide, Gaussian blur σ=1, quality 50)

EXIT STATUS:
  0  run completed (individual files may have failed)
  1  image directory missing, no page-*.png / page-*.webp found,
     or invalid arguments
"#;

/// Generate blurred low-resolution WebP placeholders for resume page images.
#[derive(Parser, Debug)]
#[command(
    name = "generate-placeholders",
    version,
    about = "Generate 40 px blurred WebP placeholders for resume page images",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli: Cli = cli::parse_args();
    cli::run(Preset::Placeholder, &cli.common)
}
