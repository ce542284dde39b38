//! Generate responsive WebP variants (480, 800 and 1200 px wide) for every
//! resume page in `resume-images/`.

use anyhow::Result;
use clap::Parser;
use resume_imagegen::cli::{self, CommonArgs};
use resume_imagegen::Preset;

const AFTER_HELP: &str = r#"OUTPUT:
  page-01.png  →  page-01-480.webp, page-01-800.webp, page-01-1200.webp

  Sources narrower than a target width are re-encoded at their own size.
  Existing size variants (page-01-480.webp, …) are never treated as new
  pages. If a page has no page-XX.png or page-XX.webp, its first size
  variant is used as the source.

EXIT STATUS:
  0  run completed (individual files may have failed)
  1  image directory missing, no page-*.png / page-*.webp found,
     or invalid arguments
"#;

/// Generate responsive WebP variants for resume page images.
#[derive(Parser, Debug)]
#[command(
    name = "generate-responsive",
    version,
    about = "Generate 480/800/1200 px WebP variants for resume page images",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli: Cli = cli::parse_args();
    cli::run(Preset::Responsive, &cli.common)
}
