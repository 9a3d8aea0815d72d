use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bandview_core::io::image_io::save_rgba;
use bandview_core::render::{render_band_selection, BandTriple};
use clap::Args;

#[derive(Args)]
pub struct SelectArgs {
    /// Multi-band GeoTIFF file
    pub file: PathBuf,

    /// Band numbers for red, green and blue, e.g. "4,3,2"
    #[arg(long, default_value = "1,2,3")]
    pub bands: BandTriple,

    /// Output file path (.png or .tif)
    #[arg(short, long, default_value = "selection.png")]
    pub output: PathBuf,
}

pub fn run(args: &SelectArgs, config: Option<&Path>) -> Result<()> {
    let config = super::load_render_config(config)?;
    let session = super::open_session(std::slice::from_ref(&args.file))?;

    let image = render_band_selection(session.source_bands(), args.bands, &config)
        .with_context(|| format!("Failed to render bands {}", args.bands))?;
    save_rgba(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    println!(
        "Bands {} ({}x{}) saved to {}",
        args.bands,
        image.width(),
        image.height(),
        args.output.display()
    );
    Ok(())
}
