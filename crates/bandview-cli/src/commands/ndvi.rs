use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bandview_core::io::image_io::save_render;
use bandview_core::render::{render, DisplayMode, RenderRequest};
use clap::Args;

#[derive(Args)]
pub struct NdviArgs {
    /// Red, Green, Blue and NIR GeoTIFF files, in that order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Stretched grayscale output (.png or .tif)
    #[arg(short, long, default_value = "ndvi.png")]
    pub output: PathBuf,

    /// Also write the unscaled index as a float32 GeoTIFF
    #[arg(long)]
    pub raw: Option<PathBuf>,
}

pub fn run(args: &NdviArgs, config: Option<&Path>) -> Result<()> {
    let config = super::load_render_config(config)?;
    let session = super::open_session(&args.files)?;

    let output = render(&session, &RenderRequest::new(DisplayMode::Ndvi), &config)
        .context("Failed to compute NDVI")?;
    save_render(&output, &args.output, false)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("NDVI image saved to {}", args.output.display());

    if let Some(ref raw) = args.raw {
        session
            .save_ndvi(raw, &config)
            .with_context(|| format!("Failed to save {}", raw.display()))?;
        println!("NDVI values saved to {}", raw.display());
    }
    Ok(())
}
