use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bandview_core::io::image_io::save_render;
use bandview_core::render::{render, BandTriple, DisplayMode, RenderRequest};
use clap::Args;

#[derive(Args)]
pub struct CompositeArgs {
    /// Red, Green, Blue and NIR GeoTIFF files, in that order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Display mode: rgb, nir, red-edge, custom or ndvi
    #[arg(long, default_value = "rgb")]
    pub mode: DisplayMode,

    /// Band numbers of the first file for custom mode, e.g. "4,3,2"
    #[arg(long, default_value = "1,2,3")]
    pub bands: BandTriple,

    /// Save the composite without the legend strip
    #[arg(long)]
    pub no_legend: bool,

    /// Output file path (.png or .tif)
    #[arg(short, long, default_value = "composite.png")]
    pub output: PathBuf,
}

pub fn run(args: &CompositeArgs, config: Option<&Path>) -> Result<()> {
    let config = super::load_render_config(config)?;
    let session = super::open_session(&args.files)?;

    let request = RenderRequest {
        mode: args.mode,
        custom: args.bands,
    };
    let output = render(&session, &request, &config)
        .with_context(|| format!("Failed to render {} composite", request.mode))?;

    let with_legend = config.show_legend && !args.no_legend;
    save_render(&output, &args.output, with_legend)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    let (w, h) = output.dimensions();
    println!(
        "{} composite ({}x{}) saved to {}",
        request.mode,
        w,
        h,
        args.output.display()
    );
    Ok(())
}
