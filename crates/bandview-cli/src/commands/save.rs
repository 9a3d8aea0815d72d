use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct SaveArgs {
    /// Input GeoTIFF files; the first band of the first file is written
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output GeoTIFF path
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn run(args: &SaveArgs) -> Result<()> {
    let session = super::open_session(&args.files)?;
    session
        .save_first_band(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("Raster saved to {}", args.output.display());
    Ok(())
}
