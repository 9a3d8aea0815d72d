use std::path::PathBuf;

use anyhow::Result;
use bandview_core::consts::COMPOSITE_CHANNEL_COUNT;
use clap::Args;

use crate::summary::print_raster_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input GeoTIFF files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Print metadata of every file and band statistics of the first one.
pub fn run(args: &InfoArgs) -> Result<()> {
    let session = super::open_session(&args.files)?;
    let stats = session.band_stats()?;

    for (i, raster) in session.rasters().iter().enumerate() {
        let first_stats = (i == 0).then_some(stats.as_slice());
        print_raster_summary(i, raster, first_stats);
    }

    let missing = COMPOSITE_CHANNEL_COUNT.saturating_sub(session.rasters().len());
    if missing > 0 {
        println!();
        println!("  {missing} composite channel(s) not loaded; rendering needs {COMPOSITE_CHANNEL_COUNT} files.");
    }
    println!();
    Ok(())
}
