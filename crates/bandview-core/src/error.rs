use std::path::PathBuf;

use thiserror::Error;

use crate::band::Channel;

#[derive(Error, Debug)]
pub enum BandviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{channel} channel is not loaded")]
    MissingChannel { channel: Channel },

    #[error(
        "{name} is {}x{} but the other bands are {}x{}",
        .found.1, .found.0, .expected.1, .expected.0
    )]
    ShapeMismatch {
        /// File path or band label of the offending input.
        name: String,
        /// (height, width) of the first band.
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("could not load raster file {}: {source}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error("could not save raster file {}: {source}", .path.display())]
    SaveFailure {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error("{name} has no bands")]
    EmptyRaster { name: String },

    #[error("composite channel {index} is not available (only channels 0-3 are loaded)")]
    ChannelUnavailable { index: usize },

    #[error("band {band} is not available (source file has {available} bands)")]
    BandUnavailable { band: usize, available: usize },

    #[error("band number {0} is outside 1..=12")]
    InvalidBandNumber(usize),

    #[error("no raster data loaded")]
    NoData,

    #[error("settings error: {0}")]
    Settings(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

/// Cause of a raster read or write failure.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("unsupported raster layout: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, BandviewError>;
