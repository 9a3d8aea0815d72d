use std::path::{Path, PathBuf};

use tracing::info;

use crate::band::{Band, BandStats, Channel, ChannelSet};
use crate::error::{BandviewError, Result};
use crate::raster::{read_geotiff, write_geotiff, Raster, RasterMetadata, SampleType};
use crate::render::ndvi::ndvi;
use crate::render::RenderConfig;

/// Rasters opened together. File n supplies composite channel n.
#[derive(Clone, Debug, Default)]
pub struct Session {
    rasters: Vec<Raster>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a session from already decoded rasters, checking that each has a
    /// band and that they share one shape.
    pub fn from_rasters(rasters: Vec<Raster>) -> Result<Self> {
        check_same_shape(&rasters)?;
        Ok(Self { rasters })
    }

    /// Open `paths` and replace the loaded rasters.
    ///
    /// Every file is read before anything is replaced: a file that fails to
    /// open or differs in size from the first leaves the session unchanged.
    pub fn load_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        let rasters = paths
            .iter()
            .map(|p| read_geotiff(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        check_same_shape(&rasters)?;

        info!(files = rasters.len(), "Session replaced");
        self.rasters = rasters;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }

    pub fn rasters(&self) -> &[Raster] {
        &self.rasters
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.rasters.iter().map(|r| r.path.clone()).collect()
    }

    /// First band of the file filling `channel`.
    pub fn channel(&self, channel: Channel) -> Result<&Band> {
        self.rasters
            .get(channel.index())
            .map(Raster::first_band)
            .ok_or(BandviewError::MissingChannel { channel })
    }

    /// All four composite channels, or the first one missing.
    pub fn channels(&self) -> Result<ChannelSet<'_>> {
        Ok(ChannelSet {
            red: self.channel(Channel::Red)?,
            green: self.channel(Channel::Green)?,
            blue: self.channel(Channel::Blue)?,
            nir: self.channel(Channel::Nir)?,
        })
    }

    /// Band list of the first opened file, addressed by custom band numbers.
    pub fn source_bands(&self) -> &[Band] {
        self.rasters
            .first()
            .map(|r| r.bands.as_slice())
            .unwrap_or_default()
    }

    /// Mean, min and max of every band of the first file.
    pub fn band_stats(&self) -> Result<Vec<BandStats>> {
        let first = self.rasters.first().ok_or(BandviewError::NoData)?;
        Ok(first.bands.iter().map(Band::stats).collect())
    }

    /// Write the first band of the first file back out with its original metadata.
    pub fn save_first_band(&self, path: &Path) -> Result<()> {
        let first = self.rasters.first().ok_or(BandviewError::NoData)?;
        let metadata = RasterMetadata {
            band_count: 1,
            ..first.metadata.clone()
        };
        write_geotiff(path, first.first_band(), &metadata)
    }

    /// Write the unscaled NDVI array as float32 on the Red file's grid.
    pub fn save_ndvi(&self, path: &Path, config: &RenderConfig) -> Result<()> {
        let channels = self.channels()?;
        let index = ndvi(channels.red, channels.nir, config.ndvi_epsilon);
        let band = Band::new(index.mapv(|v| v as f32));

        let red = &self.rasters[Channel::Red.index()].metadata;
        let metadata = RasterMetadata {
            band_count: 1,
            sample_type: SampleType::F32,
            nodata: None,
            ..red.clone()
        };
        write_geotiff(path, &band, &metadata)
    }
}

fn check_same_shape(rasters: &[Raster]) -> Result<()> {
    if let Some(empty) = rasters.iter().find(|r| r.bands.is_empty()) {
        return Err(BandviewError::EmptyRaster {
            name: empty.path.display().to_string(),
        });
    }
    let Some(first) = rasters.first() else {
        return Ok(());
    };
    let expected = first.metadata.shape();
    for raster in &rasters[1..] {
        let found = raster.metadata.shape();
        if found != expected {
            return Err(BandviewError::ShapeMismatch {
                name: raster.path.display().to_string(),
                expected,
                found,
            });
        }
    }
    Ok(())
}
