use image::{GrayImage, RgbImage, RgbaImage};
use ndarray::Array2;
use tracing::{debug, warn};

use crate::band::{Band, ChannelSet};
use crate::error::{BandviewError, Result};

use super::config::RenderConfig;
use super::legend::overlay_legend;
use super::mode::{BandSelection, BandTriple, DisplayMode};
use super::ndvi::{ndvi, ndvi_to_gray};
use super::stretch::joint_stretch;

/// What to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderRequest {
    pub mode: DisplayMode,
    /// Band numbers used by [`DisplayMode::Custom`].
    pub custom: BandTriple,
}

impl RenderRequest {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            custom: BandTriple::default(),
        }
    }

    pub fn custom(triple: BandTriple) -> Self {
        Self {
            mode: DisplayMode::Custom,
            custom: triple,
        }
    }
}

/// Result of one render.
#[derive(Clone, Debug)]
pub enum RenderOutput {
    Color {
        /// Stretched band values only.
        composite: RgbImage,
        /// Copy of `composite` with the legend strip painted on top.
        display: RgbImage,
    },
    Ndvi(GrayImage),
}

impl RenderOutput {
    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Color { composite, .. } => composite.dimensions(),
            Self::Ndvi(gray) => gray.dimensions(),
        }
    }
}

/// Render the loaded channels according to `request`.
///
/// `source` is the band list of the first opened file, used by custom mode.
pub fn render_channels(
    channels: &ChannelSet<'_>,
    source: &[Band],
    request: &RenderRequest,
    config: &RenderConfig,
) -> Result<RenderOutput> {
    let planes = match request.mode.selection(request.custom) {
        BandSelection::Ndvi => return render_ndvi(channels, config).map(RenderOutput::Ndvi),
        BandSelection::Composite(indices) => composite_planes(channels, indices)?,
        BandSelection::Source(triple) => source_planes(source, triple)?,
    };

    let composite = composite_image(planes, config)?;
    let mut display = composite.clone();
    if config.show_legend {
        if let Some(ramp) = request.mode.ramp() {
            overlay_legend(&mut display, ramp, config.legend_height);
        }
    }

    debug!(mode = %request.mode, "Composite rendered");
    Ok(RenderOutput::Color { composite, display })
}

/// Joint percentile stretch of three bands into an RGB image.
pub fn composite_image(planes: [&Band; 3], config: &RenderConfig) -> Result<RgbImage> {
    check_shapes(&planes)?;
    let (h, w) = planes[0].shape();
    let arrays = planes.map(|b| &b.data);
    let pixels = joint_stretch(&arrays, config.low_percentile, config.high_percentile);
    Ok(RgbImage::from_raw(w as u32, h as u32, pixels).expect("buffer size matches dimensions"))
}

/// NDVI from the Red and NIR channels as stretched 8-bit grayscale.
pub fn render_ndvi(channels: &ChannelSet<'_>, config: &RenderConfig) -> Result<GrayImage> {
    check_shapes(&[channels.red, channels.nir])?;
    let index = ndvi(channels.red, channels.nir, config.ndvi_epsilon);
    Ok(ndvi_to_gray(
        &index,
        config.low_percentile,
        config.high_percentile,
    ))
}

/// RGBA image from three bands of one file plus an opaque alpha plane.
///
/// The alpha plane holds the value 255 in data units and takes part in the
/// joint stretch, so the alpha channel of the result is stretched as well.
pub fn render_band_selection(
    source: &[Band],
    triple: BandTriple,
    config: &RenderConfig,
) -> Result<RgbaImage> {
    let planes = source_planes(source, triple)?;
    check_shapes(&planes)?;

    let (h, w) = planes[0].shape();
    let alpha = Array2::<f32>::from_elem((h, w), 255.0);
    let arrays = [&planes[0].data, &planes[1].data, &planes[2].data, &alpha];
    let pixels = joint_stretch(&arrays, config.low_percentile, config.high_percentile);
    Ok(RgbaImage::from_raw(w as u32, h as u32, pixels).expect("buffer size matches dimensions"))
}

fn composite_planes<'a>(channels: &ChannelSet<'a>, indices: [usize; 3]) -> Result<[&'a Band; 3]> {
    let mut planes = [channels.red; 3];
    for (slot, index) in planes.iter_mut().zip(indices) {
        *slot = channels.get(index).ok_or_else(|| {
            warn!(index, "Display mode references a composite channel that is never loaded");
            BandviewError::ChannelUnavailable { index }
        })?;
    }
    Ok(planes)
}

fn source_planes(source: &[Band], triple: BandTriple) -> Result<[&Band; 3]> {
    let indices = triple.zero_based()?;
    let first = source.first().ok_or(BandviewError::NoData)?;
    let mut planes = [first; 3];
    for (slot, index) in planes.iter_mut().zip(indices) {
        *slot = source.get(index).ok_or(BandviewError::BandUnavailable {
            band: index + 1,
            available: source.len(),
        })?;
    }
    Ok(planes)
}

fn check_shapes(bands: &[&Band]) -> Result<()> {
    let Some(first) = bands.first() else {
        return Ok(());
    };
    let expected = first.shape();
    for (i, band) in bands.iter().enumerate().skip(1) {
        let found = band.shape();
        if found != expected {
            return Err(BandviewError::ShapeMismatch {
                name: format!("band {}", i + 1),
                expected,
                found,
            });
        }
    }
    Ok(())
}
