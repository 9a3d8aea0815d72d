/// Minimum pixel count (h*w) to use Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Largest decoded image accepted by the GeoTIFF reader, in bytes.
/// Fits a 4-band float32 Sentinel-2 10 m tile (10980x10980).
pub const MAX_DECODE_BYTES: usize = u32::MAX as usize;

/// Lower percentile of the contrast stretch.
pub const DEFAULT_LOW_PERCENTILE: f64 = 2.0;

/// Upper percentile of the contrast stretch.
pub const DEFAULT_HIGH_PERCENTILE: f64 = 98.0;

/// Added to the NDVI denominator so that NIR + Red = 0 stays finite.
pub const NDVI_EPSILON: f64 = 1e-8;

/// Output value for pixels that sit exactly on a zero-width stretch range.
pub const MID_GRAY: u8 = 128;

/// Height in pixels of the legend strip painted over the composite.
pub const DEFAULT_LEGEND_HEIGHT: u32 = 50;

/// Number of samples in a color ramp look-up table.
pub const RAMP_SAMPLES: usize = 256;

/// Highest 1-based source band number a user may pick.
pub const MAX_SOURCE_BAND: usize = 12;

/// Number of composite channels (Red, Green, Blue, NIR).
pub const COMPOSITE_CHANNEL_COUNT: usize = 4;

/// Zoom slider range and the slider value that means 100%.
pub const ZOOM_SLIDER_MIN: u32 = 1;
pub const ZOOM_SLIDER_MAX: u32 = 100;
pub const ZOOM_SLIDER_UNITY: u32 = 50;
