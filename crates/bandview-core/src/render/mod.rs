//! Composite renderer: band selection, joint percentile stretch, NDVI and
//! the decorative legend strip.

pub mod composite;
pub mod config;
pub mod legend;
pub mod mode;
pub mod ndvi;
pub mod stretch;

pub use composite::{
    composite_image, render_band_selection, render_channels, render_ndvi, RenderOutput,
    RenderRequest,
};
pub use config::RenderConfig;
pub use mode::{BandSelection, BandTriple, DisplayMode};

use crate::error::Result;
use crate::session::Session;

/// Render the bands held by `session`.
///
/// Fails with `MissingChannel` unless all four composite channels are loaded,
/// whatever the mode. The session is never modified.
pub fn render(session: &Session, request: &RenderRequest, config: &RenderConfig) -> Result<RenderOutput> {
    let channels = session.channels()?;
    render_channels(&channels, session.source_bands(), request, config)
}

/// Display scale for a zoom slider position (1..=100, 50 = 100%).
pub fn view_scale(slider: u32) -> f32 {
    use crate::consts::{ZOOM_SLIDER_MAX, ZOOM_SLIDER_MIN, ZOOM_SLIDER_UNITY};
    slider.clamp(ZOOM_SLIDER_MIN, ZOOM_SLIDER_MAX) as f32 / ZOOM_SLIDER_UNITY as f32
}
