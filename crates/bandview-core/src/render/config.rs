use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HIGH_PERCENTILE, DEFAULT_LEGEND_HEIGHT, DEFAULT_LOW_PERCENTILE, NDVI_EPSILON,
};

/// Tunables of the composite renderer, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Percentile mapped to 0.
    pub low_percentile: f64,
    /// Percentile mapped to 255.
    pub high_percentile: f64,
    pub ndvi_epsilon: f64,
    /// Height of the legend strip in pixels.
    pub legend_height: u32,
    pub show_legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            low_percentile: DEFAULT_LOW_PERCENTILE,
            high_percentile: DEFAULT_HIGH_PERCENTILE,
            ndvi_epsilon: NDVI_EPSILON,
            legend_height: DEFAULT_LEGEND_HEIGHT,
            show_legend: true,
        }
    }
}
