use std::fmt;
use std::str::FromStr;

use crate::consts::MAX_SOURCE_BAND;
use crate::error::{BandviewError, Result};

use super::legend::{ColorRamp, CIR_RAMP, CUSTOM_RAMP, RED_EDGE_RAMP, RGB_RAMP};

/// How loaded bands are turned into a displayable image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// True color: Red, Green, Blue channels.
    #[default]
    Rgb,
    /// Color infrared: NIR, Blue, Green channels.
    Nir,
    /// Blue, NIR and the fifth composite channel.
    RedEdge,
    /// User-picked band numbers from the first opened file.
    Custom,
    /// Normalized difference vegetation index, grayscale.
    Ndvi,
}

impl DisplayMode {
    pub const ALL: &[DisplayMode] = &[
        Self::Rgb,
        Self::Nir,
        Self::RedEdge,
        Self::Custom,
        Self::Ndvi,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Nir => "NIR",
            Self::RedEdge => "Red Edge",
            Self::Custom => "Custom",
            Self::Ndvi => "NDVI",
        }
    }

    /// Legend ramp drawn over the composite. NDVI output carries no legend.
    pub fn ramp(&self) -> Option<&'static ColorRamp> {
        match self {
            Self::Rgb => Some(&RGB_RAMP),
            Self::Nir => Some(&CIR_RAMP),
            Self::RedEdge => Some(&RED_EDGE_RAMP),
            Self::Custom => Some(&CUSTOM_RAMP),
            Self::Ndvi => None,
        }
    }

    /// Which bands feed the red, green and blue display channels.
    pub fn selection(&self, custom: BandTriple) -> BandSelection {
        match self {
            Self::Rgb => BandSelection::Composite([0, 1, 2]),
            Self::Nir => BandSelection::Composite([3, 2, 1]),
            // Index 4 is never populated by the loader; rendering reports it.
            Self::RedEdge => BandSelection::Composite([2, 3, 4]),
            Self::Custom => BandSelection::Source(custom),
            Self::Ndvi => BandSelection::Ndvi,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "nir" | "cir" => Ok(Self::Nir),
            "red-edge" | "rededge" | "red edge" => Ok(Self::RedEdge),
            "custom" => Ok(Self::Custom),
            "ndvi" => Ok(Self::Ndvi),
            other => Err(format!(
                "unknown display mode '{other}' (expected rgb, nir, red-edge, custom or ndvi)"
            )),
        }
    }
}

/// Resolved band selection for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BandSelection {
    /// 0-based composite channel indices (R, G, B).
    Composite([usize; 3]),
    /// 1-based band numbers into the first file's band list.
    Source(BandTriple),
    Ndvi,
}

/// Three 1-based source band numbers, as picked in the band selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BandTriple {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

impl BandTriple {
    pub fn new(red: usize, green: usize, blue: usize) -> Self {
        Self { red, green, blue }
    }

    /// Convert to 0-based indices, checking the 1..=12 selector range.
    pub fn zero_based(&self) -> Result<[usize; 3]> {
        let mut out = [0; 3];
        for (slot, band) in out.iter_mut().zip([self.red, self.green, self.blue]) {
            if !(1..=MAX_SOURCE_BAND).contains(&band) {
                return Err(BandviewError::InvalidBandNumber(band));
            }
            *slot = band - 1;
        }
        Ok(out)
    }
}

impl Default for BandTriple {
    fn default() -> Self {
        Self::new(1, 2, 3)
    }
}

impl fmt::Display for BandTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

impl FromStr for BandTriple {
    type Err = String;

    /// Parse "r,g,b", e.g. "4,3,2".
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<usize> = s
            .split(',')
            .map(|p| p.trim().parse::<usize>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| format!("invalid band list '{s}': {e}"))?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(format!("expected exactly 3 band numbers, got {}", parts.len())),
        }
    }
}
