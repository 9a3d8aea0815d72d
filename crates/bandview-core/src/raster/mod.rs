pub mod geotiff;

use std::fmt;
use std::path::PathBuf;

use crate::band::Band;

pub use geotiff::{read_geotiff, read_geotiff_with_limit, write_geotiff};

/// On-disk sample type of a raster, kept so that saving writes it back unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::F32 => "float32",
            Self::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// GeoTIFF georeferencing tags, carried through verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoTags {
    /// ModelPixelScaleTag (33550): [ScaleX, ScaleY, ScaleZ]
    pub pixel_scale: Option<Vec<f64>>,
    /// ModelTiepointTag (33922): [I, J, K, X, Y, Z, ...]
    pub tiepoint: Option<Vec<f64>>,
    /// ModelTransformationTag (34264): 4x4 row-major affine matrix
    pub transformation: Option<Vec<f64>>,
    /// GeoKeyDirectoryTag (34735)
    pub geo_keys: Option<Vec<u16>>,
    /// GeoDoubleParamsTag (34736)
    pub geo_doubles: Option<Vec<f64>>,
    /// GeoAsciiParamsTag (34737)
    pub geo_ascii: Option<String>,
}

impl GeoTags {
    pub fn is_georeferenced(&self) -> bool {
        self.geo_keys.is_some()
            || self.transformation.is_some()
            || (self.pixel_scale.is_some() && self.tiepoint.is_some())
    }

    /// Upper-left corner in model coordinates, from the first tiepoint.
    pub fn origin(&self) -> Option<(f64, f64)> {
        let scale = self.pixel_scale.as_deref()?;
        let tie = self.tiepoint.as_deref()?;
        if scale.len() < 2 || tie.len() < 6 {
            return None;
        }
        Some((tie[3] - tie[0] * scale[0], tie[4] + tie[1] * scale[1]))
    }

    /// (pixel width, pixel height) in model units.
    pub fn pixel_size(&self) -> Option<(f64, f64)> {
        match self.pixel_scale.as_deref()? {
            [sx, sy, ..] => Some((*sx, *sy)),
            _ => None,
        }
    }
}

/// Everything about a raster file except its pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterMetadata {
    pub width: usize,
    pub height: usize,
    pub band_count: usize,
    pub sample_type: SampleType,
    pub geo: GeoTags,
    /// GDAL_NODATA tag (42113), stored as text like GDAL does.
    pub nodata: Option<String>,
}

impl RasterMetadata {
    /// Metadata for a single band written from scratch.
    pub fn single_band(width: usize, height: usize, sample_type: SampleType) -> Self {
        Self {
            width,
            height,
            band_count: 1,
            sample_type,
            geo: GeoTags::default(),
            nodata: None,
        }
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }
}

/// One opened raster file.
#[derive(Clone, Debug)]
pub struct Raster {
    pub path: PathBuf,
    pub metadata: RasterMetadata,
    pub bands: Vec<Band>,
}

impl Raster {
    /// First band.
    ///
    /// Panics when `bands` is empty; [`crate::session::Session`] never holds
    /// such a raster.
    pub fn first_band(&self) -> &Band {
        &self.bands[0]
    }
}
