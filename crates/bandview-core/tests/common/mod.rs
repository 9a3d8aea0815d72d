use std::path::{Path, PathBuf};

use ndarray::Array2;

use bandview_core::band::Band;
use bandview_core::raster::{write_geotiff, GeoTags, Raster, RasterMetadata, SampleType};
use bandview_core::session::Session;

/// Band filled with a single value.
pub fn constant_band(height: usize, width: usize, value: f32) -> Band {
    Band::new(Array2::from_elem((height, width), value))
}

/// Band whose value at (row, col) is `f(row, col)`.
pub fn band_from_fn(height: usize, width: usize, f: impl Fn(usize, usize) -> f32) -> Band {
    Band::new(Array2::from_shape_fn((height, width), |(r, c)| f(r, c)))
}

/// In-memory raster, as if decoded from `path`.
pub fn raster(path: &str, bands: Vec<Band>) -> Raster {
    let (h, w) = bands[0].shape();
    let mut metadata = RasterMetadata::single_band(w, h, SampleType::U16);
    metadata.band_count = bands.len();
    Raster {
        path: PathBuf::from(path),
        metadata,
        bands,
    }
}

/// Session with one single-band raster per composite channel.
pub fn session_from_values(height: usize, width: usize, values: &[f32]) -> Session {
    let rasters = values
        .iter()
        .enumerate()
        .map(|(i, &v)| raster(&format!("band{}.tif", i + 1), vec![constant_band(height, width, v)]))
        .collect();
    Session::from_rasters(rasters).unwrap()
}

/// UTM-like georeferencing: 10 m pixels with the upper-left corner at (500000, 5100000).
pub fn utm_geo_tags() -> GeoTags {
    GeoTags {
        pixel_scale: Some(vec![10.0, 10.0, 0.0]),
        tiepoint: Some(vec![0.0, 0.0, 0.0, 500_000.0, 5_100_000.0, 0.0]),
        transformation: None,
        geo_keys: Some(vec![1, 1, 0, 2, 1024, 0, 1, 1, 3072, 0, 1, 32632]),
        geo_doubles: None,
        geo_ascii: Some("WGS 84 / UTM zone 32N|".to_string()),
    }
}

/// Write `band` as a single-band GeoTIFF named `name` in `dir`.
pub fn write_band(dir: &Path, name: &str, band: &Band, sample_type: SampleType) -> PathBuf {
    let path = dir.join(name);
    let (h, w) = band.shape();
    let mut metadata = RasterMetadata::single_band(w, h, sample_type);
    metadata.geo = utm_geo_tags();
    write_geotiff(&path, band, &metadata).unwrap();
    path
}

/// Write four constant uint16 bands (Red, Green, Blue, NIR) and return their paths.
pub fn write_channel_files(dir: &Path, height: usize, width: usize, values: [f32; 4]) -> Vec<PathBuf> {
    ["red.tif", "green.tif", "blue.tif", "nir.tif"]
        .iter()
        .zip(values)
        .map(|(name, v)| write_band(dir, name, &constant_band(height, width, v), SampleType::U16))
        .collect()
}
