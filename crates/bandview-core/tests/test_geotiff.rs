#[allow(dead_code)]
mod common;

use std::fs::File;

use tempfile::TempDir;
use tiff::encoder::{colortype, TiffEncoder};

use bandview_core::consts::MAX_DECODE_BYTES;
use bandview_core::error::{BandviewError, RasterError};
use bandview_core::raster::{
    read_geotiff, read_geotiff_with_limit, write_geotiff, RasterMetadata, SampleType,
};

use common::{band_from_fn, utm_geo_tags, write_band};

#[test]
fn test_uint16_round_trip_keeps_georeferencing() {
    let dir = TempDir::new().unwrap();
    let band = band_from_fn(6, 9, |r, c| (r * 1000 + c * 7) as f32);
    let path = dir.path().join("b04.tif");

    let metadata = RasterMetadata {
        nodata: Some("0".to_string()),
        geo: utm_geo_tags(),
        ..RasterMetadata::single_band(9, 6, SampleType::U16)
    };
    write_geotiff(&path, &band, &metadata).unwrap();

    let raster = read_geotiff(&path).unwrap();
    assert_eq!(raster.path, path);
    assert_eq!(raster.metadata, metadata);
    assert_eq!(raster.bands.len(), 1);
    assert_eq!(raster.first_band().data, band.data);

    assert!(raster.metadata.geo.is_georeferenced());
    assert_eq!(raster.metadata.geo.origin(), Some((500_000.0, 5_100_000.0)));
    assert_eq!(raster.metadata.geo.pixel_size(), Some((10.0, 10.0)));
}

#[test]
fn test_float32_round_trip_keeps_nan() {
    let dir = TempDir::new().unwrap();
    let mut band = band_from_fn(3, 3, |r, c| r as f32 * 0.25 - c as f32);
    band.data[[1, 1]] = f32::NAN;
    let path = write_band(dir.path(), "ndvi.tif", &band, SampleType::F32);

    let raster = read_geotiff(&path).unwrap();
    assert_eq!(raster.metadata.sample_type, SampleType::F32);
    let data = &raster.first_band().data;
    assert!(data[[1, 1]].is_nan());
    assert_eq!(data[[2, 0]], 0.5);
    assert_eq!(data[[0, 2]], -2.0);
}

#[test]
fn test_integer_samples_are_rounded_and_clamped() {
    let dir = TempDir::new().unwrap();
    let band = band_from_fn(1, 4, |_, c| [-5.0, 300.4, f32::NAN, 12.6][c]);
    let path = write_band(dir.path(), "u8.tif", &band, SampleType::U8);

    let raster = read_geotiff(&path).unwrap();
    assert_eq!(raster.metadata.sample_type, SampleType::U8);
    let values: Vec<f32> = raster.first_band().data.iter().copied().collect();
    assert_eq!(values, vec![0.0, 255.0, 0.0, 13.0]);
}

#[test]
fn test_interleaved_samples_become_bands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rgb.tif");
    {
        let file = File::create(&path).unwrap();
        let mut encoder = TiffEncoder::new(file).unwrap();
        // 2x1 image: pixel 0 = (1, 2, 3), pixel 1 = (4, 5, 6)
        let data: Vec<u16> = vec![1, 2, 3, 4, 5, 6];
        encoder
            .write_image::<colortype::RGB16>(2, 1, &data)
            .unwrap();
    }

    let raster = read_geotiff(&path).unwrap();
    assert_eq!(raster.metadata.band_count, 3);
    assert_eq!(raster.metadata.sample_type, SampleType::U16);
    assert!(!raster.metadata.geo.is_georeferenced());
    assert_eq!(raster.bands.len(), 3);
    assert_eq!(raster.bands[0].data[[0, 1]], 4.0);
    assert_eq!(raster.bands[1].data[[0, 0]], 2.0);
    assert_eq!(raster.bands[2].data[[0, 1]], 6.0);
}

#[test]
fn test_missing_file_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.tif");
    let err = read_geotiff(&path).unwrap_err();
    match err {
        BandviewError::LoadFailure { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_garbage_file_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.tif");
    std::fs::write(&path, b"definitely not a tiff").unwrap();

    let err = read_geotiff(&path).unwrap_err();
    assert!(matches!(err, BandviewError::LoadFailure { .. }));
    assert!(err.to_string().contains("notes.tif"));
}

#[test]
fn test_unwritable_path_is_save_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("out.tif");
    let band = band_from_fn(2, 2, |_, _| 1.0);
    let err = write_geotiff(&path, &band, &RasterMetadata::single_band(2, 2, SampleType::U8))
        .unwrap_err();
    assert!(matches!(err, BandviewError::SaveFailure { .. }));
}

#[test]
fn test_decode_limit_is_applied() {
    let dir = TempDir::new().unwrap();
    let band = band_from_fn(64, 64, |r, c| (r + c) as f32);
    let path = write_band(dir.path(), "b08.tif", &band, SampleType::F32);

    // 64 * 64 * 4 bytes of float32 pixels
    let raster = read_geotiff_with_limit(&path, 64 * 64 * 4).unwrap();
    assert_eq!(raster.first_band().data, band.data);

    let err = read_geotiff_with_limit(&path, 1024).unwrap_err();
    match err {
        BandviewError::LoadFailure {
            path: p,
            source: RasterError::Tiff(tiff::TiffError::LimitsExceeded),
        } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_default_limit_fits_full_sentinel_tile() {
    // 4 interleaved float32 samples over a 10980x10980 tile, above tiff's 256 MiB default
    let tile_bytes = 10_980u64 * 10_980 * 4 * 4;
    assert!(tile_bytes > 256 * 1024 * 1024);
    assert!(MAX_DECODE_BYTES as u64 >= tile_bytes);
}
