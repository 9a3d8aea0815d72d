#[allow(dead_code)]
mod common;

use tempfile::TempDir;

use bandview_core::io::image_io::{save_render, save_rgba};
use bandview_core::render::{
    render, render_band_selection, BandTriple, DisplayMode, RenderConfig, RenderRequest,
};

use common::{constant_band, session_from_values};

#[test]
fn test_save_composite_png_with_and_without_legend() {
    let dir = TempDir::new().unwrap();
    let session = session_from_values(60, 40, &[10.0, 20.0, 30.0, 40.0]);
    let output = render(&session, &RenderRequest::default(), &RenderConfig::default()).unwrap();

    let with = dir.path().join("with.png");
    let without = dir.path().join("without.png");
    save_render(&output, &with, true).unwrap();
    save_render(&output, &without, false).unwrap();

    let with = image::open(&with).unwrap().to_rgb8();
    let without = image::open(&without).unwrap().to_rgb8();
    assert_eq!(with.dimensions(), (40, 60));
    assert_eq!(without.get_pixel(5, 5).0, [0, 127, 255]);
    assert_ne!(with.get_pixel(5, 5).0, [0, 127, 255]);
    assert_eq!(with.get_pixel(5, 55).0, [0, 127, 255]);
}

#[test]
fn test_save_ndvi_as_tiff() {
    let dir = TempDir::new().unwrap();
    let session = session_from_values(8, 8, &[10.0, 20.0, 30.0, 40.0]);
    let output = render(&session, &RenderRequest::new(DisplayMode::Ndvi), &RenderConfig::default())
        .unwrap();

    let path = dir.path().join("ndvi.tif");
    save_render(&output, &path, true).unwrap();

    let gray = image::open(&path).unwrap().to_luma8();
    assert_eq!(gray.dimensions(), (8, 8));
    assert!(gray.pixels().all(|p| p.0[0] == 128));
}

#[test]
fn test_save_band_selection_rgba() {
    let dir = TempDir::new().unwrap();
    let bands = vec![
        constant_band(4, 4, 100.0),
        constant_band(4, 4, 200.0),
        constant_band(4, 4, 300.0),
    ];
    let img = render_band_selection(&bands, BandTriple::default(), &RenderConfig::default()).unwrap();

    let path = dir.path().join("selection.png");
    save_rgba(&img, &path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back, img);
}

#[test]
fn test_render_config_from_toml() {
    let cfg: RenderConfig = toml::from_str("low_percentile = 1.0\nshow_legend = false\n").unwrap();
    assert_eq!(cfg.low_percentile, 1.0);
    assert_eq!(cfg.high_percentile, 98.0);
    assert!(!cfg.show_legend);
    assert_eq!(cfg.legend_height, 50);

    let text = toml::to_string(&RenderConfig::default()).unwrap();
    let back: RenderConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, RenderConfig::default());
}
