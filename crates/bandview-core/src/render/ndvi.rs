use image::GrayImage;
use ndarray::{Array2, Zip};

use crate::band::Band;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;

use super::stretch::joint_stretch;

/// `(NIR - Red) / (NIR + Red + epsilon)`, with non-finite results set to 0.
pub fn ndvi(red: &Band, nir: &Band, epsilon: f64) -> Array2<f64> {
    let index = |&n: &f32, &r: &f32| {
        let (n, r) = (n as f64, r as f64);
        let v = (n - r) / (n + r + epsilon);
        if v.is_finite() {
            v
        } else {
            0.0
        }
    };

    let zip = Zip::from(&nir.data).and(&red.data);
    if nir.data.len() >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_map_collect(index)
    } else {
        zip.map_collect(index)
    }
}

/// Percentile-stretch an NDVI array to 8-bit grayscale.
pub fn ndvi_to_gray(index: &Array2<f64>, low: f64, high: f64) -> GrayImage {
    let (h, w) = index.dim();
    let pixels = joint_stretch(&[index], low, high);
    GrayImage::from_raw(w as u32, h as u32, pixels).expect("buffer size matches dimensions")
}
