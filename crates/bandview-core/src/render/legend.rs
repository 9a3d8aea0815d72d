//! Named color ramps and the legend strip painted over composites.

use image::{Rgb, RgbImage};

use crate::consts::RAMP_SAMPLES;

/// A gradient through evenly spaced color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRamp {
    pub name: &'static str,
    pub stops: &'static [[u8; 3]],
}

const fn hex(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

pub const RGB_RAMP: ColorRamp = ColorRamp {
    name: "RGB",
    stops: &[
        hex(0x800000),
        hex(0xff0000),
        hex(0x00ff00),
        hex(0x0000ff),
        hex(0x000080),
    ],
};

pub const CIR_RAMP: ColorRamp = ColorRamp {
    name: "CIR",
    stops: &[
        hex(0xffffcc),
        hex(0xffeda0),
        hex(0xfed976),
        hex(0xfeb24c),
        hex(0xfd8d3c),
        hex(0xfc4e2a),
        hex(0xe31a1c),
    ],
};

pub const RED_EDGE_RAMP: ColorRamp = ColorRamp {
    name: "Red Edge",
    stops: &[
        hex(0xfee8c8),
        hex(0xfdd49e),
        hex(0xfdbb84),
        hex(0xfc8d59),
        hex(0xef6548),
        hex(0xd7301f),
        hex(0x990000),
    ],
};

pub const CUSTOM_RAMP: ColorRamp = ColorRamp {
    name: "Custom",
    stops: &[
        hex(0x800080),
        hex(0xff0000),
        hex(0xffff00),
        hex(0x00ff00),
        hex(0x0000ff),
        hex(0xff00ff),
        hex(0x00ffff),
    ],
};

impl ColorRamp {
    /// Color at position `t` in [0, 1], each component in [0, 1].
    pub fn sample(&self, t: f64) -> [f64; 3] {
        let stops = self.stops;
        match stops.len() {
            0 => return [0.0; 3],
            1 => return stops[0].map(|c| c as f64 / 255.0),
            _ => {}
        }

        let pos = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let k = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - k as f64;
        let (a, b) = (stops[k], stops[k + 1]);

        let mut out = [0.0; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let ca = a[i] as f64 / 255.0;
            let cb = b[i] as f64 / 255.0;
            *c = ca + (cb - ca) * frac;
        }
        out
    }

    /// 256-entry 8-bit look-up table.
    pub fn lut(&self) -> Vec<[u8; 3]> {
        (0..RAMP_SAMPLES)
            .map(|i| {
                let c = self.sample(i as f64 / (RAMP_SAMPLES - 1) as f64);
                c.map(|v| (v * 255.0).clamp(0.0, 255.0) as u8)
            })
            .collect()
    }

    /// The look-up table as a 256x1 strip.
    pub fn strip(&self) -> RgbImage {
        let lut = self.lut();
        RgbImage::from_fn(RAMP_SAMPLES as u32, 1, |x, _| Rgb(lut[x as usize]))
    }
}

/// Paint the ramp's strip, stretched to the image width, over the top `height` rows.
///
/// Nearest-neighbour scaling; rows beyond the image are skipped.
pub fn overlay_legend(image: &mut RgbImage, ramp: &ColorRamp, height: u32) {
    let (w, h) = image.dimensions();
    if w == 0 {
        return;
    }
    let strip = ramp.strip();
    let rows = height.min(h);

    for x in 0..w {
        let sx = (x as u64 * RAMP_SAMPLES as u64 / w as u64).min(RAMP_SAMPLES as u64 - 1);
        let color = *strip.get_pixel(sx as u32, 0);
        for y in 0..rows {
            image.put_pixel(x, y, color);
        }
    }
}
