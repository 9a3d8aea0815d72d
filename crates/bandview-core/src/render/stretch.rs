use std::cmp::Ordering;

use ndarray::Array2;
use num_traits::Float;
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{MID_GRAY, PARALLEL_PIXEL_THRESHOLD};

/// Black and white points of a linear contrast stretch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StretchBounds {
    pub low: f64,
    pub high: f64,
}

impl StretchBounds {
    /// Map `low → 0`, `high → 255`, clip, truncate.
    ///
    /// A zero-width range sends values below it to 0, above it to 255 and
    /// the value itself to mid-gray. Non-finite input maps to 0.
    pub fn apply(&self, v: f64) -> u8 {
        if !v.is_finite() {
            return 0;
        }
        let range = self.high - self.low;
        if range <= 0.0 {
            return match v.partial_cmp(&self.low) {
                Some(Ordering::Less) => 0,
                Some(Ordering::Greater) => 255,
                _ => MID_GRAY,
            };
        }
        ((v - self.low) / range * 255.0).clamp(0.0, 255.0) as u8
    }
}

/// Percentile `q` (0..=100) with linear interpolation between closest ranks.
///
/// `values` must be non-empty and finite; it is reordered in place.
pub fn percentile<T: Float>(values: &mut [T], q: f64) -> f64 {
    let n = values.len();
    let pos = (q / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo_idx = pos.floor() as usize;
    let frac = pos - lo_idx as f64;

    let (_, lo, upper) =
        values.select_nth_unstable_by(lo_idx, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let lo = lo.to_f64().unwrap_or(0.0);
    if frac == 0.0 || upper.is_empty() {
        return lo;
    }

    let hi = upper
        .iter()
        .filter_map(|v| v.to_f64())
        .fold(f64::INFINITY, f64::min);
    lo + (hi - lo) * frac
}

/// Joint percentile bounds over every finite value of every plane.
///
/// Returns `None` when no plane holds a finite value.
pub fn joint_bounds<T: Float>(planes: &[&Array2<T>], low: f64, high: f64) -> Option<StretchBounds> {
    let mut values: Vec<T> = planes
        .iter()
        .flat_map(|p| p.iter().copied())
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return None;
    }

    let bounds = StretchBounds {
        low: percentile(&mut values, low),
        high: percentile(&mut values, high),
    };
    debug!(low = bounds.low, high = bounds.high, samples = values.len(), "Stretch bounds");
    Some(bounds)
}

/// Stretch equally-shaped planes with shared bounds into an interleaved
/// 8-bit buffer (`[p0, p1, .., pN, p0, ..]`, row-major).
///
/// Without bounds every sample is 0.
pub fn stretch_interleaved<T: Float + Sync>(
    planes: &[&Array2<T>],
    bounds: Option<StretchBounds>,
) -> Vec<u8> {
    let Some(first) = planes.first() else {
        return Vec::new();
    };
    let (h, w) = first.dim();
    let n = planes.len();
    let mut out = vec![0u8; h * w * n];
    let Some(bounds) = bounds else {
        return out;
    };
    if out.is_empty() {
        return out;
    }

    let fill_row = |row: usize, chunk: &mut [u8]| {
        for col in 0..w {
            for (k, plane) in planes.iter().enumerate() {
                let v = plane[[row, col]].to_f64().unwrap_or(f64::NAN);
                chunk[col * n + k] = bounds.apply(v);
            }
        }
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        out.par_chunks_mut(w * n)
            .enumerate()
            .for_each(|(row, chunk)| fill_row(row, chunk));
    } else {
        out.chunks_mut(w * n)
            .enumerate()
            .for_each(|(row, chunk)| fill_row(row, chunk));
    }

    out
}

/// Joint 2/98-style stretch of several planes into one interleaved buffer.
pub fn joint_stretch<T: Float + Sync>(planes: &[&Array2<T>], low: f64, high: f64) -> Vec<u8> {
    let bounds = joint_bounds(planes, low, high);
    stretch_interleaved(planes, bounds)
}
