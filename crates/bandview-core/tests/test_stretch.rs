use approx::assert_abs_diff_eq;
use ndarray::Array2;

use bandview_core::consts::MID_GRAY;
use bandview_core::render::stretch::{
    joint_bounds, joint_stretch, percentile, stretch_interleaved, StretchBounds,
};

#[test]
fn test_percentile_interpolates_between_ranks() {
    let mut values = vec![5.0f32, 1.0, 4.0, 2.0, 3.0];
    assert_abs_diff_eq!(percentile(&mut values, 50.0), 3.0);
    assert_abs_diff_eq!(percentile(&mut values, 25.0), 2.0);
    assert_abs_diff_eq!(percentile(&mut values, 10.0), 1.4, epsilon = 1e-9);
    assert_abs_diff_eq!(percentile(&mut values, 0.0), 1.0);
    assert_abs_diff_eq!(percentile(&mut values, 100.0), 5.0);
}

#[test]
fn test_percentile_2_98_of_ramp() {
    let mut values: Vec<f64> = (0..100).map(|v| v as f64).collect();
    assert_abs_diff_eq!(percentile(&mut values, 2.0), 1.98, epsilon = 1e-9);
    assert_abs_diff_eq!(percentile(&mut values, 98.0), 97.02, epsilon = 1e-9);
}

#[test]
fn test_apply_linear_clip_truncate() {
    let bounds = StretchBounds { low: 0.0, high: 255.0 };
    assert_eq!(bounds.apply(127.5), 127);
    assert_eq!(bounds.apply(-5.0), 0);
    assert_eq!(bounds.apply(300.0), 255);
    assert_eq!(bounds.apply(255.0), 255);
    assert_eq!(bounds.apply(f64::NAN), 0);
    assert_eq!(bounds.apply(f64::INFINITY), 0);
}

#[test]
fn test_apply_zero_width_range() {
    let bounds = StretchBounds { low: 5.0, high: 5.0 };
    assert_eq!(bounds.apply(5.0), MID_GRAY);
    assert_eq!(bounds.apply(4.0), 0);
    assert_eq!(bounds.apply(6.0), 255);
}

#[test]
fn test_constant_planes_are_mid_gray() {
    let a = Array2::<f32>::from_elem((3, 3), 42.0);
    let b = Array2::<f32>::from_elem((3, 3), 42.0);
    let out = joint_stretch(&[&a, &b], 2.0, 98.0);
    assert_eq!(out.len(), 18);
    assert!(out.iter().all(|&v| v == MID_GRAY));
}

#[test]
fn test_no_finite_values_gives_black() {
    let a = Array2::<f32>::from_elem((2, 2), f32::NAN);
    assert!(joint_bounds(&[&a], 2.0, 98.0).is_none());
    let out = joint_stretch(&[&a], 2.0, 98.0);
    assert_eq!(out, vec![0u8; 4]);
}

#[test]
fn test_non_finite_values_are_ignored_by_bounds() {
    let mut a = Array2::<f32>::from_shape_fn((10, 10), |(r, c)| (r * 10 + c) as f32);
    a[[0, 0]] = f32::NAN;
    a[[9, 9]] = f32::INFINITY;

    let bounds = joint_bounds(&[&a], 0.0, 100.0).unwrap();
    assert_abs_diff_eq!(bounds.low, 1.0);
    assert_abs_diff_eq!(bounds.high, 98.0);

    let out = joint_stretch(&[&a], 0.0, 100.0);
    assert_eq!(out[0], 0);
    assert_eq!(out[99], 0);
}

#[test]
fn test_bounds_are_shared_across_planes() {
    // Stretched independently each plane would be mid-gray.
    let dark = Array2::<f32>::zeros((10, 10));
    let bright = Array2::<f32>::from_elem((10, 10), 100.0);
    let out = joint_stretch(&[&dark, &bright], 2.0, 98.0);

    for px in out.chunks(2) {
        assert_eq!(px, [0, 255]);
    }
}

#[test]
fn test_output_is_pixel_interleaved() {
    let a = Array2::from_shape_vec((1, 2), vec![0.0f32, 10.0]).unwrap();
    let b = Array2::from_shape_vec((1, 2), vec![5.0f32, 0.0]).unwrap();
    let c = Array2::from_shape_vec((1, 2), vec![10.0f32, 5.0]).unwrap();
    let bounds = StretchBounds { low: 0.0, high: 10.0 };

    let out = stretch_interleaved(&[&a, &b, &c], Some(bounds));
    assert_eq!(out, vec![0, 127, 255, 255, 0, 127]);
}

#[test]
fn test_parallel_path_matches_per_pixel_mapping() {
    let a = Array2::<f32>::from_shape_fn((300, 300), |(r, c)| ((r * 7 + c * 13) % 1000) as f32);
    let b = a.mapv(|v| v * 0.5 + 100.0);

    let bounds = joint_bounds(&[&a, &b], 2.0, 98.0).unwrap();
    let out = stretch_interleaved(&[&a, &b], Some(bounds));
    assert_eq!(out.len(), 300 * 300 * 2);

    for (i, (va, vb)) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(out[2 * i], bounds.apply(*va as f64));
        assert_eq!(out[2 * i + 1], bounds.apply(*vb as f64));
    }
}

#[test]
fn test_empty_planes() {
    let a = Array2::<f32>::zeros((0, 0));
    assert!(joint_stretch(&[&a], 2.0, 98.0).is_empty());
    let none: [&Array2<f32>; 0] = [];
    assert!(joint_stretch(&none, 2.0, 98.0).is_empty());
}
