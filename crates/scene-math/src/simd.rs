//! SIMD-accelerated batch operations.
//!
//! Batch helpers for transforming and blending many points at once, using
//! the `wide` crate for portable SIMD on stable Rust. Everything here is
//! an optimization surface over the scalar types; the scalar path is the
//! semantic reference and handles the tails.
//!
//! # Example
//!
//! ```rust
//! use scene_math::simd::batch_lerp;
//!
//! let a = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let b = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
//! let mid = batch_lerp(&a, &b, 0.5);
//! assert!((mid[8] - 0.5).abs() < 0.001);
//! ```

use crate::matrix::Matrix;
use crate::vector3::Vector3;
use wide::{f32x4, f32x8};

/// Applies `out = in * scale + offset` to a batch of values.
///
/// Eight lanes at a time, scalar tail.
pub fn batch_scale_add(values: &[f32], scale: f32, offset: f32) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len());
    let chunks = values.chunks_exact(8);
    let remainder = chunks.remainder();

    let s = f32x8::splat(scale);
    let o = f32x8::splat(offset);

    for chunk in chunks {
        let v = f32x8::from(<[f32; 8]>::try_from(chunk).unwrap());
        result.extend_from_slice(&(v * s + o).to_array());
    }

    for &v in remainder {
        result.push(v * scale + offset);
    }

    result
}

/// In-place variant of [`batch_scale_add`].
pub fn batch_scale_add_inplace(values: &mut [f32], scale: f32, offset: f32) {
    let s = f32x8::splat(scale);
    let o = f32x8::splat(offset);

    for chunk in values.chunks_exact_mut(8) {
        let v = f32x8::from(<[f32; 8]>::try_from(&*chunk).unwrap());
        chunk.copy_from_slice(&(v * s + o).to_array());
    }

    let remainder_start = values.len() - (values.len() % 8);
    for v in &mut values[remainder_start..] {
        *v = *v * scale + offset;
    }
}

/// Linear interpolation between two equal-length batches.
///
/// # Panics
///
/// Panics when the slices differ in length.
pub fn batch_lerp(a: &[f32], b: &[f32], t: f32) -> Vec<f32> {
    assert_eq!(a.len(), b.len());
    let mut result = Vec::with_capacity(a.len());

    let a_chunks = a.chunks_exact(8);
    let b_chunks = b.chunks_exact(8);
    let a_rem = a_chunks.remainder();
    let b_rem = b_chunks.remainder();

    let vt = f32x8::splat(t);
    let one = f32x8::splat(1.0);

    for (a_chunk, b_chunk) in a_chunks.zip(b_chunks) {
        let va = f32x8::from(<[f32; 8]>::try_from(a_chunk).unwrap());
        let vb = f32x8::from(<[f32; 8]>::try_from(b_chunk).unwrap());
        result.extend_from_slice(&(va * (one - vt) + vb * vt).to_array());
    }

    for (&av, &bv) in a_rem.iter().zip(b_rem.iter()) {
        result.push(av * (1.0 - t) + bv * t);
    }

    result
}

/// Transforms a single point, padding to four lanes.
///
/// Matches [`Vector3::transform_coordinates`] including the perspective
/// divide.
#[inline]
pub fn transform_coordinates_x4(point: &Vector3, transformation: &Matrix) -> Vector3 {
    let m = transformation.m();
    let p = f32x4::from([point.x, point.y, point.z, 1.0]);

    let row_x = f32x4::from([m[0], m[4], m[8], m[12]]);
    let row_y = f32x4::from([m[1], m[5], m[9], m[13]]);
    let row_z = f32x4::from([m[2], m[6], m[10], m[14]]);
    let row_w = f32x4::from([m[3], m[7], m[11], m[15]]);

    let rw = 1.0 / (p * row_w).reduce_add();
    Vector3::new(
        (p * row_x).reduce_add() * rw,
        (p * row_y).reduce_add() * rw,
        (p * row_z).reduce_add() * rw,
    )
}

/// Applies the same transform to a batch of points.
pub fn batch_transform_coordinates(points: &[Vector3], transformation: &Matrix) -> Vec<Vector3> {
    points
        .iter()
        .map(|p| transform_coordinates_x4(p, transformation))
        .collect()
}

/// In-place variant of [`batch_transform_coordinates`].
pub fn batch_transform_coordinates_inplace(points: &mut [Vector3], transformation: &Matrix) {
    for p in points.iter_mut() {
        *p = transform_coordinates_x4(p, transformation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;

    #[test]
    fn test_batch_scale_add() {
        let values = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
        let result = batch_scale_add(&values, 2.0, 0.1);
        assert!((result[0] - 0.3).abs() < 0.001);
        assert!((result[8] - 1.9).abs() < 0.001);
    }

    #[test]
    fn test_batch_scale_add_inplace_matches() {
        let values: Vec<f32> = (0..19).map(|i| i as f32 * 0.25).collect();
        let expected = batch_scale_add(&values, 3.0, -1.0);
        let mut inplace = values.clone();
        batch_scale_add_inplace(&mut inplace, 3.0, -1.0);
        assert_eq!(inplace, expected);
    }

    #[test]
    fn test_batch_lerp_endpoints() {
        let a: Vec<f32> = (0..11).map(|i| i as f32).collect();
        let b: Vec<f32> = (0..11).map(|i| i as f32 + 5.0).collect();
        assert_eq!(batch_lerp(&a, &b, 0.0), a);
        let at_one = batch_lerp(&a, &b, 1.0);
        for (got, want) in at_one.iter().zip(b.iter()) {
            assert!((got - want).abs() < 0.001);
        }
    }

    #[test]
    fn test_transform_matches_scalar() {
        let m = Matrix::compose(
            &Vector3::new(2.0, 1.0, 0.5),
            &crate::Quaternion::rotation_yaw_pitch_roll(0.3, -0.7, 1.1),
            &Vector3::new(4.0, 5.0, 6.0),
        );
        let points = [
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-1.0, 0.0, 0.5),
            Vector3::ZERO,
        ];
        let batched = batch_transform_coordinates(&points, &m);
        for (p, got) in points.iter().zip(batched.iter()) {
            let want = Vector3::transform_coordinates(p, &m);
            assert!(got.equals_with_epsilon(&want, EPSILON));
        }
    }

    #[test]
    fn test_transform_perspective_divide() {
        let m = Matrix::perspective_fov_lh(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let p = Vector3::new(0.0, 0.0, 100.0);
        let got = transform_coordinates_x4(&p, &m);
        let want = Vector3::transform_coordinates(&p, &m);
        assert!(got.equals_with_epsilon(&want, EPSILON));
    }
}
