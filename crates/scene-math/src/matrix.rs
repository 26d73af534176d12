//! 4x4 transform matrix.
//!
//! [`Matrix`] stores 16 contiguous floats in column-major GPU layout:
//! indices 0..4 hold the first basis row group, translation lives at
//! `m[12], m[13], m[14]`, and every static routine in this crate indexes
//! that exact scheme.
//!
//! # Update flag
//!
//! A process-wide monotonic counter stamps every mutation. Consumers cache
//! `update_flag()` and later compare it to detect "did this matrix change
//! since I last looked" without a 16-float comparison. Every mutating
//! method routes through the stamp; none may bypass it.
//!
//! # Degenerate inputs
//!
//! [`Matrix::invert`] does not guard the determinant: singular input
//! produces non-finite cells silently, and the caller owns that check.
//! [`Matrix::decompose`] refuses exactly-zero scale axes by returning
//! `false`. These sentinel policies are contracts, not oversights; the
//! engine above this layer depends on them.
//!
//! # Usage
//!
//! ```rust
//! use scene_math::{Matrix, Quaternion, Vector3};
//!
//! let m = Matrix::compose(
//!     &Vector3::ONE,
//!     &Quaternion::IDENTITY,
//!     &Vector3::new(1.0, 2.0, 3.0),
//! );
//! assert_eq!(m.get_translation(), Vector3::new(1.0, 2.0, 3.0));
//! ```

use crate::quaternion::Quaternion;
use crate::scalar;
use crate::vector3::Vector3;
use crate::vector4::Vector4;
use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide mutation counter shared by all matrices.
///
/// Monotonic under concurrent use; `Relaxed` is enough because the flag is
/// only ever compared for equality, never used to order other memory.
static UPDATE_COUNTER: AtomicU64 = AtomicU64::new(0);

#[inline]
fn next_update_flag() -> u64 {
    UPDATE_COUNTER.fetch_add(1, Ordering::Relaxed) + 1
}

/// A 4x4 affine/projective transform stored as 16 contiguous floats.
///
/// Not `Copy`: the identity cache is interior-mutable. Cloning is still a
/// plain 16-float copy plus two stamps.
#[derive(Debug, Clone)]
pub struct Matrix {
    m: [f32; 16],
    update_flag: u64,
    // None = dirty, recomputed on the next is_identity() query.
    identity_cache: Cell<Option<bool>>,
}

impl Matrix {
    /// Raw storage, read-only. Translation sits at indices 12, 13, 14.
    #[inline]
    pub fn m(&self) -> &[f32; 16] {
        &self.m
    }

    /// The mutation stamp of this matrix.
    ///
    /// Strictly increases (process-wide) with every mutation of any
    /// matrix, so equality with a cached value means "unchanged since".
    #[inline]
    pub fn update_flag(&self) -> u64 {
        self.update_flag
    }

    #[inline]
    fn mark_as_updated(&mut self) {
        self.update_flag = next_update_flag();
        self.identity_cache.set(None);
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_values(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Resets `result` to the identity matrix.
    #[inline]
    pub fn identity_to_ref(result: &mut Self) {
        Self::from_values_to_ref(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// The all-zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self::from_values(
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0,
        )
    }

    /// Builds a matrix from 16 positional values in storage order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn from_values(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
    ) -> Self {
        let mut result = Self {
            m: [0.0; 16],
            update_flag: 0,
            identity_cache: Cell::new(None),
        };
        Self::from_values_to_ref(
            m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44,
            &mut result,
        );
        result
    }

    /// Writes 16 positional values in storage order into `result`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_values_to_ref(
        m11: f32, m12: f32, m13: f32, m14: f32,
        m21: f32, m22: f32, m23: f32, m24: f32,
        m31: f32, m32: f32, m33: f32, m34: f32,
        m41: f32, m42: f32, m43: f32, m44: f32,
        result: &mut Self,
    ) {
        let m = &mut result.m;
        m[0] = m11;
        m[1] = m12;
        m[2] = m13;
        m[3] = m14;
        m[4] = m21;
        m[5] = m22;
        m[6] = m23;
        m[7] = m24;
        m[8] = m31;
        m[9] = m32;
        m[10] = m33;
        m[11] = m34;
        m[12] = m41;
        m[13] = m42;
        m[14] = m43;
        m[15] = m44;
        result.mark_as_updated();
    }

    /// Reads 16 floats from `data` starting at `offset`.
    ///
    /// The slice must hold at least `offset + 16` elements; no bounds
    /// check beyond the slice's own.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        let mut result = Self::zero();
        Self::from_array_to_ref(data, offset, &mut result);
        result
    }

    /// Reads 16 floats from `data` starting at `offset` into `result`.
    pub fn from_array_to_ref(data: &[f32], offset: usize, result: &mut Self) {
        result.m.copy_from_slice(&data[offset..offset + 16]);
        result.mark_as_updated();
    }

    /// Writes the 16 floats into `dst` starting at `index`.
    #[inline]
    pub fn to_array(&self, dst: &mut [f32], index: usize) {
        dst[index..index + 16].copy_from_slice(&self.m);
    }

    /// Returns the 16 floats as a fresh array.
    #[inline]
    pub fn as_array(&self) -> [f32; 16] {
        self.m
    }

    /// Copies the cells of `other` into `self`.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        self.m = other.m;
        self.mark_as_updated();
        self
    }

    /// Exact cell equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.m == other.m
    }

    /// Cell equality within `epsilon`.
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| scalar::with_epsilon(*a, *b, epsilon))
    }

    /// Returns `true` if this is the identity matrix.
    ///
    /// Cached: the comparison runs once per mutation, later queries read
    /// the cache.
    pub fn is_identity(&self) -> bool {
        match self.identity_cache.get() {
            Some(cached) => cached,
            None => {
                let m = &self.m;
                let result = m[0] == 1.0
                    && m[5] == 1.0
                    && m[10] == 1.0
                    && m[15] == 1.0
                    && m[1] == 0.0
                    && m[2] == 0.0
                    && m[3] == 0.0
                    && m[4] == 0.0
                    && m[6] == 0.0
                    && m[7] == 0.0
                    && m[8] == 0.0
                    && m[9] == 0.0
                    && m[11] == 0.0
                    && m[12] == 0.0
                    && m[13] == 0.0
                    && m[14] == 0.0;
                self.identity_cache.set(Some(result));
                result
            }
        }
    }

    /// Determinant by cofactor expansion along the first storage row.
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        let (m00, m01, m02, m03) = (m[0], m[1], m[2], m[3]);
        let (m10, m11, m12, m13) = (m[4], m[5], m[6], m[7]);
        let (m20, m21, m22, m23) = (m[8], m[9], m[10], m[11]);
        let (m30, m31, m32, m33) = (m[12], m[13], m[14], m[15]);

        let det_22_33 = m22 * m33 - m32 * m23;
        let det_21_33 = m21 * m33 - m31 * m23;
        let det_21_32 = m21 * m32 - m31 * m22;
        let det_20_33 = m20 * m33 - m30 * m23;
        let det_20_32 = m20 * m32 - m30 * m22;
        let det_20_31 = m20 * m31 - m30 * m21;

        let cofact_00 = m11 * det_22_33 - m12 * det_21_33 + m13 * det_21_32;
        let cofact_01 = -(m10 * det_22_33 - m12 * det_20_33 + m13 * det_20_32);
        let cofact_02 = m10 * det_21_33 - m11 * det_20_33 + m13 * det_20_31;
        let cofact_03 = -(m10 * det_21_32 - m11 * det_20_32 + m12 * det_20_31);

        m00 * cofact_00 + m01 * cofact_01 + m02 * cofact_02 + m03 * cofact_03
    }

    /// Returns the inverse.
    ///
    /// Unguarded: a singular matrix yields non-finite cells, never an
    /// error. Callers that can receive singular input must check
    /// [`determinant`](Self::determinant) themselves.
    #[inline]
    pub fn inverted(&self) -> Self {
        let mut result = Self::zero();
        self.invert_to_ref(&mut result);
        result
    }

    /// Inverts in place.
    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        let copy = self.clone();
        copy.invert_to_ref(self);
        self
    }

    /// Inverse written into `result` as transpose-of-cofactors times the
    /// reciprocal determinant (computed once).
    pub fn invert_to_ref(&self, result: &mut Self) {
        let m = &self.m;
        let (m00, m01, m02, m03) = (m[0], m[1], m[2], m[3]);
        let (m10, m11, m12, m13) = (m[4], m[5], m[6], m[7]);
        let (m20, m21, m22, m23) = (m[8], m[9], m[10], m[11]);
        let (m30, m31, m32, m33) = (m[12], m[13], m[14], m[15]);

        let det_22_33 = m22 * m33 - m32 * m23;
        let det_21_33 = m21 * m33 - m31 * m23;
        let det_21_32 = m21 * m32 - m31 * m22;
        let det_20_33 = m20 * m33 - m30 * m23;
        let det_20_32 = m20 * m32 - m30 * m22;
        let det_20_31 = m20 * m31 - m30 * m21;

        let cofact_00 = m11 * det_22_33 - m12 * det_21_33 + m13 * det_21_32;
        let cofact_01 = -(m10 * det_22_33 - m12 * det_20_33 + m13 * det_20_32);
        let cofact_02 = m10 * det_21_33 - m11 * det_20_33 + m13 * det_20_31;
        let cofact_03 = -(m10 * det_21_32 - m11 * det_20_32 + m12 * det_20_31);

        let det = m00 * cofact_00 + m01 * cofact_01 + m02 * cofact_02 + m03 * cofact_03;
        // No singularity guard: 1/0 propagates as inf/NaN by contract.
        let det_inv = 1.0 / det;

        let det_12_33 = m12 * m33 - m32 * m13;
        let det_11_33 = m11 * m33 - m31 * m13;
        let det_11_32 = m11 * m32 - m31 * m12;
        let det_10_33 = m10 * m33 - m30 * m13;
        let det_10_32 = m10 * m32 - m30 * m12;
        let det_10_31 = m10 * m31 - m30 * m11;
        let det_12_23 = m12 * m23 - m22 * m13;
        let det_11_23 = m11 * m23 - m21 * m13;
        let det_11_22 = m11 * m22 - m21 * m12;
        let det_10_23 = m10 * m23 - m20 * m13;
        let det_10_22 = m10 * m22 - m20 * m12;
        let det_10_21 = m10 * m21 - m20 * m11;

        let cofact_10 = -(m01 * det_22_33 - m02 * det_21_33 + m03 * det_21_32);
        let cofact_11 = m00 * det_22_33 - m02 * det_20_33 + m03 * det_20_32;
        let cofact_12 = -(m00 * det_21_33 - m01 * det_20_33 + m03 * det_20_31);
        let cofact_13 = m00 * det_21_32 - m01 * det_20_32 + m02 * det_20_31;

        let cofact_20 = m01 * det_12_33 - m02 * det_11_33 + m03 * det_11_32;
        let cofact_21 = -(m00 * det_12_33 - m02 * det_10_33 + m03 * det_10_32);
        let cofact_22 = m00 * det_11_33 - m01 * det_10_33 + m03 * det_10_31;
        let cofact_23 = -(m00 * det_11_32 - m01 * det_10_32 + m02 * det_10_31);

        let cofact_30 = -(m01 * det_12_23 - m02 * det_11_23 + m03 * det_11_22);
        let cofact_31 = m00 * det_12_23 - m02 * det_10_23 + m03 * det_10_22;
        let cofact_32 = -(m00 * det_11_23 - m01 * det_10_23 + m03 * det_10_21);
        let cofact_33 = m00 * det_11_22 - m01 * det_10_22 + m02 * det_10_21;

        Self::from_values_to_ref(
            cofact_00 * det_inv, cofact_10 * det_inv, cofact_20 * det_inv, cofact_30 * det_inv,
            cofact_01 * det_inv, cofact_11 * det_inv, cofact_21 * det_inv, cofact_31 * det_inv,
            cofact_02 * det_inv, cofact_12 * det_inv, cofact_22 * det_inv, cofact_32 * det_inv,
            cofact_03 * det_inv, cofact_13 * det_inv, cofact_23 * det_inv, cofact_33 * det_inv,
            result,
        );
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        self.multiply_to_ref(other, &mut result);
        result
    }

    /// Matrix product written into `result`.
    ///
    /// Alias-safe: `other` and/or `result` may be `self`.
    #[inline]
    pub fn multiply_to_ref(&self, other: &Self, result: &mut Self) {
        let mut out = [0.0f32; 16];
        self.multiply_to_array(other, &mut out, 0);
        result.m = out;
        result.mark_as_updated();
    }

    /// Matrix product written into a flat array at `offset`.
    ///
    /// All 32 input cells are read into locals before any write; this
    /// ordering is what makes the aliasing guarantee hold. Do not fold the
    /// loads into the stores.
    pub fn multiply_to_array(&self, other: &Self, result: &mut [f32], offset: usize) {
        let m = &self.m;
        let om = &other.m;

        let (tm0, tm1, tm2, tm3) = (m[0], m[1], m[2], m[3]);
        let (tm4, tm5, tm6, tm7) = (m[4], m[5], m[6], m[7]);
        let (tm8, tm9, tm10, tm11) = (m[8], m[9], m[10], m[11]);
        let (tm12, tm13, tm14, tm15) = (m[12], m[13], m[14], m[15]);

        let (om0, om1, om2, om3) = (om[0], om[1], om[2], om[3]);
        let (om4, om5, om6, om7) = (om[4], om[5], om[6], om[7]);
        let (om8, om9, om10, om11) = (om[8], om[9], om[10], om[11]);
        let (om12, om13, om14, om15) = (om[12], om[13], om[14], om[15]);

        result[offset] = tm0 * om0 + tm1 * om4 + tm2 * om8 + tm3 * om12;
        result[offset + 1] = tm0 * om1 + tm1 * om5 + tm2 * om9 + tm3 * om13;
        result[offset + 2] = tm0 * om2 + tm1 * om6 + tm2 * om10 + tm3 * om14;
        result[offset + 3] = tm0 * om3 + tm1 * om7 + tm2 * om11 + tm3 * om15;

        result[offset + 4] = tm4 * om0 + tm5 * om4 + tm6 * om8 + tm7 * om12;
        result[offset + 5] = tm4 * om1 + tm5 * om5 + tm6 * om9 + tm7 * om13;
        result[offset + 6] = tm4 * om2 + tm5 * om6 + tm6 * om10 + tm7 * om14;
        result[offset + 7] = tm4 * om3 + tm5 * om7 + tm6 * om11 + tm7 * om15;

        result[offset + 8] = tm8 * om0 + tm9 * om4 + tm10 * om8 + tm11 * om12;
        result[offset + 9] = tm8 * om1 + tm9 * om5 + tm10 * om9 + tm11 * om13;
        result[offset + 10] = tm8 * om2 + tm9 * om6 + tm10 * om10 + tm11 * om14;
        result[offset + 11] = tm8 * om3 + tm9 * om7 + tm10 * om11 + tm11 * om15;

        result[offset + 12] = tm12 * om0 + tm13 * om4 + tm14 * om8 + tm15 * om12;
        result[offset + 13] = tm12 * om1 + tm13 * om5 + tm14 * om9 + tm15 * om13;
        result[offset + 14] = tm12 * om2 + tm13 * om6 + tm14 * om10 + tm15 * om14;
        result[offset + 15] = tm12 * om3 + tm13 * om7 + tm14 * om11 + tm15 * om15;
    }

    /// Returns the transpose.
    #[inline]
    pub fn transposed(&self) -> Self {
        let mut result = Self::zero();
        Self::transpose_to_ref(self, &mut result);
        result
    }

    /// Transpose written into `result`.
    pub fn transpose_to_ref(matrix: &Self, result: &mut Self) {
        let m = &matrix.m;
        Self::from_values_to_ref(
            m[0], m[4], m[8], m[12],
            m[1], m[5], m[9], m[13],
            m[2], m[6], m[10], m[14],
            m[3], m[7], m[11], m[15],
            result,
        );
    }

    /// Cell-wise sum.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        self.add_to_ref(other, &mut result);
        result
    }

    /// Cell-wise sum written into `result`.
    pub fn add_to_ref(&self, other: &Self, result: &mut Self) {
        for i in 0..16 {
            result.m[i] = self.m[i] + other.m[i];
        }
        result.mark_as_updated();
    }

    /// Cell-wise sum accumulated in place.
    pub fn add_to_self(&mut self, other: &Self) -> &mut Self {
        for i in 0..16 {
            self.m[i] += other.m[i];
        }
        self.mark_as_updated();
        self
    }

    /// Returns the matrix with every cell multiplied by `factor`.
    pub fn scale_by(&self, factor: f32) -> Self {
        let mut result = Self::zero();
        for i in 0..16 {
            result.m[i] = self.m[i] * factor;
        }
        result.mark_as_updated();
        result
    }

    /// Returns storage row `index` (0..=3), or `None` out of range.
    ///
    /// Out-of-range access is a sentinel, not an error, by contract.
    pub fn get_row(&self, index: usize) -> Option<Vector4> {
        if index > 3 {
            return None;
        }
        let i = index * 4;
        Some(Vector4::new(self.m[i], self.m[i + 1], self.m[i + 2], self.m[i + 3]))
    }

    /// Replaces storage row `index`; silently ignores out-of-range indices.
    pub fn set_row(&mut self, index: usize, row: &Vector4) -> &mut Self {
        if index > 3 {
            return self;
        }
        self.set_row_from_floats(index, row.x, row.y, row.z, row.w)
    }

    /// Replaces storage row `index` from raw floats; out-of-range is a
    /// no-op.
    pub fn set_row_from_floats(&mut self, index: usize, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        if index > 3 {
            return self;
        }
        let i = index * 4;
        self.m[i] = x;
        self.m[i + 1] = y;
        self.m[i + 2] = z;
        self.m[i + 3] = w;
        self.mark_as_updated();
        self
    }

    /// The translation cells (m[12], m[13], m[14]) as a vector.
    #[inline]
    pub fn get_translation(&self) -> Vector3 {
        Vector3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Translation cells written into `result`.
    #[inline]
    pub fn get_translation_to_ref(&self, result: &mut Vector3) {
        result.set(self.m[12], self.m[13], self.m[14]);
    }

    /// Overwrites the translation cells.
    #[inline]
    pub fn set_translation(&mut self, translation: &Vector3) -> &mut Self {
        self.set_translation_from_floats(translation.x, translation.y, translation.z)
    }

    /// Overwrites the translation cells from raw floats.
    pub fn set_translation_from_floats(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.m[12] = x;
        self.m[13] = y;
        self.m[14] = z;
        self.mark_as_updated();
        self
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    /// Translation matrix.
    #[inline]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut result = Self::zero();
        Self::translation_to_ref(x, y, z, &mut result);
        result
    }

    /// Translation matrix written into `result`.
    pub fn translation_to_ref(x: f32, y: f32, z: f32, result: &mut Self) {
        Self::from_values_to_ref(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            x, y, z, 1.0,
            result,
        );
    }

    /// Scaling matrix.
    #[inline]
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        let mut result = Self::zero();
        Self::scaling_to_ref(x, y, z, &mut result);
        result
    }

    /// Scaling matrix written into `result`.
    pub fn scaling_to_ref(x: f32, y: f32, z: f32, result: &mut Self) {
        Self::from_values_to_ref(
            x, 0.0, 0.0, 0.0, //
            0.0, y, 0.0, 0.0, //
            0.0, 0.0, z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// Rotation of `angle` radians around the X axis.
    #[inline]
    pub fn rotation_x(angle: f32) -> Self {
        let mut result = Self::zero();
        Self::rotation_x_to_ref(angle, &mut result);
        result
    }

    /// X-axis rotation written into `result`.
    pub fn rotation_x_to_ref(angle: f32, result: &mut Self) {
        let (s, c) = angle.sin_cos();
        Self::from_values_to_ref(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// Rotation of `angle` radians around the Y axis.
    #[inline]
    pub fn rotation_y(angle: f32) -> Self {
        let mut result = Self::zero();
        Self::rotation_y_to_ref(angle, &mut result);
        result
    }

    /// Y-axis rotation written into `result`.
    pub fn rotation_y_to_ref(angle: f32, result: &mut Self) {
        let (s, c) = angle.sin_cos();
        Self::from_values_to_ref(
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// Rotation of `angle` radians around the Z axis.
    #[inline]
    pub fn rotation_z(angle: f32) -> Self {
        let mut result = Self::zero();
        Self::rotation_z_to_ref(angle, &mut result);
        result
    }

    /// Z-axis rotation written into `result`.
    pub fn rotation_z_to_ref(angle: f32, result: &mut Self) {
        let (s, c) = angle.sin_cos();
        Self::from_values_to_ref(
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// Rotation of `angle` radians around an arbitrary axis.
    ///
    /// The axis is normalized internally.
    #[inline]
    pub fn rotation_axis(axis: Vector3, angle: f32) -> Self {
        let mut result = Self::zero();
        Self::rotation_axis_to_ref(axis, angle, &mut result);
        result
    }

    /// Axis-angle rotation written into `result`.
    ///
    /// Rodrigues form evaluated at `-angle`, matching the handedness of
    /// the single-axis builders above.
    pub fn rotation_axis_to_ref(mut axis: Vector3, angle: f32, result: &mut Self) {
        let (s, c) = (-angle).sin_cos();
        let c1 = 1.0 - c;
        axis.normalize();

        Self::from_values_to_ref(
            axis.x * axis.x * c1 + c,
            axis.x * axis.y * c1 - axis.z * s,
            axis.x * axis.z * c1 + axis.y * s,
            0.0,
            axis.y * axis.x * c1 + axis.z * s,
            axis.y * axis.y * c1 + c,
            axis.y * axis.z * c1 - axis.x * s,
            0.0,
            axis.z * axis.x * c1 - axis.y * s,
            axis.z * axis.y * c1 + axis.x * s,
            axis.z * axis.z * c1 + c,
            0.0,
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// Rotation from yaw/pitch/roll, composed like
    /// [`Quaternion::rotation_yaw_pitch_roll`].
    #[inline]
    pub fn rotation_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let mut result = Self::zero();
        Self::rotation_yaw_pitch_roll_to_ref(yaw, pitch, roll, &mut result);
        result
    }

    /// Yaw/pitch/roll rotation written into `result`.
    pub fn rotation_yaw_pitch_roll_to_ref(yaw: f32, pitch: f32, roll: f32, result: &mut Self) {
        let mut quat = Quaternion::IDENTITY;
        Quaternion::rotation_yaw_pitch_roll_to_ref(yaw, pitch, roll, &mut quat);
        Self::from_quaternion_to_ref(&quat, result);
    }

    /// Rotation matrix of a quaternion written into `result`.
    pub fn from_quaternion_to_ref(quat: &Quaternion, result: &mut Self) {
        let x2 = quat.x + quat.x;
        let y2 = quat.y + quat.y;
        let z2 = quat.z + quat.z;
        let xx = quat.x * x2;
        let xy = quat.x * y2;
        let xz = quat.x * z2;
        let yy = quat.y * y2;
        let yz = quat.y * z2;
        let zz = quat.z * z2;
        let wx = quat.w * x2;
        let wy = quat.w * y2;
        let wz = quat.w * z2;

        Self::from_values_to_ref(
            1.0 - (yy + zz), xy + wz, xz - wy, 0.0,
            xy - wz, 1.0 - (xx + zz), yz + wx, 0.0,
            xz + wy, yz - wx, 1.0 - (xx + yy), 0.0,
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    /// Builds a rotation matrix whose basis rows are the given axes.
    pub fn from_xyz_axes_to_ref(x_axis: &Vector3, y_axis: &Vector3, z_axis: &Vector3, result: &mut Self) {
        Self::from_values_to_ref(
            x_axis.x, x_axis.y, x_axis.z, 0.0,
            y_axis.x, y_axis.y, y_axis.z, 0.0,
            z_axis.x, z_axis.y, z_axis.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    // ------------------------------------------------------------------
    // Composition / decomposition
    // ------------------------------------------------------------------

    /// Builds a scale-rotate-translate transform.
    #[inline]
    pub fn compose(scale: &Vector3, rotation: &Quaternion, translation: &Vector3) -> Self {
        let mut result = Self::zero();
        Self::compose_to_ref(scale, rotation, translation, &mut result);
        result
    }

    /// SRT composition written into `result`.
    ///
    /// The rotation block is scaled per column group (scale applies first),
    /// then the translation cells are written directly. Equivalent to
    /// `scaling * rotation * translation` without the intermediate
    /// products.
    pub fn compose_to_ref(scale: &Vector3, rotation: &Quaternion, translation: &Vector3, result: &mut Self) {
        let x2 = rotation.x + rotation.x;
        let y2 = rotation.y + rotation.y;
        let z2 = rotation.z + rotation.z;
        let xx = rotation.x * x2;
        let xy = rotation.x * y2;
        let xz = rotation.x * z2;
        let yy = rotation.y * y2;
        let yz = rotation.y * z2;
        let zz = rotation.z * z2;
        let wx = rotation.w * x2;
        let wy = rotation.w * y2;
        let wz = rotation.w * z2;

        Self::from_values_to_ref(
            (1.0 - (yy + zz)) * scale.x,
            (xy + wz) * scale.x,
            (xz - wy) * scale.x,
            0.0,
            (xy - wz) * scale.y,
            (1.0 - (xx + zz)) * scale.y,
            (yz + wx) * scale.y,
            0.0,
            (xz + wy) * scale.z,
            (yz - wx) * scale.z,
            (1.0 - (xx + yy)) * scale.z,
            0.0,
            translation.x,
            translation.y,
            translation.z,
            1.0,
            result,
        );
    }

    /// Splits the matrix into scale, rotation, and translation.
    ///
    /// Translation reads straight from m[12..15); scale is the length of
    /// each basis column group. When the determinant is non-positive the
    /// Y scale is negated: mirrored transforms carry their flip on Y by
    /// convention, so decompose/compose round-trips them.
    ///
    /// Returns `false` when any scale axis is exactly zero; in that case
    /// `rotation` (if given) resets to identity and `scale`/`translation`
    /// are left untouched. The zero check replaces an epsilon guard on
    /// purpose: division only ever happens on exactly-nonzero values.
    pub fn decompose(
        &self,
        scale: Option<&mut Vector3>,
        rotation: Option<&mut Quaternion>,
        translation: Option<&mut Vector3>,
    ) -> bool {
        let m = &self.m;

        let sx = (m[0] * m[0] + m[1] * m[1] + m[2] * m[2]).sqrt();
        let mut sy = (m[4] * m[4] + m[5] * m[5] + m[6] * m[6]).sqrt();
        let sz = (m[8] * m[8] + m[9] * m[9] + m[10] * m[10]).sqrt();

        if self.determinant() <= 0.0 {
            sy = -sy;
        }

        if sx == 0.0 || sy == 0.0 || sz == 0.0 {
            if let Some(rotation) = rotation {
                rotation.set(0.0, 0.0, 0.0, 1.0);
            }
            return false;
        }

        if let Some(rotation) = rotation {
            let sx_inv = 1.0 / sx;
            let sy_inv = 1.0 / sy;
            let sz_inv = 1.0 / sz;
            let mut rotation_matrix = Self::zero();
            Self::from_values_to_ref(
                m[0] * sx_inv, m[1] * sx_inv, m[2] * sx_inv, 0.0,
                m[4] * sy_inv, m[5] * sy_inv, m[6] * sy_inv, 0.0,
                m[8] * sz_inv, m[9] * sz_inv, m[10] * sz_inv, 0.0,
                0.0, 0.0, 0.0, 1.0,
                &mut rotation_matrix,
            );
            Quaternion::from_rotation_matrix_to_ref(&rotation_matrix, rotation);
        }

        if let Some(scale) = scale {
            scale.set(sx, sy, sz);
        }

        if let Some(translation) = translation {
            translation.set(m[12], m[13], m[14]);
        }

        true
    }

    /// Interpolates two transforms component-wise in SRT space.
    ///
    /// Both matrices are decomposed, scale and translation lerp, rotation
    /// slerps, and the blend recomposes. Much better behaved than cell
    /// lerping for anything with rotation in it.
    #[inline]
    pub fn decompose_lerp(start: &Self, end: &Self, amount: f32) -> Self {
        let mut result = Self::zero();
        Self::decompose_lerp_to_ref(start, end, amount, &mut result);
        result
    }

    /// SRT-space interpolation written into `result`.
    pub fn decompose_lerp_to_ref(start: &Self, end: &Self, amount: f32, result: &mut Self) {
        let mut start_scale = Vector3::ZERO;
        let mut start_rotation = Quaternion::IDENTITY;
        let mut start_translation = Vector3::ZERO;
        start.decompose(
            Some(&mut start_scale),
            Some(&mut start_rotation),
            Some(&mut start_translation),
        );

        let mut end_scale = Vector3::ZERO;
        let mut end_rotation = Quaternion::IDENTITY;
        let mut end_translation = Vector3::ZERO;
        end.decompose(
            Some(&mut end_scale),
            Some(&mut end_rotation),
            Some(&mut end_translation),
        );

        let mut scale = Vector3::ZERO;
        Vector3::lerp_to_ref(&start_scale, &end_scale, amount, &mut scale);
        let mut rotation = Quaternion::IDENTITY;
        Quaternion::slerp_to_ref(&start_rotation, &end_rotation, amount, &mut rotation);
        let mut translation = Vector3::ZERO;
        Vector3::lerp_to_ref(&start_translation, &end_translation, amount, &mut translation);

        Self::compose_to_ref(&scale, &rotation, &translation, result);
    }

    /// The normalized rotation block of this matrix.
    ///
    /// Falls back to identity when the matrix has a zero scale axis.
    #[inline]
    pub fn get_rotation_matrix(&self) -> Self {
        let mut result = Self::zero();
        self.get_rotation_matrix_to_ref(&mut result);
        result
    }

    /// Normalized rotation block written into `result`.
    pub fn get_rotation_matrix_to_ref(&self, result: &mut Self) {
        let mut scale = Vector3::ZERO;
        if !self.decompose(Some(&mut scale), None, None) {
            Self::identity_to_ref(result);
            return;
        }
        let m = &self.m;
        let sx_inv = 1.0 / scale.x;
        let sy_inv = 1.0 / scale.y;
        let sz_inv = 1.0 / scale.z;
        Self::from_values_to_ref(
            m[0] * sx_inv, m[1] * sx_inv, m[2] * sx_inv, 0.0,
            m[4] * sy_inv, m[5] * sy_inv, m[6] * sy_inv, 0.0,
            m[8] * sz_inv, m[9] * sz_inv, m[10] * sz_inv, 0.0,
            0.0, 0.0, 0.0, 1.0,
            result,
        );
    }

    // ------------------------------------------------------------------
    // Camera / projection builders
    // ------------------------------------------------------------------

    /// Left-handed look-at view matrix.
    #[inline]
    pub fn look_at_lh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        let mut result = Self::zero();
        Self::look_at_lh_to_ref(eye, target, up, &mut result);
        result
    }

    /// Left-handed look-at written into `result`.
    ///
    /// The basis is built in locals: z toward the target, x from up x z
    /// (falling back to +X when up and z are collinear), y closing the
    /// triad.
    pub fn look_at_lh_to_ref(eye: &Vector3, target: &Vector3, up: &Vector3, result: &mut Self) {
        let mut z_axis = *target - *eye;
        z_axis.normalize();

        let mut x_axis = Vector3::ZERO;
        Vector3::cross_to_ref(up, &z_axis, &mut x_axis);
        let x_len_sq = x_axis.length_squared();
        if x_len_sq == 0.0 {
            x_axis.x = 1.0;
        } else {
            x_axis.normalize_from_length(x_len_sq.sqrt());
        }

        let mut y_axis = Vector3::ZERO;
        Vector3::cross_to_ref(&z_axis, &x_axis, &mut y_axis);
        y_axis.normalize();

        let ex = -x_axis.dot(eye);
        let ey = -y_axis.dot(eye);
        let ez = -z_axis.dot(eye);

        Self::from_values_to_ref(
            x_axis.x, y_axis.x, z_axis.x, 0.0,
            x_axis.y, y_axis.y, z_axis.y, 0.0,
            x_axis.z, y_axis.z, z_axis.z, 0.0,
            ex, ey, ez, 1.0,
            result,
        );
    }

    /// Right-handed look-at view matrix.
    #[inline]
    pub fn look_at_rh(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        let mut result = Self::zero();
        Self::look_at_rh_to_ref(eye, target, up, &mut result);
        result
    }

    /// Right-handed look-at written into `result`.
    ///
    /// Differs from LH only in the z axis direction (eye - target).
    pub fn look_at_rh_to_ref(eye: &Vector3, target: &Vector3, up: &Vector3, result: &mut Self) {
        let mut z_axis = *eye - *target;
        z_axis.normalize();

        let mut x_axis = Vector3::ZERO;
        Vector3::cross_to_ref(up, &z_axis, &mut x_axis);
        let x_len_sq = x_axis.length_squared();
        if x_len_sq == 0.0 {
            x_axis.x = 1.0;
        } else {
            x_axis.normalize_from_length(x_len_sq.sqrt());
        }

        let mut y_axis = Vector3::ZERO;
        Vector3::cross_to_ref(&z_axis, &x_axis, &mut y_axis);
        y_axis.normalize();

        let ex = -x_axis.dot(eye);
        let ey = -y_axis.dot(eye);
        let ez = -z_axis.dot(eye);

        Self::from_values_to_ref(
            x_axis.x, y_axis.x, z_axis.x, 0.0,
            x_axis.y, y_axis.y, z_axis.y, 0.0,
            x_axis.z, y_axis.z, z_axis.z, 0.0,
            ex, ey, ez, 1.0,
            result,
        );
    }

    /// Left-handed perspective projection with a fixed vertical fov.
    #[inline]
    pub fn perspective_fov_lh(fov: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut result = Self::zero();
        Self::perspective_fov_lh_to_ref(fov, aspect, znear, zfar, &mut result);
        result
    }

    /// Left-handed perspective projection written into `result`.
    ///
    /// Perspective row signature: m[11] = 1, m[15] = 0. Square aspect
    /// gives m[0] == m[5].
    pub fn perspective_fov_lh_to_ref(fov: f32, aspect: f32, znear: f32, zfar: f32, result: &mut Self) {
        let t = 1.0 / (fov * 0.5).tan();
        let a = t / aspect;
        let b = t;
        let c = zfar / (zfar - znear);
        let d = -zfar * znear / (zfar - znear);

        Self::from_values_to_ref(
            a, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, //
            0.0, 0.0, c, 1.0, //
            0.0, 0.0, d, 0.0,
            result,
        );
    }

    /// Right-handed perspective projection with a fixed vertical fov.
    #[inline]
    pub fn perspective_fov_rh(fov: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        let mut result = Self::zero();
        Self::perspective_fov_rh_to_ref(fov, aspect, znear, zfar, &mut result);
        result
    }

    /// Right-handed perspective projection written into `result`.
    ///
    /// Same cells as LH with the z-column signs flipped (m[10] negated,
    /// m[11] = -1).
    pub fn perspective_fov_rh_to_ref(fov: f32, aspect: f32, znear: f32, zfar: f32, result: &mut Self) {
        let t = 1.0 / (fov * 0.5).tan();
        let a = t / aspect;
        let b = t;
        let c = -zfar / (zfar - znear);
        let d = -zfar * znear / (zfar - znear);

        Self::from_values_to_ref(
            a, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, //
            0.0, 0.0, c, -1.0, //
            0.0, 0.0, d, 0.0,
            result,
        );
    }

    /// Left-handed orthographic projection centered on the origin.
    #[inline]
    pub fn ortho_lh(width: f32, height: f32, znear: f32, zfar: f32) -> Self {
        let mut result = Self::zero();
        Self::ortho_lh_to_ref(width, height, znear, zfar, &mut result);
        result
    }

    /// Centered orthographic projection written into `result`.
    pub fn ortho_lh_to_ref(width: f32, height: f32, znear: f32, zfar: f32, result: &mut Self) {
        let c = 2.0 / (zfar - znear);
        let d = -(zfar + znear) / (zfar - znear);
        Self::from_values_to_ref(
            2.0 / width, 0.0, 0.0, 0.0, //
            0.0, 2.0 / height, 0.0, 0.0, //
            0.0, 0.0, c, 0.0, //
            0.0, 0.0, d, 1.0,
            result,
        );
    }

    /// Left-handed off-center orthographic projection.
    #[inline]
    pub fn ortho_off_center_lh(left: f32, right: f32, bottom: f32, top: f32, znear: f32, zfar: f32) -> Self {
        let mut result = Self::zero();
        Self::ortho_off_center_lh_to_ref(left, right, bottom, top, znear, zfar, &mut result);
        result
    }

    /// Off-center orthographic projection written into `result`.
    pub fn ortho_off_center_lh_to_ref(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
        result: &mut Self,
    ) {
        let a = 2.0 / (right - left);
        let b = 2.0 / (top - bottom);
        let c = 2.0 / (zfar - znear);
        let d = -(zfar + znear) / (zfar - znear);
        let i0 = (left + right) / (left - right);
        let i1 = (top + bottom) / (bottom - top);

        Self::from_values_to_ref(
            a, 0.0, 0.0, 0.0, //
            0.0, b, 0.0, 0.0, //
            0.0, 0.0, c, 0.0, //
            i0, i1, d, 1.0,
            result,
        );
    }

    /// Right-handed off-center orthographic projection.
    #[inline]
    pub fn ortho_off_center_rh(left: f32, right: f32, bottom: f32, top: f32, znear: f32, zfar: f32) -> Self {
        let mut result = Self::zero();
        Self::ortho_off_center_rh_to_ref(left, right, bottom, top, znear, zfar, &mut result);
        result
    }

    /// Right-handed off-center orthographic projection written into
    /// `result`: the LH cells with m[10] negated.
    pub fn ortho_off_center_rh_to_ref(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        znear: f32,
        zfar: f32,
        result: &mut Self,
    ) {
        Self::ortho_off_center_lh_to_ref(left, right, bottom, top, znear, zfar, result);
        result.m[10] *= -1.0;
        result.mark_as_updated();
    }

    /// Converts to a glam matrix. Both layouts are the same 16-float
    /// column-major buffer, so this is a straight copy.
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.m)
    }

    /// Creates from a glam matrix.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(&m.to_cols_array(), 0)
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Matrix {
    /// Compares cells only; the update flag and cache are bookkeeping.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Matrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.m.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Matrix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let m = <[f32; 16]>::deserialize(deserializer)?;
        Ok(Self::from_array(&m, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    fn assert_matrix_eq(a: &Matrix, b: &Matrix, epsilon: f32) {
        assert!(
            a.equals_with_epsilon(b, epsilon),
            "matrices differ:\n{:?}\nvs\n{:?}",
            a.m(),
            b.m()
        );
    }

    #[test]
    fn test_identity_is_identity() {
        assert!(Matrix::identity().is_identity());
        assert!(!Matrix::translation(1.0, 0.0, 0.0).is_identity());
    }

    #[test]
    fn test_identity_cache_invalidation() {
        let mut m = Matrix::identity();
        assert!(m.is_identity());
        m.set_translation_from_floats(1.0, 0.0, 0.0);
        assert!(!m.is_identity());
        m.set_translation_from_floats(0.0, 0.0, 0.0);
        assert!(m.is_identity());
    }

    #[test]
    fn test_update_flag_increments_on_mutation() {
        let mut m = Matrix::identity();
        let before = m.update_flag();
        m.set_translation_from_floats(1.0, 2.0, 3.0);
        assert!(m.update_flag() > before);
    }

    #[test]
    fn test_update_flag_distinct_across_instances() {
        let a = Matrix::identity();
        let b = Matrix::identity();
        assert_ne!(a.update_flag(), b.update_flag());
    }

    #[test]
    fn test_multiply_identity() {
        let m = Matrix::compose(
            &Vector3::new(2.0, 3.0, 4.0),
            &Quaternion::rotation_axis(Vector3::UP, 0.7),
            &Vector3::new(1.0, -2.0, 5.0),
        );
        assert_matrix_eq(&Matrix::identity().multiply(&m), &m, 1e-6);
        assert_matrix_eq(&m.multiply(&Matrix::identity()), &m, 1e-6);
    }

    #[test]
    fn test_multiply_aliasing_self() {
        let a = Matrix::rotation_y(0.5);
        let b = Matrix::translation(1.0, 2.0, 3.0);
        let expected = a.multiply(&b);
        let mut aliased = a.clone();
        let copy = aliased.clone();
        copy.multiply_to_ref(&b, &mut aliased);
        assert_matrix_eq(&aliased, &expected, 0.0);
    }

    #[test]
    fn test_translation_cells() {
        let m = Matrix::translation(1.0, 2.0, 3.0);
        assert_eq!(m.m()[12], 1.0);
        assert_eq!(m.m()[13], 2.0);
        assert_eq!(m.m()[14], 3.0);
    }

    #[test]
    fn test_invert_roundtrip() {
        let m = Matrix::compose(
            &Vector3::new(1.5, 2.0, 0.5),
            &Quaternion::rotation_yaw_pitch_roll(0.4, -0.2, 0.9),
            &Vector3::new(10.0, -4.0, 2.0),
        );
        let double_inverse = m.inverted().inverted();
        assert_matrix_eq(&double_inverse, &m, EPSILON);
    }

    #[test]
    fn test_invert_times_original_is_identity() {
        let m = Matrix::look_at_lh(
            &Vector3::new(1.0, 2.0, -5.0),
            &Vector3::ZERO,
            &Vector3::UP,
        );
        let product = m.multiply(&m.inverted());
        assert_matrix_eq(&product, &Matrix::identity(), EPSILON);
    }

    #[test]
    fn test_invert_singular_produces_non_finite() {
        // Zero scale on one axis: determinant is exactly zero and the
        // contract is silent non-finite output, not an error.
        let m = Matrix::scaling(1.0, 0.0, 1.0);
        let inv = m.inverted();
        assert!(inv.m().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_determinant_of_scaling() {
        let m = Matrix::scaling(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(m.determinant(), 24.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::translation(1.0, 2.0, 3.0);
        let t = m.transposed();
        assert_eq!(t.m()[3], 1.0);
        assert_eq!(t.m()[7], 2.0);
        assert_eq!(t.m()[11], 3.0);
        assert_matrix_eq(&t.transposed(), &m, 0.0);
    }

    #[test]
    fn test_compose_decompose_roundtrip() {
        let scale = Vector3::new(2.0, 0.5, 3.0);
        let rotation = Quaternion::rotation_yaw_pitch_roll(0.7, 0.3, -0.4);
        let translation = Vector3::new(5.0, -1.0, 2.0);

        let m = Matrix::compose(&scale, &rotation, &translation);

        let mut out_scale = Vector3::ZERO;
        let mut out_rotation = Quaternion::IDENTITY;
        let mut out_translation = Vector3::ZERO;
        assert!(m.decompose(
            Some(&mut out_scale),
            Some(&mut out_rotation),
            Some(&mut out_translation)
        ));

        assert!(out_scale.equals_with_epsilon(&scale, EPSILON));
        assert!(out_translation.equals_with_epsilon(&translation, EPSILON));
        assert!(Quaternion::dot(&rotation, &out_rotation).abs() > 1.0 - EPSILON);

        let recomposed = Matrix::compose(&out_scale, &out_rotation, &out_translation);
        assert_matrix_eq(&recomposed, &m, EPSILON);
    }

    #[test]
    fn test_decompose_negative_determinant_flips_y() {
        // Mirror on X: the negative determinant lands on scale.y by
        // convention, and recomposing restores the original cells.
        let m = Matrix::scaling(-2.0, 3.0, 4.0);
        assert!(m.determinant() < 0.0);

        let mut scale = Vector3::ZERO;
        let mut rotation = Quaternion::IDENTITY;
        let mut translation = Vector3::ZERO;
        assert!(m.decompose(Some(&mut scale), Some(&mut rotation), Some(&mut translation)));
        assert!(scale.y < 0.0);

        let recomposed = Matrix::compose(&scale, &rotation, &translation);
        assert_matrix_eq(&recomposed, &m, EPSILON);
    }

    #[test]
    fn test_decompose_zero_scale_fails() {
        let m = Matrix::scaling(0.0, 1.0, 1.0);
        let mut rotation = Quaternion::new(9.0, 9.0, 9.0, 9.0);
        assert!(!m.decompose(None, Some(&mut rotation), None));
        assert_eq!(rotation, Quaternion::IDENTITY);
    }

    #[test]
    fn test_decompose_lerp_endpoints() {
        let a = Matrix::compose(
            &Vector3::ONE,
            &Quaternion::rotation_axis(Vector3::UP, 0.3),
            &Vector3::new(0.0, 0.0, 0.0),
        );
        let b = Matrix::compose(
            &Vector3::new(2.0, 2.0, 2.0),
            &Quaternion::rotation_axis(Vector3::UP, 1.3),
            &Vector3::new(10.0, 0.0, 0.0),
        );
        assert_matrix_eq(&Matrix::decompose_lerp(&a, &b, 0.0), &a, EPSILON);
        assert_matrix_eq(&Matrix::decompose_lerp(&a, &b, 1.0), &b, EPSILON);
    }

    #[test]
    fn test_decompose_lerp_midpoint_translation() {
        let a = Matrix::translation(0.0, 0.0, 0.0);
        let b = Matrix::translation(10.0, 20.0, 30.0);
        let mid = Matrix::decompose_lerp(&a, &b, 0.5);
        assert!(mid.get_translation().equals_with_epsilon(&Vector3::new(5.0, 10.0, 15.0), EPSILON));
    }

    #[test]
    fn test_rotation_axis_matches_axis_builders() {
        for angle in [0.3, FRAC_PI_3, 1.9] {
            assert_matrix_eq(&Matrix::rotation_axis(Vector3::RIGHT, angle), &Matrix::rotation_x(angle), 1e-5);
            assert_matrix_eq(&Matrix::rotation_axis(Vector3::UP, angle), &Matrix::rotation_y(angle), 1e-5);
            assert_matrix_eq(&Matrix::rotation_axis(Vector3::FORWARD, angle), &Matrix::rotation_z(angle), 1e-5);
        }
    }

    #[test]
    fn test_rotation_matrix_quaternion_roundtrip() {
        let m = Matrix::rotation_axis(Vector3::new(1.0, 1.0, 0.0), FRAC_PI_3);
        let q = Quaternion::from_rotation_matrix(&m);
        assert_matrix_eq(&q.to_rotation_matrix(), &m, EPSILON);
    }

    #[test]
    fn test_rotation_x_rotates_up_to_forward() {
        let m = Matrix::rotation_x(FRAC_PI_2);
        let v = Vector3::transform_coordinates(&Vector3::UP, &m);
        assert!(v.equals_with_epsilon(&Vector3::FORWARD, EPSILON));
    }

    #[test]
    fn test_look_at_lh_origin() {
        // Camera at origin looking down +Z: view is identity.
        let m = Matrix::look_at_lh(&Vector3::ZERO, &Vector3::FORWARD, &Vector3::UP);
        assert_matrix_eq(&m, &Matrix::identity(), EPSILON);
    }

    #[test]
    fn test_look_at_lh_translates_eye_to_origin() {
        let eye = Vector3::new(3.0, 4.0, 5.0);
        let m = Matrix::look_at_lh(&eye, &(eye + Vector3::FORWARD), &Vector3::UP);
        let v = Vector3::transform_coordinates(&eye, &m);
        assert!(v.equals_with_epsilon(&Vector3::ZERO, EPSILON));
    }

    #[test]
    fn test_look_at_collinear_up_fallback() {
        // up parallel to the view direction: x axis falls back to +X
        // instead of NaN.
        let m = Matrix::look_at_lh(&Vector3::ZERO, &Vector3::UP, &Vector3::UP);
        assert!(m.m().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_perspective_fov_lh_signature() {
        let m = Matrix::perspective_fov_lh(FRAC_PI_2, 1.0, 0.1, 100.0);
        let cells = m.m();
        assert!((cells[0] - cells[5]).abs() < 1e-6);
        assert_eq!(cells[11], 1.0);
        assert_eq!(cells[15], 0.0);
    }

    #[test]
    fn test_perspective_fov_rh_signature() {
        let m = Matrix::perspective_fov_rh(FRAC_PI_2, 1.0, 0.1, 100.0);
        assert_eq!(m.m()[11], -1.0);
        assert_eq!(m.m()[15], 0.0);
    }

    #[test]
    fn test_perspective_lh_maps_near_far() {
        let (n, f) = (0.1, 100.0);
        let m = Matrix::perspective_fov_lh(FRAC_PI_2, 1.0, n, f);
        let near_pt = Vector3::transform_coordinates(&Vector3::new(0.0, 0.0, n), &m);
        let far_pt = Vector3::transform_coordinates(&Vector3::new(0.0, 0.0, f), &m);
        assert!(near_pt.z.abs() < EPSILON);
        assert!((far_pt.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ortho_lh_maps_extents() {
        let m = Matrix::ortho_lh(4.0, 2.0, 0.0, 10.0);
        let p = Vector3::transform_coordinates(&Vector3::new(2.0, 1.0, 10.0), &m);
        assert!(p.equals_with_epsilon(&Vector3::new(1.0, 1.0, 1.0), EPSILON));
    }

    #[test]
    fn test_ortho_off_center_rh_flips_z() {
        let lh = Matrix::ortho_off_center_lh(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
        let rh = Matrix::ortho_off_center_rh(-1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
        assert_eq!(rh.m()[10], -lh.m()[10]);
    }

    #[test]
    fn test_get_row_out_of_range() {
        let m = Matrix::identity();
        assert!(m.get_row(4).is_none());
        assert_eq!(m.get_row(0), Some(Vector4::new(1.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_set_row_out_of_range_is_noop() {
        let mut m = Matrix::identity();
        let before = m.as_array();
        m.set_row(7, &Vector4::ONE);
        assert_eq!(m.as_array(), before);
    }

    #[test]
    fn test_get_rotation_matrix_strips_scale() {
        let m = Matrix::compose(
            &Vector3::new(3.0, 3.0, 3.0),
            &Quaternion::rotation_axis(Vector3::UP, 0.8),
            &Vector3::new(1.0, 2.0, 3.0),
        );
        let r = m.get_rotation_matrix();
        assert_matrix_eq(&r, &Matrix::rotation_y(0.8), EPSILON);
    }

    #[test]
    fn test_from_array_roundtrip() {
        let mut buf = [0.0f32; 20];
        let m = Matrix::rotation_yaw_pitch_roll(0.1, 0.2, 0.3);
        m.to_array(&mut buf, 4);
        let m2 = Matrix::from_array(&buf, 4);
        assert_matrix_eq(&m2, &m, 0.0);
    }

    #[test]
    fn test_half_turn_yaw_flips_forward() {
        let m = Matrix::rotation_yaw_pitch_roll(PI, 0.0, 0.0);
        let v = Vector3::transform_coordinates(&Vector3::FORWARD, &m);
        assert!(v.equals_with_epsilon(&Vector3::BACKWARD, EPSILON));
    }
}
