//! Quaternion rotation type and its conversions.
//!
//! [`Quaternion`] is the rotation currency of the transform stack: matrices
//! decompose into it, Euler angles convert through it, and animation blends
//! interpolate it with [`Quaternion::slerp`].
//!
//! Normalization is not enforced. Repeated composition and interpolation
//! drift away from unit length; callers re-normalize at their own cadence.
//!
//! # Conventions
//!
//! - Identity is (0, 0, 0, 1).
//! - The Hamilton product sign pattern in [`Quaternion::multiply_to_ref`]
//!   fixes the composition order for the whole rotation stack.
//! - Euler extraction is YZX order with a hard guard band at the gimbal
//!   singularity.
//!
//! # Usage
//!
//! ```rust
//! use scene_math::Quaternion;
//!
//! let q = Quaternion::rotation_yaw_pitch_roll(0.0, 0.0, 0.0);
//! assert_eq!(q, Quaternion::IDENTITY);
//! ```

use crate::matrix::Matrix;
use crate::scalar;
use crate::vector3::Vector3;
use std::ops::{Add, Mul, Neg, Sub};

/// Gimbal-lock guard band for YZX Euler extraction.
///
/// Hand-tuned in the reference renderer; changing it shifts where the
/// 2-DOF fallback kicks in and produces behavioral drift. Keep literal.
const EULER_SINGULARITY_LIMIT: f32 = 0.4999999;

/// Above this dot product, slerp falls back to linear interpolation to
/// avoid dividing by a near-zero sine. Keep literal.
const SLERP_LERP_THRESHOLD: f32 = 0.999999;

/// A rotation stored as (x, y, z, w).
///
/// (x, y, z) is the vector part, w the scalar part. A normalized quaternion
/// satisfies x² + y² + z² + w² = 1, but the type does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// X component of the vector part.
    pub x: f32,
    /// Y component of the vector part.
    pub y: f32,
    /// Z component of the vector part.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quaternion {
    /// The identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Reads four components from `data` starting at `offset`.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        Self::new(data[offset], data[offset + 1], data[offset + 2], data[offset + 3])
    }

    /// Writes the components into `dst` starting at `index`.
    #[inline]
    pub fn to_array(&self, dst: &mut [f32], index: usize) {
        dst[index] = self.x;
        dst[index + 1] = self.y;
        dst[index + 2] = self.z;
        dst[index + 3] = self.w;
    }

    /// Returns the components as a fresh array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Sets all four components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }

    /// Copies the components of `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.set(source.x, source.y, source.z, source.w)
    }

    /// Exact component equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }

    /// Component equality within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.x, other.x, epsilon)
            && scalar::with_epsilon(self.y, other.y, epsilon)
            && scalar::with_epsilon(self.z, other.z, epsilon)
            && scalar::with_epsilon(self.w, other.w, epsilon)
    }

    /// Returns `true` if this is exactly the identity rotation.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.equals(&Self::IDENTITY)
    }

    /// Quaternion norm.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared norm.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(left: &Self, right: &Self) -> f32 {
        left.x * right.x + left.y * right.y + left.z * right.z + left.w * right.w
    }

    /// Normalizes in place; lengths of 0 and 1 are no-ops, matching the
    /// vector types.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 || len == 1.0 {
            return self;
        }
        self.scale_in_place(1.0 / len)
    }

    /// Returns a normalized copy.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor, self.w * factor)
    }

    /// Multiplies each component by `factor` in place.
    #[inline]
    pub fn scale_in_place(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self.w *= factor;
        self
    }

    /// Adds `self * factor` onto `result`.
    #[inline]
    pub fn scale_and_add_to_ref(&self, factor: f32, result: &mut Self) {
        result.x += self.x * factor;
        result.y += self.y * factor;
        result.z += self.z * factor;
        result.w += self.w * factor;
    }

    /// Returns the conjugate (-x, -y, -z, w).
    ///
    /// For a normalized quaternion the conjugate is the inverse rotation.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Conjugates in place.
    #[inline]
    pub fn conjugate_in_place(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Writes the conjugate of `self` into `result`.
    #[inline]
    pub fn conjugate_to_ref(&self, result: &mut Self) {
        result.set(-self.x, -self.y, -self.z, self.w);
    }

    /// Returns the inverse rotation: conjugate divided by the squared norm.
    ///
    /// Zero-norm input returns itself unchanged (degenerate no-op, never
    /// NaN), matching the normalize policy.
    #[inline]
    pub fn invert(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 || len_sq == 1.0 {
            return self.conjugate();
        }
        self.conjugate().scale(1.0 / len_sq)
    }

    /// Hamilton product `self * other`.
    ///
    /// The sign pattern fixes left/right composition semantics for the
    /// whole rotation stack:
    ///
    /// ```text
    /// x =  x1*w2 + y1*z2 - z1*y2 + w1*x2
    /// y = -x1*z2 + y1*w2 + z1*x2 + w1*y2
    /// z =  x1*y2 - y1*x2 + z1*w2 + w1*z2
    /// w = -x1*x2 - y1*y2 - z1*z2 + w1*w2
    /// ```
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::IDENTITY;
        self.multiply_to_ref(other, &mut result);
        result
    }

    /// Hamilton product written into `result`.
    ///
    /// All components are computed into locals first; `result` may alias
    /// either operand.
    pub fn multiply_to_ref(&self, other: &Self, result: &mut Self) {
        let x = self.x * other.w + self.y * other.z - self.z * other.y + self.w * other.x;
        let y = -self.x * other.z + self.y * other.w + self.z * other.x + self.w * other.y;
        let z = self.x * other.y - self.y * other.x + self.z * other.w + self.w * other.z;
        let w = -self.x * other.x - self.y * other.y - self.z * other.z + self.w * other.w;
        result.set(x, y, z, w);
    }

    /// Hamilton product in place (`self = self * other`).
    #[inline]
    pub fn multiply_in_place(&mut self, other: &Self) -> &mut Self {
        let copy = *self;
        copy.multiply_to_ref(other, self);
        self
    }

    /// Extracts YZX-order Euler angles (radians) into a new vector.
    ///
    /// See [`to_euler_angles_to_ref`](Self::to_euler_angles_to_ref).
    #[inline]
    pub fn to_euler_angles(&self) -> Vector3 {
        let mut result = Vector3::ZERO;
        self.to_euler_angles_to_ref(&mut result);
        result
    }

    /// Extracts YZX-order Euler angles (radians) into `result`.
    ///
    /// Near the gimbal singularity (`|qy*qz - qx*qw| > 0.4999999`) the
    /// extraction collapses to two degrees of freedom: x pins to ±π/2,
    /// z zeroes out, and y carries the remaining rotation as
    /// `2 * atan2(qy, qw)`. Inside the guard band output stays continuous;
    /// the band itself is a tuned constant, not a derivable epsilon.
    pub fn to_euler_angles_to_ref(&self, result: &mut Vector3) {
        let qz = self.z;
        let qx = self.x;
        let qy = self.y;
        let qw = self.w;

        let z_axis_y = qy * qz - qx * qw;

        if z_axis_y < -EULER_SINGULARITY_LIMIT {
            result.y = 2.0 * qy.atan2(qw);
            result.x = std::f32::consts::FRAC_PI_2;
            result.z = 0.0;
        } else if z_axis_y > EULER_SINGULARITY_LIMIT {
            result.y = 2.0 * qy.atan2(qw);
            result.x = -std::f32::consts::FRAC_PI_2;
            result.z = 0.0;
        } else {
            let sqw = qw * qw;
            let sqz = qz * qz;
            let sqx = qx * qx;
            let sqy = qy * qy;
            result.z = (2.0 * (qx * qy + qz * qw)).atan2(-sqz - sqx + sqy + sqw);
            result.x = (-2.0 * (qz * qy - qx * qw)).asin();
            result.y = (2.0 * (qz * qx + qy * qw)).atan2(sqz - sqx - sqy + sqw);
        }
    }

    /// Builds a rotation from yaw (around Y), pitch (around X), and roll
    /// (around Z), composed in Y-X-Z intrinsic order.
    ///
    /// `rotation_yaw_pitch_roll(0, 0, 0)` is exactly the identity, and
    /// `to_euler_angles` round-trips the result for non-gimbal inputs.
    #[inline]
    pub fn rotation_yaw_pitch_roll(yaw: f32, pitch: f32, roll: f32) -> Self {
        let mut result = Self::IDENTITY;
        Self::rotation_yaw_pitch_roll_to_ref(yaw, pitch, roll, &mut result);
        result
    }

    /// Yaw-pitch-roll rotation written into `result`.
    ///
    /// Half-angle product form; term order and signs are load-bearing for
    /// the Euler round-trip contract.
    pub fn rotation_yaw_pitch_roll_to_ref(yaw: f32, pitch: f32, roll: f32, result: &mut Self) {
        let half_roll = roll * 0.5;
        let half_pitch = pitch * 0.5;
        let half_yaw = yaw * 0.5;

        let (sin_roll, cos_roll) = half_roll.sin_cos();
        let (sin_pitch, cos_pitch) = half_pitch.sin_cos();
        let (sin_yaw, cos_yaw) = half_yaw.sin_cos();

        result.x = cos_yaw * sin_pitch * cos_roll + sin_yaw * cos_pitch * sin_roll;
        result.y = sin_yaw * cos_pitch * cos_roll - cos_yaw * sin_pitch * sin_roll;
        result.z = cos_yaw * cos_pitch * sin_roll - sin_yaw * sin_pitch * cos_roll;
        result.w = cos_yaw * cos_pitch * cos_roll + sin_yaw * sin_pitch * sin_roll;
    }

    /// Builds a rotation from Euler angles (x = pitch, y = yaw, z = roll).
    #[inline]
    pub fn from_euler_angles(x: f32, y: f32, z: f32) -> Self {
        Self::rotation_yaw_pitch_roll(y, x, z)
    }

    /// Builds a rotation from Euler angles stored in a vector.
    #[inline]
    pub fn from_euler_vector(rotation: &Vector3) -> Self {
        Self::rotation_yaw_pitch_roll(rotation.y, rotation.x, rotation.z)
    }

    /// Builds a rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized internally (zero axis stays zero, producing
    /// a w-only quaternion).
    #[inline]
    pub fn rotation_axis(axis: Vector3, angle: f32) -> Self {
        let mut result = Self::IDENTITY;
        Self::rotation_axis_to_ref(axis, angle, &mut result);
        result
    }

    /// Axis-angle rotation written into `result`.
    pub fn rotation_axis_to_ref(mut axis: Vector3, angle: f32, result: &mut Self) {
        let sin = (angle * 0.5).sin();
        axis.normalize();
        result.w = (angle * 0.5).cos();
        result.x = axis.x * sin;
        result.y = axis.y * sin;
        result.z = axis.z * sin;
    }

    /// Extracts the rotation of a matrix's upper 3x3 block.
    ///
    /// The matrix is expected to carry no scale; decompose first otherwise.
    #[inline]
    pub fn from_rotation_matrix(matrix: &Matrix) -> Self {
        let mut result = Self::IDENTITY;
        Self::from_rotation_matrix_to_ref(matrix, &mut result);
        result
    }

    /// Matrix-to-quaternion extraction written into `result`.
    ///
    /// Classic four-branch trace algorithm: branch on `trace > 0`, else on
    /// the largest diagonal element, so the square root always acts on the
    /// dominant component and no branch divides by a near-zero value. The
    /// sign/index pattern per branch matches the 16-float storage exactly.
    pub fn from_rotation_matrix_to_ref(matrix: &Matrix, result: &mut Self) {
        let data = matrix.m();
        let m11 = data[0];
        let m12 = data[4];
        let m13 = data[8];
        let m21 = data[1];
        let m22 = data[5];
        let m23 = data[9];
        let m31 = data[2];
        let m32 = data[6];
        let m33 = data[10];

        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            result.w = 0.25 / s;
            result.x = (m32 - m23) * s;
            result.y = (m13 - m31) * s;
            result.z = (m21 - m12) * s;
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            result.w = (m32 - m23) / s;
            result.x = 0.25 * s;
            result.y = (m12 + m21) / s;
            result.z = (m13 + m31) / s;
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            result.w = (m13 - m31) / s;
            result.x = (m12 + m21) / s;
            result.y = 0.25 * s;
            result.z = (m23 + m32) / s;
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            result.w = (m21 - m12) / s;
            result.x = (m13 + m31) / s;
            result.y = (m23 + m32) / s;
            result.z = 0.25 * s;
        }
    }

    /// Converts to a rotation matrix.
    #[inline]
    pub fn to_rotation_matrix(&self) -> Matrix {
        let mut result = Matrix::identity();
        self.to_rotation_matrix_to_ref(&mut result);
        result
    }

    /// Quaternion-to-matrix conversion written into `result`.
    #[inline]
    pub fn to_rotation_matrix_to_ref(&self, result: &mut Matrix) {
        Matrix::from_quaternion_to_ref(self, result);
    }

    /// Builds the rotation mapping the canonical basis onto the given
    /// (expected-orthonormal) axis triple.
    ///
    /// Axes are normalized but orthogonality is not validated.
    #[inline]
    pub fn rotation_quaternion_from_axis(axis1: Vector3, axis2: Vector3, axis3: Vector3) -> Self {
        let mut result = Self::IDENTITY;
        Self::rotation_quaternion_from_axis_to_ref(axis1, axis2, axis3, &mut result);
        result
    }

    /// Axis-triple rotation written into `result`.
    pub fn rotation_quaternion_from_axis_to_ref(
        mut axis1: Vector3,
        mut axis2: Vector3,
        mut axis3: Vector3,
        result: &mut Self,
    ) {
        let mut rotation = Matrix::identity();
        axis1.normalize();
        axis2.normalize();
        axis3.normalize();
        Matrix::from_xyz_axes_to_ref(&axis1, &axis2, &axis3, &mut rotation);
        Self::from_rotation_matrix_to_ref(&rotation, result);
    }

    /// Spherical interpolation between two rotations.
    ///
    /// See [`slerp_to_ref`](Self::slerp_to_ref).
    #[inline]
    pub fn slerp(left: &Self, right: &Self, amount: f32) -> Self {
        let mut result = Self::IDENTITY;
        Self::slerp_to_ref(left, right, amount, &mut result);
        result
    }

    /// Spherical interpolation written into `result`.
    ///
    /// When the dot product is negative the right-hand side is traversed
    /// negated, guaranteeing the shortest great-circle path. Above a dot of
    /// 0.999999 the arc is too small for a stable sine division and the
    /// blend degrades to (normalization-free) linear weights.
    pub fn slerp_to_ref(left: &Self, right: &Self, amount: f32, result: &mut Self) {
        let mut cos_half_theta = Self::dot(left, right);
        let flipped = cos_half_theta < 0.0;
        if flipped {
            cos_half_theta = -cos_half_theta;
        }

        let (scale_left, scale_right) = if cos_half_theta > SLERP_LERP_THRESHOLD {
            (1.0 - amount, if flipped { -amount } else { amount })
        } else {
            let half_theta = cos_half_theta.acos();
            let inv_sin = 1.0 / half_theta.sin();
            let left_w = ((1.0 - amount) * half_theta).sin() * inv_sin;
            let right_w = (amount * half_theta).sin() * inv_sin;
            (left_w, if flipped { -right_w } else { right_w })
        };

        result.x = scale_left * left.x + scale_right * right.x;
        result.y = scale_left * left.y + scale_right * right.y;
        result.z = scale_left * left.z + scale_right * right.z;
        result.w = scale_left * left.w + scale_right * right.w;
    }

    /// Converts to a glam quaternion.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from a glam quaternion.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl From<glam::Quat> for Quaternion {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quaternion> for glam::Quat {
    #[inline]
    fn from(q: Quaternion) -> glam::Quat {
        q.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

    #[test]
    fn test_identity_yaw_pitch_roll() {
        assert_eq!(Quaternion::rotation_yaw_pitch_roll(0.0, 0.0, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_multiply_identity() {
        let q = Quaternion::rotation_yaw_pitch_roll(0.3, 0.2, 0.1);
        assert!(q.multiply(&Quaternion::IDENTITY).equals_with_epsilon(&q, EPSILON));
        assert!(Quaternion::IDENTITY.multiply(&q).equals_with_epsilon(&q, EPSILON));
    }

    #[test]
    fn test_multiply_inverse_is_identity() {
        let q = Quaternion::rotation_yaw_pitch_roll(1.0, -0.5, 0.25);
        let product = q.multiply(&q.invert());
        assert!(product.equals_with_epsilon(&Quaternion::IDENTITY, EPSILON));
    }

    #[test]
    fn test_multiply_in_place_matches() {
        let a = Quaternion::rotation_yaw_pitch_roll(0.4, 0.1, -0.3);
        let b = Quaternion::rotation_yaw_pitch_roll(-0.2, 0.6, 0.0);
        let expected = a.multiply(&b);
        let mut q = a;
        q.multiply_in_place(&b);
        assert_eq!(q, expected);
    }

    #[test]
    fn test_normalize_zero_noop() {
        let mut q = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        q.normalize();
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_conjugate_roundtrip() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate().conjugate(), q);
    }

    #[test]
    fn test_rotation_axis_half_turn() {
        let q = Quaternion::rotation_axis(Vector3::UP, PI);
        assert!(scalar::with_epsilon(q.y, 1.0, EPSILON));
        assert!(scalar::with_epsilon(q.w, 0.0, EPSILON));
    }

    #[test]
    fn test_euler_roundtrip() {
        // Away from the gimbal band, yaw-pitch-roll -> euler extraction
        // must round-trip.
        let cases = [
            (0.3, 0.2, 0.1),
            (-1.0, 0.5, 0.8),
            (FRAC_PI_3, -FRAC_PI_4, 0.0),
            (2.5, 0.1, -1.2),
        ];
        for (yaw, pitch, roll) in cases {
            let q = Quaternion::rotation_yaw_pitch_roll(yaw, pitch, roll);
            let e = q.to_euler_angles();
            let q2 = Quaternion::rotation_yaw_pitch_roll(e.y, e.x, e.z);
            // Compare rotations, not raw components (q and -q are the
            // same rotation).
            let dot = Quaternion::dot(&q, &q2).abs();
            assert!(dot > 1.0 - EPSILON, "roundtrip failed for ({yaw}, {pitch}, {roll}): dot = {dot}");
        }
    }

    #[test]
    fn test_euler_gimbal_lock_branch() {
        // Pitch at -PI/2 drives qy*qz - qx*qw into the guard band; output
        // must stay finite with z pinned to zero.
        let q = Quaternion::rotation_yaw_pitch_roll(0.7, -FRAC_PI_2, 0.0);
        let e = q.to_euler_angles();
        assert!(e.x.is_finite() && e.y.is_finite());
        assert_eq!(e.z, 0.0);
    }

    #[test]
    fn test_matrix_roundtrip() {
        let axis = Vector3::new(1.0, 2.0, -1.0);
        for angle in [0.1, FRAC_PI_3, 1.5, 2.8] {
            let q = Quaternion::rotation_axis(axis, angle);
            let m = q.to_rotation_matrix();
            let q2 = Quaternion::from_rotation_matrix(&m);
            let dot = Quaternion::dot(&q, &q2).abs();
            assert!(dot > 1.0 - EPSILON, "matrix roundtrip failed at angle {angle}");
        }
    }

    #[test]
    fn test_matrix_extraction_negative_trace_branches() {
        // Half-turns around each axis exercise the three diagonal branches.
        for axis in [Vector3::RIGHT, Vector3::UP, Vector3::FORWARD] {
            let q = Quaternion::rotation_axis(axis, PI - 0.001);
            let m = q.to_rotation_matrix();
            let q2 = Quaternion::from_rotation_matrix(&m);
            assert!(Quaternion::dot(&q, &q2).abs() > 1.0 - EPSILON);
        }
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::rotation_axis(Vector3::UP, 0.0);
        let b = Quaternion::rotation_axis(Vector3::UP, FRAC_PI_2);
        assert!(Quaternion::slerp(&a, &b, 0.0).equals_with_epsilon(&a, EPSILON));
        assert!(Quaternion::slerp(&a, &b, 1.0).equals_with_epsilon(&b, EPSILON));
    }

    #[test]
    fn test_slerp_midpoint() {
        let a = Quaternion::rotation_axis(Vector3::UP, 0.0);
        let b = Quaternion::rotation_axis(Vector3::UP, FRAC_PI_2);
        let mid = Quaternion::slerp(&a, &b, 0.5);
        let expected = Quaternion::rotation_axis(Vector3::UP, FRAC_PI_4);
        assert!(mid.equals_with_epsilon(&expected, EPSILON));
    }

    #[test]
    fn test_slerp_shortest_path() {
        // b and -b are the same rotation; slerp must take the short way.
        let a = Quaternion::rotation_axis(Vector3::UP, 0.1);
        let b = Quaternion::rotation_axis(Vector3::UP, 0.4);
        let neg_b = -b;
        let via_pos = Quaternion::slerp(&a, &b, 0.5);
        let via_neg = Quaternion::slerp(&a, &neg_b, 0.5);
        assert!(Quaternion::dot(&via_pos, &via_neg).abs() > 1.0 - EPSILON);
    }

    #[test]
    fn test_slerp_near_identical_inputs() {
        // Inside the linear fallback band: no NaN from sin division.
        let a = Quaternion::rotation_axis(Vector3::UP, 0.2);
        let b = Quaternion::rotation_axis(Vector3::UP, 0.2000001);
        let mid = Quaternion::slerp(&a, &b, 0.5);
        assert!(mid.x.is_finite() && mid.w.is_finite());
        assert!(mid.equals_with_epsilon(&a, EPSILON));
    }

    #[test]
    fn test_from_euler_vector() {
        let v = Vector3::new(0.2, 0.3, 0.4);
        assert_eq!(
            Quaternion::from_euler_vector(&v),
            Quaternion::rotation_yaw_pitch_roll(0.3, 0.2, 0.4)
        );
    }
}
