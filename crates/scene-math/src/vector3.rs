//! 3D vector type for points and directions.
//!
//! [`Vector3`] is the leaf type of the transform stack: every matrix and
//! quaternion operation ultimately reads or writes these three components.
//!
//! # Dual API
//!
//! Every operation that produces a vector exists in two forms: an owning
//! form that returns a fresh `Vector3`, and a `*_to_ref` form that writes
//! into a caller-owned output. Render loops use the `*_to_ref` forms to keep
//! hot paths allocation-free.
//!
//! # Usage
//!
//! ```rust
//! use scene_math::Vector3;
//!
//! let v = Vector3::cross(Vector3::RIGHT, Vector3::UP);
//! assert_eq!(v, Vector3::new(0.0, 0.0, 1.0));
//! ```

use crate::matrix::Matrix;
use crate::quaternion::Quaternion;
use crate::scalar;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-component point or direction.
///
/// Left-handed convention: +X right, +Y up, +Z forward.
///
/// # Example
///
/// ```rust
/// use scene_math::Vector3;
///
/// let mut v = Vector3::new(3.0, 0.0, 4.0);
/// v.normalize();
/// assert!((v.length() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Up vector (0, 1, 0).
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Down vector (0, -1, 0).
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Right vector (1, 0, 0).
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    /// Left vector (-1, 0, 0).
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);

    /// Forward vector (0, 0, 1) in the left-handed convention.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Backward vector (0, 0, -1).
    pub const BACKWARD: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Reads three components from `data` starting at `offset`.
    ///
    /// The slice must hold at least `offset + 3` elements.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        Self::new(data[offset], data[offset + 1], data[offset + 2])
    }

    /// Reads three components from `data` starting at `offset` into `result`.
    #[inline]
    pub fn from_array_to_ref(data: &[f32], offset: usize, result: &mut Self) {
        result.x = data[offset];
        result.y = data[offset + 1];
        result.z = data[offset + 2];
    }

    /// Writes the components into `dst` starting at `index`.
    #[inline]
    pub fn to_array(&self, dst: &mut [f32], index: usize) {
        dst[index] = self.x;
        dst[index + 1] = self.y;
        dst[index + 2] = self.z;
    }

    /// Returns the components as a fresh array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Copies the components of `source` into `self`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.set(source.x, source.y, source.z)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length; avoids the square root for comparisons.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Normalizes in place.
    ///
    /// Lengths of exactly 0 or 1 are no-ops: the zero vector normalizes to
    /// itself rather than NaN. Callers that need to detect the degenerate
    /// case should test `length_squared()` themselves.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        self.normalize_from_length(self.length())
    }

    /// Normalizes in place using a precomputed length.
    ///
    /// Same degenerate policy as [`normalize`](Self::normalize): 0 and 1
    /// leave the vector untouched.
    #[inline]
    pub fn normalize_from_length(&mut self, len: f32) -> &mut Self {
        if len == 0.0 || len == 1.0 {
            return self;
        }
        self.scale_in_place(1.0 / len)
    }

    /// Returns a normalized copy.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut result = *self;
        result.normalize();
        result
    }

    /// Writes a normalized copy of `self` into `result`.
    #[inline]
    pub fn normalize_to_ref(&self, result: &mut Self) {
        result.copy_from(self);
        result.normalize();
    }

    /// Multiplies each component by `factor`, returning a new vector.
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Multiplies each component by `factor` in place.
    #[inline]
    pub fn scale_in_place(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self
    }

    /// Writes `self * factor` into `result`.
    #[inline]
    pub fn scale_to_ref(&self, factor: f32, result: &mut Self) {
        result.x = self.x * factor;
        result.y = self.y * factor;
        result.z = self.z * factor;
    }

    /// Adds `self * factor` onto `result`.
    #[inline]
    pub fn scale_and_add_to_ref(&self, factor: f32, result: &mut Self) {
        result.x += self.x * factor;
        result.y += self.y * factor;
        result.z += self.z * factor;
    }

    /// Adds `other` in place.
    #[inline]
    pub fn add_in_place(&mut self, other: &Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Subtracts `other` in place.
    #[inline]
    pub fn subtract_in_place(&mut self, other: &Self) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    /// Negates in place.
    #[inline]
    pub fn negate_in_place(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Right-handed cross product of two vectors.
    ///
    /// # Formula
    ///
    /// `(ly*rz - lz*ry, lz*rx - lx*rz, lx*ry - ly*rx)`
    ///
    /// # Example
    ///
    /// ```rust
    /// use scene_math::Vector3;
    ///
    /// assert_eq!(Vector3::cross(Vector3::RIGHT, Vector3::UP), Vector3::FORWARD);
    /// ```
    #[inline]
    pub fn cross(left: Self, right: Self) -> Self {
        let mut result = Self::ZERO;
        Self::cross_to_ref(&left, &right, &mut result);
        result
    }

    /// Cross product written into `result`.
    ///
    /// All three components are computed into locals before any write, so
    /// `result` may alias either operand through a prior copy.
    #[inline]
    pub fn cross_to_ref(left: &Self, right: &Self, result: &mut Self) {
        let x = left.y * right.z - left.z * right.y;
        let y = left.z * right.x - left.x * right.z;
        let z = left.x * right.y - left.y * right.x;
        result.set(x, y, z);
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(a: &Self, b: &Self) -> f32 {
        Self::distance_squared(a, b).sqrt()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn distance_squared(a: &Self, b: &Self) -> f32 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f32) -> Self {
        let mut result = Self::ZERO;
        Self::lerp_to_ref(start, end, amount, &mut result);
        result
    }

    /// Component-wise linear interpolation written into `result`.
    #[inline]
    pub fn lerp_to_ref(start: &Self, end: &Self, amount: f32, result: &mut Self) {
        result.x = start.x + (end.x - start.x) * amount;
        result.y = start.y + (end.y - start.y) * amount;
        result.z = start.z + (end.z - start.z) * amount;
    }

    /// Cubic Hermite interpolation between two points with tangents.
    ///
    /// # Blending polynomials
    ///
    /// With `s = amount`, `s2 = s*s`, `s3 = s*s*s`:
    ///
    /// ```text
    /// h1 =  2*s3 - 3*s2 + 1   (value1)
    /// h2 = -2*s3 + 3*s2       (value2)
    /// h3 =    s3 - 2*s2 + s   (tangent1)
    /// h4 =    s3 -   s2       (tangent2)
    /// ```
    ///
    /// Consumers depend on these exact coefficients for bit-compatible
    /// animation curves.
    pub fn hermite(value1: &Self, tangent1: &Self, value2: &Self, tangent2: &Self, amount: f32) -> Self {
        let squared = amount * amount;
        let cubed = amount * squared;
        let part1 = 2.0 * cubed - 3.0 * squared + 1.0;
        let part2 = -2.0 * cubed + 3.0 * squared;
        let part3 = cubed - 2.0 * squared + amount;
        let part4 = cubed - squared;
        Self::new(
            value1.x * part1 + value2.x * part2 + tangent1.x * part3 + tangent2.x * part4,
            value1.y * part1 + value2.y * part2 + tangent1.y * part3 + tangent2.y * part4,
            value1.z * part1 + value2.z * part2 + tangent1.z * part3 + tangent2.z * part4,
        )
    }

    /// Catmull-Rom interpolation through four control points.
    ///
    /// # Blending polynomial
    ///
    /// With `s = amount`, `s2 = s*s`, `s3 = s*s*s`:
    ///
    /// ```text
    /// 0.5 * (2*v2
    ///        + (-v1 + v3) * s
    ///        + (2*v1 - 5*v2 + 4*v3 - v4) * s2
    ///        + (-v1 + 3*v2 - 3*v3 + v4) * s3)
    /// ```
    pub fn catmull_rom(value1: &Self, value2: &Self, value3: &Self, value4: &Self, amount: f32) -> Self {
        let squared = amount * amount;
        let cubed = amount * squared;
        Self::new(
            0.5 * ((2.0 * value2.x)
                + (-value1.x + value3.x) * amount
                + (2.0 * value1.x - 5.0 * value2.x + 4.0 * value3.x - value4.x) * squared
                + (-value1.x + 3.0 * value2.x - 3.0 * value3.x + value4.x) * cubed),
            0.5 * ((2.0 * value2.y)
                + (-value1.y + value3.y) * amount
                + (2.0 * value1.y - 5.0 * value2.y + 4.0 * value3.y - value4.y) * squared
                + (-value1.y + 3.0 * value2.y - 3.0 * value3.y + value4.y) * cubed),
            0.5 * ((2.0 * value2.z)
                + (-value1.z + value3.z) * amount
                + (2.0 * value1.z - 5.0 * value2.z + 4.0 * value3.z - value4.z) * squared
                + (-value1.z + 3.0 * value2.z - 3.0 * value3.z + value4.z) * cubed),
        )
    }

    /// Transforms a point by a full 4x4 matrix, including translation and
    /// perspective divide.
    ///
    /// The homogeneous `w` is computed from the matrix's fourth column
    /// (`m[3], m[7], m[11], m[15]`) and divides the result. Use
    /// [`transform_normal`](Self::transform_normal) for direction vectors.
    #[inline]
    pub fn transform_coordinates(vector: &Self, transformation: &Matrix) -> Self {
        let mut result = Self::ZERO;
        Self::transform_coordinates_to_ref(vector, transformation, &mut result);
        result
    }

    /// Point transform written into `result`.
    #[inline]
    pub fn transform_coordinates_to_ref(vector: &Self, transformation: &Matrix, result: &mut Self) {
        Self::transform_coordinates_from_floats_to_ref(vector.x, vector.y, vector.z, transformation, result);
    }

    /// Point transform from raw components written into `result`.
    pub fn transform_coordinates_from_floats_to_ref(
        x: f32,
        y: f32,
        z: f32,
        transformation: &Matrix,
        result: &mut Self,
    ) {
        let m = transformation.m();
        let rx = x * m[0] + y * m[4] + z * m[8] + m[12];
        let ry = x * m[1] + y * m[5] + z * m[9] + m[13];
        let rz = x * m[2] + y * m[6] + z * m[10] + m[14];
        let rw = 1.0 / (x * m[3] + y * m[7] + z * m[11] + m[15]);
        result.x = rx * rw;
        result.y = ry * rw;
        result.z = rz * rw;
    }

    /// Transforms a direction by the rotation/scale part of a matrix.
    ///
    /// Translation and perspective divide are omitted, so directions stay
    /// directions.
    #[inline]
    pub fn transform_normal(vector: &Self, transformation: &Matrix) -> Self {
        let mut result = Self::ZERO;
        Self::transform_normal_to_ref(vector, transformation, &mut result);
        result
    }

    /// Direction transform written into `result`.
    #[inline]
    pub fn transform_normal_to_ref(vector: &Self, transformation: &Matrix, result: &mut Self) {
        Self::transform_normal_from_floats_to_ref(vector.x, vector.y, vector.z, transformation, result);
    }

    /// Direction transform from raw components written into `result`.
    pub fn transform_normal_from_floats_to_ref(
        x: f32,
        y: f32,
        z: f32,
        transformation: &Matrix,
        result: &mut Self,
    ) {
        let m = transformation.m();
        result.x = x * m[0] + y * m[4] + z * m[8];
        result.y = x * m[1] + y * m[5] + z * m[9];
        result.z = x * m[2] + y * m[6] + z * m[10];
    }

    /// Component-wise minimum of two vectors.
    #[inline]
    pub fn minimize(left: &Self, right: &Self) -> Self {
        Self::new(left.x.min(right.x), left.y.min(right.y), left.z.min(right.z))
    }

    /// Component-wise maximum of two vectors.
    #[inline]
    pub fn maximize(left: &Self, right: &Self) -> Self {
        Self::new(left.x.max(right.x), left.y.max(right.y), left.z.max(right.z))
    }

    /// Clamps each component between the corresponding components of
    /// `min` and `max`.
    #[inline]
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::minimize(&Self::maximize(self, min), max)
    }

    /// Exact component equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Component equality within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.x, other.x, epsilon)
            && scalar::with_epsilon(self.y, other.y, epsilon)
            && scalar::with_epsilon(self.z, other.z, epsilon)
    }

    /// Euler angles (in the library's YZX extraction order) of the rotation
    /// that maps the canonical axes onto the given axis triple.
    ///
    /// The axes are normalized internally but their orthogonality is NOT
    /// validated: passing a non-orthogonal triple silently produces a
    /// degenerate result. That contract belongs to the caller.
    #[inline]
    pub fn rotation_from_axis(axis1: Self, axis2: Self, axis3: Self) -> Self {
        let mut result = Self::ZERO;
        Self::rotation_from_axis_to_ref(axis1, axis2, axis3, &mut result);
        result
    }

    /// Axis-triple Euler extraction written into `result`.
    pub fn rotation_from_axis_to_ref(axis1: Self, axis2: Self, axis3: Self, result: &mut Self) {
        let quat = Quaternion::rotation_quaternion_from_axis(axis1, axis2, axis3);
        quat.to_euler_angles_to_ref(result);
    }

    /// Converts to a glam vector.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from a glam vector.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(&rhs);
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(&rhs);
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Component-wise product
impl Mul for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_in_place(rhs);
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

// Component-wise division
impl Div for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> [f32; 3] {
        v.as_array()
    }
}

impl From<glam::Vec3> for Vector3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector3> for glam::Vec3 {
    #[inline]
    fn from(v: Vector3) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;

    #[test]
    fn test_normalize_unit_length() {
        let mut v = Vector3::new(1.0, 2.0, 2.0);
        v.normalize();
        assert!((v.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector3::ZERO;
        v.normalize();
        assert_eq!(v, Vector3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_normalize_length_one_is_noop() {
        // normalize_from_length skips len == 1 exactly; the components must
        // come through bit-identical.
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.normalize();
        assert_eq!(v, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_cross_handedness() {
        assert_eq!(Vector3::cross(Vector3::RIGHT, Vector3::UP), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3::cross(Vector3::UP, Vector3::RIGHT), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross_result_aliases_operand() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let expected = Vector3::cross(a, b);
        let mut aliased = a;
        Vector3::cross_to_ref(&a, &b, &mut aliased);
        assert_eq!(aliased, expected);
    }

    #[test]
    fn test_dot_orthogonal() {
        assert_eq!(Vector3::RIGHT.dot(&Vector3::UP), 0.0);
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).dot(&Vector3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn test_distance() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(4.0, 4.0, 0.0);
        assert_eq!(Vector3::distance(&a, &b), 5.0);
        assert_eq!(Vector3::distance_squared(&a, &b), 25.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vector3::ZERO;
        let b = Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(Vector3::lerp(&a, &b, 0.0), a);
        assert_eq!(Vector3::lerp(&a, &b, 1.0), b);
        assert_eq!(Vector3::lerp(&a, &b, 0.5), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_hermite_endpoints() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let t1 = Vector3::new(1.0, 0.0, 0.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        let t2 = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(Vector3::hermite(&v1, &t1, &v2, &t2, 0.0), v1);
        assert_eq!(Vector3::hermite(&v1, &t1, &v2, &t2, 1.0), v2);
    }

    #[test]
    fn test_catmull_rom_passes_through_value2() {
        let v1 = Vector3::new(0.0, 0.0, 0.0);
        let v2 = Vector3::new(1.0, 1.0, 0.0);
        let v3 = Vector3::new(2.0, 0.0, 0.0);
        let v4 = Vector3::new(3.0, 1.0, 0.0);
        assert_eq!(Vector3::catmull_rom(&v1, &v2, &v3, &v4, 0.0), v2);
        assert_eq!(Vector3::catmull_rom(&v1, &v2, &v3, &v4, 1.0), v3);
    }

    #[test]
    fn test_transform_coordinates_translation() {
        let m = Matrix::translation(10.0, 20.0, 30.0);
        let v = Vector3::new(1.0, 2.0, 3.0);
        let r = Vector3::transform_coordinates(&v, &m);
        assert_eq!(r, Vector3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_transform_normal_ignores_translation() {
        let m = Matrix::translation(10.0, 20.0, 30.0);
        let v = Vector3::new(1.0, 2.0, 3.0);
        let r = Vector3::transform_normal(&v, &m);
        assert_eq!(r, v);
    }

    #[test]
    fn test_minimize_maximize() {
        let a = Vector3::new(1.0, 5.0, 3.0);
        let b = Vector3::new(2.0, 4.0, 3.0);
        assert_eq!(Vector3::minimize(&a, &b), Vector3::new(1.0, 4.0, 3.0));
        assert_eq!(Vector3::maximize(&a, &b), Vector3::new(2.0, 5.0, 3.0));
    }

    #[test]
    fn test_equals_with_epsilon() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0005, 2.0, 3.0);
        assert!(a.equals_with_epsilon(&b, EPSILON));
        assert!(!a.equals_with_epsilon(&b, 0.0001));
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * b, Vector3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_array_roundtrip() {
        let mut buf = [0.0f32; 5];
        let v = Vector3::new(1.0, 2.0, 3.0);
        v.to_array(&mut buf, 1);
        assert_eq!(buf, [0.0, 1.0, 2.0, 3.0, 0.0]);
        assert_eq!(Vector3::from_array(&buf, 1), v);
    }

    #[test]
    fn test_rotation_from_axis_canonical() {
        // Canonical basis maps to zero rotation.
        let e = Vector3::rotation_from_axis(Vector3::RIGHT, Vector3::UP, Vector3::FORWARD);
        assert!(e.equals_with_epsilon(&Vector3::ZERO, EPSILON));
    }
}
