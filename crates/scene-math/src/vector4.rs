//! 4D homogeneous vector type.

use crate::matrix::Matrix;
use crate::scalar;
use crate::vector3::Vector3;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 4-component homogeneous vector.
///
/// Used for matrix rows and clip-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// W component.
    pub w: f32,
}

impl Vector4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new vector.
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

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Normalizes in place; lengths of 0 and 1 are no-ops.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 || len == 1.0 {
            return self;
        }
        self.scale_in_place(1.0 / len)
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

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f32) -> Self {
        Self::new(
            start.x + (end.x - start.x) * amount,
            start.y + (end.y - start.y) * amount,
            start.z + (end.z - start.z) * amount,
            start.w + (end.w - start.w) * amount,
        )
    }

    /// Transforms a Vector4 by a 4x4 matrix.
    #[inline]
    pub fn transform(vector: &Self, transformation: &Matrix) -> Self {
        let mut result = Self::ZERO;
        Self::transform_to_ref(vector, transformation, &mut result);
        result
    }

    /// Matrix transform written into `result`.
    ///
    /// Reads all inputs before writing, so `result` may alias `vector`.
    pub fn transform_to_ref(vector: &Self, transformation: &Matrix, result: &mut Self) {
        let m = transformation.m();
        let x = vector.x * m[0] + vector.y * m[4] + vector.z * m[8] + vector.w * m[12];
        let y = vector.x * m[1] + vector.y * m[5] + vector.z * m[9] + vector.w * m[13];
        let z = vector.x * m[2] + vector.y * m[6] + vector.z * m[10] + vector.w * m[14];
        let w = vector.x * m[3] + vector.y * m[7] + vector.z * m[11] + vector.w * m[15];
        result.set(x, y, z, w);
    }

    /// The x/y/z components as a [`Vector3`].
    #[inline]
    pub const fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Builds a Vector4 from a [`Vector3`] and a w component.
    #[inline]
    pub const fn from_vector3(v: &Vector3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
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
}

impl Add for Vector4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl AddAssign for Vector4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl Sub for Vector4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl SubAssign for Vector4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl Neg for Vector4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;

    #[inline]
    fn mul(self, rhs: Vector4) -> Vector4 {
        rhs.scale(self)
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(v: Vector4) -> [f32; 4] {
        v.as_array()
    }
}
