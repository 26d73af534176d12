//! 2D vector type for screen-space and path math.

use crate::matrix::Matrix;
use crate::scalar;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A 2-component vector.
///
/// Used for screen coordinates, UVs, and the 2D path helpers.
///
/// # Example
///
/// ```rust
/// use scene_math::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vector2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Reads two components from `data` starting at `offset`.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        Self::new(data[offset], data[offset + 1])
    }

    /// Writes the components into `dst` starting at `index`.
    #[inline]
    pub fn to_array(&self, dst: &mut [f32], index: usize) {
        dst[index] = self.x;
        dst[index + 1] = self.y;
    }

    /// Returns the components as a fresh array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Sets both components.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Copies the components of `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.set(source.x, source.y)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Normalizes in place; lengths of 0 and 1 are no-ops, matching
    /// [`Vector3::normalize`](crate::Vector3::normalize).
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 || len == 1.0 {
            return self;
        }
        let inv = 1.0 / len;
        self.x *= inv;
        self.y *= inv;
        self
    }

    /// Returns a normalized copy.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Multiplies each component by `factor` in place.
    #[inline]
    pub fn scale_in_place(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
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
        dx * dx + dy * dy
    }

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f32) -> Self {
        Self::new(
            start.x + (end.x - start.x) * amount,
            start.y + (end.y - start.y) * amount,
        )
    }

    /// Catmull-Rom interpolation through four control points.
    ///
    /// Same blending polynomial as
    /// [`Vector3::catmull_rom`](crate::Vector3::catmull_rom).
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
        )
    }

    /// Cubic Hermite interpolation between two points with tangents.
    ///
    /// Same blending polynomials as
    /// [`Vector3::hermite`](crate::Vector3::hermite).
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
        )
    }

    /// Component-wise minimum.
    #[inline]
    pub fn minimize(left: &Self, right: &Self) -> Self {
        Self::new(left.x.min(right.x), left.y.min(right.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn maximize(left: &Self, right: &Self) -> Self {
        Self::new(left.x.max(right.x), left.y.max(right.y))
    }

    /// Clamps each component between `min` and `max`.
    #[inline]
    pub fn clamp(&self, min: &Self, max: &Self) -> Self {
        Self::minimize(&Self::maximize(self, min), max)
    }

    /// Transforms the vector by a 4x4 matrix (x/y rows, with translation).
    #[inline]
    pub fn transform(vector: &Self, transformation: &Matrix) -> Self {
        let mut result = Self::ZERO;
        Self::transform_to_ref(vector, transformation, &mut result);
        result
    }

    /// Matrix transform written into `result`.
    #[inline]
    pub fn transform_to_ref(vector: &Self, transformation: &Matrix, result: &mut Self) {
        let m = transformation.m();
        let x = vector.x * m[0] + vector.y * m[4] + m[12];
        let y = vector.x * m[1] + vector.y * m[5] + m[13];
        result.x = x;
        result.y = y;
    }

    /// Returns `true` if the point lies inside the triangle `p0 p1 p2`.
    pub fn point_in_triangle(p: &Self, p0: &Self, p1: &Self, p2: &Self) -> bool {
        let a = 0.5 * (-p1.y * p2.x + p0.y * (-p1.x + p2.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y);
        let sign = if a < 0.0 { -1.0 } else { 1.0 };
        let s = (p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * p.x + (p0.x - p2.x) * p.y) * sign;
        let t = (p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * p.x + (p1.x - p0.x) * p.y) * sign;
        s > 0.0 && t > 0.0 && (s + t) < 2.0 * a * sign
    }

    /// Exact component equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Component equality within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.x, other.x, epsilon) && scalar::with_epsilon(self.y, other.y, epsilon)
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.scale(self)
    }
}

impl Div for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(v: Vector2) -> [f32; 2] {
        v.as_array()
    }
}
