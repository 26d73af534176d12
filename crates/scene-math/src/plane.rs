//! Infinite plane in Hesse normal form.

use crate::matrix::Matrix;
use crate::vector3::Vector3;

/// A plane described by `normal . p + d = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane normal. Not forced to unit length; call
    /// [`normalize`](Self::normalize) when distances must be metric.
    pub normal: Vector3,
    /// Signed offset along the normal.
    pub d: f32,
}

impl Plane {
    /// Creates a plane from raw normal components and offset.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self {
            normal: Vector3::new(a, b, c),
            d,
        }
    }

    /// Reads four components from `data` starting at `offset`.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        Self::new(data[offset], data[offset + 1], data[offset + 2], data[offset + 3])
    }

    /// Returns `[normal.x, normal.y, normal.z, d]`.
    #[inline]
    pub const fn as_array(&self) -> [f32; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.d]
    }

    /// Copies the components of `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.normal = source.normal;
        self.d = source.d;
        self
    }

    /// Builds the plane through three points, wound counter-clockwise.
    pub fn from_points(point1: &Vector3, point2: &Vector3, point3: &Vector3) -> Self {
        let mut result = Self::new(0.0, 0.0, 0.0, 0.0);
        result.copy_from_points(point1, point2, point3);
        result
    }

    /// Recomputes this plane from three points.
    ///
    /// Collinear points give a zero normal and `d = 0` rather than NaN.
    pub fn copy_from_points(&mut self, point1: &Vector3, point2: &Vector3, point3: &Vector3) -> &mut Self {
        let x1 = point2.x - point1.x;
        let y1 = point2.y - point1.y;
        let z1 = point2.z - point1.z;
        let x2 = point3.x - point1.x;
        let y2 = point3.y - point1.y;
        let z2 = point3.z - point1.z;

        let yz = y1 * z2 - z1 * y2;
        let zx = z1 * x2 - x1 * z2;
        let xy = x1 * y2 - y1 * x2;

        let pyth = (yz * yz + zx * zx + xy * xy).sqrt();
        let inv_pyth = if pyth != 0.0 { 1.0 / pyth } else { 0.0 };

        self.normal.set(yz * inv_pyth, zx * inv_pyth, xy * inv_pyth);
        self.d = -(self.normal.x * point1.x + self.normal.y * point1.y + self.normal.z * point1.z);
        self
    }

    /// Builds the plane through `origin` with the given normal.
    ///
    /// The normal is normalized internally.
    pub fn from_point_and_normal(origin: &Vector3, normal: &Vector3) -> Self {
        let mut n = *normal;
        n.normalize();
        Self {
            normal: n,
            d: -(origin.x * n.x + origin.y * n.y + origin.z * n.z),
        }
    }

    /// Normalizes the plane equation in place.
    ///
    /// A zero normal collapses all four components to zero instead of
    /// dividing by zero.
    pub fn normalize(&mut self) -> &mut Self {
        let norm = (self.normal.x * self.normal.x
            + self.normal.y * self.normal.y
            + self.normal.z * self.normal.z)
            .sqrt();
        let magnitude = if norm != 0.0 { 1.0 / norm } else { 0.0 };
        self.normal.x *= magnitude;
        self.normal.y *= magnitude;
        self.normal.z *= magnitude;
        self.d *= magnitude;
        self
    }

    /// Returns the plane transformed by the transpose of `transformation`.
    ///
    /// Pass the inverse of the point transform to move a plane along with
    /// the geometry it bounds.
    pub fn transform(&self, transformation: &Matrix) -> Self {
        let transposed = transformation.transposed();
        let m = transposed.m();
        let x = self.normal.x;
        let y = self.normal.y;
        let z = self.normal.z;
        let d = self.d;

        Self::new(
            x * m[0] + y * m[1] + z * m[2] + d * m[3],
            x * m[4] + y * m[5] + z * m[6] + d * m[7],
            x * m[8] + y * m[9] + z * m[10] + d * m[11],
            x * m[12] + y * m[13] + z * m[14] + d * m[15],
        )
    }

    /// `normal . point + d`.
    #[inline]
    pub fn dot_coordinate(&self, point: &Vector3) -> f32 {
        self.normal.x * point.x + self.normal.y * point.y + self.normal.z * point.z + self.d
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Metric only when the plane is normalized.
    #[inline]
    pub fn signed_distance_to(&self, point: &Vector3) -> f32 {
        point.dot(&self.normal) + self.d
    }

    /// Returns `true` when the plane faces the given view direction.
    #[inline]
    pub fn is_front_facing_to(&self, direction: &Vector3, epsilon: f32) -> bool {
        self.normal.dot(direction) <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;

    #[test]
    fn test_from_points_winding() {
        // XZ plane through the origin, CCW seen from +Y.
        let p = Plane::from_points(
            &Vector3::ZERO,
            &Vector3::new(0.0, 0.0, 1.0),
            &Vector3::new(1.0, 0.0, 0.0),
        );
        assert!(p.normal.equals_with_epsilon(&Vector3::UP, EPSILON));
        assert!(p.d.abs() < EPSILON);
    }

    #[test]
    fn test_from_points_collinear_is_zero() {
        let p = Plane::from_points(
            &Vector3::ZERO,
            &Vector3::new(1.0, 0.0, 0.0),
            &Vector3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(p.normal, Vector3::ZERO);
        assert_eq!(p.d, 0.0);
    }

    #[test]
    fn test_signed_distance() {
        let p = Plane::from_point_and_normal(&Vector3::new(0.0, 2.0, 0.0), &Vector3::UP);
        assert!((p.signed_distance_to(&Vector3::new(5.0, 7.0, -3.0)) - 5.0).abs() < EPSILON);
        assert!((p.signed_distance_to(&Vector3::ZERO) + 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_plane() {
        let mut p = Plane::new(0.0, 0.0, 0.0, 4.0);
        p.normalize();
        assert_eq!(p.d, 0.0);
        assert_eq!(p.normal, Vector3::ZERO);
    }

    #[test]
    fn test_normalize_scales_d() {
        let mut p = Plane::new(0.0, 2.0, 0.0, 6.0);
        p.normalize();
        assert!((p.normal.y - 1.0).abs() < EPSILON);
        assert!((p.d - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_is_front_facing() {
        let p = Plane::new(0.0, 0.0, 1.0, 0.0);
        assert!(p.is_front_facing_to(&Vector3::BACKWARD, 0.0));
        assert!(!p.is_front_facing_to(&Vector3::FORWARD, 0.0));
    }

    #[test]
    fn test_transform_by_transpose_of_inverse_translation() {
        // Plane y = 0 lifted to y = 1: transform by the inverse of the
        // point transform.
        let p = Plane::new(0.0, 1.0, 0.0, 0.0);
        let inv = Matrix::translation(0.0, 1.0, 0.0).inverted();
        let moved = p.transform(&inv);
        assert!((moved.signed_distance_to(&Vector3::new(0.0, 1.0, 0.0))).abs() < EPSILON);
    }

    #[test]
    fn test_array_roundtrip() {
        let p = Plane::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Plane::from_array(&p.as_array(), 0), p);
    }
}
