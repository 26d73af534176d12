//! View frustum plane extraction.

use crate::matrix::Matrix;
use crate::plane::Plane;

/// Extracts the six clip planes of a view-projection matrix.
///
/// Plane order is fixed: near, far, left, right, top, bottom. Each plane
/// comes back normalized, with the normal pointing into the frustum.
pub struct Frustum;

impl Frustum {
    /// Near plane index in the extracted array.
    pub const NEAR: usize = 0;
    /// Far plane index.
    pub const FAR: usize = 1;
    /// Left plane index.
    pub const LEFT: usize = 2;
    /// Right plane index.
    pub const RIGHT: usize = 3;
    /// Top plane index.
    pub const TOP: usize = 4;
    /// Bottom plane index.
    pub const BOTTOM: usize = 5;

    /// Returns the six frustum planes of `transform`.
    pub fn planes(transform: &Matrix) -> [Plane; 6] {
        let mut result = [Plane::default(); 6];
        Self::planes_to_ref(transform, &mut result);
        result
    }

    /// Writes the six frustum planes of `transform` into `planes`.
    ///
    /// Row-combination extraction: each plane is a sum or difference of
    /// the w row group with one coordinate row group.
    pub fn planes_to_ref(transform: &Matrix, planes: &mut [Plane; 6]) {
        Self::near_plane_to_ref(transform, &mut planes[Self::NEAR]);
        Self::far_plane_to_ref(transform, &mut planes[Self::FAR]);
        Self::left_plane_to_ref(transform, &mut planes[Self::LEFT]);
        Self::right_plane_to_ref(transform, &mut planes[Self::RIGHT]);
        Self::top_plane_to_ref(transform, &mut planes[Self::TOP]);
        Self::bottom_plane_to_ref(transform, &mut planes[Self::BOTTOM]);
    }

    /// Near plane: w row plus z row.
    pub fn near_plane_to_ref(transform: &Matrix, plane: &mut Plane) {
        let m = transform.m();
        plane.normal.set(m[3] + m[2], m[7] + m[6], m[11] + m[10]);
        plane.d = m[15] + m[14];
        plane.normalize();
    }

    /// Far plane: w row minus z row.
    pub fn far_plane_to_ref(transform: &Matrix, plane: &mut Plane) {
        let m = transform.m();
        plane.normal.set(m[3] - m[2], m[7] - m[6], m[11] - m[10]);
        plane.d = m[15] - m[14];
        plane.normalize();
    }

    /// Left plane: w row plus x row.
    pub fn left_plane_to_ref(transform: &Matrix, plane: &mut Plane) {
        let m = transform.m();
        plane.normal.set(m[3] + m[0], m[7] + m[4], m[11] + m[8]);
        plane.d = m[15] + m[12];
        plane.normalize();
    }

    /// Right plane: w row minus x row.
    pub fn right_plane_to_ref(transform: &Matrix, plane: &mut Plane) {
        let m = transform.m();
        plane.normal.set(m[3] - m[0], m[7] - m[4], m[11] - m[8]);
        plane.d = m[15] - m[12];
        plane.normalize();
    }

    /// Top plane: w row minus y row.
    pub fn top_plane_to_ref(transform: &Matrix, plane: &mut Plane) {
        let m = transform.m();
        plane.normal.set(m[3] - m[1], m[7] - m[5], m[11] - m[9]);
        plane.d = m[15] - m[13];
        plane.normalize();
    }

    /// Bottom plane: w row plus y row.
    pub fn bottom_plane_to_ref(transform: &Matrix, plane: &mut Plane) {
        let m = transform.m();
        plane.normal.set(m[3] + m[1], m[7] + m[5], m[11] + m[9]);
        plane.d = m[15] + m[13];
        plane.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;
    use crate::vector3::Vector3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_planes() {
        let planes = Frustum::planes(&Matrix::identity());

        let near = planes[Frustum::NEAR];
        assert!(near.normal.equals_with_epsilon(&Vector3::new(0.0, 0.0, 1.0), EPSILON));
        assert!((near.d - 1.0).abs() < EPSILON);

        let far = planes[Frustum::FAR];
        assert!(far.normal.equals_with_epsilon(&Vector3::new(0.0, 0.0, -1.0), EPSILON));

        for plane in &planes {
            assert!((plane.normal.length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_point_inside_perspective_frustum() {
        let vp = Matrix::perspective_fov_lh(FRAC_PI_2, 1.0, 0.1, 100.0);
        let planes = Frustum::planes(&vp);

        let inside = Vector3::new(0.0, 0.0, 10.0);
        for plane in &planes {
            assert!(plane.dot_coordinate(&inside) >= 0.0);
        }

        let behind = Vector3::new(0.0, 0.0, -1.0);
        assert!(planes[Frustum::NEAR].dot_coordinate(&behind) < 0.0);

        let beyond = Vector3::new(0.0, 0.0, 200.0);
        assert!(planes[Frustum::FAR].dot_coordinate(&beyond) < 0.0);
    }

    #[test]
    fn test_side_plane_rejection() {
        let vp = Matrix::perspective_fov_lh(FRAC_PI_2, 1.0, 0.1, 100.0);
        let planes = Frustum::planes(&vp);

        // 90-degree fov: at z=10 the frustum is 10 units wide each way.
        let off_right = Vector3::new(15.0, 0.0, 10.0);
        assert!(planes[Frustum::RIGHT].dot_coordinate(&off_right) < 0.0);
        assert!(planes[Frustum::LEFT].dot_coordinate(&off_right) > 0.0);
    }
}
