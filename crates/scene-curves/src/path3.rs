//! Oriented frames along a 3D polyline.

use scene_math::Vector3;

/// A 3D polyline with a moving frame at every point.
///
/// Construction computes, per point: the cumulative distance from the
/// start, a tangent by central differences, a normal propagated along
/// the path (seeded by `first_normal` or an arbitrary perpendicular),
/// and the binormal closing the frame. Extrusion and rail geometry are
/// built on these frames.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path3D {
    points: Vec<Vector3>,
    distances: Vec<f32>,
    tangents: Vec<Vector3>,
    normals: Vec<Vector3>,
    binormals: Vec<Vector3>,
}

impl Path3D {
    /// Builds the path and its frames.
    ///
    /// Paths with fewer than two points get empty frames. Duplicate
    /// consecutive points inherit the previous tangent rather than
    /// producing a zero one.
    pub fn new(points: Vec<Vector3>, first_normal: Option<&Vector3>) -> Self {
        let n = points.len();
        let mut path = Self {
            points,
            distances: Vec::with_capacity(n),
            tangents: Vec::with_capacity(n),
            normals: Vec::with_capacity(n),
            binormals: Vec::with_capacity(n),
        };
        if n >= 2 {
            path.compute_frames(first_normal);
        }
        path
    }

    /// The path points.
    #[inline]
    pub fn get_points(&self) -> &[Vector3] {
        &self.points
    }

    /// Cumulative distance from the start at each point.
    #[inline]
    pub fn get_distances(&self) -> &[f32] {
        &self.distances
    }

    /// Unit tangent at each point.
    #[inline]
    pub fn get_tangents(&self) -> &[Vector3] {
        &self.tangents
    }

    /// Unit normal at each point.
    #[inline]
    pub fn get_normals(&self) -> &[Vector3] {
        &self.normals
    }

    /// Unit binormal at each point.
    #[inline]
    pub fn get_binormals(&self) -> &[Vector3] {
        &self.binormals
    }

    /// Total curve length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    fn compute_frames(&mut self, first_normal: Option<&Vector3>) {
        let n = self.points.len();

        // Distances and tangents first.
        self.distances.push(0.0);
        for i in 1..n {
            let step = Vector3::distance(&self.points[i - 1], &self.points[i]);
            self.distances.push(self.distances[i - 1] + step);
        }

        for i in 0..n {
            let raw = if i == 0 {
                self.points[1] - self.points[0]
            } else if i == n - 1 {
                self.points[n - 1] - self.points[n - 2]
            } else {
                self.points[i + 1] - self.points[i - 1]
            };
            let len = raw.length();
            if len == 0.0 {
                // Degenerate step: carry the previous direction.
                let prev = self.tangents.last().copied().unwrap_or(Vector3::FORWARD);
                self.tangents.push(prev);
            } else {
                self.tangents.push(raw.scale(1.0 / len));
            }
        }

        // Seed normal: caller's hint projected off the tangent, or an
        // arbitrary perpendicular.
        let t0 = self.tangents[0];
        let mut normal = match first_normal {
            Some(hint) => orthogonal_component(hint, &t0),
            None => Vector3::ZERO,
        };
        if normal.length_squared() == 0.0 {
            normal = arbitrary_perpendicular(&t0);
        }
        normal.normalize();
        self.normals.push(normal);

        let mut binormal = Vector3::ZERO;
        Vector3::cross_to_ref(&t0, &normal, &mut binormal);
        binormal.normalize();
        self.binormals.push(binormal);

        // Propagate the frame, re-orthogonalizing against each tangent.
        for i in 1..n {
            let tangent = self.tangents[i];
            let mut normal = orthogonal_component(&self.normals[i - 1], &tangent);
            if normal.length_squared() == 0.0 {
                normal = arbitrary_perpendicular(&tangent);
            }
            normal.normalize();

            let mut binormal = Vector3::ZERO;
            Vector3::cross_to_ref(&tangent, &normal, &mut binormal);
            binormal.normalize();

            self.normals.push(normal);
            self.binormals.push(binormal);
        }
    }
}

/// `v` minus its projection on the unit vector `axis`.
fn orthogonal_component(v: &Vector3, axis: &Vector3) -> Vector3 {
    *v - axis.scale(v.dot(axis))
}

/// Any unit vector perpendicular to `v`, picked against its smallest
/// component.
fn arbitrary_perpendicular(v: &Vector3) -> Vector3 {
    let mut result = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector3::new(0.0, -v.z, v.y)
    } else if v.y.abs() <= v.z.abs() {
        Vector3::new(-v.z, 0.0, v.x)
    } else {
        Vector3::new(-v.y, v.x, 0.0)
    };
    result.normalize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_math::scalar::EPSILON;

    fn straight_path() -> Path3D {
        Path3D::new(
            vec![
                Vector3::ZERO,
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(3.0, 0.0, 0.0),
            ],
            None,
        )
    }

    #[test]
    fn test_distances_and_length() {
        let path = straight_path();
        assert_eq!(path.get_distances(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(path.length(), 3.0);
    }

    #[test]
    fn test_straight_tangents() {
        let path = straight_path();
        for t in path.get_tangents() {
            assert!(t.equals_with_epsilon(&Vector3::RIGHT, EPSILON));
        }
    }

    #[test]
    fn test_frames_are_orthonormal() {
        let path = Path3D::new(
            vec![
                Vector3::ZERO,
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(2.0, 1.0, 1.0),
                Vector3::new(3.0, 0.0, 1.0),
            ],
            None,
        );
        for i in 0..path.get_points().len() {
            let t = path.get_tangents()[i];
            let n = path.get_normals()[i];
            let b = path.get_binormals()[i];
            assert!((t.length() - 1.0).abs() < EPSILON);
            assert!((n.length() - 1.0).abs() < EPSILON);
            assert!((b.length() - 1.0).abs() < EPSILON);
            assert!(t.dot(&n).abs() < EPSILON);
            assert!(t.dot(&b).abs() < EPSILON);
            assert!(n.dot(&b).abs() < EPSILON);
        }
    }

    #[test]
    fn test_first_normal_hint_respected() {
        let path = Path3D::new(
            vec![Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)],
            Some(&Vector3::UP),
        );
        assert!(path.get_normals()[0].equals_with_epsilon(&Vector3::UP, EPSILON));
    }

    #[test]
    fn test_normal_continuity() {
        // Gentle bend: consecutive normals should not flip.
        let path = Path3D::new(
            vec![
                Vector3::ZERO,
                Vector3::new(1.0, 0.1, 0.0),
                Vector3::new(2.0, 0.3, 0.0),
                Vector3::new(3.0, 0.6, 0.0),
            ],
            Some(&Vector3::UP),
        );
        for pair in path.get_normals().windows(2) {
            assert!(pair[0].dot(&pair[1]) > 0.9);
        }
    }

    #[test]
    fn test_short_path_has_empty_frames() {
        let path = Path3D::new(vec![Vector3::ZERO], None);
        assert!(path.get_tangents().is_empty());
        assert_eq!(path.length(), 0.0);
    }
}
