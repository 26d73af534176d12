//! Sampled 3D parametric curves.

use scene_math::Vector3;

/// A 3D curve sampled into a polyline.
///
/// Builders evaluate a parametric form at fixed steps; the arc length is
/// computed once over the samples and cached.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve3 {
    points: Vec<Vector3>,
    length: f32,
}

impl Curve3 {
    /// Wraps an existing polyline as a curve.
    pub fn new(points: Vec<Vector3>) -> Self {
        let length = Self::compute_length(&points);
        Self { points, length }
    }

    /// Samples the quadratic Bezier through `v0`, control `v1`, `v2`.
    ///
    /// Produces `nb_points + 1` samples; `nb_points` is floored at 3.
    pub fn create_quadratic_bezier(v0: &Vector3, v1: &Vector3, v2: &Vector3, nb_points: usize) -> Self {
        let nb_points = nb_points.max(3);
        let mut points = Vec::with_capacity(nb_points + 1);
        for i in 0..=nb_points {
            let t = i as f32 / nb_points as f32;
            let u = 1.0 - t;
            points.push(*v0 * (u * u) + *v1 * (2.0 * t * u) + *v2 * (t * t));
        }
        Self::new(points)
    }

    /// Samples the cubic Bezier through `v0`, controls `v1`/`v2`, `v3`.
    ///
    /// Produces `nb_points + 1` samples; `nb_points` is floored at 4.
    pub fn create_cubic_bezier(
        v0: &Vector3,
        v1: &Vector3,
        v2: &Vector3,
        v3: &Vector3,
        nb_points: usize,
    ) -> Self {
        let nb_points = nb_points.max(4);
        let mut points = Vec::with_capacity(nb_points + 1);
        for i in 0..=nb_points {
            let t = i as f32 / nb_points as f32;
            let u = 1.0 - t;
            points.push(
                *v0 * (u * u * u)
                    + *v1 * (3.0 * t * u * u)
                    + *v2 * (3.0 * t * t * u)
                    + *v3 * (t * t * t),
            );
        }
        Self::new(points)
    }

    /// Samples the Hermite spline from `p1`/`t1` to `p2`/`t2`.
    pub fn create_hermite_spline(
        p1: &Vector3,
        t1: &Vector3,
        p2: &Vector3,
        t2: &Vector3,
        nb_points: usize,
    ) -> Self {
        let nb_points = nb_points.max(3);
        let mut points = Vec::with_capacity(nb_points + 1);
        for i in 0..=nb_points {
            let amount = i as f32 / nb_points as f32;
            points.push(Vector3::hermite(p1, t1, p2, t2, amount));
        }
        Self::new(points)
    }

    /// Samples a Catmull-Rom spline through the given control points.
    ///
    /// `nb_points` samples are taken per control segment. Open splines
    /// duplicate the end controls so the curve passes through them;
    /// closed splines wrap around and repeat the first sample at the
    /// end.
    pub fn create_catmull_rom_spline(points: &[Vector3], nb_points: usize, closed: bool) -> Self {
        if points.is_empty() || nb_points == 0 {
            return Self::default();
        }

        let step = 1.0 / nb_points as f32;
        let mut samples = Vec::new();

        if closed {
            let count = points.len();
            for i in 0..count {
                let mut amount = 0.0;
                for _ in 0..nb_points {
                    samples.push(Vector3::catmull_rom(
                        &points[i % count],
                        &points[(i + 1) % count],
                        &points[(i + 2) % count],
                        &points[(i + 3) % count],
                        amount,
                    ));
                    amount += step;
                }
            }
            if let Some(&first) = samples.first() {
                samples.push(first);
            }
        } else {
            let mut controls = Vec::with_capacity(points.len() + 2);
            controls.push(points[0]);
            controls.extend_from_slice(points);
            controls.push(points[points.len() - 1]);

            for window in controls.windows(4) {
                let mut amount = 0.0;
                for _ in 0..nb_points {
                    samples.push(Vector3::catmull_rom(
                        &window[0], &window[1], &window[2], &window[3], amount,
                    ));
                    amount += step;
                }
            }
            samples.push(points[points.len() - 1]);
        }

        Self::new(samples)
    }

    /// The sampled points.
    #[inline]
    pub fn get_points(&self) -> &[Vector3] {
        &self.points
    }

    /// Cached arc length of the sampled polyline.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Appends `curve` translated so it starts where this one ends.
    pub fn continue_curve(&self, curve: &Self) -> Self {
        let Some(&last) = self.points.last() else {
            return curve.clone();
        };
        let mut points = self.points.clone();
        if let Some(&other_first) = curve.points.first() {
            for p in &curve.points[1..] {
                points.push(*p - other_first + last);
            }
        }
        Self::new(points)
    }

    fn compute_length(points: &[Vector3]) -> f32 {
        points
            .windows(2)
            .map(|pair| Vector3::distance(&pair[0], &pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use scene_math::scalar::EPSILON;

    #[test]
    fn test_quadratic_bezier_endpoints() {
        let curve = Curve3::create_quadratic_bezier(
            &Vector3::ZERO,
            &Vector3::new(1.0, 2.0, 0.0),
            &Vector3::new(2.0, 0.0, 0.0),
            20,
        );
        assert_eq!(curve.get_points().len(), 21);
        assert!(curve.get_points()[0].equals_with_epsilon(&Vector3::ZERO, EPSILON));
        assert!(curve.get_points()[20].equals_with_epsilon(&Vector3::new(2.0, 0.0, 0.0), EPSILON));
    }

    #[test]
    fn test_cubic_bezier_midpoint() {
        // Symmetric controls: midpoint lies on the symmetry axis.
        let curve = Curve3::create_cubic_bezier(
            &Vector3::ZERO,
            &Vector3::new(0.0, 1.0, 0.0),
            &Vector3::new(2.0, 1.0, 0.0),
            &Vector3::new(2.0, 0.0, 0.0),
            40,
        );
        let mid = curve.get_points()[20];
        assert_abs_diff_eq!(mid.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(mid.y, 0.75, epsilon = EPSILON);
    }

    #[test]
    fn test_min_point_count_floor() {
        let curve = Curve3::create_quadratic_bezier(
            &Vector3::ZERO,
            &Vector3::ONE,
            &Vector3::new(2.0, 2.0, 2.0),
            1,
        );
        assert_eq!(curve.get_points().len(), 4);
    }

    #[test]
    fn test_hermite_endpoints() {
        let p1 = Vector3::new(1.0, 2.0, 3.0);
        let p2 = Vector3::new(4.0, 5.0, 6.0);
        let t = Vector3::new(0.0, 1.0, 0.0);
        let curve = Curve3::create_hermite_spline(&p1, &t, &p2, &t, 16);
        assert!(curve.get_points()[0].equals_with_epsilon(&p1, EPSILON));
        assert!(curve.get_points()[16].equals_with_epsilon(&p2, EPSILON));
    }

    #[test]
    fn test_catmull_rom_open_passes_through_controls() {
        let controls = [
            Vector3::ZERO,
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(3.0, 1.0, 0.0),
        ];
        let nb = 10;
        let curve = Curve3::create_catmull_rom_spline(&controls, nb, false);
        // One segment per window of 4 over padded controls, plus the
        // final control appended.
        assert_eq!(curve.get_points().len(), (controls.len() - 1) * nb + 1);
        assert!(curve.get_points()[0].equals_with_epsilon(&controls[0], EPSILON));
        assert!(curve.get_points().last().unwrap().equals_with_epsilon(&controls[3], EPSILON));
        // Interior control points are hit at segment boundaries.
        assert!(curve.get_points()[nb].equals_with_epsilon(&controls[1], EPSILON));
        assert!(curve.get_points()[2 * nb].equals_with_epsilon(&controls[2], EPSILON));
    }

    #[test]
    fn test_catmull_rom_closed_wraps() {
        let controls = [
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        let curve = Curve3::create_catmull_rom_spline(&controls, 8, true);
        let points = curve.get_points();
        assert!(points[0].equals_with_epsilon(points.last().unwrap(), EPSILON));
    }

    #[test]
    fn test_straight_line_length() {
        let curve = Curve3::new(vec![
            Vector3::ZERO,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 2.0, 0.0),
        ]);
        assert!((curve.length() - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_continue_curve_translates() {
        let a = Curve3::new(vec![Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)]);
        let b = Curve3::new(vec![Vector3::new(10.0, 10.0, 0.0), Vector3::new(10.0, 11.0, 0.0)]);
        let joined = a.continue_curve(&b);
        assert_eq!(joined.get_points().len(), 3);
        assert!(joined.get_points()[2].equals_with_epsilon(&Vector3::new(1.0, 1.0, 0.0), EPSILON));
        assert!((joined.length() - 2.0).abs() < EPSILON);
    }
}
