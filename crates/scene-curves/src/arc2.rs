//! Circular arc through three points.

use crate::angle::Angle;
use scene_math::Vector2;

/// Winding direction of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Clockwise.
    Clockwise,
    /// Counter-clockwise.
    CounterClockwise,
}

/// The circular arc passing through three points.
///
/// Derived quantities (center, radius, angles, orientation) are computed
/// once at construction via the perpendicular-bisector intersection.
/// Collinear input makes the determinant zero and the center non-finite;
/// like the matrix inverse, this degrades silently.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc2 {
    /// Arc start point.
    pub start_point: Vector2,
    /// Intermediate point the arc passes through.
    pub mid_point: Vector2,
    /// Arc end point.
    pub end_point: Vector2,
    /// Circle center.
    pub center_point: Vector2,
    /// Circle radius.
    pub radius: f32,
    /// Swept angle from start to end.
    pub angle: Angle,
    /// Angle of the start point around the center.
    pub start_angle: Angle,
    /// Winding direction from start to end through mid.
    pub orientation: Orientation,
}

impl Arc2 {
    /// Builds the arc from start through mid to end.
    pub fn new(start_point: Vector2, mid_point: Vector2, end_point: Vector2) -> Self {
        let temp = mid_point.x * mid_point.x + mid_point.y * mid_point.y;
        let start_to_mid =
            (start_point.x * start_point.x + start_point.y * start_point.y - temp) / 2.0;
        let mid_to_end = (temp - end_point.x * end_point.x - end_point.y * end_point.y) / 2.0;
        let det = (start_point.x - mid_point.x) * (mid_point.y - end_point.y)
            - (mid_point.x - end_point.x) * (start_point.y - mid_point.y);

        let center_point = Vector2::new(
            (start_to_mid * (mid_point.y - end_point.y) - mid_to_end * (start_point.y - mid_point.y))
                / det,
            ((start_point.x - mid_point.x) * mid_to_end - (mid_point.x - end_point.x) * start_to_mid)
                / det,
        );

        let radius = Vector2::distance(&center_point, &start_point);
        let start_angle = Angle::between_two_points(&center_point, &start_point);

        let a1 = start_angle.degrees();
        let mut a2 = Angle::between_two_points(&center_point, &mid_point).degrees();
        let mut a3 = Angle::between_two_points(&center_point, &end_point).degrees();

        // Unwrap so the mid angle sits within a half turn of the start
        // and the end within a half turn of the mid.
        if a2 - a1 > 180.0 {
            a2 -= 360.0;
        }
        if a2 - a1 < -180.0 {
            a2 += 360.0;
        }
        if a3 - a2 > 180.0 {
            a3 -= 360.0;
        }
        if a3 - a2 < -180.0 {
            a3 += 360.0;
        }

        let orientation = if a2 - a1 < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        };
        let angle = Angle::from_degrees(match orientation {
            Orientation::Clockwise => a1 - a3,
            Orientation::CounterClockwise => a3 - a1,
        });

        Self {
            start_point,
            mid_point,
            end_point,
            center_point,
            radius,
            angle,
            start_angle,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_math::scalar::EPSILON;

    #[test]
    fn test_half_circle() {
        // Upper half of the unit circle, CCW from (1,0) to (-1,0).
        let arc = Arc2::new(
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
        );
        assert!(arc.center_point.equals_with_epsilon(&Vector2::ZERO, EPSILON));
        assert!((arc.radius - 1.0).abs() < EPSILON);
        assert_eq!(arc.orientation, Orientation::CounterClockwise);
        assert!((arc.angle.degrees() - 180.0).abs() < 0.01);
        assert!(arc.start_angle.degrees().abs() < 0.01);
    }

    #[test]
    fn test_clockwise_arc() {
        let arc = Arc2::new(
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, -1.0),
            Vector2::new(-1.0, 0.0),
        );
        assert_eq!(arc.orientation, Orientation::Clockwise);
        assert!((arc.angle.degrees() - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_offset_center() {
        let arc = Arc2::new(
            Vector2::new(4.0, 2.0),
            Vector2::new(3.0, 3.0),
            Vector2::new(2.0, 2.0),
        );
        assert!(arc.center_point.equals_with_epsilon(&Vector2::new(3.0, 2.0), EPSILON));
        assert!((arc.radius - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_collinear_points_non_finite() {
        let arc = Arc2::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(2.0, 0.0),
        );
        assert!(!arc.center_point.x.is_finite() || !arc.center_point.y.is_finite());
    }
}
