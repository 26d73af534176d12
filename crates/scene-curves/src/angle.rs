//! Angle value type.

use scene_math::Vector2;
use std::f32::consts::PI;

/// An angle stored in radians.
///
/// Keeps degree/radian conversion at the API edge so the math inside
/// stays in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    /// The angle in radians.
    #[inline]
    pub const fn radians(&self) -> f32 {
        self.radians
    }

    /// The angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.radians * 180.0 / PI
    }

    /// The angle of the segment from `a` to `b`, measured from +X.
    ///
    /// In (-pi, pi], via `atan2`.
    #[inline]
    pub fn between_two_points(a: &Vector2, b: &Vector2) -> Self {
        let delta = *b - *a;
        Self::from_radians(delta.y.atan2(delta.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_math::scalar::EPSILON;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_degree_radian_roundtrip() {
        assert!((Angle::from_degrees(180.0).radians() - PI).abs() < EPSILON);
        assert!((Angle::from_radians(FRAC_PI_2).degrees() - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_between_two_points() {
        let origin = Vector2::ZERO;
        let diag = Angle::between_two_points(&origin, &Vector2::new(1.0, 1.0));
        assert!((diag.radians() - FRAC_PI_4).abs() < EPSILON);

        let left = Angle::between_two_points(&origin, &Vector2::new(-1.0, 0.0));
        assert!((left.radians() - PI).abs() < EPSILON);
    }
}
