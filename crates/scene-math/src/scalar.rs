//! Scalar helpers shared across the math types.
//!
//! This module provides the library epsilon, interpolation primitives, and
//! small formatting utilities used by the vector/matrix/color types:
//!
//! - Epsilon comparison ([`with_epsilon`])
//! - Linear interpolation ([`lerp`], [`lerp_angle`], [`inverse_lerp`])
//! - Smooth interpolation ([`smoothstep`])
//! - Hex formatting ([`to_hex`])
//!
//! # Usage
//!
//! ```rust
//! use scene_math::scalar::{lerp, with_epsilon, EPSILON};
//!
//! let mid = lerp(0.0, 10.0, 0.5);
//! assert_eq!(mid, 5.0);
//! assert!(with_epsilon(1.0, 1.0 + EPSILON * 0.5, EPSILON));
//! ```

/// The library epsilon used for approximate comparisons.
///
/// Deliberately coarse (1e-3): transform chains in a render loop accumulate
/// drift well above f32 machine epsilon, and every `equals_with_epsilon`
/// in the engine is calibrated against this value.
pub const EPSILON: f32 = 0.001;

/// Two times PI.
pub const TWO_PI: f32 = std::f32::consts::PI * 2.0;

/// Returns `true` if `a` and `b` differ by less than `epsilon`.
///
/// # Example
///
/// ```rust
/// use scene_math::scalar::with_epsilon;
///
/// assert!(with_epsilon(1.0, 1.0005, 0.001));
/// assert!(!with_epsilon(1.0, 1.002, 0.001));
/// ```
#[inline]
pub fn with_epsilon(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Clamps a value to the range [min, max].
///
/// # Example
///
/// ```rust
/// use scene_math::scalar::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0` and `b` when `t = 1.0`; values outside
/// [0, 1] extrapolate.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use scene_math::scalar::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t`.
/// Returns 0 when the range is degenerate.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Hermite smoothstep interpolation.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, with a cubic blend
/// `t * t * (3 - 2 * t)` in between.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp(inverse_lerp(edge0, edge1, x), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Wraps `value` onto [0, length).
///
/// Unlike `%`, the result is never negative.
#[inline]
pub fn repeat(value: f32, length: f32) -> f32 {
    value - (value / length).floor() * length
}

/// Normalizes an angle in radians onto [0, 2*PI).
#[inline]
pub fn normalize_radians(angle: f32) -> f32 {
    repeat(angle, TWO_PI)
}

/// Shortest signed difference between two angles in radians.
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut num = repeat(target - current, TWO_PI);
    if num > std::f32::consts::PI {
        num -= TWO_PI;
    }
    num
}

/// Interpolates between two angles along the shortest arc.
///
/// # Example
///
/// ```rust
/// use scene_math::scalar::lerp_angle;
/// use std::f32::consts::PI;
///
/// // Wraps through zero instead of going the long way round.
/// let a = lerp_angle(0.1, 2.0 * PI - 0.1, 0.5);
/// assert!(a.abs() < 1e-5 || (a - 2.0 * PI).abs() < 1e-5);
/// ```
#[inline]
pub fn lerp_angle(start: f32, end: f32, amount: f32) -> f32 {
    let mut num = repeat(end - start, TWO_PI);
    if num > std::f32::consts::PI {
        num -= TWO_PI;
    }
    start + num * clamp(amount, 0.0, 1.0)
}

/// Sign function: -1, 0, or 1.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Formats a byte as a two-digit uppercase hex string.
///
/// Used by the color types for `#RRGGBB` output.
///
/// # Example
///
/// ```rust
/// use scene_math::scalar::to_hex;
///
/// assert_eq!(to_hex(255), "FF");
/// assert_eq!(to_hex(7), "07");
/// ```
#[inline]
pub fn to_hex(value: u8) -> String {
    format!("{value:02X}")
}
