//! # scene-curves
//!
//! Geometric helpers built on `scene-math`.
//!
//! This crate provides the path and curve layer of the engine's math
//! foundation:
//!
//! - [`Angle`] - degree/radian conversion and point-pair angles
//! - [`Arc2`] - circular arcs through three points
//! - [`Path2`] - 2D polyline paths with arc flattening
//! - [`Path3D`] - 3D polylines with moving orthonormal frames
//! - [`Curve3`] - sampled Bezier, Hermite, and Catmull-Rom curves
//! - [`BezierCurve`] - scalar cubic Bezier easing
//!
//! # Usage
//!
//! ```rust
//! use scene_curves::Curve3;
//! use scene_math::Vector3;
//!
//! let curve = Curve3::create_quadratic_bezier(
//!     &Vector3::ZERO,
//!     &Vector3::new(1.0, 2.0, 0.0),
//!     &Vector3::new(2.0, 0.0, 0.0),
//!     32,
//! );
//! assert_eq!(curve.get_points().len(), 33);
//! assert!(curve.length() > 2.0);
//! ```
//!
//! # Dependencies
//!
//! - [`scene_math`] - vector types and interpolation primitives

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod arc2;
mod bezier;
mod curve3;
mod path2;
mod path3;

pub use angle::Angle;
pub use arc2::{Arc2, Orientation};
pub use bezier::BezierCurve;
pub use curve3::Curve3;
pub use path2::Path2;
pub use path3::Path3D;
