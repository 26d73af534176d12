//! # scene-math
//!
//! Foundational 3D math for real-time rendering.
//!
//! This crate provides the transform subsystem of the engine:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - vector types
//! - [`Quaternion`] - rotations with gimbal-safe Euler extraction
//! - [`Matrix`] - 4x4 transforms, cameras, and projections
//! - [`Plane`], [`Frustum`], [`Viewport`], [`Size`] - spatial helpers
//! - [`scalar`] - epsilon comparisons and interpolation
//! - [`simd`] - wide-accelerated batch operations
//!
//! # Design
//!
//! The coordinate system is **left-handed** with Y up: +X right, +Y up,
//! +Z forward, so `cross(RIGHT, UP) == FORWARD`. Matrices store 16
//! contiguous floats in column-major GPU order with translation at
//! indices 12..15.
//!
//! Every non-trivial operation comes in two forms: an owning form that
//! returns a fresh value and a `*_to_ref` form that writes into a caller
//! buffer for allocation-free hot loops. The `*_to_ref` forms read all
//! inputs before writing, so results may alias inputs.
//!
//! Degenerate inputs degrade silently by contract: normalizing a zero
//! vector is a no-op, inverting a singular matrix yields non-finite
//! cells, decomposing a zero-scale matrix reports `false`. Nothing on
//! these paths panics.
//!
//! # Usage
//!
//! ```rust
//! use scene_math::{Matrix, Vector3};
//!
//! let view = Matrix::look_at_lh(
//!     &Vector3::new(0.0, 5.0, -10.0),
//!     &Vector3::ZERO,
//!     &Vector3::UP,
//! );
//! let projection = Matrix::perspective_fov_lh(1.0, 16.0 / 9.0, 0.1, 100.0);
//! let view_projection = view.multiply(&projection);
//!
//! let clip = Vector3::transform_coordinates(&Vector3::ZERO, &view_projection);
//! assert!(clip.z > 0.0 && clip.z < 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with the wider Rust math ecosystem
//! - [`wide`] - portable SIMD for the batch helpers
//!
//! # Used By
//!
//! - `scene-color` - color component math
//! - `scene-curves` - paths and parametric curves

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod frustum;
mod matrix;
mod plane;
mod quaternion;
mod size;
mod vector2;
mod vector3;
mod vector4;
mod viewport;

pub mod scalar;
pub mod simd;

pub use frustum::Frustum;
pub use matrix::Matrix;
pub use plane::Plane;
pub use quaternion::Quaternion;
pub use size::Size;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
pub use viewport::Viewport;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
