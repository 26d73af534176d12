//! # scene-color
//!
//! Color types for real-time rendering.
//!
//! This crate provides the color half of the engine's math foundation:
//!
//! - [`Color3`] - RGB colors with hex parsing and gamma conversion
//! - [`Color4`] - RGBA colors with `#RRGGBBAA` support
//! - [`ColorParseError`] - strict parse failures
//!
//! # Design
//!
//! Hex parsing is total by default: `from_hex_string` maps malformed
//! input to a sentinel (black for [`Color3`], transparent black for
//! [`Color4`]) so asset pipelines never abort on a bad color literal.
//! The `try_from_hex_string` variants are the strict opt-in, returning
//! [`ColorParseError`] with the offending input attached.
//!
//! # Usage
//!
//! ```rust
//! use scene_color::{Color3, Color4};
//!
//! let diffuse = Color3::from_hex_string("#FF8040");
//! let tint = Color4::from_color3(&diffuse, 0.5);
//! assert_eq!(tint.to_hex_string(), "#FF804080");
//! ```
//!
//! # Dependencies
//!
//! - [`scene_math`] - scalar helpers (epsilon comparison, hex formatting)
//! - [`thiserror`] - For derive macro error implementation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color3;
mod color4;
mod error;

pub use color3::Color3;
pub use color4::Color4;
pub use error::{ColorParseError, Result};
