//! Integration tests for scene-rs crates.
//!
//! End-to-end tests exercising the interaction between the math, color,
//! and curve crates: full camera pipelines, rotation round-trips across
//! representations, and curve geometry checked against closed forms.
