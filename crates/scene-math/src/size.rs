//! 2D size type.

use std::ops::{Add, Sub};

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Size {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width times height.
    #[inline]
    pub fn surface(&self) -> f32 {
        self.width * self.height
    }

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f32) -> Self {
        Self::new(
            start.width + (end.width - start.width) * amount,
            start.height + (end.height - start.height) * amount,
        )
    }

    /// Exact component equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Add for Size {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}
