//! RGBA color type.

use crate::color3::Color3;
use crate::error::ColorParseError;
use scene_math::scalar;
use std::ops::{Add, Mul, Sub};

/// An RGBA color with float components, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color4 {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Default for Color4 {
    /// Opaque black.
    #[inline]
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Color4 {
    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black (0, 0, 0, 0).
    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Builds an RGBA color from an RGB color and an alpha value.
    #[inline]
    pub const fn from_color3(color: &Color3, alpha: f32) -> Self {
        Self::new(color.r, color.g, color.b, alpha)
    }

    /// The RGB components as a [`Color3`], dropping alpha.
    #[inline]
    pub const fn to_color3(&self) -> Color3 {
        Color3::new(self.r, self.g, self.b)
    }

    /// Creates a color from 0-255 integer components.
    #[inline]
    pub fn from_ints(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Reads four components from `data` starting at `offset`.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        Self::new(data[offset], data[offset + 1], data[offset + 2], data[offset + 3])
    }

    /// Writes the components into `dst` starting at `index`.
    #[inline]
    pub fn to_array(&self, dst: &mut [f32], index: usize) {
        dst[index] = self.r;
        dst[index + 1] = self.g;
        dst[index + 2] = self.b;
        dst[index + 3] = self.a;
    }

    /// Returns the components as a fresh array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Sets all four components.
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        self.r = r;
        self.g = g;
        self.b = b;
        self.a = a;
        self
    }

    /// Copies the components of `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.set(source.r, source.g, source.b, source.a)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`; malformed input yields
    /// transparent black.
    ///
    /// A six-digit string gets an implicit opaque alpha. The sentinel
    /// differs from [`Color3`]'s opaque black so downstream blending
    /// drops the bad color entirely.
    pub fn from_hex_string(hex: &str) -> Self {
        Self::try_from_hex_string(hex).unwrap_or_else(|_| Self::transparent())
    }

    /// Strict `#RRGGBB` / `#RRGGBBAA` parser.
    pub fn try_from_hex_string(hex: &str) -> crate::error::Result<Self> {
        if !hex.starts_with('#') {
            return Err(ColorParseError::missing_hash(hex));
        }
        // Components are sliced by byte range below; multibyte chars can
        // never be valid hex digits, so reject them before slicing.
        if !hex.is_ascii() {
            return Err(ColorParseError::invalid_digits(hex, &hex[1..]));
        }
        if hex.len() != 7 && hex.len() != 9 {
            return Err(ColorParseError::invalid_length(hex, 9, hex.len()));
        }

        let component = |range: std::ops::Range<usize>| -> crate::error::Result<f32> {
            let digits = &hex[range];
            u8::from_str_radix(digits, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::invalid_digits(hex, digits))
        };

        let a = if hex.len() == 9 { component(7..9)? } else { 1.0 };
        Ok(Self::new(component(1..3)?, component(3..5)?, component(5..7)?, a))
    }

    /// Formats as uppercase `#RRGGBBAA`.
    ///
    /// Components are clamped to [0, 1] before quantizing.
    pub fn to_hex_string(&self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{}{}{}{}",
            scalar::to_hex(r),
            scalar::to_hex(g),
            scalar::to_hex(b),
            scalar::to_hex(a)
        )
    }

    /// Multiplies each component by `factor`, alpha included.
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a * factor)
    }

    /// Scaled color written into `result`.
    #[inline]
    pub fn scale_to_ref(&self, factor: f32, result: &mut Self) {
        result.set(self.r * factor, self.g * factor, self.b * factor, self.a * factor);
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(&self, min: f32, max: f32) -> Self {
        Self::new(
            self.r.clamp(min, max),
            self.g.clamp(min, max),
            self.b.clamp(min, max),
            self.a.clamp(min, max),
        )
    }

    /// Component-wise linear interpolation, alpha included.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f32) -> Self {
        let mut result = Self::transparent();
        Self::lerp_to_ref(start, end, amount, &mut result);
        result
    }

    /// Interpolation written into `result`.
    #[inline]
    pub fn lerp_to_ref(start: &Self, end: &Self, amount: f32, result: &mut Self) {
        result.r = start.r + (end.r - start.r) * amount;
        result.g = start.g + (end.g - start.g) * amount;
        result.b = start.b + (end.b - start.b) * amount;
        result.a = start.a + (end.a - start.a) * amount;
    }

    /// Converts the RGB components to linear space; alpha passes through.
    #[inline]
    pub fn to_linear_space(&self) -> Self {
        Self::from_color3(&self.to_color3().to_linear_space(), self.a)
    }

    /// Converts the RGB components to gamma space; alpha passes through.
    #[inline]
    pub fn to_gamma_space(&self) -> Self {
        Self::from_color3(&self.to_color3().to_gamma_space(), self.a)
    }

    /// Exact component equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
    }

    /// Component equality within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.r, other.r, epsilon)
            && scalar::with_epsilon(self.g, other.g, epsilon)
            && scalar::with_epsilon(self.b, other.b, epsilon)
            && scalar::with_epsilon(self.a, other.a, epsilon)
    }
}

impl Add for Color4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Sub for Color4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl Mul<f32> for Color4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Color4> for Color4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Color4) -> Self {
        self.multiply(&rhs)
    }
}

impl From<[f32; 4]> for Color4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Color4> for [f32; 4] {
    #[inline]
    fn from(c: Color4) -> [f32; 4] {
        c.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use scene_math::scalar::EPSILON;

    #[test]
    fn test_from_hex_string_six_digits_opaque() {
        let c = Color4::from_hex_string("#FF0000");
        assert_eq!(c, Color4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_hex_string_eight_digits() {
        let c = Color4::from_hex_string("#FF000080");
        assert_abs_diff_eq!(c.a, 128.0 / 255.0, epsilon = EPSILON);
        assert_eq!(c.r, 1.0);
    }

    #[test]
    fn test_from_hex_string_malformed_is_transparent() {
        assert_eq!(Color4::from_hex_string("bad"), Color4::transparent());
        assert_eq!(Color4::from_hex_string("#FF00"), Color4::transparent());
        assert_eq!(Color4::from_hex_string("#XX000000"), Color4::transparent());
    }

    #[test]
    fn test_from_hex_string_multibyte_is_transparent() {
        // Multibyte chars land across the byte ranges the components are
        // sliced from; must hit the sentinel, not panic.
        assert_eq!(Color4::from_hex_string("#0\u{e9}000"), Color4::transparent());
        assert_eq!(Color4::from_hex_string("#0\u{e9}000000"), Color4::transparent());
        assert!(matches!(
            Color4::try_from_hex_string("#0\u{e9}000000"),
            Err(ColorParseError::InvalidDigits { .. })
        ));
    }

    #[test]
    fn test_try_from_hex_string_length_error() {
        assert!(matches!(
            Color4::try_from_hex_string("#FFAA"),
            Err(ColorParseError::InvalidLength { actual: 5, .. })
        ));
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(Color4::new(1.0, 0.0, 0.0, 1.0).to_hex_string(), "#FF0000FF");
        assert_eq!(Color4::transparent().to_hex_string(), "#00000000");
    }

    #[test]
    fn test_hex_roundtrip() {
        let c = Color4::from_ints(18, 52, 86, 120);
        assert_eq!(Color4::from_hex_string(&c.to_hex_string()), c);
    }

    #[test]
    fn test_lerp_includes_alpha() {
        let a = Color4::transparent();
        let b = Color4::new(1.0, 1.0, 1.0, 1.0);
        let mid = Color4::lerp(&a, &b, 0.25);
        assert!((mid.a - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_gamma_preserves_alpha() {
        let c = Color4::new(0.5, 0.5, 0.5, 0.3);
        assert_eq!(c.to_linear_space().a, 0.3);
        assert_eq!(c.to_gamma_space().a, 0.3);
    }

    #[test]
    fn test_color3_roundtrip() {
        let c3 = Color3::new(0.1, 0.2, 0.3);
        let c4 = Color4::from_color3(&c3, 0.5);
        assert_eq!(c4.to_color3(), c3);
    }
}
