//! RGB color type.

use crate::error::ColorParseError;
use scene_math::scalar;
use std::ops::{Add, Mul, Sub};

/// Exponent applied when converting gamma-space values to linear.
const TO_LINEAR_SPACE: f32 = 2.2;
/// Exponent applied when converting linear-space values to gamma.
const TO_GAMMA_SPACE: f32 = 1.0 / 2.2;

/// An RGB color with float components, nominally in [0, 1].
///
/// Components are not clamped on construction; HDR values above 1 are
/// legal everywhere except [`clamp`](Self::clamp) and hex formatting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color3 {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color3 {
    /// Creates a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0).
    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// White (1, 1, 1).
    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Red (1, 0, 0).
    #[inline]
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Green (0, 1, 0).
    #[inline]
    pub const fn green() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Blue (0, 0, 1).
    #[inline]
    pub const fn blue() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Yellow (1, 1, 0).
    #[inline]
    pub const fn yellow() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }

    /// Magenta (1, 0, 1).
    #[inline]
    pub const fn magenta() -> Self {
        Self::new(1.0, 0.0, 1.0)
    }

    /// Teal (0, 1, 1).
    #[inline]
    pub const fn teal() -> Self {
        Self::new(0.0, 1.0, 1.0)
    }

    /// Purple (0.5, 0, 0.5).
    #[inline]
    pub const fn purple() -> Self {
        Self::new(0.5, 0.0, 0.5)
    }

    /// Gray (0.5, 0.5, 0.5).
    #[inline]
    pub const fn gray() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }

    /// Creates a color from 0-255 integer components.
    #[inline]
    pub fn from_ints(r: i32, g: i32, b: i32) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Reads three components from `data` starting at `offset`.
    #[inline]
    pub fn from_array(data: &[f32], offset: usize) -> Self {
        Self::new(data[offset], data[offset + 1], data[offset + 2])
    }

    /// Writes the components into `dst` starting at `index`.
    #[inline]
    pub fn to_array(&self, dst: &mut [f32], index: usize) {
        dst[index] = self.r;
        dst[index + 1] = self.g;
        dst[index + 2] = self.b;
    }

    /// Returns the components as a fresh array.
    #[inline]
    pub const fn as_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Sets all three components.
    #[inline]
    pub fn set(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.r = r;
        self.g = g;
        self.b = b;
        self
    }

    /// Copies the components of `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) -> &mut Self {
        self.set(source.r, source.g, source.b)
    }

    /// Parses a `#RRGGBB` string; malformed input yields black.
    ///
    /// The sentinel keeps asset loaders total: bad data renders black
    /// instead of aborting a scene load. Use
    /// [`try_from_hex_string`](Self::try_from_hex_string) to reject bad
    /// input instead.
    ///
    /// ```rust
    /// use scene_color::Color3;
    ///
    /// assert_eq!(Color3::from_hex_string("#FF0000"), Color3::red());
    /// assert_eq!(Color3::from_hex_string("bad"), Color3::black());
    /// ```
    pub fn from_hex_string(hex: &str) -> Self {
        Self::try_from_hex_string(hex).unwrap_or_else(|_| Self::black())
    }

    /// Strict `#RRGGBB` parser.
    pub fn try_from_hex_string(hex: &str) -> crate::error::Result<Self> {
        if !hex.starts_with('#') {
            return Err(ColorParseError::missing_hash(hex));
        }
        // Components are sliced by byte range below; multibyte chars can
        // never be valid hex digits, so reject them before slicing.
        if !hex.is_ascii() {
            return Err(ColorParseError::invalid_digits(hex, &hex[1..]));
        }
        if hex.len() != 7 {
            return Err(ColorParseError::invalid_length(hex, 7, hex.len()));
        }

        let component = |range: std::ops::Range<usize>| -> crate::error::Result<f32> {
            let digits = &hex[range];
            u8::from_str_radix(digits, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorParseError::invalid_digits(hex, digits))
        };

        Ok(Self::new(component(1..3)?, component(3..5)?, component(5..7)?))
    }

    /// Formats as uppercase `#RRGGBB`.
    ///
    /// Components are clamped to [0, 1] before quantizing.
    pub fn to_hex_string(&self) -> String {
        let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{}{}{}", scalar::to_hex(r), scalar::to_hex(g), scalar::to_hex(b))
    }

    /// Multiplies each component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Scaled color written into `result`.
    #[inline]
    pub fn scale_to_ref(&self, factor: f32, result: &mut Self) {
        result.set(self.r * factor, self.g * factor, self.b * factor);
    }

    /// Component-wise product.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// Clamps each component to `[min, max]`.
    #[inline]
    pub fn clamp(&self, min: f32, max: f32) -> Self {
        Self::new(
            self.r.clamp(min, max),
            self.g.clamp(min, max),
            self.b.clamp(min, max),
        )
    }

    /// Component-wise linear interpolation.
    #[inline]
    pub fn lerp(start: &Self, end: &Self, amount: f32) -> Self {
        let mut result = Self::black();
        Self::lerp_to_ref(start, end, amount, &mut result);
        result
    }

    /// Interpolation written into `result`.
    #[inline]
    pub fn lerp_to_ref(start: &Self, end: &Self, amount: f32, result: &mut Self) {
        result.r = start.r + (end.r - start.r) * amount;
        result.g = start.g + (end.g - start.g) * amount;
        result.b = start.b + (end.b - start.b) * amount;
    }

    /// Converts gamma-space components to linear space.
    #[inline]
    pub fn to_linear_space(&self) -> Self {
        Self::new(
            self.r.powf(TO_LINEAR_SPACE),
            self.g.powf(TO_LINEAR_SPACE),
            self.b.powf(TO_LINEAR_SPACE),
        )
    }

    /// Converts linear-space components to gamma space.
    #[inline]
    pub fn to_gamma_space(&self) -> Self {
        Self::new(
            self.r.powf(TO_GAMMA_SPACE),
            self.g.powf(TO_GAMMA_SPACE),
            self.b.powf(TO_GAMMA_SPACE),
        )
    }

    /// Exact component equality.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Component equality within `epsilon`.
    #[inline]
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        scalar::with_epsilon(self.r, other.r, epsilon)
            && scalar::with_epsilon(self.g, other.g, epsilon)
            && scalar::with_epsilon(self.b, other.b, epsilon)
    }
}

impl Add for Color3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Color3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Color3> for Color3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Color3) -> Self {
        self.multiply(&rhs)
    }
}

impl From<[f32; 3]> for Color3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Color3> for [f32; 3] {
    #[inline]
    fn from(c: Color3) -> [f32; 3] {
        c.as_array()
    }
}
