//! Normalized screen-space viewport.

/// A viewport in normalized [0, 1] coordinates.
///
/// [`to_global`](Self::to_global) scales it into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Viewport {
    /// Left edge, as a fraction of the render width.
    pub x: f32,
    /// Bottom edge, as a fraction of the render height.
    pub y: f32,
    /// Width fraction.
    pub width: f32,
    /// Height fraction.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport from normalized bounds.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Scales this viewport to the given render target size.
    #[inline]
    pub fn to_global(&self, render_width: f32, render_height: f32) -> Self {
        Self::new(
            self.x * render_width,
            self.y * render_height,
            self.width * render_width,
            self.height * render_height,
        )
    }

    /// Pixel-space viewport written into `result`.
    #[inline]
    pub fn to_global_to_ref(&self, render_width: f32, render_height: f32, result: &mut Self) {
        result.x = self.x * render_width;
        result.y = self.y * render_height;
        result.width = self.width * render_width;
        result.height = self.height * render_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_global() {
        let vp = Viewport::new(0.25, 0.5, 0.5, 0.5);
        let global = vp.to_global(1920.0, 1080.0);
        assert_eq!(global, Viewport::new(480.0, 540.0, 960.0, 540.0));
    }

    #[test]
    fn test_full_viewport() {
        let global = Viewport::new(0.0, 0.0, 1.0, 1.0).to_global(800.0, 600.0);
        assert_eq!(global.width, 800.0);
        assert_eq!(global.height, 600.0);
    }
}
