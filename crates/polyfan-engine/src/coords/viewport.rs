use super::Vec2;

/// Viewport size in logical pixels.
///
/// Used to convert pixel-denominated sizes (stroke widths, point sizes) into
/// NDC extents, and to map NDC directions into pixel space where lengths must
/// be isotropic.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Scales an NDC vector into logical pixels (Y stays up).
    #[inline]
    pub fn ndc_to_pixels(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.width * 0.5, v.y * self.height * 0.5)
    }

    /// Scales a logical-pixel vector into NDC (Y stays up).
    #[inline]
    pub fn pixels_to_ndc(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * 2.0 / self.width, v.y * 2.0 / self.height)
    }
}
