use core::ops::{Add, Mul};

/// Polygon vertex in normalized device coordinates.
///
/// NDC space spans `[-1, 1]` on both axes with the origin at the center,
/// +X right and +Y up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts a window position (top-left origin, +Y down) into NDC.
    ///
    /// Returns `None` when the viewport has no area or any input is not finite.
    pub fn from_screen(x: f64, y: f64, viewport_width: f64, viewport_height: f64) -> Option<Self> {
        let valid = x.is_finite()
            && y.is_finite()
            && viewport_width.is_finite()
            && viewport_height.is_finite()
            && viewport_width > 0.0
            && viewport_height > 0.0;
        if !valid {
            return None;
        }

        Some(Self::new(
            2.0 * x / viewport_width - 1.0,
            1.0 - 2.0 * y / viewport_height,
        ))
    }

    /// Rotates about the origin given a precomputed `(sin, cos)` pair.
    #[inline]
    pub fn rotated(self, sin: f64, cos: f64) -> Self {
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Narrows to the `f32` pair the GPU vertex format uses.
    #[inline]
    pub fn to_f32(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
