//! Coordinate types shared across the scene and renderers.
//!
//! Scene geometry lives in normalized device coordinates:
//! - `[-1, 1]` on both axes, origin at the center
//! - +X right, +Y up
//!
//! Stroke widths and point sizes are given in logical pixels and converted to
//! NDC with the current [`Viewport`] at tessellation time.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
