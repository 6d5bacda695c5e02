//! Shape renderers.

mod common;
mod tessellate;

pub mod geometry;

pub use geometry::GeometryRenderer;
