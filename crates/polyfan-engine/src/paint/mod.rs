//! Paint model shared between the scene and renderers.
//!
//! Only solid colors exist; every draw command carries one.

pub mod color;

pub use color::Color;
