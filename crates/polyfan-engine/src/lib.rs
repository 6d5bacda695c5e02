//! Polyfan engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the polyfan binaries
//! run on: the winit event loop, the wgpu surface, input tracking and a
//! small NDC geometry renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
