//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - scene geometry is already in NDC, so vertex shaders pass positions through
//! - pixel-denominated sizes are resolved against `RenderCtx::viewport` on the CPU

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
