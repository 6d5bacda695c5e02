//! wgpu device and surface.
//!
//! [`Gpu`] owns the device, queue and window surface; [`GpuInit`] picks the
//! surface format and present mode. Format and alpha selection live in
//! `surface` as pure functions so they test without a GPU.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
