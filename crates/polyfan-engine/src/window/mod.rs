//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, wires input into `InputState`
//! and drives one `App::on_frame` per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
