use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binaries.
///
/// Input arrives through `FrameCtx::input` / `FrameCtx::input_frame`, already
/// translated from platform events, so apps never see winit types.
pub trait App {
    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once when the event loop is shutting down.
    fn on_exit(&mut self) {}
}
