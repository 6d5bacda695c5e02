use crate::scene::shapes::{FanCmd, LineCmd, PointCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::shapes::tessellate` to turn it into triangles
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fan(FanCmd),
    Line(LineCmd),
    Point(PointCmd),
}
