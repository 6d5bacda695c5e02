use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Dash pattern along a line, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

impl Dash {
    #[inline]
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }

    /// A pattern that would loop forever or draw nothing is not a dash.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.on > 0.0 && self.off >= 0.0 && self.on.is_finite() && self.off.is_finite()
    }
}

/// Straight segment between two NDC endpoints.
///
/// `width` is in logical pixels so strokes stay the same thickness
/// regardless of window aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub dash: Option<Dash>,
    pub color: Color,
}

impl DrawList {
    /// Records a solid line.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, dash: None, color }));
    }

    /// Records a dashed line.
    #[inline]
    pub fn push_dashed_line(
        &mut self,
        z: ZIndex,
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: Dash,
        color: Color,
    ) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, dash: Some(dash), color }));
    }
}
