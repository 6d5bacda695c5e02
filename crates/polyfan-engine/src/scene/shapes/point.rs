use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Square point marker centred on an NDC position; `size` is the edge length in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCmd {
    pub center: Vec2,
    pub size: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a square point marker.
    #[inline]
    pub fn push_point(&mut self, z: ZIndex, center: Vec2, size: f32, color: Color) {
        self.push(z, DrawCmd::Point(PointCmd { center, size, color }));
    }
}
