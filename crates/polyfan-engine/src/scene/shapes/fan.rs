use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled triangle fan in NDC.
///
/// The first vertex is the pivot shared by every triangle; the remaining
/// vertices are walked in order. Fewer than three vertices draw nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FanCmd {
    pub vertices: Vec<Vec2>,
    pub color: Color,
}

impl FanCmd {
    #[inline]
    pub fn new(vertices: Vec<Vec2>, color: Color) -> Self {
        Self { vertices, color }
    }

    /// Number of triangles this fan produces.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }
}

impl DrawList {
    /// Records a filled triangle fan.
    #[inline]
    pub fn push_fan<I>(&mut self, z: ZIndex, vertices: I, color: Color)
    where
        I: IntoIterator<Item = Vec2>,
    {
        let vertices = vertices.into_iter().collect();
        self.push(z, DrawCmd::Fan(FanCmd::new(vertices, color)));
    }
}
