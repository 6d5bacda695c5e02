use polyfan_engine::coords::Vec2;
use polyfan_engine::core::{App, AppControl, FrameCtx};
use polyfan_engine::paint::Color;
use polyfan_engine::render::shapes::GeometryRenderer;
use polyfan_engine::scene::{Dash, DrawList, ZIndex};

const THICK_LINE_WIDTH: f32 = 5.0;
const DASH: Dash = Dash::new(10.0, 6.0);

/// Records the fixed primitive scene: two filled fans, a thick and a dashed
/// line, and two point markers, all in NDC.
pub fn build_scene(list: &mut DrawList) {
    let z = ZIndex::new(0);

    list.push_fan(
        z,
        [
            Vec2::new(-0.4, -0.4),
            Vec2::new(0.4, -0.4),
            Vec2::new(0.4, 0.2),
            Vec2::new(-0.4, 0.2),
        ],
        Color::rgb(0.0, 1.0, 0.0),
    );
    list.push_fan(
        z,
        [
            Vec2::new(-0.8, -0.8),
            Vec2::new(-0.6, -0.8),
            Vec2::new(-0.6, -0.6),
            Vec2::new(-0.8, -0.6),
        ],
        Color::rgb(0.0, 0.0, 1.0),
    );

    list.push_line(
        z,
        Vec2::new(-0.7, -0.5),
        Vec2::new(-0.2, -0.5),
        THICK_LINE_WIDTH,
        Color::rgb(1.0, 0.0, 0.0),
    );
    list.push_dashed_line(
        z,
        Vec2::new(0.2, -0.5),
        Vec2::new(0.7, -0.5),
        THICK_LINE_WIDTH,
        DASH,
        Color::rgb(0.0, 0.0, 1.0),
    );

    list.push_point(z, Vec2::new(-0.7, 0.5), 10.0, Color::rgb(1.0, 0.0, 1.0));
    list.push_point(z, Vec2::new(0.7, 0.5), 15.0, Color::rgb(0.0, 1.0, 1.0));
}

/// Static scene window; ignores input.
pub struct ShowcaseApp {
    draw_list: DrawList,
    renderer: GeometryRenderer,
}

impl ShowcaseApp {
    pub fn new() -> Self {
        let mut draw_list = DrawList::new();
        build_scene(&mut draw_list);
        log::debug!("showcase scene recorded with {} items", draw_list.len());

        Self {
            draw_list,
            renderer: GeometryRenderer::new(),
        }
    }
}

impl Default for ShowcaseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for ShowcaseApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (renderer, draw_list) = (&mut self.renderer, &mut self.draw_list);
        ctx.render(Color::black(), |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}
