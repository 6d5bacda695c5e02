//! CPU tessellation of scene commands into a flat triangle list.
//!
//! wgpu has no fan topology, no wide lines and no point size, so every command
//! is expanded here into triangles the single geometry pipeline can draw.

use crate::coords::{Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{DrawCmd, FanCmd, LineCmd, PointCmd};

use super::common::GeometryVertex;

/// Appends the triangles for `cmd` to `out`.
///
/// Degenerate commands (fans under three vertices, zero-length or zero-width
/// lines, zero-size points) append nothing.
pub(super) fn tessellate(cmd: &DrawCmd, viewport: Viewport, out: &mut Vec<GeometryVertex>) {
    match cmd {
        DrawCmd::Fan(fan) => tessellate_fan(fan, out),
        DrawCmd::Line(line) => tessellate_line(line, viewport, out),
        DrawCmd::Point(point) => tessellate_point(point, viewport, out),
    }
}

fn tessellate_fan(cmd: &FanCmd, out: &mut Vec<GeometryVertex>) {
    let [pivot, rest @ ..] = cmd.vertices.as_slice() else { return };
    if rest.len() < 2 {
        return;
    }

    out.reserve(cmd.triangle_count() * 3);
    for pair in rest.windows(2) {
        push_triangle(*pivot, pair[0], pair[1], cmd.color, out);
    }
}

fn tessellate_line(cmd: &LineCmd, viewport: Viewport, out: &mut Vec<GeometryVertex>) {
    if !viewport.is_valid() || !(cmd.width > 0.0) {
        return;
    }

    // Work in pixels so the stroke is equally thick whatever the aspect ratio.
    let span = cmd.to - cmd.from;
    let span_px = viewport.ndc_to_pixels(span);
    let len = span_px.length();
    if !(len > 0.0) {
        return;
    }

    let unit = span_px * (1.0 / len);
    let half = viewport.pixels_to_ndc(Vec2::new(-unit.y, unit.x) * (cmd.width * 0.5));

    match cmd.dash.filter(|d| d.is_valid()) {
        None => push_segment(cmd.from, cmd.to, half, cmd.color, out),
        Some(dash) => {
            let period = dash.on + dash.off;
            let mut start = 0.0f32;
            while start < len {
                let end = (start + dash.on).min(len);
                let a = cmd.from + span * (start / len);
                let b = cmd.from + span * (end / len);
                push_segment(a, b, half, cmd.color, out);
                start += period;
            }
        }
    }
}

fn tessellate_point(cmd: &PointCmd, viewport: Viewport, out: &mut Vec<GeometryVertex>) {
    if !viewport.is_valid() || !(cmd.size > 0.0) {
        return;
    }

    let h = viewport.pixels_to_ndc(Vec2::new(cmd.size * 0.5, cmd.size * 0.5));
    let c = cmd.center;
    push_quad(
        Vec2::new(c.x - h.x, c.y - h.y),
        Vec2::new(c.x + h.x, c.y - h.y),
        Vec2::new(c.x + h.x, c.y + h.y),
        Vec2::new(c.x - h.x, c.y + h.y),
        cmd.color,
        out,
    );
}

/// Rectangle of half-thickness `half` (NDC normal offset) around `a → b`.
fn push_segment(a: Vec2, b: Vec2, half: Vec2, color: Color, out: &mut Vec<GeometryVertex>) {
    push_quad(a - half, b - half, b + half, a + half, color, out);
}

/// Quad given as four corners in winding order.
fn push_quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color, out: &mut Vec<GeometryVertex>) {
    push_triangle(a, b, c, color, out);
    push_triangle(a, c, d, color, out);
}

#[inline]
fn push_triangle(a: Vec2, b: Vec2, c: Vec2, color: Color, out: &mut Vec<GeometryVertex>) {
    out.push(GeometryVertex::new(a, color));
    out.push(GeometryVertex::new(b, color));
    out.push(GeometryVertex::new(c, color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Dash;

    const VP: Viewport = Viewport::new(800.0, 800.0);

    fn run(cmd: DrawCmd, viewport: Viewport) -> Vec<GeometryVertex> {
        let mut out = Vec::new();
        tessellate(&cmd, viewport, &mut out);
        out
    }

    fn fan(points: &[[f32; 2]]) -> DrawCmd {
        DrawCmd::Fan(FanCmd::new(points.iter().map(|&p| p.into()).collect(), Color::black()))
    }

    fn line(from: [f32; 2], to: [f32; 2], width: f32, dash: Option<Dash>) -> DrawCmd {
        DrawCmd::Line(LineCmd {
            from: from.into(),
            to: to.into(),
            width,
            dash,
            color: Color::black(),
        })
    }

    fn y_range(verts: &[GeometryVertex]) -> (f32, f32) {
        verts.iter().fold((f32::MAX, f32::MIN), |(lo, hi), v| (lo.min(v.pos[1]), hi.max(v.pos[1])))
    }

    // ── fans ──────────────────────────────────────────────────────────────

    #[test]
    fn fan_shares_first_vertex_across_triangles() {
        let out = run(fan(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]), VP);
        let pos: Vec<[f32; 2]> = out.iter().map(|v| v.pos).collect();
        #[rustfmt::skip]
        let expected = vec![
            [0.0, 0.0], [1.0, 0.0], [1.0, 1.0],
            [0.0, 0.0], [1.0, 1.0], [0.0, 1.0],
        ];
        assert_eq!(pos, expected);
    }

    #[test]
    fn fan_below_three_vertices_is_skipped() {
        assert!(run(fan(&[]), VP).is_empty());
        assert!(run(fan(&[[0.0, 0.0], [1.0, 0.0]]), VP).is_empty());
    }

    #[test]
    fn fan_carries_its_color() {
        let cmd = DrawCmd::Fan(FanCmd::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            Color::rgb(1.0, 0.5, 0.7),
        ));
        assert!(run(cmd, VP).iter().all(|v| v.color == [1.0, 0.5, 0.7, 1.0]));
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn solid_line_is_one_quad_of_requested_width() {
        let out = run(line([-0.5, 0.0], [0.5, 0.0], 4.0, None), VP);
        assert_eq!(out.len(), 6);

        // 4 px on an 800 px viewport is 0.01 NDC, split around the axis.
        let (lo, hi) = y_range(&out);
        assert!((lo + 0.005).abs() < 1e-6);
        assert!((hi - 0.005).abs() < 1e-6);
    }

    #[test]
    fn dashed_line_emits_one_quad_per_period() {
        // 1.0 NDC on 800 px = 400 px; 20 px period → 20 dashes.
        let out = run(line([-0.5, 0.0], [0.5, 0.0], 2.0, Some(Dash::new(10.0, 10.0))), VP);
        assert_eq!(out.len(), 20 * 6);
    }

    #[test]
    fn last_dash_is_clipped_to_the_endpoint() {
        // 400 px with a 30 px period: the 14th dash starts at 390 and stops at 400.
        let out = run(line([-0.5, 0.0], [0.5, 0.0], 2.0, Some(Dash::new(15.0, 15.0))), VP);
        assert_eq!(out.len(), 14 * 6);
        let max_x = out.iter().map(|v| v.pos[0]).fold(f32::MIN, f32::max);
        assert!((max_x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn invalid_dash_falls_back_to_solid() {
        let out = run(line([-0.5, 0.0], [0.5, 0.0], 2.0, Some(Dash::new(0.0, 5.0))), VP);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn zero_length_or_width_line_is_skipped() {
        assert!(run(line([0.2, 0.2], [0.2, 0.2], 4.0, None), VP).is_empty());
        assert!(run(line([0.0, 0.0], [0.5, 0.0], 0.0, None), VP).is_empty());
    }

    #[test]
    fn line_on_invalid_viewport_is_skipped() {
        let out = run(line([-0.5, 0.0], [0.5, 0.0], 4.0, None), Viewport::new(0.0, 0.0));
        assert!(out.is_empty());
    }

    // ── points ────────────────────────────────────────────────────────────

    #[test]
    fn point_is_square_in_pixels() {
        let cmd = DrawCmd::Point(PointCmd {
            center: Vec2::new(0.0, 0.0),
            size: 10.0,
            color: Color::black(),
        });
        let out = run(cmd, Viewport::new(800.0, 400.0));
        assert_eq!(out.len(), 6);

        let max_x = out.iter().map(|v| v.pos[0]).fold(f32::MIN, f32::max);
        let (_, max_y) = y_range(&out);
        // 5 px half-size: 5 * 2 / 800 and 5 * 2 / 400.
        assert!((max_x - 0.0125).abs() < 1e-6);
        assert!((max_y - 0.025).abs() < 1e-6);
    }

    #[test]
    fn zero_size_point_is_skipped() {
        let cmd = DrawCmd::Point(PointCmd {
            center: Vec2::new(0.0, 0.0),
            size: 0.0,
            color: Color::black(),
        });
        assert!(run(cmd, VP).is_empty());
    }
}
