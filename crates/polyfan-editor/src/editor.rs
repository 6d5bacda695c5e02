use crate::config::EditorConfig;
use crate::mode::TransformMode;
use crate::point::Point;

/// Smallest scale factor the editor will keep.
///
/// Shrinking below this is clamped so the outline never collapses to a point.
pub const MIN_SCALE: f64 = 1e-4;

/// Minimum vertex count for a drawable triangle fan.
const MIN_FAN_VERTICES: usize = 3;

/// Capture and transform state for a single polygon.
///
/// Lifecycle:
/// - clicks append points until [`finalize`](Self::finalize) is called
/// - afterwards the outline is only changed by transforms
///
/// Translate and rotate rewrite the stored points every tick. Scale is kept as a
/// single factor and only applied in [`snapshot_for_render`](Self::snapshot_for_render),
/// so stored points never see it.
#[derive(Debug, Clone)]
pub struct PolygonEditor {
    points: Vec<Point>,
    finalized: bool,
    mode: TransformMode,
    scale_factor: f64,
    config: EditorConfig,
}

impl PolygonEditor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            points: Vec::new(),
            finalized: false,
            mode: TransformMode::None,
            scale_factor: 1.0,
            config,
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Stored points in capture order, without the presentation scale.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    #[inline]
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ── capture ───────────────────────────────────────────────────────────

    /// Appends the NDC equivalent of a window-space click.
    ///
    /// Ignored once the polygon is finalized, and when the viewport has no area.
    pub fn add_point(&mut self, screen_x: f64, screen_y: f64, viewport_width: f64, viewport_height: f64) {
        if self.finalized {
            log::trace!("click at ({screen_x}, {screen_y}) ignored: polygon finalized");
            return;
        }

        let Some(point) = Point::from_screen(screen_x, screen_y, viewport_width, viewport_height) else {
            log::debug!(
                "click at ({screen_x}, {screen_y}) ignored: unusable viewport {viewport_width}x{viewport_height}"
            );
            return;
        };

        self.points.push(point);
        log::debug!("point {} captured at ({:.3}, {:.3})", self.points.len(), point.x, point.y);
    }

    /// Stops accepting new points. Calling again has no effect.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        log::debug!("polygon finalized with {} points", self.points.len());
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Selects the active transform. Allowed before finalization.
    pub fn set_mode(&mut self, mode: TransformMode) {
        if self.mode != mode {
            log::debug!("transform mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Multiplies the presentation scale by `factor`. Scale mode only.
    ///
    /// Non-positive or non-finite factors are rejected; the result is floored at
    /// [`MIN_SCALE`].
    pub fn adjust_scale(&mut self, factor: f64) {
        if self.mode != TransformMode::Scale {
            return;
        }
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("scale factor {factor} rejected");
            return;
        }

        let next = self.scale_factor * factor;
        self.scale_factor = if next.is_finite() { next.max(MIN_SCALE) } else { self.scale_factor };
        log::trace!("scale factor now {:.4}", self.scale_factor);
    }

    /// Moves every stored point by `(dx, dy)`. Translate mode only.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        if self.mode != TransformMode::Translate {
            return;
        }

        let delta = Point::new(dx, dy);
        for p in &mut self.points {
            *p = *p + delta;
        }
    }

    /// Rotates every stored point about the NDC origin. Rotate mode only.
    ///
    /// Positive angles turn counter-clockwise.
    pub fn rotate(&mut self, angle_degrees: f64) {
        if self.mode != TransformMode::Rotate {
            return;
        }

        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        for p in &mut self.points {
            *p = p.rotated(sin, cos);
        }
    }

    // ── presentation ──────────────────────────────────────────────────────

    /// Returns the stored points with the current scale applied.
    ///
    /// Pure read: calling it repeatedly without mutation yields identical output.
    pub fn snapshot_for_render(&self) -> Vec<Point> {
        let s = self.scale_factor;
        self.points.iter().map(|&p| p * s).collect()
    }

    /// Outline to draw this frame, if any.
    ///
    /// `None` until the polygon is finalized, and whenever fewer than three
    /// points exist (a fan needs at least one triangle).
    pub fn render_outline(&self) -> Option<Vec<Point>> {
        if !self.finalized || self.points.len() < MIN_FAN_VERTICES {
            return None;
        }
        Some(self.snapshot_for_render())
    }
}

impl Default for PolygonEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn triangle() -> PolygonEditor {
        let mut ed = PolygonEditor::new();
        ed.add_point(400.0, 200.0, 800.0, 800.0); // ( 0.0,  0.5)
        ed.add_point(200.0, 600.0, 800.0, 800.0); // (-0.5, -0.5)
        ed.add_point(600.0, 600.0, 800.0, 800.0); // ( 0.5, -0.5)
        ed.finalize();
        ed
    }

    // ── initial state ─────────────────────────────────────────────────────

    #[test]
    fn starts_empty_unfinalized_with_unit_scale() {
        let ed = PolygonEditor::new();
        assert!(ed.points().is_empty());
        assert!(!ed.is_finalized());
        assert_eq!(ed.mode(), TransformMode::None);
        assert_eq!(ed.scale_factor(), 1.0);
    }

    // ── add_point ─────────────────────────────────────────────────────────

    #[test]
    fn points_accumulate_in_call_order() {
        let mut ed = PolygonEditor::new();
        for i in 0..5 {
            ed.add_point(i as f64 * 100.0, 0.0, 800.0, 800.0);
        }
        assert_eq!(ed.points().len(), 5);
        let xs: Vec<f64> = ed.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-1.0, -0.75, -0.5, -0.25, 0.0]);
    }

    #[test]
    fn click_scenarios_map_to_expected_ndc() {
        let mut ed = PolygonEditor::new();
        ed.add_point(0.0, 0.0, 800.0, 800.0);
        ed.add_point(800.0, 800.0, 800.0, 800.0);
        ed.add_point(400.0, 400.0, 800.0, 800.0);
        assert_eq!(
            ed.points(),
            &[Point::new(-1.0, 1.0), Point::new(1.0, -1.0), Point::new(0.0, 0.0)]
        );
    }

    #[test]
    fn add_point_after_finalize_is_ignored() {
        let mut ed = triangle();
        ed.add_point(10.0, 10.0, 800.0, 800.0);
        ed.add_point(20.0, 20.0, 800.0, 800.0);
        assert_eq!(ed.points().len(), 3);
    }

    #[test]
    fn add_point_with_zero_viewport_is_ignored() {
        let mut ed = PolygonEditor::new();
        ed.add_point(10.0, 10.0, 0.0, 0.0);
        assert!(ed.points().is_empty());
    }

    // ── finalize ──────────────────────────────────────────────────────────

    #[test]
    fn finalize_is_idempotent() {
        let mut ed = triangle();
        ed.finalize();
        assert!(ed.is_finalized());
        assert_eq!(ed.points().len(), 3);
    }

    // ── set_mode ──────────────────────────────────────────────────────────

    #[test]
    fn last_mode_wins() {
        let mut ed = PolygonEditor::new();
        ed.set_mode(TransformMode::Translate);
        ed.set_mode(TransformMode::Rotate);
        ed.set_mode(TransformMode::Scale);
        assert_eq!(ed.mode(), TransformMode::Scale);
    }

    #[test]
    fn mode_is_recorded_before_finalize() {
        let mut ed = PolygonEditor::new();
        ed.set_mode(TransformMode::Rotate);
        assert_eq!(ed.mode(), TransformMode::Rotate);
        assert!(!ed.is_finalized());
    }

    // ── adjust_scale ──────────────────────────────────────────────────────

    #[test]
    fn adjust_scale_outside_scale_mode_is_ignored() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Translate);
        ed.adjust_scale(2.0);
        assert_eq!(ed.scale_factor(), 1.0);
    }

    #[test]
    fn adjust_scale_is_multiplicative() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Scale);
        ed.adjust_scale(2.0);
        ed.adjust_scale(0.25);
        assert_eq!(ed.scale_factor(), 0.5);
    }

    #[test]
    fn non_positive_scale_factor_is_rejected() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Scale);
        ed.adjust_scale(0.0);
        ed.adjust_scale(-1.0);
        ed.adjust_scale(f64::NAN);
        assert_eq!(ed.scale_factor(), 1.0);
    }

    #[test]
    fn repeated_shrinking_is_floored() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Scale);
        for _ in 0..1000 {
            ed.adjust_scale(0.5);
        }
        assert_eq!(ed.scale_factor(), MIN_SCALE);
        assert!(ed.scale_factor() > 0.0);
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_outside_translate_mode_is_ignored() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Rotate);
        ed.translate(0.5, 0.5);
        assert_eq!(ed.points(), before.as_slice());
    }

    #[test]
    fn three_translate_ticks_move_x_by_their_sum() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Translate);
        for _ in 0..3 {
            ed.translate(0.1, 0.0);
        }
        for (b, a) in before.iter().zip(ed.points()) {
            assert!((a.x - (b.x + 0.3)).abs() < EPS);
            assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn repeated_translate_matches_single_combined_step() {
        let mut stepped = triangle();
        let mut combined = triangle();
        stepped.set_mode(TransformMode::Translate);
        combined.set_mode(TransformMode::Translate);

        for _ in 0..7 {
            stepped.translate(0.01, -0.02);
        }
        combined.translate(0.07, -0.14);

        for (a, b) in stepped.points().iter().zip(combined.points()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn translate_works_before_finalize() {
        let mut ed = PolygonEditor::new();
        ed.add_point(400.0, 400.0, 800.0, 800.0);
        ed.set_mode(TransformMode::Translate);
        ed.translate(0.25, 0.0);
        assert_eq!(ed.points()[0], Point::new(0.25, 0.0));
    }

    #[test]
    fn translate_on_empty_polygon_is_noop() {
        let mut ed = PolygonEditor::new();
        ed.set_mode(TransformMode::Translate);
        ed.translate(1.0, 1.0);
        assert!(ed.points().is_empty());
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_outside_rotate_mode_is_ignored() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Scale);
        ed.rotate(45.0);
        assert_eq!(ed.points(), before.as_slice());
    }

    #[test]
    fn rotate_then_inverse_restores_points() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Rotate);
        ed.rotate(37.0);
        ed.rotate(-37.0);
        for (b, a) in before.iter().zip(ed.points()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn full_turn_is_identity() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Rotate);
        ed.rotate(360.0);
        for (b, a) in before.iter().zip(ed.points()) {
            assert!(approx_eq(*a, *b));
        }
    }

    #[test]
    fn rotation_pivots_on_origin_not_centroid() {
        let mut ed = PolygonEditor::new();
        ed.add_point(800.0, 400.0, 800.0, 800.0); // (1, 0)
        ed.set_mode(TransformMode::Rotate);
        ed.rotate(90.0);
        assert!(approx_eq(ed.points()[0], Point::new(0.0, 1.0)));
    }

    #[test]
    fn seventy_two_five_degree_steps_make_a_full_turn() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Rotate);
        for _ in 0..72 {
            ed.rotate(5.0);
        }
        for (b, a) in before.iter().zip(ed.points()) {
            assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
        }
    }

    // ── snapshot_for_render ───────────────────────────────────────────────

    #[test]
    fn snapshot_halves_points_without_touching_storage() {
        let mut ed = triangle();
        let before = ed.points().to_vec();
        ed.set_mode(TransformMode::Scale);
        ed.adjust_scale(0.5);

        let snap = ed.snapshot_for_render();
        assert_eq!(snap.len(), before.len());
        for (b, s) in before.iter().zip(&snap) {
            assert_eq!(*s, Point::new(b.x * 0.5, b.y * 0.5));
        }
        assert_eq!(ed.points(), before.as_slice());
    }

    #[test]
    fn snapshot_is_idempotent() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Scale);
        ed.adjust_scale(1.1);
        assert_eq!(ed.snapshot_for_render(), ed.snapshot_for_render());
    }

    #[test]
    fn snapshot_reflects_translate_after_scale() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Scale);
        ed.adjust_scale(2.0);
        ed.set_mode(TransformMode::Translate);
        ed.translate(0.1, 0.0);

        let snap = ed.snapshot_for_render();
        for (p, s) in ed.points().iter().zip(&snap) {
            assert_eq!(*s, Point::new(p.x * 2.0, p.y * 2.0));
        }
    }

    #[test]
    fn snapshot_of_empty_polygon_is_empty() {
        assert!(PolygonEditor::new().snapshot_for_render().is_empty());
    }

    // ── render_outline ────────────────────────────────────────────────────

    #[test]
    fn nothing_to_draw_before_finalize() {
        let mut ed = PolygonEditor::new();
        ed.add_point(0.0, 0.0, 800.0, 800.0);
        ed.add_point(800.0, 0.0, 800.0, 800.0);
        ed.add_point(800.0, 800.0, 800.0, 800.0);
        assert!(ed.render_outline().is_none());
    }

    #[test]
    fn fewer_than_three_points_are_not_drawn() {
        let mut ed = PolygonEditor::new();
        ed.add_point(0.0, 0.0, 800.0, 800.0);
        ed.add_point(800.0, 0.0, 800.0, 800.0);
        ed.finalize();
        assert!(ed.render_outline().is_none());
    }

    #[test]
    fn finalized_triangle_is_drawn_scaled() {
        let mut ed = triangle();
        ed.set_mode(TransformMode::Scale);
        ed.adjust_scale(0.5);
        assert_eq!(ed.render_outline(), Some(ed.snapshot_for_render()));
    }
}
