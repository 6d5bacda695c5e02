use polyfan_editor::{EditorConfig, EditorEvent, PolygonEditor};
use polyfan_engine::coords::{Vec2, Viewport};
use polyfan_engine::core::{App, AppControl, FrameCtx};
use polyfan_engine::input::{
    InputEvent, InputFrame, InputState, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};
use polyfan_engine::paint::Color;
use polyfan_engine::render::shapes::GeometryRenderer;
use polyfan_engine::scene::{DrawList, ZIndex};

use crate::keymap::{control_for, DIRECTION_KEYS};

/// Fill color of the finalized polygon.
pub const POLYGON_COLOR: Color = Color::rgb(1.0, 0.5, 0.7);

/// Turns one frame of engine input into editor events.
///
/// Left-button presses at a known pointer position and key presses keep their
/// arrival order. Held direction keys
/// follow, one `KeyHeld` per key still down at the end of the frame, in a
/// fixed up/down/left/right order.
pub fn collect_events(input: &InputState, frame: &InputFrame, viewport: Viewport) -> Vec<EditorEvent> {
    let mut out = Vec::new();

    for ev in &frame.events {
        match ev {
            // A press with no known pointer position is not a click anywhere.
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                position: Some((x, y)),
                ..
            }) => out.push(EditorEvent::Click {
                x: f64::from(*x),
                y: f64::from(*y),
                viewport_width: f64::from(viewport.width),
                viewport_height: f64::from(viewport.height),
            }),

            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => {
                if let Some(control) = control_for(*key) {
                    out.push(EditorEvent::KeyPress(control));
                }
            }

            _ => {}
        }
    }

    for key in DIRECTION_KEYS {
        if input.key_down(key) {
            if let Some(control) = control_for(key) {
                out.push(EditorEvent::KeyHeld(control));
            }
        }
    }

    out
}

/// Interactive polygon editor window.
pub struct EditorApp {
    editor: PolygonEditor,
    draw_list: DrawList,
    renderer: GeometryRenderer,
}

impl EditorApp {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            editor: PolygonEditor::with_config(config),
            draw_list: DrawList::new(),
            renderer: GeometryRenderer::new(),
        }
    }

    pub fn editor(&self) -> &PolygonEditor {
        &self.editor
    }

    /// Feeds one frame of input to the editor and rebuilds the draw list.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, viewport: Viewport) {
        for ev in collect_events(input, frame, viewport) {
            self.editor.handle_event(ev);
        }

        self.draw_list.clear();
        if let Some(outline) = self.editor.render_outline() {
            let vertices = outline.into_iter().map(|p| Vec2::from(p.to_f32()));
            self.draw_list.push_fan(ZIndex::new(0), vertices, POLYGON_COLOR);
        }
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl App for EditorApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        self.update(ctx.input, ctx.input_frame, viewport);

        log::trace!(
            "frame {}: {} points, mode {}, scale {:.4}",
            ctx.time.frame_index,
            self.editor.points().len(),
            self.editor.mode(),
            self.editor.scale_factor()
        );

        let (renderer, draw_list) = (&mut self.renderer, &mut self.draw_list);
        ctx.render(Color::black(), |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }

    fn on_exit(&mut self) {
        log::info!(
            "editor closed with {} points (finalized: {})",
            self.editor.points().len(),
            self.editor.is_finalized()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyfan_editor::{Control, TransformMode};
    use polyfan_engine::input::{Key, Modifiers};
    use polyfan_engine::scene::DrawCmd;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Released,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }

    fn click(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            position: Some((x, y)),
            modifiers: Modifiers::default(),
        })
    }

    /// Runs one frame through a fresh `InputFrame`.
    fn frame(app: &mut EditorApp, input: &mut InputState, events: Vec<InputEvent>) {
        let mut fr = InputFrame::default();
        for ev in events {
            input.apply_event(&mut fr, ev);
        }
        app.update(input, &fr, VIEWPORT);
    }

    fn triangle(app: &mut EditorApp, input: &mut InputState) {
        frame(
            app,
            input,
            vec![
                click(MouseButton::Left, MouseButtonState::Pressed, 400.0, 150.0),
                click(MouseButton::Left, MouseButtonState::Released, 400.0, 150.0),
                click(MouseButton::Left, MouseButtonState::Pressed, 600.0, 450.0),
                click(MouseButton::Left, MouseButtonState::Released, 600.0, 450.0),
                click(MouseButton::Left, MouseButtonState::Pressed, 200.0, 450.0),
                click(MouseButton::Left, MouseButtonState::Released, 200.0, 450.0),
            ],
        );
    }

    // ── event collection ──────────────────────────────────────────────────

    #[test]
    fn only_left_presses_become_clicks() {
        let mut input = InputState::default();
        let mut fr = InputFrame::default();
        input.apply_event(&mut fr, click(MouseButton::Right, MouseButtonState::Pressed, 1.0, 1.0));
        input.apply_event(&mut fr, click(MouseButton::Left, MouseButtonState::Released, 2.0, 2.0));
        input.apply_event(&mut fr, click(MouseButton::Left, MouseButtonState::Pressed, 3.0, 4.0));

        let events = collect_events(&input, &fr, VIEWPORT);
        assert_eq!(
            events,
            vec![EditorEvent::Click { x: 3.0, y: 4.0, viewport_width: 800.0, viewport_height: 600.0 }]
        );
    }

    #[test]
    fn press_without_pointer_position_adds_no_vertex() {
        let mut app = EditorApp::default();
        let mut input = InputState::default();
        frame(
            &mut app,
            &mut input,
            vec![InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                position: None,
                modifiers: Modifiers::default(),
            })],
        );
        assert!(app.editor().points().is_empty());
    }

    #[test]
    fn repeats_are_not_presses() {
        let mut input = InputState::default();
        let mut fr = InputFrame::default();
        input.apply_event(
            &mut fr,
            InputEvent::Key {
                key: Key::T,
                state: KeyState::Pressed,
                modifiers: Modifiers::default(),
                code: 0,
                repeat: true,
            },
        );
        assert!(collect_events(&input, &fr, VIEWPORT).is_empty());
    }

    #[test]
    fn held_direction_follows_presses() {
        let mut input = InputState::default();
        let mut fr = InputFrame::default();
        input.apply_event(&mut fr, press(Key::T));
        input.apply_event(&mut fr, press(Key::ArrowLeft));

        let events = collect_events(&input, &fr, VIEWPORT);
        assert_eq!(
            events,
            vec![
                EditorEvent::KeyPress(Control::TranslateMode),
                EditorEvent::KeyPress(Control::Left),
                EditorEvent::KeyHeld(Control::Left),
            ]
        );
    }

    #[test]
    fn held_keys_keep_firing_on_quiet_frames() {
        let mut input = InputState::default();
        let mut fr = InputFrame::default();
        input.apply_event(&mut fr, press(Key::ArrowUp));

        let quiet = InputFrame::default();
        assert_eq!(collect_events(&input, &quiet, VIEWPORT), vec![EditorEvent::KeyHeld(Control::Up)]);
    }

    // ── editor app ────────────────────────────────────────────────────────

    #[test]
    fn nothing_is_drawn_before_finalize() {
        let mut app = EditorApp::default();
        let mut input = InputState::default();
        triangle(&mut app, &mut input);
        assert_eq!(app.editor().points().len(), 3);
        assert!(app.draw_list().is_empty());
    }

    #[test]
    fn enter_draws_a_pink_fan() {
        let mut app = EditorApp::default();
        let mut input = InputState::default();
        triangle(&mut app, &mut input);
        frame(&mut app, &mut input, vec![press(Key::Enter)]);

        assert_eq!(app.draw_list().len(), 1);
        match &app.draw_list().items()[0].cmd {
            DrawCmd::Fan(fan) => {
                assert_eq!(fan.color, POLYGON_COLOR);
                assert_eq!(fan.vertices.len(), 3);
                assert_eq!(fan.vertices[0], Vec2::new(0.0, 0.5));
            }
            other => panic!("expected a fan, got {other:?}"),
        }
    }

    #[test]
    fn held_right_translates_once_per_frame() {
        let mut app = EditorApp::default();
        let mut input = InputState::default();
        triangle(&mut app, &mut input);
        frame(&mut app, &mut input, vec![press(Key::Enter), press(Key::T)]);
        let x0 = app.editor().points()[0].x;

        frame(&mut app, &mut input, vec![press(Key::ArrowRight)]);
        frame(&mut app, &mut input, vec![]);
        frame(&mut app, &mut input, vec![release(Key::ArrowRight)]);
        frame(&mut app, &mut input, vec![]);

        assert_eq!(app.editor().mode(), TransformMode::Translate);
        assert!((app.editor().points()[0].x - (x0 + 0.02)).abs() < 1e-9);
    }

    #[test]
    fn scale_keys_only_change_the_drawn_outline() {
        let mut app = EditorApp::default();
        let mut input = InputState::default();
        triangle(&mut app, &mut input);
        frame(&mut app, &mut input, vec![press(Key::Enter), press(Key::S), press(Key::Equal)]);

        assert!((app.editor().scale_factor() - 1.1).abs() < 1e-9);
        assert_eq!(app.editor().points()[0].y, 0.5);
        match &app.draw_list().items()[0].cmd {
            DrawCmd::Fan(fan) => assert!((fan.vertices[0].y - 0.55).abs() < 1e-6),
            other => panic!("expected a fan, got {other:?}"),
        }
    }

    #[test]
    fn capture_only_app_ignores_transforms() {
        let mut app = EditorApp::new(EditorConfig::capture_only());
        let mut input = InputState::default();
        triangle(&mut app, &mut input);
        frame(&mut app, &mut input, vec![press(Key::Enter), press(Key::T), press(Key::ArrowRight)]);

        assert_eq!(app.editor().mode(), TransformMode::None);
        assert_eq!(app.editor().points()[0].x, 0.0);
        assert_eq!(app.draw_list().len(), 1);
    }
}
