use crate::editor::PolygonEditor;
use crate::mode::TransformMode;

/// Editor-level controls, independent of physical key bindings.
///
/// The application maps keys to controls; the editor never sees raw key codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Control {
    /// Stop capturing points.
    Finish,

    TranslateMode,
    RotateMode,
    ScaleMode,

    /// Multiply scale by the configured shrink factor.
    Shrink,
    /// Multiply scale by the configured grow factor.
    Grow,

    Up,
    Down,
    Left,
    Right,
}

/// Input consumed by [`PolygonEditor::handle_event`].
///
/// `KeyPress` is edge-triggered (once per physical press). `KeyHeld` is emitted
/// by the application every frame while the control stays down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EditorEvent {
    /// Primary-button click in window coordinates (top-left origin, +Y down).
    Click {
        x: f64,
        y: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
    KeyPress(Control),
    KeyHeld(Control),
}

impl PolygonEditor {
    /// Applies a single input event.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::Click {
                x,
                y,
                viewport_width,
                viewport_height,
            } => self.add_point(x, y, viewport_width, viewport_height),

            EditorEvent::KeyPress(control) => self.on_press(control),

            EditorEvent::KeyHeld(control) => self.on_held(control),
        }
    }

    fn on_press(&mut self, control: Control) {
        if control == Control::Finish {
            self.finalize();
            return;
        }
        if !self.config().transforms_enabled {
            return;
        }

        match control {
            Control::TranslateMode => self.set_mode(TransformMode::Translate),
            Control::RotateMode => self.set_mode(TransformMode::Rotate),
            Control::ScaleMode => self.set_mode(TransformMode::Scale),
            Control::Shrink => self.adjust_scale(self.config().shrink_factor),
            Control::Grow => self.adjust_scale(self.config().grow_factor),
            // Directions act through `KeyHeld`, which also fires on the press frame.
            Control::Up | Control::Down | Control::Left | Control::Right => {}
            Control::Finish => {}
        }
    }

    fn on_held(&mut self, control: Control) {
        if !self.config().transforms_enabled {
            return;
        }

        let step = self.config().translation_step;
        let angle = self.config().rotation_step_degrees;

        match (self.mode(), control) {
            (TransformMode::Translate, Control::Up) => self.translate(0.0, step),
            (TransformMode::Translate, Control::Down) => self.translate(0.0, -step),
            (TransformMode::Translate, Control::Left) => self.translate(-step, 0.0),
            (TransformMode::Translate, Control::Right) => self.translate(step, 0.0),
            (TransformMode::Rotate, Control::Left) => self.rotate(angle),
            (TransformMode::Rotate, Control::Right) => self.rotate(-angle),
            _ => {}
        }
        log::trace!("held {control:?} in {} mode", self.mode());
    }
}
