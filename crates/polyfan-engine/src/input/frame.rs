use super::types::InputEvent;

/// Input received since the previous frame, in arrival order.
///
/// `InputState` holds what is currently down; `InputFrame` holds what happened.
/// The runtime clears it after every `App::on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
