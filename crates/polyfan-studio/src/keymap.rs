use polyfan_editor::Control;
use polyfan_engine::input::Key;

/// Keys whose held state drives continuous transforms.
pub const DIRECTION_KEYS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight];

/// Maps a physical key to an editor control.
///
/// Both the main-row and numpad variants are bound for Enter, minus and plus.
pub fn control_for(key: Key) -> Option<Control> {
    let control = match key {
        Key::Enter | Key::NumpadEnter => Control::Finish,

        Key::T => Control::TranslateMode,
        Key::R => Control::RotateMode,
        Key::S => Control::ScaleMode,

        Key::Minus | Key::NumpadSubtract => Control::Shrink,
        Key::Equal | Key::NumpadAdd => Control::Grow,

        Key::ArrowUp => Control::Up,
        Key::ArrowDown => Control::Down,
        Key::ArrowLeft => Control::Left,
        Key::ArrowRight => Control::Right,

        Key::Unknown(_) => return None,
    };
    Some(control)
}
