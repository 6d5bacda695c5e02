//! Polyfan editor crate.
//!
//! Owns the state of a single polygon being captured from mouse clicks and
//! then moved, rotated and scaled from the keyboard. Nothing here touches a
//! window or a GPU; the application feeds [`EditorEvent`]s in and reads
//! [`PolygonEditor::render_outline`] back out once per frame.

mod config;
mod editor;
mod event;
mod mode;
mod point;

pub use config::EditorConfig;
pub use editor::{PolygonEditor, MIN_SCALE};
pub use event::{Control, EditorEvent};
pub use mode::TransformMode;
pub use point::Point;
