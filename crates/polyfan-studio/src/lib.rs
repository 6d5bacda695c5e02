//! Polyfan application layer.
//!
//! Glues the headless `polyfan-editor` state machine to the engine runtime:
//! key bindings, per-frame event collection and drawing. The binaries in
//! `src/main.rs` and `src/bin/` are thin wrappers around the apps here.

pub mod app;
pub mod keymap;
pub mod showcase;

pub use app::{EditorApp, POLYGON_COLOR};
pub use showcase::ShowcaseApp;

use polyfan_engine::logging::{init_logging, LoggingConfig};

/// Logger setup shared by every binary.
pub fn init() {
    init_logging(LoggingConfig::default());
}
