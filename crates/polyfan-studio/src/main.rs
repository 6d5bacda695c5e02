use polyfan_editor::EditorConfig;
use polyfan_engine::device::GpuInit;
use polyfan_engine::window::{Runtime, RuntimeConfig};
use polyfan_studio::EditorApp;

/// Click to place vertices, Enter to close the polygon, then
/// T/R/S + arrows or -/+ to translate, rotate and scale it.
fn main() -> anyhow::Result<()> {
    polyfan_studio::init();

    Runtime::run(
        RuntimeConfig::new("Interactive Transformation of Polygons", 800.0, 600.0),
        GpuInit::passthrough(),
        EditorApp::new(EditorConfig::default()),
    )
}
