use polyfan_editor::EditorConfig;
use polyfan_engine::device::GpuInit;
use polyfan_engine::window::{Runtime, RuntimeConfig};
use polyfan_studio::EditorApp;

/// Click to place vertices, Enter to fill the polygon.
fn main() -> anyhow::Result<()> {
    polyfan_studio::init();

    Runtime::run(
        RuntimeConfig::new("Interactive Polygon Creation", 800.0, 600.0),
        GpuInit::passthrough(),
        EditorApp::new(EditorConfig::capture_only()),
    )
}
