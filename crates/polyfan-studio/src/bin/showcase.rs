use polyfan_engine::device::GpuInit;
use polyfan_engine::window::{Runtime, RuntimeConfig};
use polyfan_studio::ShowcaseApp;

fn main() -> anyhow::Result<()> {
    polyfan_studio::init();

    Runtime::run(
        RuntimeConfig::new("Primitive Showcase", 800.0, 800.0),
        GpuInit::passthrough(),
        ShowcaseApp::new(),
    )
}
