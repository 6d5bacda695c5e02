pub(crate) mod fan;
pub(crate) mod line;
pub(crate) mod point;

pub use fan::FanCmd;
pub use line::{Dash, LineCmd};
pub use point::PointCmd;
