/// Per-tick transform steps and feature switches for [`crate::PolygonEditor`].
///
/// Steps are applied once per frame while a direction is held, so motion speed
/// depends on the frame rate (FIFO presentation keeps this near the display
/// refresh rate).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// NDC distance moved per frame in translate mode.
    pub translation_step: f64,

    /// Degrees turned per frame in rotate mode. Left turns by `+step`, right by `-step`.
    pub rotation_step_degrees: f64,

    /// Scale multiplier applied on a shrink press.
    pub shrink_factor: f64,

    /// Scale multiplier applied on a grow press.
    pub grow_factor: f64,

    /// When `false`, mode and direction controls are ignored and the editor only
    /// captures and finalizes points.
    pub transforms_enabled: bool,
}

impl EditorConfig {
    /// Capture-and-finalize only; all transform controls are ignored.
    pub fn capture_only() -> Self {
        Self {
            transforms_enabled: false,
            ..Self::default()
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            translation_step: 0.01,
            rotation_step_degrees: 5.0,
            shrink_factor: 0.9,
            grow_factor: 1.1,
            transforms_enabled: true,
        }
    }
}
