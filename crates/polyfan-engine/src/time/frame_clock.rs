/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Zero-based frame counter.
    pub frame_index: u64,
}

/// Per-window frame counter.
///
/// Editor steps are applied per frame, not per second, so frames are only
/// numbered; the index tags per-frame logs.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock and returns the snapshot for the frame being drawn.
    pub fn tick(&mut self) -> FrameTime {
        let ft = FrameTime {
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}
