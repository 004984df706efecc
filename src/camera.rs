use glam::Vec2;

/// Which input source currently drives the camera.
///
/// Drag takes precedence: while a drag gesture is active, absolute
/// orientation updates are ignored so the two control schemes never fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Orientation,
    Drag,
}

/// Integrates raw input into a bounded 2D pan offset.
///
/// The offset is clamped to a symmetric per-axis bound so drift can never run
/// unbounded, and non-finite input is rejected at this boundary — a NaN here
/// would corrupt every downstream distance/bearing computation.
#[derive(Clone, Debug)]
pub struct CameraController {
    offset: Vec2,
    clamp: f32,
    mode: InputMode,
    panning_enabled: bool,
}

impl CameraController {
    pub fn new(clamp: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            clamp: clamp.abs(),
            mode: InputMode::Orientation,
            panning_enabled: true,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Absolute positioning from the orientation path. Ignored while a drag
    /// is active (drag precedence). Still applied after lock so the view
    /// keeps following the device for visual smoothness.
    pub fn apply_absolute(&mut self, requested: Vec2) -> Vec2 {
        if self.mode == InputMode::Drag {
            return self.offset;
        }
        if requested.is_finite() {
            self.offset = self.clamp_offset(requested);
        }
        self.offset
    }

    /// Incremental delta from the drag path. No-op once panning is disabled
    /// (lock phase left SCANNING).
    pub fn apply_delta(&mut self, dx: f32, dy: f32) -> Vec2 {
        if !self.panning_enabled {
            return self.offset;
        }
        let delta = Vec2::new(dx, dy);
        if delta.is_finite() {
            self.offset = self.clamp_offset(self.offset + delta);
        }
        self.offset
    }

    pub fn begin_drag(&mut self) {
        self.mode = InputMode::Drag;
    }

    pub fn end_drag(&mut self) {
        self.mode = InputMode::Orientation;
    }

    /// Called when the lock phase leaves SCANNING; drag deltas stop applying.
    pub fn disable_panning(&mut self) {
        self.panning_enabled = false;
    }

    #[inline]
    pub fn panning_enabled(&self) -> bool {
        self.panning_enabled
    }

    #[inline]
    fn clamp_offset(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            v.x.clamp(-self.clamp, self.clamp),
            v.y.clamp(-self.clamp, self.clamp),
        )
    }
}
