use glam::Vec2;

/// Pointer capability reported by the browser. Touch and mouse are handled
/// identically; the tag exists only for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

impl PointerKind {
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" | "pen" => PointerKind::Touch,
            _ => PointerKind::Mouse,
        }
    }
}

/// Tracks a single drag gesture and yields incremental deltas between
/// consecutive pointer samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    pub active: bool,
    pub kind: PointerKind,
    last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pos: Vec2, kind: PointerKind) {
        self.active = true;
        self.kind = kind;
        self.last = pos;
    }

    /// Delta from the previous sample, or `None` when no gesture is active
    /// or the position is malformed.
    pub fn delta(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.active || !pos.is_finite() {
            return None;
        }
        let d = pos - self.last;
        self.last = pos;
        Some(d)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}
