/// Lock-on phase. Transitions are monotonic within a session:
/// SCANNING -> LOCKED -> FOUND, never backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LockPhase {
    #[default]
    Scanning,
    Locked,
    Found,
}

/// Watches the view-center distance and runs the acquisition state machine.
///
/// LOCKED is sticky on purpose: it models "target acquired", not "target
/// currently centered", so drifting off the moon after acquisition does not
/// revert to SCANNING. Do not "fix" this into a re-enterable state.
#[derive(Clone, Debug)]
pub struct LockOn {
    phase: LockPhase,
    lock_radius: f32,
    callback_fired: bool,
}

impl LockOn {
    pub fn new(lock_radius: f32) -> Self {
        Self {
            phase: LockPhase::Scanning,
            lock_radius,
            callback_fired: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> LockPhase {
        self.phase
    }

    /// Feed the current distance. Returns `true` on the SCANNING -> LOCKED
    /// edge, which is the caller's cue to start the one-shot countdown.
    pub fn observe_distance(&mut self, distance: f32) -> bool {
        if self.phase != LockPhase::Scanning {
            return false;
        }
        if distance.is_finite() && distance <= self.lock_radius {
            self.phase = LockPhase::Locked;
            return true;
        }
        false
    }

    /// Countdown elapsed. Returns `true` exactly once, on the LOCKED ->
    /// FOUND edge; duplicate timer fires and re-entries are no-ops.
    pub fn countdown_elapsed(&mut self) -> bool {
        if self.phase != LockPhase::Locked {
            // Stray fire (FOUND re-entry, or a cancel racing the timer).
            return false;
        }
        self.phase = LockPhase::Found;
        if self.callback_fired {
            return false;
        }
        self.callback_fired = true;
        true
    }
}
