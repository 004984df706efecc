use glam::Vec2;

use crate::camera::CameraController;
use crate::constants;
use crate::input::{DragState, PointerKind};
use crate::lockon::{LockOn, LockPhase};
use crate::orientation::{OrientationAdapter, OrientationSample};
use crate::tracker::{TargetTracker, TrackingState};

/// Session-start configuration. Defaults mirror `constants`; tests override
/// per case.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    pub sensitivity: f32,
    pub offset_clamp: f32,
    pub lock_radius: f32,
    pub countdown_ms: i32,
    pub guide_rest_offset_deg: f32,
    pub target: Vec2,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sensitivity: constants::ORIENTATION_SENSITIVITY,
            offset_clamp: constants::OFFSET_CLAMP_PX,
            lock_radius: constants::LOCK_RADIUS_PX,
            countdown_ms: constants::LOCK_COUNTDOWN_MS,
            guide_rest_offset_deg: constants::GUIDE_REST_OFFSET_DEG,
            target: constants::TARGET_POS,
        }
    }
}

/// Read-only view of the session for the renderer.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot {
    pub offset: Vec2,
    pub distance: f32,
    pub bearing_deg: f32,
    pub phase: LockPhase,
}

/// Owns the camera, both input adapters, the tracker and the lock-on
/// machine, and routes raw events between them.
///
/// Tracking state is recomputed inside every offset-changing call, so
/// collaborators never observe a stale distance.
pub struct SearchSession {
    camera: CameraController,
    orientation: OrientationAdapter,
    drag: DragState,
    tracker: TargetTracker,
    lockon: LockOn,
    tracking: TrackingState,
    countdown_ms: i32,
    on_found: Option<Box<dyn FnMut()>>,
}

impl SearchSession {
    pub fn new(config: SessionConfig, on_found: impl FnMut() + 'static) -> Self {
        let tracker = TargetTracker::new(config.target, config.guide_rest_offset_deg);
        let camera = CameraController::new(config.offset_clamp);
        let tracking = tracker.track(camera.offset());
        Self {
            camera,
            orientation: OrientationAdapter::new(config.sensitivity),
            drag: DragState::default(),
            tracker,
            lockon: LockOn::new(config.lock_radius),
            tracking,
            countdown_ms: config.countdown_ms,
            on_found: Some(Box::new(on_found)),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            offset: self.camera.offset(),
            distance: self.tracking.distance,
            bearing_deg: self.tracking.bearing_deg,
            phase: self.lockon.phase(),
        }
    }

    #[inline]
    pub fn phase(&self) -> LockPhase {
        self.lockon.phase()
    }

    #[inline]
    pub fn countdown_ms(&self) -> i32 {
        self.countdown_ms
    }

    /// Feed a raw orientation sample. Returns `true` when this update
    /// crossed the lock threshold (caller schedules the countdown).
    pub fn handle_orientation(&mut self, sample: OrientationSample) -> bool {
        let had_baseline = self.orientation.has_baseline();
        let requested = match self.orientation.absolute_offset(sample) {
            Some(o) => o,
            None => {
                if !had_baseline && self.orientation.has_baseline() {
                    log::info!("[gyro] baseline captured");
                }
                return false; // calibration or unusable sample
            }
        };
        self.camera.apply_absolute(requested);
        self.retrack()
    }

    pub fn pointer_down(&mut self, pos: Vec2, kind: PointerKind) {
        if !self.camera.panning_enabled() {
            return; // no new gestures once locked
        }
        self.drag.begin(pos, kind);
        self.camera.begin_drag();
        log::info!("[drag] begin ({:?})", self.drag.kind);
    }

    /// Feed a pointer-move position. Returns `true` on the lock edge.
    pub fn pointer_move(&mut self, pos: Vec2) -> bool {
        let delta = match self.drag.delta(pos) {
            Some(d) => d,
            None => return false,
        };
        self.camera.apply_delta(delta.x, delta.y);
        self.retrack()
    }

    pub fn pointer_up(&mut self) {
        if self.drag.active {
            self.drag.end();
            self.camera.end_drag();
        }
    }

    /// The one-shot countdown elapsed. Invokes the completion callback on
    /// the first LOCKED -> FOUND edge only.
    pub fn countdown_elapsed(&mut self) {
        if !self.lockon.countdown_elapsed() {
            return;
        }
        log::info!("[lock] countdown elapsed, target found");
        if let Some(cb) = self.on_found.as_mut() {
            cb();
        }
    }

    fn retrack(&mut self) -> bool {
        self.tracking = self.tracker.track(self.camera.offset());
        let just_locked = self.lockon.observe_distance(self.tracking.distance);
        if just_locked {
            log::info!(
                "[lock] target acquired at distance {:.1}px",
                self.tracking.distance
            );
            self.camera.disable_panning();
            self.drag.end();
            self.camera.end_drag();
        }
        just_locked
    }
}
