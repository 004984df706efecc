use glam::Vec2;

/// Derived view of the target relative to the view center. Recomputed from
/// scratch on every offset change; never stored as independent truth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackingState {
    pub distance: f32,
    /// Guidance-arrow rotation in degrees, [0, 360).
    pub bearing_deg: f32,
}

/// Pure tracker for a fixed world-space target.
#[derive(Clone, Copy, Debug)]
pub struct TargetTracker {
    target: Vec2,
    rest_offset_deg: f32,
}

impl TargetTracker {
    pub fn new(target: Vec2, rest_offset_deg: f32) -> Self {
        Self {
            target,
            rest_offset_deg,
        }
    }

    /// Vector from the view center to the target at the given pan offset.
    #[inline]
    pub fn target_vector(&self, offset: Vec2) -> Vec2 {
        self.target - offset
    }

    pub fn track(&self, offset: Vec2) -> TrackingState {
        let v = self.target_vector(offset);
        let bearing = v.y.atan2(v.x).to_degrees() + self.rest_offset_deg;
        TrackingState {
            distance: v.length(),
            bearing_deg: normalize_bearing(bearing),
        }
    }
}

/// Fold an angle into [0, 360).
#[inline]
pub fn normalize_bearing(mut deg: f32) -> f32 {
    deg %= 360.0;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}
