use glam::Vec2;

/// One device-orientation reading. Any field may be absent on devices that
/// do not report that axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrientationSample {
    /// Z-axis rotation, 0..360.
    pub alpha: Option<f64>,
    /// Front/back tilt, -180..180.
    pub beta: Option<f64>,
    /// Left/right tilt, -90..90 (unused for panning, kept for completeness).
    pub gamma: Option<f64>,
}

/// Normalize an angular delta into (-180, 180] so the shortest rotational
/// path is used across the 0/360 wrap.
#[inline]
pub fn wrap_degrees(mut delta: f64) -> f64 {
    while delta > 180.0 {
        delta -= 360.0;
    }
    while delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Turns raw orientation samples into an absolute camera offset.
///
/// The first sample carrying valid alpha/beta angles becomes the zero
/// reference; every later sample maps `(baseline - current) * sensitivity`
/// directly to pixels. Absolute positioning, not dead-reckoning: holding the
/// device still holds the view still regardless of sample rate.
#[derive(Clone, Debug)]
pub struct OrientationAdapter {
    baseline: Option<(f64, f64)>,
    sensitivity: f32,
}

impl OrientationAdapter {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            baseline: None,
            sensitivity,
        }
    }

    #[inline]
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    /// Returns the absolute offset this sample maps to, or `None` when the
    /// sample is unusable (missing or non-finite angles) or when it was
    /// consumed as the baseline.
    pub fn absolute_offset(&mut self, sample: OrientationSample) -> Option<Vec2> {
        let (alpha, beta) = match (sample.alpha, sample.beta) {
            (Some(a), Some(b)) if a.is_finite() && b.is_finite() => (a, b),
            _ => return None,
        };
        let (base_alpha, base_beta) = match self.baseline {
            Some(b) => b,
            None => {
                // Calibration point; emits no movement.
                self.baseline = Some((alpha, beta));
                return None;
            }
        };
        // Alpha wraps at 360; beta's reported range never does.
        let delta_alpha = wrap_degrees(base_alpha - alpha);
        let delta_beta = base_beta - beta;
        Some(Vec2::new(
            delta_alpha as f32 * self.sensitivity,
            delta_beta as f32 * self.sensitivity,
        ))
    }
}
