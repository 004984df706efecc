/// Session tuning constants.
///
/// These express intended behavior (sensitivities, clamp limits, timings) and
/// keep magic numbers out of the event-path code. All are fixed at session
/// start; nothing here is runtime-mutable.
use glam::Vec2;

// World layout
pub const WORLD_SIZE_PX: f32 = 4000.0; // side of the square starfield
pub const TARGET_POS: Vec2 = Vec2::new(1200.0, -800.0); // moon center, world px
pub const MOON_SIZE_PX: f32 = 200.0;

// Orientation input
pub const ORIENTATION_SENSITIVITY: f32 = 25.0; // pixels of pan per degree of tilt

// Camera
pub const OFFSET_CLAMP_PX: f32 = 2000.0; // symmetric per-axis pan limit

// Lock-on
pub const LOCK_RADIUS_PX: f32 = 150.0; // view-center distance that counts as acquired
pub const LOCK_COUNTDOWN_MS: i32 = 2000; // LOCKED -> FOUND delay

// Guide arrow
// The arrow asset points up; atan2's zero is the +x axis, so +90 aligns them.
pub const GUIDE_REST_OFFSET_DEG: f32 = 90.0;

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_SIZE_MIN_PX: f32 = 1.0;
pub const STAR_SIZE_MAX_PX: f32 = 4.0;
pub const STAR_TWINKLE_DELAY_MAX_SEC: f32 = 5.0;

// Display-only smoothing time constant (seconds); adds a little weight to the
// pan without affecting tracking.
pub const CAMERA_SMOOTH_TAU_SEC: f32 = 0.08;
