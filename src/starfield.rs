use rand::Rng;

/// One decorative star. Pure data; the glue renders it however it likes.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    /// World px from the world center.
    pub x: f32,
    pub y: f32,
    pub size_px: f32,
    pub opacity: f32,
    /// Twinkle animation phase offset, seconds.
    pub twinkle_delay_sec: f32,
}

/// Scatter `count` stars uniformly over the world square.
pub fn generate(
    count: usize,
    world_size_px: f32,
    size_min_px: f32,
    size_max_px: f32,
    delay_max_sec: f32,
    rng: &mut impl Rng,
) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: (rng.gen::<f32>() - 0.5) * world_size_px,
            y: (rng.gen::<f32>() - 0.5) * world_size_px,
            size_px: rng.gen_range(size_min_px..size_max_px),
            opacity: rng.gen::<f32>(),
            twinkle_delay_sec: rng.gen_range(0.0..delay_max_sec),
        })
        .collect()
}
