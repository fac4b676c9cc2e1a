//! Shared helpers for integration tests.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

/// Deterministic RNG so spawn-dependent assertions are stable.
pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

pub fn rng_with(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
