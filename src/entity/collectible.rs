use glam::Vec2;
use rand::Rng;

use crate::constants::COIN_SPAWN_MARGIN;

/// The coin. Exactly one exists during play; a pickup replaces it with a
/// fresh roll. Spawn positions do not avoid walls, so a coin can land
/// inside one and still be collected by brushing against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub pos: Vec2,
}

impl Collectible {
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(COIN_SPAWN_MARGIN..=bounds.x - COIN_SPAWN_MARGIN),
                rng.random_range(COIN_SPAWN_MARGIN..=bounds.y - COIN_SPAWN_MARGIN),
            ),
        }
    }
}
