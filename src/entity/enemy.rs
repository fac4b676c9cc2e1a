use glam::Vec2;
use rand::Rng;

use crate::constants::{
    ENEMY_MIN_PLAYER_DISTANCE, ENEMY_SPAWN_ATTEMPTS, ENEMY_SPAWN_MARGIN, ENEMY_SPEED_MAX, ENEMY_SPEED_MIN,
};
use crate::entity::Wall;

/// A pursuer. `base_speed` is rolled once at spawn and never changes; the
/// difficulty multiplier is applied at use time in [`Enemy::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub base_speed: f32,
}

impl Enemy {
    /// Rolls a spawn position clear of the player.
    ///
    /// Candidates closer than [`ENEMY_MIN_PLAYER_DISTANCE`] are rejected.
    /// Sampling is bounded: if every attempt lands too close, the farthest
    /// candidate seen is used, so spawning terminates even on playfields
    /// with no valid position at all.
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2, player_pos: Vec2) -> Self {
        let mut best = Vec2::ZERO;
        let mut best_distance = f32::NEG_INFINITY;

        for _ in 0..ENEMY_SPAWN_ATTEMPTS {
            let candidate = Vec2::new(
                rng.random_range(ENEMY_SPAWN_MARGIN..=bounds.x - ENEMY_SPAWN_MARGIN),
                rng.random_range(ENEMY_SPAWN_MARGIN..=bounds.y - ENEMY_SPAWN_MARGIN),
            );
            let distance = candidate.distance(player_pos);

            if distance > best_distance {
                best = candidate;
                best_distance = distance;
            }
            if distance > ENEMY_MIN_PLAYER_DISTANCE {
                break;
            }
        }

        Self {
            pos: best,
            base_speed: rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX),
        }
    }

    /// Steps straight toward the player at `base_speed` scaled by the
    /// current difficulty, reverting the whole move on wall contact.
    pub fn update(&mut self, player_pos: Vec2, walls: &[Wall], difficulty: f32) {
        let previous = self.pos;
        let direction = (player_pos - self.pos).normalize_or_zero();
        self.pos += direction * self.base_speed * difficulty;

        if walls.iter().any(|wall| wall.contains(self.pos)) {
            self.pos = previous;
        }
    }
}
