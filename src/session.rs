//! The playing-state simulation: one run of the coin chase.

use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::{CATCH_DISTANCE, DIFFICULTY_PER_COIN, PICKUP_DISTANCE, TARGET_SCORE};
use crate::entity::{Collectible, Enemy, MoveAxes, Player, Wall};
use crate::level::{LevelConfig, MAX_LEVEL};

/// One run of the arcade loop: entities, score, and the difficulty scalar.
///
/// A reset rebuilds the whole session; nothing is patched in place. The
/// level number survives resets, so a retry replays the level the player
/// reached rather than starting over.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub level: u32,
    pub walls: SmallVec<[Wall; 6]>,
    pub enemies: SmallVec<[Enemy; 5]>,
    pub collectible: Collectible,
    pub player: Player,
    pub score: u32,
    pub target_score: u32,
    pub difficulty: f32,
}

/// What one frame of play produced.
///
/// Both flags can be set on the same frame: the pickup check runs even when
/// a pursuer connected, and its outcome is applied after the catch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub caught: bool,
    pub collected: bool,
    pub outcome: Option<StepOutcome>,
}

/// Raised by a pickup that completed the level's coin quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More levels remain; rebuild at the next one.
    Advance,
    /// The final level is clear.
    Won,
}

impl GameSession {
    /// Builds a fresh session at `level`: player centered, enemies spawned
    /// clear of the player, one coin, zero score, difficulty 1.
    pub fn new(level: u32, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let config = LevelConfig::get(level);
        let player = Player::new(bounds);
        let enemies = (0..config.enemy_count)
            .map(|_| Enemy::spawn(rng, bounds, player.pos))
            .collect();

        Self {
            level,
            walls: config.walls(bounds),
            enemies,
            collectible: Collectible::spawn(rng, bounds),
            player,
            score: 0,
            target_score: TARGET_SCORE,
            difficulty: 1.0,
        }
    }

    /// Runs one frame of play: player movement and facing, every pursuer's
    /// step and catch check, then the pickup check.
    pub fn step(&mut self, axes: MoveAxes, pointer: Vec2, bounds: Vec2, rng: &mut impl Rng) -> StepReport {
        let mut report = StepReport::default();

        self.player.apply_movement(axes, &self.walls, bounds);
        self.player.face_toward(pointer);

        for enemy in &mut self.enemies {
            enemy.update(self.player.pos, &self.walls, self.difficulty);
            if enemy.pos.distance(self.player.pos) < CATCH_DISTANCE {
                report.caught = true;
            }
        }

        if self.player.pos.distance(self.collectible.pos) < PICKUP_DISTANCE {
            report.collected = true;
            self.score += 1;
            self.collectible = Collectible::spawn(rng, bounds);
            self.difficulty = 1.0 + self.score as f32 * DIFFICULTY_PER_COIN;

            if self.score >= self.target_score {
                report.outcome = Some(if self.level < MAX_LEVEL {
                    StepOutcome::Advance
                } else {
                    StepOutcome::Won
                });
            }
        }

        report
    }
}
