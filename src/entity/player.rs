use glam::Vec2;

use crate::constants::{PLAYER_MARGIN, PLAYER_SPEED};
use crate::entity::Wall;
use crate::math::facing_degrees;

/// Movement axes held down this frame. Both axes may be active at once, and
/// a diagonal step is not normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAxes {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player avatar. `angle` is the facing in degrees, refreshed every
/// frame from the pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub angle: f32,
}

impl Player {
    /// Spawns the player at the center of the playfield, facing right.
    pub fn new(bounds: Vec2) -> Self {
        Self {
            pos: bounds / 2.0,
            angle: 0.0,
        }
    }

    /// Advances the player one frame: apply the held axes, clamp to the
    /// screen margins, then revert the whole move if the resulting center
    /// sits inside a wall.
    pub fn apply_movement(&mut self, axes: MoveAxes, walls: &[Wall], bounds: Vec2) {
        let previous = self.pos;

        if axes.left {
            self.pos.x -= PLAYER_SPEED;
        }
        if axes.right {
            self.pos.x += PLAYER_SPEED;
        }
        if axes.up {
            self.pos.y -= PLAYER_SPEED;
        }
        if axes.down {
            self.pos.y += PLAYER_SPEED;
        }

        self.pos.x = self.pos.x.clamp(PLAYER_MARGIN, bounds.x - PLAYER_MARGIN);
        self.pos.y = self.pos.y.clamp(PLAYER_MARGIN, bounds.y - PLAYER_MARGIN);

        if walls.iter().any(|wall| wall.contains(self.pos)) {
            self.pos = previous;
        }
    }

    /// Turns the player toward the pointer. Facing never affects movement.
    pub fn face_toward(&mut self, pointer: Vec2) {
        self.angle = facing_degrees(self.pos, pointer);
    }
}
