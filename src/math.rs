//! Small geometry helpers shared by entities and rendering.

use glam::Vec2;

/// Angle in degrees from `from` toward `to`, measured counter-clockwise from
/// the positive x axis.
///
/// Screen y grows downward, so the y component is negated to keep the result
/// in mathematical orientation: straight up is +90, straight down is -90.
/// Coincident points face right (angle 0).
pub fn facing_degrees(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    (-delta.y).atan2(delta.x).to_degrees()
}
