//! The static level catalog.
//!
//! Wall positions are fractions of the current playfield, so layouts follow
//! the window across resolution changes; wall sizes are absolute pixels.

use glam::Vec2;
use sdl2::pixels::Color;
use smallvec::SmallVec;

use crate::constants::GRAY;
use crate::entity::Wall;

/// The last designed level; levels past it reuse its configuration.
pub const MAX_LEVEL: u32 = 3;

/// Fractional x, fractional y, width in pixels, height in pixels.
type WallRect = (f32, f32, f32, f32);

const LEVEL_1_WALLS: &[WallRect] = &[
    (0.15, 0.25, 300.0, 30.0),
    (0.50, 0.40, 30.0, 250.0),
    (0.30, 0.70, 400.0, 30.0),
    (0.75, 0.20, 30.0, 300.0),
];

const LEVEL_2_WALLS: &[WallRect] = &[
    (0.10, 0.20, 250.0, 40.0),
    (0.40, 0.35, 40.0, 200.0),
    (0.60, 0.50, 300.0, 40.0),
    (0.25, 0.75, 40.0, 150.0),
    (0.80, 0.30, 40.0, 250.0),
];

const LEVEL_3_WALLS: &[WallRect] = &[
    (0.05, 0.15, 200.0, 50.0),
    (0.30, 0.25, 50.0, 180.0),
    (0.50, 0.40, 250.0, 50.0),
    (0.75, 0.55, 50.0, 200.0),
    (0.20, 0.70, 300.0, 50.0),
    (0.60, 0.80, 50.0, 100.0),
];

/// Per-level tuning: pursuer count, backdrop, and wall layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub enemy_count: usize,
    pub background: Color,
    layout: &'static [WallRect],
}

impl LevelConfig {
    /// Looks up a level's configuration. Total for any input: zero maps to
    /// the first level, anything past [`MAX_LEVEL`] maps to the last.
    pub fn get(level: u32) -> Self {
        match level {
            0 | 1 => Self {
                enemy_count: 3,
                background: GRAY,
                layout: LEVEL_1_WALLS,
            },
            2 => Self {
                enemy_count: 4,
                background: Color::RGB(30, 30, 60),
                layout: LEVEL_2_WALLS,
            },
            _ => Self {
                enemy_count: 5,
                background: Color::RGB(60, 30, 30),
                layout: LEVEL_3_WALLS,
            },
        }
    }

    /// Builds the wall set for the given playfield size.
    pub fn walls(&self, bounds: Vec2) -> SmallVec<[Wall; 6]> {
        self.layout
            .iter()
            .map(|&(fx, fy, w, h)| Wall::new(fx * bounds.x, fy * bounds.y, w, h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(LevelConfig::get(1).enemy_count, 3);
        assert_eq!(LevelConfig::get(2).enemy_count, 4);
        assert_eq!(LevelConfig::get(3).enemy_count, 5);

        let bounds = Vec2::new(800.0, 600.0);
        assert_eq!(LevelConfig::get(1).walls(bounds).len(), 4);
        assert_eq!(LevelConfig::get(2).walls(bounds).len(), 5);
        assert_eq!(LevelConfig::get(3).walls(bounds).len(), 6);
    }

    #[test]
    fn test_catalog_is_total() {
        assert_eq!(LevelConfig::get(0), LevelConfig::get(1));
        assert_eq!(LevelConfig::get(4), LevelConfig::get(3));
        assert_eq!(LevelConfig::get(u32::MAX), LevelConfig::get(3));
    }

    #[test]
    fn test_walls_scale_with_bounds() {
        let config = LevelConfig::get(1);
        let small = config.walls(Vec2::new(800.0, 600.0));
        let large = config.walls(Vec2::new(1920.0, 1080.0));

        assert_eq!(small[0].x, 800.0 * 0.15);
        assert_eq!(large[0].x, 1920.0 * 0.15);
        // Sizes stay absolute while positions scale
        assert_eq!(small[0].w, large[0].w);
        assert_eq!(small[0].h, large[0].h);
    }

    #[test]
    fn test_backgrounds_differ_per_level() {
        assert_ne!(LevelConfig::get(1).background, LevelConfig::get(2).background);
        assert_ne!(LevelConfig::get(2).background, LevelConfig::get(3).background);
    }
}
