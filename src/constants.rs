//! This module contains all the constants used in the game.

use std::time::Duration;

use sdl2::pixels::Color;

/// Frame budget for the 120 FPS cap.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 120.0) as u64);

/// The window sizes the video menu cycles through, in order.
pub const RESOLUTIONS: [(u32, u32); 4] = [(800, 600), (1024, 768), (1280, 720), (1920, 1080)];

pub const WINDOW_TITLE: &str = "NEON COIN";

// Palette
pub const BLACK: Color = Color::RGB(0, 0, 0);
pub const WHITE: Color = Color::RGB(255, 255, 255);
pub const GRAY: Color = Color::RGB(45, 45, 45);
pub const BLUE: Color = Color::RGB(70, 110, 200);
pub const YELLOW: Color = Color::RGB(255, 255, 0);
pub const CYAN: Color = Color::RGB(0, 255, 255);
pub const RED: Color = Color::RGB(255, 80, 80);
pub const GREEN: Color = Color::RGB(80, 200, 120);
/// Rim and inner-ring color of the coin.
pub const COIN_RIM: Color = Color::RGB(200, 180, 0);
/// Base color of the unlit playfield before the light cone brightens it.
pub const DARKNESS: Color = Color::RGB(10, 10, 10);

/// Side length of the player's square sprite, in pixels.
pub const PLAYER_SIZE: u32 = 40;
/// Player movement per frame on each held axis. Holding both axes moves the
/// player along the diagonal faster than either axis alone.
pub const PLAYER_SPEED: f32 = 7.0;
/// The player's center never comes closer than this to a screen edge.
pub const PLAYER_MARGIN: f32 = 20.0;

pub const ENEMY_RADIUS: f32 = 15.0;
/// Enemy base speed is rolled uniformly from this interval at spawn.
pub const ENEMY_SPEED_MIN: f32 = 0.8;
pub const ENEMY_SPEED_MAX: f32 = 1.5;
/// Enemies spawn at least this far inside the screen edges.
pub const ENEMY_SPAWN_MARGIN: f32 = 100.0;
/// Enemies never spawn closer than this to the player.
pub const ENEMY_MIN_PLAYER_DISTANCE: f32 = 250.0;
/// Spawn sampling gives up after this many rejected candidates and settles
/// for the farthest one seen.
pub const ENEMY_SPAWN_ATTEMPTS: u32 = 64;
/// An enemy within this distance of the player ends the run.
pub const CATCH_DISTANCE: f32 = 25.0;

pub const COIN_RADIUS: f32 = 12.0;
pub const COIN_SPAWN_MARGIN: f32 = 50.0;
/// The player collects the coin within this distance.
pub const PICKUP_DISTANCE: f32 = 30.0;

/// Coins required to clear a level.
pub const TARGET_SCORE: u32 = 5;
/// Difficulty gained per collected coin: the enemy speed multiplier is
/// `1.0 + score * DIFFICULTY_PER_COIN`.
pub const DIFFICULTY_PER_COIN: f32 = 0.15;

/// Outer radius of the light cone around the player.
pub const LIGHT_RADIUS: i16 = 260;
/// The cone is built from concentric discs this many pixels apart.
pub const LIGHT_RING_STEP: i16 = 30;
/// Ring brightness is `255 - radius * LIGHT_FALLOFF`, floored at zero.
pub const LIGHT_FALLOFF: f32 = 0.8;

/// Length of the pre-game countdown.
pub const COUNTDOWN_MS: u64 = 3_000;
