use glam::Vec2;
use neon_coin::constants::{ENEMY_MIN_PLAYER_DISTANCE, ENEMY_SPEED_MAX, ENEMY_SPEED_MIN};
use neon_coin::entity::{Enemy, Wall};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

#[test]
fn test_spawns_clear_of_player() {
    // Plenty of room to land a distant candidate, so the rejection loop
    // should never fall back
    let bounds = Vec2::new(1920.0, 1080.0);
    let player_pos = bounds / 2.0;
    let mut rng = common::rng();

    for _ in 0..500 {
        let enemy = Enemy::spawn(&mut rng, bounds, player_pos);
        assert_that(&enemy.pos.distance(player_pos)).is_greater_than(ENEMY_MIN_PLAYER_DISTANCE);
    }
}

#[test]
fn test_spawn_falls_back_when_nowhere_is_far_enough() {
    // Every reachable candidate is inside the exclusion radius, so the
    // bounded sampling has to settle for the farthest one
    let bounds = Vec2::new(400.0, 400.0);
    let player_pos = bounds / 2.0;
    let mut rng = common::rng();

    let enemy = Enemy::spawn(&mut rng, bounds, player_pos);

    assert_that(&enemy.pos.x).is_greater_than_or_equal_to(100.0);
    assert_that(&enemy.pos.x).is_less_than_or_equal_to(300.0);
    assert_that(&enemy.pos.y).is_greater_than_or_equal_to(100.0);
    assert_that(&enemy.pos.y).is_less_than_or_equal_to(300.0);
    assert_that(&enemy.pos.distance(player_pos)).is_less_than(ENEMY_MIN_PLAYER_DISTANCE);
}

#[test]
fn test_spawn_is_deterministic_per_seed() {
    let player_pos = common::BOUNDS / 2.0;

    let first = Enemy::spawn(&mut common::rng_with(7), common::BOUNDS, player_pos);
    let second = Enemy::spawn(&mut common::rng_with(7), common::BOUNDS, player_pos);

    assert_eq!(first.pos, second.pos);
    assert_eq!(first.base_speed, second.base_speed);
}

#[test]
fn test_base_speed_range() {
    let mut rng = common::rng();
    let player_pos = common::BOUNDS / 2.0;

    for _ in 0..200 {
        let enemy = Enemy::spawn(&mut rng, common::BOUNDS, player_pos);
        assert_that(&enemy.base_speed).is_greater_than_or_equal_to(ENEMY_SPEED_MIN);
        assert_that(&enemy.base_speed).is_less_than(ENEMY_SPEED_MAX);
    }
}

#[test]
fn test_base_speed_never_mutates() {
    let mut rng = common::rng();
    let player_pos = Vec2::new(400.0, 300.0);
    let mut enemy = Enemy::spawn(&mut rng, common::BOUNDS, player_pos);
    let rolled = enemy.base_speed;

    let walls = [Wall::new(350.0, 250.0, 100.0, 100.0)];
    for _ in 0..100 {
        enemy.update(player_pos, &walls, 1.75);
    }

    assert_eq!(enemy.base_speed, rolled);
}

#[test]
fn test_update_scales_with_difficulty() {
    let mut enemy = Enemy {
        pos: Vec2::new(100.0, 100.0),
        base_speed: 1.0,
    };

    enemy.update(Vec2::new(200.0, 100.0), &[], 2.0);

    assert_eq!(enemy.pos, Vec2::new(102.0, 100.0));
}

#[test]
fn test_update_moves_straight_toward_player() {
    let mut enemy = Enemy {
        pos: Vec2::new(100.0, 100.0),
        base_speed: 1.5,
    };

    enemy.update(Vec2::new(100.0, 500.0), &[], 1.0);

    assert_eq!(enemy.pos, Vec2::new(100.0, 101.5));
}

#[test]
fn test_update_reverts_on_wall_contact() {
    let mut enemy = Enemy {
        pos: Vec2::new(100.0, 100.0),
        base_speed: 1.0,
    };
    let walls = [Wall::new(100.5, 90.0, 50.0, 20.0)];

    enemy.update(Vec2::new(200.0, 100.0), &walls, 1.0);

    assert_eq!(enemy.pos, Vec2::new(100.0, 100.0));
}

#[test]
fn test_update_on_top_of_player_stays_put() {
    let pos = Vec2::new(250.0, 250.0);
    let mut enemy = Enemy { pos, base_speed: 1.2 };

    // Zero-length direction must not produce NaN movement
    enemy.update(pos, &[], 3.0);

    assert_eq!(enemy.pos, pos);
}
