//! Neon Coin game library crate.

pub mod app;
pub mod audio;
pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod level;
pub mod math;
pub mod render;
pub mod session;
pub mod state;
pub mod video;
