//! Error types for the whole crate.
//!
//! Everything fallible funnels into [`GameError`], so callers see a single
//! error surface no matter which subsystem failed.

/// The top-level error type returned by public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Video error: {0}")]
    Video(#[from] VideoError),

    #[error("SDL error: {0}")]
    Sdl(String),
}

/// Errors from loading optional media assets. These never abort the game;
/// the affected asset is skipped instead.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// Errors from pushing a display mode to the window.
#[derive(thiserror::Error, Debug)]
pub enum VideoError {
    #[error("Video mode {width}x{height} (fullscreen: {fullscreen}) rejected: {reason}")]
    ModeRejected {
        width: u32,
        height: u32,
        fullscreen: bool,
        reason: String,
    },
}

/// Shorthand for results carrying a [`GameError`].
pub type GameResult<T> = Result<T, GameError>;
