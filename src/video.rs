//! Window mode handling: the resolution list, fullscreen, and fallback on
//! rejected modes.

use glam::Vec2;
use sdl2::video::{FullscreenType, Window};
use tracing::info;

use crate::constants::RESOLUTIONS;
use crate::error::VideoError;

/// The pending window configuration. [`VideoSettings::apply`] pushes it to
/// the actual window; the frame loop keeps the previous value so a rejected
/// mode can be rolled back instead of killing the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSettings {
    pub resolution_index: usize,
    pub fullscreen: bool,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            resolution_index: 0,
            fullscreen: false,
        }
    }
}

impl VideoSettings {
    pub fn resolution(&self) -> (u32, u32) {
        RESOLUTIONS[self.resolution_index]
    }

    /// Moves to the next entry in the resolution list, wrapping at the end.
    pub fn advance_resolution(&mut self) {
        self.resolution_index = (self.resolution_index + 1) % RESOLUTIONS.len();
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Pushes these settings to the window and reports the resulting
    /// drawable size.
    pub fn apply(&self, window: &mut Window) -> Result<Vec2, VideoError> {
        let (width, height) = self.resolution();
        let reject = |reason: String| VideoError::ModeRejected {
            width,
            height,
            fullscreen: self.fullscreen,
            reason,
        };

        window.set_size(width, height).map_err(|e| reject(e.to_string()))?;

        let mode = if self.fullscreen {
            FullscreenType::True
        } else {
            FullscreenType::Off
        };
        window.set_fullscreen(mode).map_err(reject)?;

        let (drawable_width, drawable_height) = window.drawable_size();
        info!(
            width = drawable_width,
            height = drawable_height,
            fullscreen = self.fullscreen,
            "Applied video mode"
        );

        Ok(Vec2::new(drawable_width as f32, drawable_height as f32))
    }
}
