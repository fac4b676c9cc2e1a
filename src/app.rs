//! SDL bring-up and the fixed-rate frame loop.

use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info};

use crate::constants::{LOOP_TIME, RESOLUTIONS, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::game::Game;

/// Busy-wait only while the window is focused; an unfocused game can accept
/// coarse timer wakeups in exchange for idle CPU.
fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Ties SDL, the window, and the frame loop together for the lifetime of
/// the process.
pub struct App {
    pub game: Game,
    started: Instant,
    // Held so the SDL subsystems stay alive as long as the game does
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Brings up the SDL subsystems, opens the window at the first entry of
    /// the resolution list, and builds the game state.
    ///
    /// # Errors
    ///
    /// Any SDL setup failure surfaces as `GameError::Sdl`; errors from
    /// `Game::new()` pass through unchanged.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(|e| GameError::Sdl(e.to_string()))?;

        debug!("Initializing SDL2 subsystems");
        let video_subsystem = sdl_context.video().map_err(|e| GameError::Sdl(e.to_string()))?;
        let audio_subsystem = sdl_context.audio().map_err(|e| GameError::Sdl(e.to_string()))?;
        let event_pump = sdl_context.event_pump().map_err(|e| GameError::Sdl(e.to_string()))?;

        let (width, height) = RESOLUTIONS[0];
        debug!(width, height, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, width, height)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        info!("Initializing game state");
        let game = Game::new(canvas, event_pump)?;

        info!("Application initialized successfully");
        Ok(App {
            game,
            started: Instant::now(),
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Runs one frame, then sleeps off whatever is left of the frame budget
    /// so the loop holds its target rate.
    ///
    /// # Returns
    ///
    /// `true` to keep looping, `false` once the game has requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();
        let now_ms = self.started.elapsed().as_millis() as u64;

        if self.game.tick(now_ms) {
            return false;
        }

        // Sleep if we still have time left
        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                sleep(time, self.game.focused());
            }
        }

        true
    }
}
