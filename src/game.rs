//! The frame loop: input, stage transitions, simulation, and drawing.

use glam::Vec2;
use rand::rngs::ThreadRng;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{error, info, trace, warn};

use crate::audio::{Audio, Sfx, Track};
use crate::error::GameResult;
use crate::input::Bindings;
use crate::render::Renderer;
use crate::session::{GameSession, StepOutcome, StepReport};
use crate::state::{countdown_digit, Effect, Stage, StageMachine};
use crate::video::VideoSettings;

/// Owns every live piece of the game and runs one frame per tick.
pub struct Game {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    texture_creator: TextureCreator<WindowContext>,
    renderer: Renderer,
    audio: Audio,
    bindings: Bindings,
    machine: StageMachine,
    session: GameSession,
    video: VideoSettings,
    /// Drawable size of the window, cached across frames and refreshed on
    /// every successful mode change.
    bounds: Vec2,
    menu_music_on: bool,
    game_music_on: bool,
    focused: bool,
    rng: ThreadRng,
}

impl Game {
    pub fn new(mut canvas: Canvas<Window>, event_pump: EventPump) -> GameResult<Self> {
        let texture_creator = canvas.texture_creator();
        let (width, height) = canvas.window().drawable_size();
        let bounds = Vec2::new(width as f32, height as f32);

        let renderer = Renderer::new(&mut canvas, &texture_creator, bounds)?;
        let mut audio = Audio::new();
        let mut rng = rand::rng();
        let session = GameSession::new(1, bounds, &mut rng);

        // The menu theme runs from launch until the first game starts
        audio.play_track(Track::MenuTheme);

        Ok(Self {
            canvas,
            event_pump,
            texture_creator,
            renderer,
            audio,
            bindings: Bindings::default(),
            machine: StageMachine::new(),
            session,
            video: VideoSettings::default(),
            bounds,
            menu_music_on: true,
            game_music_on: true,
            focused: true,
            rng,
        })
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Runs one frame. Returns `true` when the game should exit.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let input = self.bindings.poll(&mut self.event_pump);

        if input.quit {
            info!("Exit requested. Exiting...");
            return true;
        }
        if let Some(focused) = input.focus_change {
            self.focused = focused;
        }

        for &command in &input.commands {
            let effects = self.machine.handle(command, now_ms);
            if self.run_effects(&effects) {
                return true;
            }
        }

        let effects = self.machine.tick(now_ms);
        if self.run_effects(&effects) {
            return true;
        }

        if matches!(self.machine.stage(), Stage::Playing) {
            let report = self.session.step(input.axes, input.pointer, self.bounds, &mut self.rng);
            self.resolve_step(report, now_ms);
        }

        if let Err(e) = self.draw(now_ms) {
            error!("Failed to draw frame: {e}");
        }

        false
    }

    /// Applies transition effects in order. Returns `true` on a quit
    /// request.
    fn run_effects(&mut self, effects: &[Effect]) -> bool {
        for &effect in effects {
            trace!(?effect, "Running effect");
            match effect {
                Effect::Quit => {
                    info!("Exit requested from the menu");
                    return true;
                }
                Effect::ResetSession => {
                    self.session = GameSession::new(self.session.level, self.bounds, &mut self.rng);
                }
                Effect::StopMusic => self.audio.stop_music(),
                Effect::PlayMenuMusic => {
                    if self.menu_music_on {
                        self.audio.play_track(Track::MenuTheme);
                    }
                }
                Effect::PlayGameMusic => {
                    if self.game_music_on {
                        self.audio.play_track(Track::GameTheme);
                    }
                }
                Effect::AdvanceResolution => {
                    let previous = self.video;
                    self.video.advance_resolution();
                    self.apply_video(previous, true);
                }
                Effect::ToggleFullscreen => {
                    let previous = self.video;
                    self.video.toggle_fullscreen();
                    self.apply_video(previous, false);
                }
                Effect::ToggleMenuMusic => {
                    self.menu_music_on = !self.menu_music_on;
                    if self.menu_music_on {
                        self.audio.play_track(Track::MenuTheme);
                    } else {
                        self.audio.stop_music();
                    }
                }
                Effect::ToggleGameMusic => {
                    // Takes effect the next time play begins
                    self.game_music_on = !self.game_music_on;
                }
            }
        }

        false
    }

    /// Folds one frame's simulation results into the stage machine.
    fn resolve_step(&mut self, report: StepReport, now_ms: u64) {
        if report.caught {
            // The game track keeps playing over the end screen
            self.audio.play(Sfx::Lose);
            self.machine.enter_game_over();
        }
        if report.collected {
            self.audio.play(Sfx::Collect);
        }

        match report.outcome {
            Some(StepOutcome::Advance) => {
                let next_level = self.session.level + 1;
                info!(level = next_level, "Level cleared, advancing");
                self.session = GameSession::new(next_level, self.bounds, &mut self.rng);
            }
            Some(StepOutcome::Won) => {
                info!("Final level cleared");
                self.machine.enter_win(now_ms);
            }
            None => {}
        }
    }

    /// Pushes the pending video settings to the window. A rejected mode is
    /// not fatal: the previous settings are restored and play continues.
    fn apply_video(&mut self, previous: VideoSettings, reset_session: bool) {
        match self.video.apply(self.canvas.window_mut()) {
            Ok(bounds) => {
                self.bounds = bounds;
                if let Err(e) = self.renderer.rebuild_light_texture(&self.texture_creator, bounds) {
                    warn!("Failed to rebuild the light map: {e}");
                }
                if reset_session {
                    self.session = GameSession::new(self.session.level, self.bounds, &mut self.rng);
                }
            }
            Err(e) => {
                warn!("{e}. Restoring the previous video mode.");
                self.video = previous;
                if let Err(e) = self.video.apply(self.canvas.window_mut()) {
                    warn!("Failed to restore the previous video mode: {e}");
                }
            }
        }
    }

    fn draw(&mut self, now_ms: u64) -> GameResult<()> {
        match self.machine.stage() {
            Stage::Menu => self
                .renderer
                .draw_menu(&mut self.canvas, self.bounds, self.machine.cursors.menu)?,
            Stage::Settings => {
                self.renderer
                    .draw_settings_menu(&mut self.canvas, self.bounds, self.machine.cursors.settings)?
            }
            Stage::Video => self.renderer.draw_video_menu(
                &mut self.canvas,
                self.bounds,
                self.machine.cursors.video,
                &self.video,
            )?,
            Stage::Audio => self.renderer.draw_audio_menu(
                &mut self.canvas,
                self.bounds,
                self.machine.cursors.audio,
                self.menu_music_on,
                self.game_music_on,
            )?,
            Stage::Countdown { started_at_ms } => self.renderer.draw_countdown(
                &mut self.canvas,
                self.bounds,
                countdown_digit(started_at_ms, now_ms),
            )?,
            Stage::Playing => self.renderer.draw_playing(&mut self.canvas, &self.session)?,
            Stage::GameOver => self.renderer.draw_game_over(
                &mut self.canvas,
                self.bounds,
                self.machine.cursors.game_over,
                &self.session,
            )?,
            Stage::Win { .. } => self
                .renderer
                .draw_win(&mut self.canvas, self.bounds, self.machine.cursors.win)?,
        }

        self.canvas.present();
        Ok(())
    }
}
