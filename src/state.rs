//! The stage machine: every screen the game can be on, and the closed
//! transition table between them.
//!
//! Transitions mutate only the machine itself. Anything else a transition
//! needs done (music, session resets, window mode changes, quitting) is
//! returned as an ordered list of [`Effect`]s for the frame loop to run, so
//! the whole table stays testable without SDL.

use smallvec::SmallVec;
use tracing::debug;

use crate::constants::COUNTDOWN_MS;

pub const MENU_ITEM_COUNT: usize = 3;
pub const SETTINGS_ITEM_COUNT: usize = 3;
pub const VIDEO_ITEM_COUNT: usize = 3;
pub const AUDIO_ITEM_COUNT: usize = 3;
/// The game-over and win screens share a two-item list: retry, back to menu.
pub const END_ITEM_COUNT: usize = 2;

/// The top-level screens. `Countdown` and `Win` carry the moment they were
/// entered, in milliseconds since application start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Menu,
    Settings,
    Video,
    Audio,
    Countdown { started_at_ms: u64 },
    Playing,
    GameOver,
    Win { won_at_ms: u64 },
}

/// A key press the menus understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
}

/// Side effects a transition asks the frame loop to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Rebuild the session at its current level.
    ResetSession,
    StopMusic,
    PlayMenuMusic,
    PlayGameMusic,
    AdvanceResolution,
    ToggleFullscreen,
    ToggleMenuMusic,
    ToggleGameMusic,
    Quit,
}

/// Cursor positions of every screen with a selectable list.
///
/// Cursors persist across visits. The two exceptions are part of the
/// transitions themselves: a catch resets the game-over cursor, and leaving
/// an end screen for the menu resets the menu cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub menu: usize,
    pub settings: usize,
    pub video: usize,
    pub audio: usize,
    pub game_over: usize,
    pub win: usize,
}

pub struct StageMachine {
    stage: Stage,
    pub cursors: Cursors,
}

impl Default for StageMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StageMachine {
    pub fn new() -> Self {
        Self {
            stage: Stage::Menu,
            cursors: Cursors::default(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Feeds one key press through the transition table.
    ///
    /// The table is total: a pair with no row below leaves the stage and
    /// cursors untouched and requests nothing.
    pub fn handle(&mut self, input: MenuInput, now_ms: u64) -> SmallVec<[Effect; 4]> {
        let mut effects: SmallVec<[Effect; 4]> = SmallVec::new();

        match (self.stage, input) {
            // Main menu: start, settings, quit
            (Stage::Menu, MenuInput::Up) => {
                self.cursors.menu = previous_item(self.cursors.menu, MENU_ITEM_COUNT);
            }
            (Stage::Menu, MenuInput::Down) => {
                self.cursors.menu = next_item(self.cursors.menu, MENU_ITEM_COUNT);
            }
            (Stage::Menu, MenuInput::Select) => match self.cursors.menu {
                0 => {
                    self.begin_countdown(now_ms);
                    effects.push(Effect::ResetSession);
                    effects.push(Effect::StopMusic);
                }
                1 => self.stage = Stage::Settings,
                _ => effects.push(Effect::Quit),
            },

            // Settings hub
            (Stage::Settings, MenuInput::Up) => {
                self.cursors.settings = previous_item(self.cursors.settings, SETTINGS_ITEM_COUNT);
            }
            (Stage::Settings, MenuInput::Down) => {
                self.cursors.settings = next_item(self.cursors.settings, SETTINGS_ITEM_COUNT);
            }
            (Stage::Settings, MenuInput::Select) => match self.cursors.settings {
                0 => self.stage = Stage::Video,
                1 => self.stage = Stage::Audio,
                _ => self.stage = Stage::Menu,
            },

            // Video settings. The first two rows act without leaving the
            // screen, so mode changes are visible immediately
            (Stage::Video, MenuInput::Up) => {
                self.cursors.video = previous_item(self.cursors.video, VIDEO_ITEM_COUNT);
            }
            (Stage::Video, MenuInput::Down) => {
                self.cursors.video = next_item(self.cursors.video, VIDEO_ITEM_COUNT);
            }
            (Stage::Video, MenuInput::Select) => match self.cursors.video {
                0 => effects.push(Effect::AdvanceResolution),
                1 => effects.push(Effect::ToggleFullscreen),
                _ => self.stage = Stage::Settings,
            },

            // Audio settings
            (Stage::Audio, MenuInput::Up) => {
                self.cursors.audio = previous_item(self.cursors.audio, AUDIO_ITEM_COUNT);
            }
            (Stage::Audio, MenuInput::Down) => {
                self.cursors.audio = next_item(self.cursors.audio, AUDIO_ITEM_COUNT);
            }
            (Stage::Audio, MenuInput::Select) => match self.cursors.audio {
                0 => effects.push(Effect::ToggleMenuMusic),
                1 => effects.push(Effect::ToggleGameMusic),
                _ => self.stage = Stage::Settings,
            },

            // End screens
            (Stage::GameOver, MenuInput::Up) => {
                self.cursors.game_over = previous_item(self.cursors.game_over, END_ITEM_COUNT);
            }
            (Stage::GameOver, MenuInput::Down) => {
                self.cursors.game_over = next_item(self.cursors.game_over, END_ITEM_COUNT);
            }
            (Stage::GameOver, MenuInput::Select) => {
                self.select_end_item(self.cursors.game_over, now_ms, &mut effects);
            }
            (Stage::Win { .. }, MenuInput::Up) => {
                self.cursors.win = previous_item(self.cursors.win, END_ITEM_COUNT);
            }
            (Stage::Win { .. }, MenuInput::Down) => {
                self.cursors.win = next_item(self.cursors.win, END_ITEM_COUNT);
            }
            (Stage::Win { .. }, MenuInput::Select) => {
                self.select_end_item(self.cursors.win, now_ms, &mut effects);
            }

            // Menu keys mean nothing during the countdown or play
            (Stage::Countdown { .. } | Stage::Playing, _) => {}
        }

        effects
    }

    /// Advances time-driven transitions; only the countdown has one.
    pub fn tick(&mut self, now_ms: u64) -> SmallVec<[Effect; 1]> {
        let mut effects: SmallVec<[Effect; 1]> = SmallVec::new();

        if let Stage::Countdown { started_at_ms } = self.stage {
            if now_ms.saturating_sub(started_at_ms) >= COUNTDOWN_MS {
                debug!("Countdown finished, entering play");
                self.stage = Stage::Playing;
                effects.push(Effect::PlayGameMusic);
            }
        }

        effects
    }

    /// A pursuer reached the player. The music keeps playing; only the end
    /// screen's own menu paths switch tracks.
    pub fn enter_game_over(&mut self) {
        self.stage = Stage::GameOver;
        self.cursors.game_over = 0;
    }

    /// The final level was cleared.
    pub fn enter_win(&mut self, now_ms: u64) {
        self.stage = Stage::Win { won_at_ms: now_ms };
    }

    fn begin_countdown(&mut self, now_ms: u64) {
        self.stage = Stage::Countdown { started_at_ms: now_ms };
    }

    fn select_end_item(&mut self, item: usize, now_ms: u64, effects: &mut SmallVec<[Effect; 4]>) {
        if item == 0 {
            self.begin_countdown(now_ms);
            effects.push(Effect::ResetSession);
            effects.push(Effect::StopMusic);
        } else {
            self.stage = Stage::Menu;
            self.cursors.menu = 0;
            effects.push(Effect::ResetSession);
            effects.push(Effect::PlayMenuMusic);
        }
    }
}

/// The digit shown for a countdown started at `started_at_ms`, never below 1.
pub fn countdown_digit(started_at_ms: u64, now_ms: u64) -> u64 {
    let elapsed_secs = now_ms.saturating_sub(started_at_ms) / 1_000;
    (COUNTDOWN_MS / 1_000).saturating_sub(elapsed_secs).max(1)
}

fn previous_item(current: usize, count: usize) -> usize {
    (current + count - 1) % count
}

fn next_item(current: usize, count: usize) -> usize {
    (current + 1) % count
}
