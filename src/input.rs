//! Key bindings and the per-frame input snapshot.

use std::collections::HashMap;

use glam::Vec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::EventPump;
use smallvec::SmallVec;

use crate::entity::MoveAxes;
use crate::state::MenuInput;

/// Mapping from key presses to menu inputs.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, MenuInput>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        key_bindings.insert(Keycode::Up, MenuInput::Up);
        key_bindings.insert(Keycode::Down, MenuInput::Down);
        key_bindings.insert(Keycode::Return, MenuInput::Select);

        Self { key_bindings }
    }
}

/// Everything the frame loop needs to know about input this frame.
///
/// Menu commands are edge-triggered key presses; movement reads held keys,
/// so `axes` snapshots the keyboard state after the pump is drained.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub commands: SmallVec<[MenuInput; 2]>,
    pub axes: MoveAxes,
    pub pointer: Vec2,
    pub quit: bool,
    pub focus_change: Option<bool>,
}

impl Bindings {
    /// Drains the event pump and snapshots the held keys and the pointer.
    pub fn poll(&self, pump: &mut EventPump) -> FrameInput {
        let mut input = FrameInput::default();

        for event in pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.quit = true,
                Event::Window {
                    win_event: WindowEvent::FocusGained,
                    ..
                } => input.focus_change = Some(true),
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => input.focus_change = Some(false),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(&command) = self.key_bindings.get(&key) {
                        input.commands.push(command);
                    }
                }
                _ => {}
            }
        }

        let keyboard = pump.keyboard_state();
        input.axes = MoveAxes {
            up: keyboard.is_scancode_pressed(Scancode::W),
            down: keyboard.is_scancode_pressed(Scancode::S),
            left: keyboard.is_scancode_pressed(Scancode::A),
            right: keyboard.is_scancode_pressed(Scancode::D),
        };

        let mouse = pump.mouse_state();
        input.pointer = Vec2::new(mouse.x() as f32, mouse.y() as f32);

        input
    }
}
