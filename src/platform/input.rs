//! Keyboard state
//!
//! Runners translate their native key events into [`Action`]s; the session
//! samples the held set once per tick.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Game actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Jump,
    Quit,
}

/// Map a DOM `KeyboardEvent.code` to an action
pub fn action_for_code(code: &str) -> Option<Action> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Action::Left),
        "ArrowRight" | "KeyD" => Some(Action::Right),
        "Space" | "ArrowUp" | "KeyW" => Some(Action::Jump),
        "Escape" => Some(Action::Quit),
        _ => None,
    }
}

/// Map a winit physical key to an action
#[cfg(not(target_arch = "wasm32"))]
pub fn action_for_keycode(key: winit::keyboard::KeyCode) -> Option<Action> {
    use winit::keyboard::KeyCode;
    match key {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Action::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Action::Right),
        KeyCode::Space | KeyCode::ArrowUp | KeyCode::KeyW => Some(Action::Jump),
        KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// Currently held actions
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Drop everything (focus loss swallows key-up events)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Input for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput::from_keys(
            self.is_held(Action::Left),
            self.is_held(Action::Right),
            self.is_held(Action::Jump),
        )
    }
}
