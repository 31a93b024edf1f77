//! A running game
//!
//! Owns the world between frames and turns wall-clock time into fixed ticks.
//! Runners feed it key events and elapsed time, then draw `world`.

use crate::platform::{FrameClock, InputState};
use crate::settings::Settings;
use crate::sim::{GameEvent, World, tick};

/// Whether the session should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    /// The player was caught; show the terminal message and stop
    Over,
}

pub struct Session {
    pub world: World,
    pub settings: Settings,
    pub input: InputState,
    clock: FrameClock,
}

impl Session {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!(
            "New session: seed {}, boundary {}",
            seed,
            settings.boundary.as_str()
        );
        Self {
            world: World::new(seed, settings.boundary, &settings.tuning),
            settings,
            input: InputState::new(),
            clock: FrameClock::default(),
        }
    }

    /// Run as many ticks as `dt` seconds allow
    pub fn advance(&mut self, dt: f32) -> SessionStatus {
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            if self.step() == SessionStatus::Over {
                self.clock.reset();
                break;
            }
        }
        self.status()
    }

    /// Run exactly one tick with the currently held keys
    pub fn step(&mut self) -> SessionStatus {
        let input = self.input.tick_input();
        for event in tick(&mut self.world, &input, &self.settings.tuning) {
            match event {
                GameEvent::Teleported { from_x, to_x } => {
                    log::info!("Teleport: x {:.1} -> {:.1}", from_x, to_x)
                }
                GameEvent::LevelRegenerated {
                    level,
                    platforms,
                    enemies,
                } => log::debug!(
                    "Level {} ready ({} platforms, {} enemies)",
                    level,
                    platforms,
                    enemies
                ),
                GameEvent::PlayerCaught { enemy_id } => {
                    log::info!("Game over: caught by enemy {}", enemy_id)
                }
            }
        }
        self.status()
    }

    /// Target wall-clock time between frames
    pub fn frame_duration(&self) -> std::time::Duration {
        self.clock.frame_duration()
    }

    pub fn status(&self) -> SessionStatus {
        if self.world.is_over() {
            SessionStatus::Over
        } else {
            SessionStatus::Running
        }
    }

    /// Terminal message shown when the session ends
    pub fn summary(&self) -> String {
        format!(
            "Game Over! Caught in room {} after {} frames.",
            self.world.level_index, self.world.frame
        )
    }
}
