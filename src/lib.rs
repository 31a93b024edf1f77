//! Platformer - a minimal 2D side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, boundaries, level generation, collisions)
//! - `session`: Fixed-timestep driver that owns the world between frames
//! - `renderer`: WebGPU rectangle renderer
//! - `platform`: Browser/native platform abstraction (input, frame clock, runners)
//! - `tuning`: Data-driven physics and level-generation constants
//! - `settings`: Player preferences loaded from JSON

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::{Session, SessionStatus};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Arena width in pixels
    pub const WIDTH: f32 = 400.0;
    /// Arena height in pixels
    pub const HEIGHT: f32 = 450.0;

    /// Target frame rate; the simulation advances one tick per frame
    pub const FPS: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / FPS as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest wall-clock gap fed to the accumulator (tab switches, debugger stops)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    /// Player spawn x (left edge)
    pub const PLAYER_SPAWN_X: f32 = 10.0;

    /// Enemy sprite size
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;

    /// Generated platform thickness
    pub const PLATFORM_HEIGHT: f32 = 12.0;
    /// Ground strip thickness (spans the whole arena width)
    pub const GROUND_HEIGHT: f32 = 20.0;
}

/// Ground line for an entity of the given height: the y its top edge sits at
/// while its bottom edge rests on the arena floor.
#[inline]
pub fn ground_line(height: f32) -> f32 {
    consts::HEIGHT - height
}
