//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, per-frame units
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod kinematics;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use boundary::{at_wall, bounce_enemy, clamp_horizontal, teleport_player};
pub use collision::lethal_collision;
pub use kinematics::{clamp_to_ground, integrate};
pub use level::generate_level;
pub use rect::Rect;
pub use state::{BoundaryMode, Entity, EntityKind, GameEvent, GamePhase, World};
pub use tick::{TickInput, tick};
