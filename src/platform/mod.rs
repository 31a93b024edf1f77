//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (`input`)
//! - Frame pacing (`clock`)
//! - Window/canvas setup and the frame loop (`native` / `web`)

pub mod clock;
pub mod input;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::FrameClock;
pub use input::{Action, InputState};

/// Seed derived from the current time
#[cfg(not(target_arch = "wasm32"))]
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Seed derived from the current time
#[cfg(target_arch = "wasm32")]
pub fn time_seed() -> u64 {
    js_sys::Date::now() as u64
}
