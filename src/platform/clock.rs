//! Fixed-timestep frame clock
//!
//! Wall-clock deltas go in, whole simulation ticks come out.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Target time between frames
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(self.step)
    }

    /// Add elapsed seconds and return how many ticks to run now.
    ///
    /// Deltas are clamped to `MAX_FRAME_DT`. When the substep cap is hit the
    /// leftover backlog is dropped instead of carried into the next frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
