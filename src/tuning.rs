//! Data-driven game balance
//!
//! Every per-frame constant the simulation uses lives here so it can be
//! overridden from the settings file without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, WIDTH};

/// Physics and level-generation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Kinematics (per-frame units) ===
    /// Downward acceleration applied every frame
    pub gravity: f32,
    /// Horizontal acceleration from a full left/right intent
    pub acceleration: f32,
    /// Linear horizontal damping factor (negative)
    pub friction: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,

    // === Teleport ===
    /// Frames of immunity after a teleport
    pub grace_ticks: u32,

    // === Enemies ===
    /// Per-frame chance that a grounded enemy jumps
    pub enemy_jump_chance: f64,

    // === Level generation ===
    pub platforms_min: usize,
    pub platforms_max: usize,
    pub enemies_min: usize,
    pub enemies_max: usize,
    pub platform_width_min: f32,
    pub platform_width_max: f32,
    /// Platform centers keep this far from the left/right walls
    pub platform_margin_x: f32,
    /// Platform centers keep this far from the top and bottom
    pub platform_margin_y: f32,
    /// Lowest enemy spawn y (distance from the top)
    pub enemy_spawn_top: f32,
    /// Enemy spawn y stays this far above the floor
    pub enemy_spawn_bottom_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            acceleration: 0.5,
            friction: -0.12,
            jump_velocity: -10.0,

            grace_ticks: 60,

            enemy_jump_chance: 0.01,

            platforms_min: 3,
            platforms_max: 5,
            enemies_min: 2,
            enemies_max: 4,
            platform_width_min: 50.0,
            platform_width_max: 150.0,
            platform_margin_x: 50.0,
            platform_margin_y: 100.0,
            enemy_spawn_top: 100.0,
            enemy_spawn_bottom_margin: 50.0,
        }
    }
}

impl Tuning {
    /// Repair inconsistent values loaded from a settings file.
    ///
    /// Inverted ranges are swapped, a zero platform count is raised to one
    /// (enemies spawn on platforms) and the jump chance is clamped to [0, 1].
    /// Spawn margins are clamped so every sampled range stays non-empty.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.platforms_min > self.platforms_max {
            log::warn!(
                "platforms_min {} > platforms_max {}, swapping",
                self.platforms_min,
                self.platforms_max
            );
            std::mem::swap(&mut self.platforms_min, &mut self.platforms_max);
        }
        if self.platforms_min == 0 {
            log::warn!("platforms_min must be at least 1");
            self.platforms_min = 1;
            self.platforms_max = self.platforms_max.max(1);
        }
        if self.enemies_min > self.enemies_max {
            log::warn!(
                "enemies_min {} > enemies_max {}, swapping",
                self.enemies_min,
                self.enemies_max
            );
            std::mem::swap(&mut self.enemies_min, &mut self.enemies_max);
        }
        if self.platform_width_min > self.platform_width_max {
            log::warn!("platform width range inverted, swapping");
            std::mem::swap(&mut self.platform_width_min, &mut self.platform_width_max);
        }
        if !(0.0..=1.0).contains(&self.enemy_jump_chance) {
            log::warn!("enemy_jump_chance {} out of range", self.enemy_jump_chance);
            self.enemy_jump_chance = self.enemy_jump_chance.clamp(0.0, 1.0);
        }

        self.platform_margin_x = clamp_margin(
            "platform_margin_x",
            self.platform_margin_x,
            WIDTH / 2.0,
            defaults.platform_margin_x,
        );
        self.platform_margin_y = clamp_margin(
            "platform_margin_y",
            self.platform_margin_y,
            HEIGHT / 2.0,
            defaults.platform_margin_y,
        );
        self.enemy_spawn_bottom_margin = clamp_margin(
            "enemy_spawn_bottom_margin",
            self.enemy_spawn_bottom_margin,
            HEIGHT,
            defaults.enemy_spawn_bottom_margin,
        );
        let lowest_spawn = HEIGHT - self.enemy_spawn_bottom_margin;
        self.enemy_spawn_top = clamp_margin(
            "enemy_spawn_top",
            self.enemy_spawn_top,
            lowest_spawn,
            defaults.enemy_spawn_top.min(lowest_spawn),
        );
        self
    }
}

/// Clamp a margin into [0, max], replacing NaN with `fallback`
fn clamp_margin(name: &str, value: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        log::warn!("{} is NaN, using {}", name, fallback);
        fallback
    } else if !(0.0..=max).contains(&value) {
        let clamped = value.clamp(0.0, max);
        log::warn!("{} {} out of range, clamping to {}", name, value, clamped);
        clamped
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.acceleration, 0.5);
        assert_eq!(t.friction, -0.12);
        assert_eq!(t.jump_velocity, -10.0);
        assert_eq!(t.grace_ticks, 60);
        assert_eq!(t.enemy_jump_chance, 0.01);
    }

    #[test]
    fn test_sanitized_swaps_inverted_ranges() {
        let t = Tuning {
            platforms_min: 6,
            platforms_max: 2,
            enemies_min: 5,
            enemies_max: 1,
            platform_width_min: 200.0,
            platform_width_max: 40.0,
            enemy_jump_chance: 3.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!((t.platforms_min, t.platforms_max), (2, 6));
        assert_eq!((t.enemies_min, t.enemies_max), (1, 5));
        assert_eq!((t.platform_width_min, t.platform_width_max), (40.0, 200.0));
        assert_eq!(t.enemy_jump_chance, 1.0);
    }

    #[test]
    fn test_sanitized_requires_a_platform() {
        let t = Tuning {
            platforms_min: 0,
            platforms_max: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!((t.platforms_min, t.platforms_max), (1, 1));
    }

    #[test]
    fn test_sanitized_clamps_horizontal_margin() {
        let t = Tuning {
            platform_margin_x: 250.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.platform_margin_x, WIDTH / 2.0);
        assert!(t.platform_margin_x <= WIDTH - t.platform_margin_x);
    }

    #[test]
    fn test_sanitized_clamps_vertical_margin() {
        let t = Tuning {
            platform_margin_y: 1000.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.platform_margin_y, HEIGHT / 2.0);

        let t = Tuning {
            platform_margin_y: -5.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.platform_margin_y, 0.0);
    }

    #[test]
    fn test_sanitized_keeps_enemy_spawn_band_open() {
        let t = Tuning {
            enemy_spawn_top: 420.0,
            enemy_spawn_bottom_margin: 100.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.enemy_spawn_top, HEIGHT - 100.0);

        let t = Tuning {
            enemy_spawn_bottom_margin: 900.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.enemy_spawn_bottom_margin, HEIGHT);
        assert_eq!(t.enemy_spawn_top, 0.0);
    }

    #[test]
    fn test_sanitized_replaces_nan_margin() {
        let t = Tuning {
            platform_margin_x: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.platform_margin_x, Tuning::default().platform_margin_x);
    }

    #[test]
    fn test_sanitized_leaves_defaults_alone() {
        assert_eq!(Tuning::default().sanitized(), Tuning::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(t.gravity, 0.8);
        assert_eq!(t.grace_ticks, 60);
    }
}
