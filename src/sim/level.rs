//! Random level generation
//!
//! A level is a handful of floating platforms plus enemies dropped above
//! them. The ground strip and the player are left alone.

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, GameEvent, World};
use crate::consts::*;
use crate::tuning::Tuning;

/// Replace all platforms and enemies with a fresh random layout.
///
/// Each enemy starts at the center x of one of the new platforms, at a random
/// height, standing still and facing right.
pub fn generate_level(world: &mut World, tuning: &Tuning) -> GameEvent {
    world.platforms.clear();
    world.enemies.clear();

    let platform_count = world
        .rng
        .random_range(tuning.platforms_min..=tuning.platforms_max);
    for _ in 0..platform_count {
        let center = Vec2::new(
            world
                .rng
                .random_range(tuning.platform_margin_x..=WIDTH - tuning.platform_margin_x),
            world
                .rng
                .random_range(tuning.platform_margin_y..=HEIGHT - tuning.platform_margin_y),
        );
        let width = world
            .rng
            .random_range(tuning.platform_width_min..=tuning.platform_width_max);
        let id = world.next_entity_id();
        world
            .platforms
            .push(Entity::platform(id, center, Vec2::new(width, PLATFORM_HEIGHT)));
    }

    let enemy_count = world
        .rng
        .random_range(tuning.enemies_min..=tuning.enemies_max);
    for _ in 0..enemy_count {
        let anchor = world.rng.random_range(0..world.platforms.len());
        let x = world.platforms[anchor].center().x;
        let y = world
            .rng
            .random_range(tuning.enemy_spawn_top..=HEIGHT - tuning.enemy_spawn_bottom_margin);
        world.spawn_enemy(Vec2::new(x, y));
    }

    world.level_index += 1;
    log::info!(
        "Generated level {}: {} platforms, {} enemies",
        world.level_index,
        platform_count,
        enemy_count
    );

    GameEvent::LevelRegenerated {
        level: world.level_index,
        platforms: platform_count,
        enemies: enemy_count,
    }
}
