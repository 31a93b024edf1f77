//! Side-wall policies
//!
//! Clamp keeps an entity inside [0, WIDTH - width]; enemies also turn around.
//! Teleport moves the player into a freshly generated room.

use glam::Vec2;
use rand::Rng;

use super::level::generate_level;
use super::state::{Entity, GameEvent, World};
use crate::consts::WIDTH;
use crate::tuning::Tuning;

/// Rightmost x an entity of this width may occupy
#[inline]
pub fn max_x(entity: &Entity) -> f32 {
    WIDTH - entity.size.x
}

/// True if the entity is at or past either side wall
#[inline]
pub fn at_wall(entity: &Entity) -> bool {
    entity.pos.x <= 0.0 || entity.pos.x >= max_x(entity)
}

/// Clamp horizontally. Returns true if the entity touched a wall.
pub fn clamp_horizontal(entity: &mut Entity) -> bool {
    let max = max_x(entity);
    if entity.pos.x > max {
        entity.pos.x = max;
        true
    } else if entity.pos.x < 0.0 {
        entity.pos.x = 0.0;
        true
    } else {
        false
    }
}

/// Clamp an enemy and reverse its direction when it hits a wall
pub fn bounce_enemy(enemy: &mut Entity) {
    if clamp_horizontal(enemy) {
        enemy.reverse();
    }
}

/// Teleport policy for the player.
///
/// At a wall with no grace left, the player is moved to a random x on the
/// ground line, grace restarts and the level is regenerated. During grace the
/// player is clamped like in the clamp variant.
pub fn teleport_player(world: &mut World, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if !at_wall(&world.player) || world.player.in_grace() {
        clamp_horizontal(&mut world.player);
        return;
    }

    let from_x = world.player.pos.x;
    let to_x = world.rng.random_range(0.0..=max_x(&world.player));
    let ground = world.player.ground_line();

    world.player.pos = Vec2::new(to_x, ground);
    world.player.vel = Vec2::ZERO;
    world.player.acc = Vec2::ZERO;
    world.player.set_grace_ticks(tuning.grace_ticks);

    log::debug!("Teleported from x={:.1} to x={:.1}", from_x, to_x);
    events.push(GameEvent::Teleported { from_x, to_x });
    events.push(generate_level(world, tuning));
}
