//! World -> vertex list

use glam::Vec2;

use super::shapes::push_rect;
use super::vertex::{Vertex, colors};
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::{Rect, World};

/// Frames per blink phase while the player is in grace
const BLINK_FRAMES: u32 = 4;

/// Whether the player is drawn this frame
pub fn player_visible(world: &World, grace_blink: bool) -> bool {
    let grace = world.player.grace_ticks();
    !grace_blink || grace == 0 || (grace / BLINK_FRAMES) % 2 == 0
}

/// Build the frame in arena coordinates, back to front
pub fn build_scene(world: &World, grace_blink: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((4 + world.platforms.len() + world.enemies.len()) * 6);

    push_rect(
        &mut vertices,
        &Rect::new(Vec2::ZERO, Vec2::new(WIDTH, HEIGHT)),
        colors::BACKGROUND,
    );
    push_rect(&mut vertices, &world.ground.rect(), colors::GROUND);
    for platform in &world.platforms {
        push_rect(&mut vertices, &platform.rect(), colors::PLATFORM);
    }
    for enemy in &world.enemies {
        push_rect(&mut vertices, &enemy.rect(), colors::ENEMY);
    }
    if player_visible(world, grace_blink) {
        let color = if world.player.in_grace() {
            colors::PLAYER_GRACE
        } else {
            colors::PLAYER
        };
        push_rect(&mut vertices, &world.player.rect(), color);
    }

    vertices
}
