//! Fixed timestep simulation tick
//!
//! Advances the world by exactly one frame.

use rand::Rng;

use super::boundary::{bounce_enemy, clamp_horizontal, teleport_player};
use super::collision::lethal_collision;
use super::kinematics::integrate;
use super::state::{BoundaryMode, GameEvent, GamePhase, World};
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal intent: -1 left, 0 none, +1 right
    pub intent: f32,
    /// Jump request (ignored while airborne)
    pub jump: bool,
}

impl TickInput {
    /// Build from held keys. Right wins when both directions are held.
    pub fn from_keys(left: bool, right: bool, jump: bool) -> Self {
        let intent = if right {
            1.0
        } else if left {
            -1.0
        } else {
            0.0
        };
        Self { intent, jump }
    }
}

/// Advance the world by one frame, returning what happened
pub fn tick(world: &mut World, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if world.phase == GamePhase::GameOver {
        return events;
    }

    world.frame += 1;

    // Grace held at the start of the frame covers the whole frame
    let grace = world.player.grace_ticks();

    integrate(&mut world.player, input.intent, input.jump, tuning);
    match world.boundary {
        BoundaryMode::Clamp => {
            clamp_horizontal(&mut world.player);
        }
        BoundaryMode::Teleport => teleport_player(world, tuning, &mut events),
    }

    for enemy in &mut world.enemies {
        let jump = enemy.is_grounded() && world.rng.random_bool(tuning.enemy_jump_chance);
        let intent = enemy.dir();
        integrate(enemy, intent, jump, tuning);
        bounce_enemy(enemy);
    }

    if let Some(enemy_id) = lethal_collision(world) {
        log::info!("Player caught by enemy {} on frame {}", enemy_id, world.frame);
        world.phase = GamePhase::GameOver;
        events.push(GameEvent::PlayerCaught { enemy_id });
    }

    // Teleports only start from zero grace
    if grace > 0 {
        world.player.set_grace_ticks(grace - 1);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ground_line;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_right_wins_over_left() {
        assert_eq!(TickInput::from_keys(true, true, false).intent, 1.0);
        assert_eq!(TickInput::from_keys(true, false, false).intent, -1.0);
        assert_eq!(TickInput::from_keys(false, false, true), TickInput { intent: 0.0, jump: true });
    }

    #[test]
    fn test_left_wall_teleports_with_fresh_grace() {
        let tuning = Tuning::default();
        let mut world = World::new(42, BoundaryMode::Teleport, &tuning);
        world.enemies.clear();
        world.player.pos = Vec2::new(0.0, ground_line(PLAYER_HEIGHT));

        let input = TickInput { intent: -1.0, jump: false };
        let events = tick(&mut world, &input, &tuning);

        assert_eq!(world.player.grace_ticks(), 60);
        assert_eq!(world.level_index, 2);
        assert!((3..=5).contains(&world.platforms.len()));
        assert!((2..=4).contains(&world.enemies.len()));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Teleported { .. })));
        assert!(events.iter().any(|e| matches!(e, GameEvent::LevelRegenerated { .. })));
    }

    #[test]
    fn test_left_wall_clamps_in_clamp_mode() {
        let tuning = Tuning::default();
        let mut world = World::new(42, BoundaryMode::Clamp, &tuning);
        world.enemies.clear();
        world.player.pos = Vec2::new(0.0, ground_line(PLAYER_HEIGHT));

        let events = tick(&mut world, &TickInput { intent: -1.0, jump: false }, &tuning);
        assert!(events.is_empty());
        assert_eq!(world.player.pos.x, 0.0);
        assert_eq!(world.level_index, 1);
    }

    #[test]
    fn test_grace_counts_down_each_frame() {
        let tuning = Tuning::default();
        let mut world = World::new(42, BoundaryMode::Teleport, &tuning);
        world.enemies.clear();
        world.player.pos.x = 150.0;
        world.player.set_grace_ticks(3);
        for expected in [2, 1, 0, 0] {
            tick(&mut world, &TickInput::default(), &tuning);
            assert_eq!(world.player.grace_ticks(), expected);
        }
    }

    #[test]
    fn test_overlap_without_grace_ends_session() {
        let tuning = Tuning::default();
        let mut world = World::empty(8, BoundaryMode::Clamp);
        world.player.pos = Vec2::new(150.0, ground_line(PLAYER_HEIGHT));
        let enemy_id = world.spawn_enemy(world.player.pos);

        let events = tick(&mut world, &TickInput::default(), &tuning);
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::PlayerCaught { enemy_id }]);

        // Nothing moves once the game is over
        let frozen = world.player.clone();
        assert!(tick(&mut world, &TickInput { intent: 1.0, jump: true }, &tuning).is_empty());
        assert_eq!(world.player, frozen);
    }

    #[test]
    fn test_last_grace_frame_still_protects() {
        let tuning = Tuning::default();
        let mut world = World::empty(8, BoundaryMode::Clamp);
        world.player.pos = Vec2::new(150.0, ground_line(PLAYER_HEIGHT));
        world.player.set_grace_ticks(1);
        let enemy_id = world.spawn_enemy(world.player.pos);

        let events = tick(&mut world, &TickInput::default(), &tuning);
        assert_eq!(world.phase, GamePhase::Playing);
        assert!(events.is_empty());
        assert_eq!(world.player.grace_ticks(), 0);

        // Grace is spent, so the next overlap is lethal
        let events = tick(&mut world, &TickInput::default(), &tuning);
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::PlayerCaught { enemy_id }]);
    }

    #[test]
    fn test_overlap_during_grace_continues() {
        let tuning = Tuning::default();
        let mut world = World::empty(8, BoundaryMode::Clamp);
        world.player.pos = Vec2::new(150.0, ground_line(PLAYER_HEIGHT));
        world.player.set_grace_ticks(30);
        world.spawn_enemy(world.player.pos);

        let events = tick(&mut world, &TickInput::default(), &tuning);
        assert_eq!(world.phase, GamePhase::Playing);
        assert!(events.is_empty());
    }

    #[test]
    fn test_enemy_patrols_in_its_direction() {
        let tuning = Tuning {
            enemy_jump_chance: 0.0,
            ..Default::default()
        };
        let mut world = World::empty(8, BoundaryMode::Clamp);
        world.player.pos.x = 0.0;
        world.spawn_enemy(Vec2::new(200.0, ground_line(ENEMY_HEIGHT)));

        tick(&mut world, &TickInput::default(), &tuning);
        assert_eq!(world.enemies[0].pos.x, 200.75);
        assert!(world.enemies[0].is_grounded());
    }

    #[test]
    fn test_enemy_always_jumps_at_full_chance() {
        let tuning = Tuning {
            enemy_jump_chance: 1.0,
            ..Default::default()
        };
        let mut world = World::empty(8, BoundaryMode::Clamp);
        world.spawn_enemy(Vec2::new(200.0, ground_line(ENEMY_HEIGHT)));

        tick(&mut world, &TickInput::default(), &tuning);
        assert!(world.enemies[0].vel.y < 0.0);
    }

    #[test]
    fn test_enemy_turns_around_at_right_wall() {
        let tuning = Tuning {
            enemy_jump_chance: 0.0,
            ..Default::default()
        };
        let mut world = World::empty(8, BoundaryMode::Clamp);
        world.spawn_enemy(Vec2::new(WIDTH - ENEMY_WIDTH - 0.1, ground_line(ENEMY_HEIGHT)));

        tick(&mut world, &TickInput::default(), &tuning);
        assert_eq!(world.enemies[0].pos.x, WIDTH - ENEMY_WIDTH);
        assert_eq!(world.enemies[0].dir(), -1.0);
    }

    fn run(seed: u64, boundary: BoundaryMode, inputs: &[(i8, bool)]) -> World {
        let tuning = Tuning::default();
        let mut world = World::new(seed, boundary, &tuning);
        for &(intent, jump) in inputs {
            tick(&mut world, &TickInput { intent: intent as f32, jump }, &tuning);
        }
        world
    }

    proptest! {
        #[test]
        fn prop_deterministic(
            seed in any::<u64>(),
            inputs in proptest::collection::vec((-1i8..=1, any::<bool>()), 0..300),
        ) {
            let a = run(seed, BoundaryMode::Teleport, &inputs);
            let b = run(seed, BoundaryMode::Teleport, &inputs);
            prop_assert_eq!(a.player, b.player);
            prop_assert_eq!(a.enemies, b.enemies);
            prop_assert_eq!(a.platforms, b.platforms);
            prop_assert_eq!(a.phase, b.phase);
        }

        #[test]
        fn prop_clamp_mode_stays_in_arena(
            seed in any::<u64>(),
            inputs in proptest::collection::vec((-1i8..=1, any::<bool>()), 0..300),
        ) {
            let tuning = Tuning::default();
            let mut world = World::new(seed, BoundaryMode::Clamp, &tuning);
            for (intent, jump) in inputs {
                tick(&mut world, &TickInput { intent: intent as f32, jump }, &tuning);
                for e in std::iter::once(&world.player).chain(world.enemies.iter()) {
                    prop_assert!(e.pos.x >= 0.0 && e.pos.x <= WIDTH - e.size.x);
                    prop_assert!(e.pos.y <= e.ground_line());
                }
            }
        }

        #[test]
        fn prop_grace_blocks_teleport_and_death(
            seed in any::<u64>(),
            x in prop_oneof![Just(0.0f32), Just(WIDTH - PLAYER_WIDTH), 0.0f32..370.0],
            grace in 1u32..120,
        ) {
            let tuning = Tuning::default();
            let mut world = World::new(seed, BoundaryMode::Teleport, &tuning);
            world.player.pos = Vec2::new(x, ground_line(PLAYER_HEIGHT));
            world.player.set_grace_ticks(grace);
            // Park an enemy right on the player
            world.spawn_enemy(world.player.pos);

            let level = world.level_index;
            let intent = if x > 200.0 { 1.0 } else { -1.0 };
            let events = tick(&mut world, &TickInput { intent, jump: false }, &tuning);

            prop_assert!(events.is_empty());
            prop_assert_eq!(world.phase, GamePhase::Playing);
            prop_assert_eq!(world.level_index, level);
            prop_assert_eq!(world.player.grace_ticks(), grace - 1);
        }
    }
}
