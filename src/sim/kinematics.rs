//! Per-entity kinematics
//!
//! Semi-implicit Euler with a half-step position correction, in per-frame
//! units. Gravity pulls down, intent pushes sideways, friction damps
//! horizontal speed linearly, and the floor stops the fall.

use glam::Vec2;

use super::state::Entity;
use crate::tuning::Tuning;

/// Advance one entity by one frame.
///
/// `intent` is the horizontal push in [-1, 1]. `jump` only takes effect when
/// the entity is grounded at the moment of the request.
pub fn integrate(entity: &mut Entity, intent: f32, jump: bool, tuning: &Tuning) {
    entity.acc = Vec2::new(intent * tuning.acceleration, tuning.gravity);

    if jump && entity.is_grounded() {
        entity.vel.y = tuning.jump_velocity;
    }

    entity.acc.x += entity.vel.x * tuning.friction;

    entity.vel += entity.acc;
    entity.pos += entity.vel + 0.5 * entity.acc;

    clamp_to_ground(entity);
}

/// Stop the fall at the ground line. Returns true if the entity was clamped.
pub fn clamp_to_ground(entity: &mut Entity) -> bool {
    let ground = entity.ground_line();
    if entity.pos.y > ground {
        entity.pos.y = ground;
        entity.vel.y = 0.0;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ground_line;
    use proptest::prelude::*;

    fn grounded_player() -> Entity {
        Entity::player(1, Vec2::new(100.0, ground_line(PLAYER_HEIGHT)))
    }

    #[test]
    fn test_resting_entity_stays_on_ground() {
        let tuning = Tuning::default();
        let mut e = grounded_player();
        for _ in 0..10 {
            integrate(&mut e, 0.0, false, &tuning);
            assert_eq!(e.pos.y, ground_line(PLAYER_HEIGHT));
            assert_eq!(e.vel.y, 0.0);
        }
    }

    #[test]
    fn test_first_frame_of_right_intent() {
        let tuning = Tuning::default();
        let mut e = grounded_player();
        integrate(&mut e, 1.0, false, &tuning);
        // acc.x = 0.5, vel.x = 0.5, pos.x += 0.5 + 0.25
        assert_eq!(e.acc.x, 0.5);
        assert_eq!(e.vel.x, 0.5);
        assert_eq!(e.pos.x, 100.75);
    }

    #[test]
    fn test_friction_caps_speed() {
        let tuning = Tuning::default();
        let mut e = grounded_player();
        for _ in 0..500 {
            integrate(&mut e, 1.0, false, &tuning);
        }
        // Terminal speed where ACC + v * FRIC == 0
        let terminal = tuning.acceleration / -tuning.friction;
        assert!((e.vel.x - terminal).abs() < 1e-3);
    }

    #[test]
    fn test_jump_from_ground() {
        let tuning = Tuning::default();
        let mut e = grounded_player();
        integrate(&mut e, 0.0, true, &tuning);
        // vel.y = -10 + 0.5, pos.y += -9.5 + 0.25
        assert_eq!(e.vel.y, -9.5);
        assert_eq!(e.pos.y, ground_line(PLAYER_HEIGHT) - 9.25);
        assert!(!e.is_grounded());
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let tuning = Tuning::default();
        let mut with_jump = grounded_player();
        with_jump.pos.y -= 50.0;
        let mut without_jump = with_jump.clone();

        integrate(&mut with_jump, 0.0, true, &tuning);
        integrate(&mut without_jump, 0.0, false, &tuning);
        assert_eq!(with_jump, without_jump);
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let tuning = Tuning::default();
        let mut e = grounded_player();
        integrate(&mut e, 0.0, true, &tuning);
        let mut frames = 1;
        while !e.is_grounded() {
            integrate(&mut e, 0.0, false, &tuning);
            frames += 1;
            assert!(frames < 100, "never landed");
        }
        assert_eq!(e.vel.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(
            start_y in 0.0f32..420.0,
            vy in -20.0f32..20.0,
            intents in proptest::collection::vec((-1i8..=1, any::<bool>()), 1..200),
        ) {
            let tuning = Tuning::default();
            let mut e = grounded_player();
            e.pos.y = start_y;
            e.vel.y = vy;
            for (intent, jump) in intents {
                let was_grounded = e.is_grounded();
                let vy_before = e.vel.y;
                integrate(&mut e, intent as f32, jump, &tuning);
                prop_assert!(e.pos.y <= e.ground_line());
                if e.is_grounded() {
                    prop_assert_eq!(e.vel.y, 0.0);
                }
                if jump && !was_grounded {
                    // No impulse: only gravity changed vertical speed
                    prop_assert!(e.vel.y == 0.0 || e.vel.y == vy_before + tuning.gravity);
                }
            }
        }
    }
}
