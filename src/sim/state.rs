//! World state and core simulation types
//!
//! Entities are plain records tagged with their kind; behavior lives in the
//! free functions of the sibling modules.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::generate_level;
use super::rect::Rect;
use crate::consts::*;
use crate::ground_line;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was caught; the session is over
    GameOver,
}

/// What happens when the player reaches a side wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Stop at the wall
    #[default]
    Clamp,
    /// Jump to a random spot in a freshly generated room
    Teleport,
}

impl BoundaryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryMode::Clamp => "clamp",
            BoundaryMode::Teleport => "teleport",
        }
    }
}

/// Entity kind tag with the per-kind data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// The player; `grace_ticks` counts down after a teleport
    Player { grace_ticks: u32 },
    /// A patrolling enemy walking in direction `dir` (±1)
    Enemy { dir: f32 },
    /// Static geometry
    Platform,
}

/// A sprite in the arena. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub size: Vec2,
}

impl Entity {
    pub fn player(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            kind: EntityKind::Player { grace_ticks: 0 },
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }

    pub fn enemy(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            kind: EntityKind::Enemy { dir: 1.0 },
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
        }
    }

    /// Platform described by its center point
    pub fn platform(id: u32, center: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: EntityKind::Platform,
            pos: Rect::from_center(center, size).min,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            size,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    #[inline]
    pub fn ground_line(&self) -> f32 {
        ground_line(self.size.y)
    }

    /// Resting exactly on the ground line
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.pos.y == self.ground_line()
    }

    /// Remaining grace frames (always 0 for non-players)
    pub fn grace_ticks(&self) -> u32 {
        match self.kind {
            EntityKind::Player { grace_ticks } => grace_ticks,
            _ => 0,
        }
    }

    pub fn set_grace_ticks(&mut self, ticks: u32) {
        if let EntityKind::Player { grace_ticks } = &mut self.kind {
            *grace_ticks = ticks;
        }
    }

    #[inline]
    pub fn in_grace(&self) -> bool {
        self.grace_ticks() > 0
    }

    /// Walking direction (0 for non-enemies)
    pub fn dir(&self) -> f32 {
        match self.kind {
            EntityKind::Enemy { dir } => dir,
            _ => 0.0,
        }
    }

    pub fn reverse(&mut self) {
        if let EntityKind::Enemy { dir } = &mut self.kind {
            *dir = -*dir;
        }
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player left through a wall and reappeared at `to_x`
    Teleported { from_x: f32, to_x: f32 },
    /// Platforms and enemies were replaced
    LevelRegenerated {
        level: u32,
        platforms: usize,
        enemies: usize,
    },
    /// An enemy touched the player outside a grace period
    PlayerCaught { enemy_id: u32 },
}

/// Complete world state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving level generation, teleports and enemy jumps
    pub rng: Pcg32,
    /// Side-wall policy for the player
    pub boundary: BoundaryMode,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub frame: u64,
    /// Number of levels generated so far (1 after construction)
    pub level_index: u32,
    /// The player
    pub player: Entity,
    /// Floor strip; survives regeneration
    pub ground: Entity,
    /// Generated platforms (sorted by id)
    pub platforms: Vec<Entity>,
    /// Generated enemies (sorted by id)
    pub enemies: Vec<Entity>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create a world with the player on the ground and a generated level
    pub fn new(seed: u64, boundary: BoundaryMode, tuning: &Tuning) -> Self {
        let mut world = Self::empty(seed, boundary);
        generate_level(&mut world, tuning);
        world
    }

    /// World with only the player and the ground, no generated level
    pub fn empty(seed: u64, boundary: BoundaryMode) -> Self {
        let player = Entity::player(1, Vec2::new(PLAYER_SPAWN_X, ground_line(PLAYER_HEIGHT)));
        let ground = Entity::platform(
            2,
            Vec2::new(WIDTH / 2.0, HEIGHT - GROUND_HEIGHT / 2.0),
            Vec2::new(WIDTH, GROUND_HEIGHT),
        );
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            boundary,
            phase: GamePhase::Playing,
            frame: 0,
            level_index: 0,
            player,
            ground,
            platforms: Vec::new(),
            enemies: Vec::new(),
            next_id: 3,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at `pos`, keeping id order
    pub fn spawn_enemy(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Entity::enemy(id, pos));
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
