//! Combat domain: health, attack state, projectiles, and enemy AI data.

use bevy::prelude::*;

use crate::movement::Facing;

/// Health pool shared by the hero and enemies. Death is reached once and only
/// undone by the explicit state-entry resets.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamping at zero. Silent no-op once dead.
    pub fn take_damage(&mut self, amount: f32) {
        if self.is_dead() {
            return;
        }
        self.current = (self.current - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

/// Hero attack-cycle state.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    /// An attack sequence is running and preempts normal control.
    pub active: bool,
    /// Guards the single projectile per attack cycle.
    pub has_shot: bool,
}

impl AttackState {
    pub fn begin(&mut self) {
        self.active = true;
        self.has_shot = false;
    }

    pub fn clear(&mut self) {
        self.active = false;
        self.has_shot = false;
    }
}

/// Marker for enemies.
#[derive(Component, Debug)]
pub struct Enemy;

/// A hero projectile travelling horizontally until it leaves the canvas or
/// lands a hit.
#[derive(Component, Debug)]
pub struct Projectile {
    /// +1 right, -1 left.
    pub direction: f32,
    /// px per tick.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    #[default]
    Patrol,
    Chase,
    Attack,
    Dead,
}

/// Per-enemy behavior state and patrol configuration.
#[derive(Component, Debug)]
pub struct EnemyAi {
    pub state: AiState,
    pub patrol_min_x: f32,
    pub patrol_max_x: f32,
    /// Patrol speed, px per tick; chase runs at a multiple of it.
    pub speed: f32,
    /// Seconds since the last swing, monotonically increasing between swings.
    pub time_since_last_attack: f32,
    /// A swing animation is running.
    pub is_attacking: bool,
    /// Guards the single damage application per swing.
    pub has_damaged: bool,
}

impl EnemyAi {
    pub fn new(patrol_min_x: f32, patrol_max_x: f32, speed: f32) -> Self {
        Self {
            state: AiState::Patrol,
            patrol_min_x,
            patrol_max_x,
            speed,
            time_since_last_attack: 0.0,
            is_attacking: false,
            has_damaged: false,
        }
    }

    /// One patrol step: constant speed between the bounds, clamping exactly
    /// at each bound and reflecting the facing.
    pub fn patrol_step(&self, x: &mut f32, facing: &mut Facing) {
        *x += facing.sign() * self.speed;
        if *x < self.patrol_min_x {
            *x = self.patrol_min_x;
            *facing = Facing::Right;
        } else if *x > self.patrol_max_x {
            *x = self.patrol_max_x;
            *facing = Facing::Left;
        }
    }

    /// One chase step toward the hero at an accelerated pace.
    pub fn chase_step(&self, x: &mut f32, facing: &mut Facing, hero_x: f32, multiplier: f32) {
        *facing = Facing::toward(hero_x - *x);
        *x += facing.sign() * self.speed * multiplier;
    }

    /// Whether the cooldown allows a new swing.
    pub fn cooldown_ready(&self, cooldown: f32) -> bool {
        self.time_since_last_attack >= cooldown
    }

    pub fn begin_attack(&mut self) {
        self.time_since_last_attack = 0.0;
        self.is_attacking = true;
        self.has_damaged = false;
        self.state = AiState::Attack;
    }

    pub fn end_attack(&mut self) {
        self.is_attacking = false;
        self.state = AiState::Patrol;
    }

    pub fn revive(&mut self) {
        self.state = AiState::Patrol;
        self.is_attacking = false;
        self.has_damaged = false;
    }
}
