//! Combat domain: damage and death messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Damage to apply to a target's health this tick.
#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
}

impl Message for DamageEvent {}

/// Fired exactly once, when a target's health first reaches zero.
#[derive(Debug)]
pub struct DeathEvent {
    pub target: Entity,
}

impl Message for DeathEvent {}
