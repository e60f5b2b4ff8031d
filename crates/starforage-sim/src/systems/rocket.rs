//! Rocket systems: input-driven physics, passive regeneration, and the
//! single entry point for damaging the rocket.

use std::collections::BTreeSet;

use hecs::World;

use starforage_core::components::{HealthState, Rocket, WeaponState};
use starforage_core::constants::*;
use starforage_core::enums::InputCode;
use starforage_core::events::GameEvent;
use starforage_core::types::{Bounds, Position, Velocity};

use crate::health;
use crate::weapons;

/// Integrate one tick of rocket physics from the held inputs.
///
/// Rotation, then thrust along the new heading, then friction, then
/// movement with toroidal wrap.
pub fn run_physics(world: &mut World, input: &BTreeSet<InputCode>, bounds: &Bounds) {
    for (_entity, (rocket, pos, vel)) in
        world.query_mut::<(&mut Rocket, &mut Position, &mut Velocity)>()
    {
        if input.contains(&InputCode::RotateLeft) {
            rocket.angle_deg -= ROTATION_SPEED_DEG;
        }
        if input.contains(&InputCode::RotateRight) {
            rocket.angle_deg += ROTATION_SPEED_DEG;
        }

        if input.contains(&InputCode::Thrust) {
            let thrust = Velocity::from_heading(rocket.angle_deg, THRUST_POWER);
            vel.vx += thrust.vx;
            vel.vy += thrust.vy;
        }

        *vel = vel.scaled(FRICTION);
        *pos = bounds.wrap(pos.advanced(vel));
    }
}

/// Passive shield and energy regeneration.
pub fn run_regen(world: &mut World) {
    for (_entity, (_rocket, health_state, weapon)) in
        world.query_mut::<(&Rocket, &mut HealthState, &mut WeaponState)>()
    {
        health::recharge_shield(health_state, SHIELD_REGEN_PER_TICK);
        weapons::recharge_energy(weapon, ENERGY_REGEN_PER_TICK);
    }
}

/// Current rocket position, if a rocket exists.
pub fn position(world: &World) -> Option<Position> {
    world
        .query::<(&Rocket, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// Apply each hit in order through the shield-then-health model and emit a
/// `RocketHit` per hit.
pub fn apply_hits(world: &mut World, hits: &[f64], events: &mut Vec<GameEvent>) {
    if hits.is_empty() {
        return;
    }
    for (_entity, (_rocket, health_state)) in world.query_mut::<(&Rocket, &mut HealthState)>() {
        for &damage in hits {
            health::take_damage(health_state, damage);
            events.push(GameEvent::RocketHit {
                damage,
                remaining_health: health_state.current,
            });
        }
    }
}
