//! Weapon system: energy-gated cooldown firing and the projectiles it spawns.
//!
//! The laser fires a single bolt along the rocket's heading. The flamethrower
//! sprays a small cone of short-lived, decelerating particles.

use rand::Rng;

use starforage_core::components::{FlameParticle, Projectile, WeaponState};
use starforage_core::constants::*;
use starforage_core::enums::WeaponType;
use starforage_core::types::{Bounds, Position, Velocity};

use crate::health::percentage;

/// Static configuration of a weapon type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponConfig {
    pub energy_cost: f64,
    pub damage: f64,
    pub cooldown_ms: f64,
    /// Pixels per tick.
    pub speed: f64,
    pub lifetime_ms: f64,
    pub size: f64,
}

pub fn weapon_config(weapon_type: WeaponType) -> WeaponConfig {
    match weapon_type {
        WeaponType::Laser => WeaponConfig {
            energy_cost: LASER_ENERGY_COST,
            damage: LASER_DAMAGE,
            cooldown_ms: LASER_COOLDOWN_MS,
            speed: LASER_SPEED,
            lifetime_ms: LASER_LIFETIME_MS,
            size: LASER_SIZE,
        },
        WeaponType::Flame => WeaponConfig {
            energy_cost: FLAME_ENERGY_COST,
            damage: FLAME_DAMAGE,
            cooldown_ms: FLAME_COOLDOWN_MS,
            speed: FLAME_SPEED,
            lifetime_ms: FLAME_LIFETIME_MS,
            size: FLAME_SIZE,
        },
    }
}

pub fn new_weapon_state(max_energy: f64) -> WeaponState {
    WeaponState {
        energy: max_energy,
        max_energy,
        last_laser_fire_ms: None,
        last_flame_use_ms: None,
    }
}

fn last_fired(state: &WeaponState, weapon_type: WeaponType) -> Option<f64> {
    match weapon_type {
        WeaponType::Laser => state.last_laser_fire_ms,
        WeaponType::Flame => state.last_flame_use_ms,
    }
}

/// Enough energy and the weapon's cooldown has elapsed.
pub fn can_fire(state: &WeaponState, weapon_type: WeaponType, now_ms: f64) -> bool {
    let config = weapon_config(weapon_type);
    state.energy >= config.energy_cost
        && last_fired(state, weapon_type).is_none_or(|last| now_ms - last >= config.cooldown_ms)
}

/// Try to fire. On success energy is deducted and the fire time stamped;
/// on failure nothing changes. The caller spawns projectiles only on success.
pub fn fire(state: &mut WeaponState, weapon_type: WeaponType, now_ms: f64) -> bool {
    if !can_fire(state, weapon_type, now_ms) {
        return false;
    }
    state.energy -= weapon_config(weapon_type).energy_cost;
    match weapon_type {
        WeaponType::Laser => state.last_laser_fire_ms = Some(now_ms),
        WeaponType::Flame => state.last_flame_use_ms = Some(now_ms),
    }
    true
}

pub fn recharge_energy(state: &mut WeaponState, amount: f64) {
    state.energy = (state.energy + amount.max(0.0)).min(state.max_energy);
}

pub fn consume_energy(state: &mut WeaponState, amount: f64) {
    state.energy = (state.energy - amount.max(0.0)).max(0.0);
}

pub fn energy_percentage(state: &WeaponState) -> f64 {
    percentage(state.energy, state.max_energy)
}

/// A laser bolt leaving `origin` along `angle_deg`.
pub fn create_laser(id: u32, origin: Position, angle_deg: f64) -> (Position, Velocity, Projectile) {
    let config = weapon_config(WeaponType::Laser);
    let projectile = Projectile {
        id,
        weapon_type: WeaponType::Laser,
        damage: config.damage,
        lifetime_ms: config.lifetime_ms,
        max_lifetime_ms: config.lifetime_ms,
        size: config.size,
    };
    (origin, Velocity::from_heading(angle_deg, config.speed), projectile)
}

/// A burst of 3–5 flame particles spread around `angle_deg`.
///
/// `first_id` is the id of the first particle; the rest are numbered consecutively.
pub fn create_flame_burst<R: Rng>(
    rng: &mut R,
    first_id: u32,
    origin: Position,
    angle_deg: f64,
) -> Vec<(Position, Velocity, FlameParticle)> {
    let config = weapon_config(WeaponType::Flame);
    let count = rng.gen_range(FLAME_MIN_PARTICLES..=FLAME_MAX_PARTICLES);

    (0..count)
        .map(|i| {
            let spread = rng.gen_range(-FLAME_SPREAD_DEG..FLAME_SPREAD_DEG);
            let speed = config.speed
                * (FLAME_SPEED_MIN_FACTOR + rng.gen::<f64>() * FLAME_SPEED_FACTOR_SPREAD);
            let position = Position::new(
                origin.x + (rng.gen::<f64>() - 0.5) * FLAME_POSITION_JITTER,
                origin.y + (rng.gen::<f64>() - 0.5) * FLAME_POSITION_JITTER,
            );
            let particle = FlameParticle {
                id: first_id + i as u32,
                size: config.size + rng.gen::<f64>() * FLAME_SIZE_JITTER,
                opacity: FLAME_MIN_OPACITY + rng.gen::<f64>() * FLAME_OPACITY_JITTER,
                lifetime_ms: config.lifetime_ms + rng.gen::<f64>() * FLAME_LIFETIME_JITTER_MS,
                damage: config.damage,
            };
            (
                position,
                Velocity::from_heading(angle_deg + spread, speed),
                particle,
            )
        })
        .collect()
}

/// Advance a laser bolt by one tick.
pub fn step_projectile(
    projectile: &mut Projectile,
    position: &mut Position,
    velocity: &Velocity,
    dt_ms: f64,
) {
    *position = position.advanced(velocity);
    projectile.lifetime_ms -= dt_ms;
}

/// Advance a flame particle by one tick: move, slow down, fade.
pub fn step_particle(
    particle: &mut FlameParticle,
    position: &mut Position,
    velocity: &mut Velocity,
    dt_ms: f64,
) {
    *position = position.advanced(velocity);
    *velocity = velocity.scaled(FLAME_DRAG);
    particle.lifetime_ms -= dt_ms;
    particle.opacity = (particle.opacity - FLAME_OPACITY_DECAY).max(0.0);
}

pub fn is_projectile_expired(projectile: &Projectile, position: &Position, bounds: &Bounds) -> bool {
    projectile.lifetime_ms <= 0.0 || !bounds.contains(position)
}

pub fn is_particle_expired(particle: &FlameParticle) -> bool {
    particle.lifetime_ms <= 0.0 || particle.opacity <= FLAME_OPACITY_FLOOR
}
