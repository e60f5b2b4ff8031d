//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. `Position` and `Velocity`
//! from `types` are attached alongside these.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks the player's rocket and carries its heading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rocket {
    /// Heading in degrees; 0 points up the screen, clockwise positive.
    pub angle_deg: f64,
}

/// Shield-then-health damage model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthState {
    pub current: f64,
    pub max: f64,
    pub shield: f64,
    pub max_shield: f64,
}

/// Weapon energy pool and per-weapon cooldown stamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponState {
    pub energy: f64,
    pub max_energy: f64,
    /// `None` until the laser has fired once.
    pub last_laser_fire_ms: Option<f64>,
    pub last_flame_use_ms: Option<f64>,
}

/// Accumulated resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub amounts: BTreeMap<ResourceType, f64>,
}

/// A harvestable, regenerating resource deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceNode {
    pub id: u32,
    pub resource_type: ResourceType,
    pub amount: f64,
    pub max_amount: f64,
    /// Units regenerated per millisecond of logical time.
    pub regeneration_rate: f64,
    pub last_harvested_ms: Option<f64>,
    /// Rocket is inside collection range and the node has stock.
    pub being_collected: bool,
}

/// A regular wave enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub zombie_type: ZombieType,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
    pub attack_cooldown_ms: f64,
    pub last_attack_ms: Option<f64>,
    /// Rocket position seen on the last evaluation while in detection range.
    pub target: Option<Position>,
    pub state: ZombieState,
    /// Display-only "currently attacking" highlight; cleared by the tick clock.
    pub attack_flag_expires_ms: Option<f64>,
}

/// The singleton multi-phase boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub health: f64,
    pub max_health: f64,
    pub phase: BossPhase,
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
    pub attack_cooldown_ms: f64,
    pub last_attack_ms: Option<f64>,
    pub target: Option<Position>,
    pub state: BossState,
    /// Remaining phase-transition lock (ms).
    pub phase_timer_ms: f64,
    /// Health at or below which the next phase begins (0 in the final phase).
    pub next_phase_threshold: f64,
    pub attack_flag_expires_ms: Option<f64>,
}

/// Laser bolt fired by the rocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub weapon_type: WeaponType,
    pub damage: f64,
    pub lifetime_ms: f64,
    pub max_lifetime_ms: f64,
    pub size: f64,
}

/// One particle of a flamethrower burst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlameParticle {
    pub id: u32,
    pub size: f64,
    pub opacity: f64,
    pub lifetime_ms: f64,
    pub damage: f64,
}

/// Projectile launched by the boss at the rocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossProjectile {
    pub id: u32,
    pub kind: BossProjectileKind,
    pub damage: f64,
    pub lifetime_ms: f64,
    pub size: f64,
}
