//! Game state snapshot: the complete visible state handed to render/UI consumers each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub rocket: RocketView,
    pub health: HealthView,
    pub weapon: WeaponView,
    pub inventory: BTreeMap<ResourceType, f64>,
    pub resource_nodes: Vec<ResourceNodeView>,
    /// Live zombies only; defeated zombies are already removed.
    pub zombies: Vec<ZombieView>,
    pub boss: Option<BossView>,
    pub projectiles: Vec<ProjectileView>,
    pub flame_particles: Vec<FlameParticleView>,
    pub boss_projectiles: Vec<BossProjectileView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RocketView {
    pub position: Position,
    pub velocity: Velocity,
    /// Heading in degrees, 0 = up.
    pub angle_deg: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthView {
    pub current: f64,
    pub max: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub health_percentage: f64,
    pub shield_percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub energy: f64,
    pub max_energy: f64,
    pub energy_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceNodeView {
    pub id: u32,
    pub resource_type: ResourceType,
    pub position: Position,
    pub amount: f64,
    pub max_amount: f64,
    pub being_collected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: u32,
    pub zombie_type: ZombieType,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub state: ZombieState,
    pub is_attacking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub phase: BossPhase,
    pub state: BossState,
    pub is_attacking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub weapon_type: WeaponType,
    pub position: Position,
    pub size: f64,
    /// Remaining lifetime as a fraction of the initial lifetime.
    pub life_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlameParticleView {
    pub id: u32,
    pub position: Position,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossProjectileView {
    pub id: u32,
    pub kind: BossProjectileKind,
    pub position: Position,
    pub size: f64,
}
