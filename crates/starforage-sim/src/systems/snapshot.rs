//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use starforage_core::components::*;
use starforage_core::enums::*;
use starforage_core::events::GameEvent;
use starforage_core::state::*;
use starforage_core::types::{Position, SimTime, Velocity};

use crate::{health, weapons};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let (rocket, health, weapon, inventory) = build_rocket(world);

    GameStateSnapshot {
        time: *time,
        phase,
        rocket,
        health,
        weapon,
        inventory,
        resource_nodes: build_resource_nodes(world),
        zombies: build_zombies(world),
        boss: build_boss(world),
        projectiles: build_projectiles(world),
        flame_particles: build_flame_particles(world),
        boss_projectiles: build_boss_projectiles(world),
        events,
    }
}

type RocketViews = (
    RocketView,
    HealthView,
    WeaponView,
    std::collections::BTreeMap<ResourceType, f64>,
);

/// Rocket, its pools and its inventory. Defaults before a session starts.
fn build_rocket(world: &World) -> RocketViews {
    world
        .query::<(
            &Rocket,
            &Position,
            &Velocity,
            &HealthState,
            &WeaponState,
            &Inventory,
        )>()
        .iter()
        .next()
        .map(|(_, (rocket, pos, vel, hp, weapon, inventory))| {
            (
                RocketView {
                    position: *pos,
                    velocity: *vel,
                    angle_deg: rocket.angle_deg,
                },
                HealthView {
                    current: hp.current,
                    max: hp.max,
                    shield: hp.shield,
                    max_shield: hp.max_shield,
                    health_percentage: health::health_percentage(hp),
                    shield_percentage: health::shield_percentage(hp),
                },
                WeaponView {
                    energy: weapon.energy,
                    max_energy: weapon.max_energy,
                    energy_percentage: weapons::energy_percentage(weapon),
                },
                inventory.amounts.clone(),
            )
        })
        .unwrap_or_default()
}

fn build_resource_nodes(world: &World) -> Vec<ResourceNodeView> {
    let mut nodes: Vec<ResourceNodeView> = world
        .query::<(&ResourceNode, &Position)>()
        .iter()
        .map(|(_, (node, pos))| ResourceNodeView {
            id: node.id,
            resource_type: node.resource_type,
            position: *pos,
            amount: node.amount,
            max_amount: node.max_amount,
            being_collected: node.being_collected,
        })
        .collect();

    nodes.sort_by_key(|n| n.id);
    nodes
}

fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut zombies: Vec<ZombieView> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .filter(|(_, (zombie, _))| zombie.health > 0.0)
        .map(|(_, (zombie, pos))| ZombieView {
            id: zombie.id,
            zombie_type: zombie.zombie_type,
            position: *pos,
            health: zombie.health,
            max_health: zombie.max_health,
            state: zombie.state,
            is_attacking: zombie.attack_flag_expires_ms.is_some(),
        })
        .collect();

    zombies.sort_by_key(|z| z.id);
    zombies
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<(&Boss, &Position)>()
        .iter()
        .next()
        .map(|(_, (boss, pos))| BossView {
            position: *pos,
            health: boss.health,
            max_health: boss.max_health,
            phase: boss.phase,
            state: boss.state,
            is_attacking: boss.attack_flag_expires_ms.is_some(),
        })
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            weapon_type: projectile.weapon_type,
            position: *pos,
            size: projectile.size,
            life_fraction: if projectile.max_lifetime_ms > 0.0 {
                (projectile.lifetime_ms / projectile.max_lifetime_ms).clamp(0.0, 1.0)
            } else {
                0.0
            },
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_flame_particles(world: &World) -> Vec<FlameParticleView> {
    let mut particles: Vec<FlameParticleView> = world
        .query::<(&FlameParticle, &Position)>()
        .iter()
        .map(|(_, (particle, pos))| FlameParticleView {
            id: particle.id,
            position: *pos,
            size: particle.size,
            opacity: particle.opacity,
        })
        .collect();

    particles.sort_by_key(|p| p.id);
    particles
}

fn build_boss_projectiles(world: &World) -> Vec<BossProjectileView> {
    let mut projectiles: Vec<BossProjectileView> = world
        .query::<(&BossProjectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| BossProjectileView {
            id: projectile.id,
            kind: projectile.kind,
            position: *pos,
            size: projectile.size,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
