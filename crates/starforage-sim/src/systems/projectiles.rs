//! Projectile systems: laser bolts and flame particles against zombies and
//! the boss.
//!
//! Each pass moves its projectiles, retires the expired ones, then resolves
//! hits against a snapshot of the targets. The snapshot's health is
//! decremented as hits are assigned, so a target killed earlier in the pass
//! no longer absorbs projectiles. Damage is applied to the world afterward.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starforage_core::components::{Boss, FlameParticle, Projectile, Zombie};
use starforage_core::constants::*;
use starforage_core::enums::{BossState, ZombieState};
use starforage_core::types::{Bounds, Position, Velocity};

use starforage_ai::{boss, fsm};

use crate::weapons;

/// A damageable target as seen at the start of a collision pass.
struct Target {
    entity: Entity,
    position: Position,
    remaining_health: f64,
}

impl Target {
    fn is_alive(&self) -> bool {
        self.remaining_health > 0.0
    }
}

/// Live zombies and the live boss (if any), snapshotted for a collision pass.
struct Targets {
    zombies: Vec<Target>,
    boss: Option<Target>,
}

impl Targets {
    fn collect(world: &World) -> Self {
        let zombies = world
            .query::<(&Zombie, &Position)>()
            .iter()
            .filter(|(_, (z, _))| z.state != ZombieState::Dead && z.health > 0.0)
            .map(|(entity, (z, pos))| Target {
                entity,
                position: *pos,
                remaining_health: z.health,
            })
            .collect();
        let boss = world
            .query::<(&Boss, &Position)>()
            .iter()
            .find(|(_, (b, _))| b.state != BossState::Dead && b.health > 0.0)
            .map(|(entity, (b, pos))| Target {
                entity,
                position: *pos,
                remaining_health: b.health,
            });
        Self { zombies, boss }
    }
}

/// Damage resolved during a pass, applied once the pass completes.
#[derive(Default)]
struct Hits {
    zombies: Vec<(Entity, f64)>,
    boss: Vec<f64>,
}

impl Hits {
    fn apply(self, world: &mut World) {
        for (entity, damage) in self.zombies {
            if let Ok(mut zombie) = world.get::<&mut Zombie>(entity) {
                fsm::apply_damage(&mut zombie, damage);
            }
        }
        if self.boss.is_empty() {
            return;
        }
        for (_entity, b) in world.query_mut::<&mut Boss>() {
            for &damage in &self.boss {
                boss::apply_damage(b, damage);
            }
        }
    }
}

/// Advance laser bolts and resolve their hits. A bolt strikes at most one
/// target and is consumed by it; zombies are checked before the boss.
pub fn run_lasers(world: &mut World, dt_ms: f64, bounds: &Bounds, despawn_buffer: &mut Vec<Entity>) {
    let mut live: Vec<(Entity, Position, f64, f64)> = Vec::new();
    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        weapons::step_projectile(projectile, pos, vel, dt_ms);
        if weapons::is_projectile_expired(projectile, pos, bounds) {
            despawn_buffer.push(entity);
        } else {
            live.push((entity, *pos, projectile.size, projectile.damage));
        }
    }
    if live.is_empty() {
        return;
    }

    let mut targets = Targets::collect(world);
    let mut hits = Hits::default();

    for (entity, pos, size, damage) in live {
        let zombie_hit = targets
            .zombies
            .iter_mut()
            .find(|t| t.is_alive() && pos.is_within(&t.position, size + ZOMBIE_LASER_HIT_PADDING));
        if let Some(target) = zombie_hit {
            target.remaining_health -= damage;
            hits.zombies.push((target.entity, damage));
            despawn_buffer.push(entity);
            continue;
        }

        if let Some(target) = targets.boss.as_mut() {
            if target.is_alive() && pos.is_within(&target.position, BOSS_LASER_HIT_RADIUS) {
                target.remaining_health -= damage;
                hits.boss.push(damage);
                despawn_buffer.push(entity);
            }
        }
    }

    hits.apply(world);
}

/// Advance flame particles and resolve their hits. A particle burns every
/// target it overlaps; the boss takes a fraction of flame damage. A particle
/// that hit anything is consumed with `FLAME_HIT_CONSUME_CHANCE`.
pub fn run_flames(world: &mut World, rng: &mut ChaCha8Rng, dt_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    let mut live: Vec<(Entity, Position, f64, f64)> = Vec::new();
    for (entity, (particle, pos, vel)) in
        world.query_mut::<(&mut FlameParticle, &mut Position, &mut Velocity)>()
    {
        weapons::step_particle(particle, pos, vel, dt_ms);
        if weapons::is_particle_expired(particle) {
            despawn_buffer.push(entity);
        } else {
            live.push((entity, *pos, particle.size, particle.damage));
        }
    }
    if live.is_empty() {
        return;
    }

    let mut targets = Targets::collect(world);
    let mut hits = Hits::default();

    for (entity, pos, size, damage) in live {
        let mut hit_any = false;

        for target in targets.zombies.iter_mut() {
            if target.is_alive() && pos.is_within(&target.position, size + ZOMBIE_FLAME_HIT_PADDING) {
                target.remaining_health -= damage;
                hits.zombies.push((target.entity, damage));
                hit_any = true;
            }
        }

        if let Some(target) = targets.boss.as_mut() {
            if target.is_alive() && pos.is_within(&target.position, BOSS_FLAME_HIT_RADIUS) {
                let boss_damage = damage / BOSS_FLAME_DAMAGE_DIVISOR;
                target.remaining_health -= boss_damage;
                hits.boss.push(boss_damage);
                hit_any = true;
            }
        }

        if hit_any && rng.gen::<f64>() < FLAME_HIT_CONSUME_CHANCE {
            despawn_buffer.push(entity);
        }
    }

    hits.apply(world);
}
