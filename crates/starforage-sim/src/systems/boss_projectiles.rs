//! Boss projectile system: moves boss projectiles, grows shockwaves and
//! resolves hits on the rocket.

use hecs::{Entity, World};

use starforage_core::components::BossProjectile;
use starforage_core::constants::SHOCKWAVE_GROWTH;
use starforage_core::enums::BossProjectileKind;
use starforage_core::events::GameEvent;
use starforage_core::types::{Bounds, Position, Velocity};

use starforage_ai::boss;

use crate::systems::rocket;

pub fn run(
    world: &mut World,
    dt_ms: f64,
    bounds: &Bounds,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let rocket_pos = rocket::position(world);
    let mut hits: Vec<f64> = Vec::new();

    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut BossProjectile, &mut Position, &Velocity)>()
    {
        *pos = pos.advanced(vel);
        projectile.lifetime_ms -= dt_ms;
        if projectile.kind == BossProjectileKind::Shockwave {
            projectile.size += SHOCKWAVE_GROWTH;
        }

        if projectile.lifetime_ms <= 0.0 || !bounds.contains(pos) {
            despawn_buffer.push(entity);
            continue;
        }

        let radius = boss::projectile_hit_radius(projectile.kind, projectile.size);
        if rocket_pos.is_some_and(|r| pos.is_within(&r, radius)) {
            hits.push(projectile.damage);
            despawn_buffer.push(entity);
        }
    }

    rocket::apply_hits(world, &hits, events);
}
