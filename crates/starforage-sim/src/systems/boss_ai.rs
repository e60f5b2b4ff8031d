//! Boss AI system: spawns the boss once the wave is cleared, advances its
//! phases, runs its FSM and executes its phase-dependent attacks.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use starforage_core::components::{Boss, BossProjectile};
use starforage_core::constants::BOSS_ATTACK_FLAG_MS;
use starforage_core::enums::{BossProjectileKind, BossState};
use starforage_core::events::GameEvent;
use starforage_core::types::{Bounds, Position, Velocity};

use starforage_ai::boss::{self, BossAttack, BossContext};

use crate::systems::{rocket, zombie_ai};
use crate::world_setup;

/// Spawn the boss the first time no live zombies remain. Returns `true` if
/// the boss was spawned this tick. The boss is never recreated.
pub fn spawn_when_cleared(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    boss_spawned: &mut bool,
    events: &mut Vec<GameEvent>,
) -> bool {
    if *boss_spawned || zombie_ai::live_count(world) > 0 {
        return false;
    }
    let Some(rocket_pos) = rocket::position(world) else {
        return false;
    };

    world_setup::spawn_boss(world, rng, bounds, &rocket_pos);
    *boss_spawned = true;
    events.push(GameEvent::BossSpawned);
    info!("Wave cleared, boss spawned");
    true
}

/// Run the boss AI for one tick.
pub fn run(
    world: &mut World,
    now_ms: f64,
    dt_ms: f64,
    bounds: &Bounds,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let Some(rocket_pos) = rocket::position(world) else {
        return;
    };

    let mut hits: Vec<f64> = Vec::new();
    let mut launches: Vec<(BossProjectileKind, Position, f64)> = Vec::new();

    for (_entity, (b, pos, vel)) in world.query_mut::<(&mut Boss, &mut Position, &mut Velocity)>() {
        if b
            .attack_flag_expires_ms
            .is_some_and(|expires| now_ms >= expires)
        {
            b.attack_flag_expires_ms = None;
        }

        if b.state == BossState::Dead {
            *vel = Velocity::zero();
            continue;
        }

        // A phase change locks the boss in place; its FSM resumes next tick.
        if let Some(phase) = boss::update_phase(b) {
            *vel = Velocity::zero();
            events.push(GameEvent::BossPhaseChanged { phase });
            info!(phase = phase.number(), health = b.health, "Boss phase changed");
            continue;
        }

        let ctx = BossContext {
            state: b.state,
            health: b.health,
            position: *pos,
            rocket_position: rocket_pos,
            speed: b.speed,
            attack_range: b.attack_range,
            phase_timer_ms: b.phase_timer_ms,
            dt_ms,
        };
        let update = boss::evaluate(&ctx);
        if update.new_state != b.state {
            debug!(from = ?b.state, to = ?update.new_state, "Boss state change");
        }
        b.state = update.new_state;
        b.target = update.new_target;
        b.phase_timer_ms = update.phase_timer_ms;
        *vel = update.new_velocity;

        *pos = boss::step_position(b.state, pos, vel, bounds);

        if boss::can_attack(b, now_ms) {
            match boss::attack_for(b.phase, b.damage) {
                BossAttack::Contact { damage } => hits.push(damage),
                BossAttack::Launch(kinds) => {
                    launches.extend(kinds.iter().map(|&kind| (kind, *pos, b.damage)));
                }
            }
            b.last_attack_ms = Some(now_ms);
            b.attack_flag_expires_ms = Some(now_ms + BOSS_ATTACK_FLAG_MS);
        }
    }

    for (kind, origin, damage) in launches {
        let spec = boss::projectile_spec(kind);
        world.spawn((
            origin,
            boss::launch_velocity(&origin, &rocket_pos, kind),
            BossProjectile {
                id: *next_id,
                kind,
                damage,
                lifetime_ms: spec.lifetime_ms,
                size: spec.size,
            },
        ));
        *next_id += 1;
        events.push(GameEvent::BossAttack { kind });
    }

    rocket::apply_hits(world, &hits, events);
}

/// The boss's current health, if it has been spawned.
pub fn health(world: &World) -> Option<f64> {
    world
        .query::<&Boss>()
        .iter()
        .next()
        .map(|(_, b)| b.health)
}
