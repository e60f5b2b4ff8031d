//! Zombie AI system: runs the pursuit FSM for every live zombie, moves it,
//! and lands attacks on the rocket.
//!
//! Calls the FSM from starforage-ai to compute transitions, then updates ECS
//! components accordingly.

use hecs::World;

use starforage_core::components::Zombie;
use starforage_core::constants::ZOMBIE_ATTACK_FLAG_MS;
use starforage_core::enums::ZombieState;
use starforage_core::events::GameEvent;
use starforage_core::types::{Bounds, Position, Velocity};

use starforage_ai::fsm::{self, ZombieContext};

use crate::systems::rocket;

/// Run the zombie AI for one tick.
pub fn run(world: &mut World, now_ms: f64, bounds: &Bounds, events: &mut Vec<GameEvent>) {
    let Some(rocket_pos) = rocket::position(world) else {
        return;
    };

    // Zombies update independently; their hits are buffered and applied after.
    let mut hits: Vec<f64> = Vec::new();

    for (_entity, (zombie, pos, vel)) in
        world.query_mut::<(&mut Zombie, &mut Position, &mut Velocity)>()
    {
        if zombie
            .attack_flag_expires_ms
            .is_some_and(|expires| now_ms >= expires)
        {
            zombie.attack_flag_expires_ms = None;
        }

        if zombie.state == ZombieState::Dead {
            *vel = Velocity::zero();
            continue;
        }

        let ctx = ZombieContext {
            state: zombie.state,
            health: zombie.health,
            position: *pos,
            rocket_position: rocket_pos,
            speed: zombie.speed,
            attack_range: zombie.attack_range,
        };
        let update = fsm::evaluate(&ctx);
        zombie.state = update.new_state;
        zombie.target = update.new_target;
        *vel = update.new_velocity;

        *pos = fsm::step_position(zombie.state, pos, vel, bounds);

        if fsm::can_attack(zombie, now_ms) {
            hits.push(zombie.damage);
            zombie.last_attack_ms = Some(now_ms);
            zombie.attack_flag_expires_ms = Some(now_ms + ZOMBIE_ATTACK_FLAG_MS);
        }
    }

    rocket::apply_hits(world, &hits, events);
}

/// Number of zombies still alive.
pub fn live_count(world: &World) -> usize {
    world
        .query::<&Zombie>()
        .iter()
        .filter(|(_, zombie)| zombie.state != ZombieState::Dead)
        .count()
}
