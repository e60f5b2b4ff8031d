//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the rocket, the resource field, the zombie wave and the boss with
//! appropriate component bundles.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starforage_core::components::*;
use starforage_core::constants::*;
use starforage_core::enums::*;
use starforage_core::types::{Bounds, Position, Velocity};

use starforage_ai::{boss, fsm};

use crate::health::new_health_state;
use crate::resource_field;
use crate::weapons::new_weapon_state;

/// Set up a fresh session: rocket at the center, resource field, zombie wave.
/// The boss is spawned later, once the wave is cleared.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    resource_node_count: usize,
    zombie_count: usize,
) {
    let rocket_pos = bounds.center();
    spawn_rocket(world, rocket_pos);
    spawn_resource_nodes(world, rng, bounds, resource_node_count);
    spawn_zombie_wave(world, rng, bounds, &rocket_pos, zombie_count);
}

/// Spawn the player's rocket, at rest and fully charged.
pub fn spawn_rocket(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Rocket::default(),
        position,
        Velocity::zero(),
        new_health_state(ROCKET_MAX_HEALTH, ROCKET_MAX_SHIELD),
        new_weapon_state(ROCKET_MAX_ENERGY),
        resource_field::new_inventory(),
    ))
}

pub fn spawn_resource_nodes(world: &mut World, rng: &mut ChaCha8Rng, bounds: &Bounds, count: usize) {
    for (position, node) in resource_field::generate(rng, count, bounds) {
        world.spawn((position, node));
    }
}

/// Spawn `count` zombies of random archetype, each at least
/// `ZOMBIE_MIN_SPAWN_DISTANCE` from the rocket.
pub fn spawn_zombie_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    rocket_pos: &Position,
    count: usize,
) {
    for id in 0..count {
        let zombie_type = *ZombieType::ALL
            .choose(rng)
            .unwrap_or(&ZombieType::Crawler);
        let position = spawn_point(
            rng,
            bounds,
            rocket_pos,
            ZOMBIE_BOUNDS_MARGIN,
            ZOMBIE_MIN_SPAWN_DISTANCE,
        );
        world.spawn((position, Velocity::zero(), fsm::spawn_zombie(id as u32, zombie_type)));
    }
}

/// Spawn the boss at least `BOSS_MIN_SPAWN_DISTANCE` from the rocket.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    rocket_pos: &Position,
) -> Entity {
    let position = spawn_point(
        rng,
        bounds,
        rocket_pos,
        BOSS_BOUNDS_MARGIN,
        BOSS_MIN_SPAWN_DISTANCE,
    );
    world.spawn((position, Velocity::zero(), boss::spawn_boss()))
}

/// Spawn a zombie at an exact position (for tests and scripted setups).
pub fn spawn_zombie_at(
    world: &mut World,
    id: u32,
    zombie_type: ZombieType,
    position: Position,
) -> Entity {
    world.spawn((position, Velocity::zero(), fsm::spawn_zombie(id, zombie_type)))
}

/// Rejection-sample a point inside `bounds` shrunk by `margin` that is at
/// least `min_distance` from `avoid`. Falls back to the farthest inset corner.
fn spawn_point(
    rng: &mut ChaCha8Rng,
    bounds: &Bounds,
    avoid: &Position,
    margin: f64,
    min_distance: f64,
) -> Position {
    let max_x = (bounds.width - margin).max(margin);
    let max_y = (bounds.height - margin).max(margin);

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Position::new(
            margin + rng.gen::<f64>() * (max_x - margin),
            margin + rng.gen::<f64>() * (max_y - margin),
        );
        if candidate.distance_to(avoid) >= min_distance {
            return candidate;
        }
    }

    [
        Position::new(margin, margin),
        Position::new(max_x, margin),
        Position::new(margin, max_y),
        Position::new(max_x, max_y),
    ]
    .into_iter()
    .max_by(|a, b| a.distance_to(avoid).total_cmp(&b.distance_to(avoid)))
    .unwrap_or(Position::new(margin, margin))
}
