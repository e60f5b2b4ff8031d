//! Fire control system: turns held fire inputs into laser bolts and flame bursts.

use std::collections::BTreeSet;

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starforage_core::components::{Rocket, WeaponState};
use starforage_core::enums::{InputCode, WeaponType};
use starforage_core::events::GameEvent;
use starforage_core::types::Position;

use crate::weapons;

/// Run the fire control system for one tick.
///
/// Each weapon fires at most once per tick and only when `weapons::fire`
/// succeeds; a failed attempt spawns nothing.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    input: &BTreeSet<InputCode>,
    now_ms: f64,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let wants_laser = input.contains(&InputCode::FireLaser);
    let wants_flame = input.contains(&InputCode::FireFlame);
    if !wants_laser && !wants_flame {
        return;
    }

    // Resolve firing against the weapon state first, then spawn.
    let mut fired: Vec<(WeaponType, Position, f64)> = Vec::new();
    for (_entity, (rocket, pos, weapon)) in
        world.query_mut::<(&Rocket, &Position, &mut WeaponState)>()
    {
        if wants_laser && weapons::fire(weapon, WeaponType::Laser, now_ms) {
            fired.push((WeaponType::Laser, *pos, rocket.angle_deg));
        }
        if wants_flame && weapons::fire(weapon, WeaponType::Flame, now_ms) {
            fired.push((WeaponType::Flame, *pos, rocket.angle_deg));
        }
    }

    for (weapon_type, origin, angle_deg) in fired {
        match weapon_type {
            WeaponType::Laser => {
                world.spawn(weapons::create_laser(*next_id, origin, angle_deg));
                *next_id += 1;
            }
            WeaponType::Flame => {
                let burst = weapons::create_flame_burst(rng, *next_id, origin, angle_deg);
                *next_id += burst.len() as u32;
                world.spawn_batch(burst);
            }
        }
        events.push(GameEvent::WeaponFired { weapon_type });
    }
}
