//! A simple autopilot for headless runs.
//!
//! Turns toward the nearest threat and shoots it; with no threat nearby it
//! flies to the nearest stocked resource node.

use std::collections::BTreeSet;

use starforage_core::constants::{BOSS_DETECTION_RANGE, COLLECTION_RANGE};
use starforage_core::enums::{BossState, InputCode};
use starforage_core::state::GameStateSnapshot;
use starforage_core::types::Position;

/// Heading error (degrees) below which the pilot stops turning.
const AIM_TOLERANCE_DEG: f64 = 6.0;
const LASER_CONE_DEG: f64 = 12.0;
const FLAME_RANGE: f64 = 70.0;
const THRUST_CONE_DEG: f64 = 30.0;

/// Inputs to hold for the next few ticks, given the latest snapshot.
pub fn steer(snapshot: &GameStateSnapshot) -> BTreeSet<InputCode> {
    let mut inputs = BTreeSet::new();
    let rocket = snapshot.rocket.position;

    let threat = nearest_threat(snapshot, &rocket);
    let target = match threat {
        Some((pos, distance)) if distance <= BOSS_DETECTION_RANGE => Some((pos, distance, true)),
        _ => nearest_node(snapshot, &rocket).map(|(pos, distance)| (pos, distance, false)),
    };
    let Some((target, distance, hostile)) = target else {
        return inputs;
    };

    let error = heading_error(snapshot.rocket.angle_deg, &rocket, &target);
    if error > AIM_TOLERANCE_DEG {
        inputs.insert(InputCode::RotateRight);
    } else if error < -AIM_TOLERANCE_DEG {
        inputs.insert(InputCode::RotateLeft);
    }

    if hostile {
        if error.abs() <= LASER_CONE_DEG {
            inputs.insert(InputCode::FireLaser);
        }
        if distance <= FLAME_RANGE {
            inputs.insert(InputCode::FireFlame);
        }
    } else if error.abs() <= THRUST_CONE_DEG && distance > COLLECTION_RANGE / 2.0 {
        inputs.insert(InputCode::Thrust);
    }

    inputs
}

fn nearest_threat(snapshot: &GameStateSnapshot, from: &Position) -> Option<(Position, f64)> {
    let zombies = snapshot.zombies.iter().map(|z| z.position);
    let boss = snapshot
        .boss
        .iter()
        .filter(|b| b.state != BossState::Dead)
        .map(|b| b.position);
    nearest(zombies.chain(boss), from)
}

fn nearest_node(snapshot: &GameStateSnapshot, from: &Position) -> Option<(Position, f64)> {
    nearest(
        snapshot
            .resource_nodes
            .iter()
            .filter(|n| n.amount >= 1.0)
            .map(|n| n.position),
        from,
    )
}

fn nearest(candidates: impl Iterator<Item = Position>, from: &Position) -> Option<(Position, f64)> {
    candidates
        .map(|pos| (pos, from.distance_to(&pos)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Signed difference between the bearing to `target` and `heading_deg`,
/// normalized to (-180, 180]. Positive means turn clockwise.
pub fn heading_error(heading_deg: f64, from: &Position, target: &Position) -> f64 {
    let bearing = (target.y - from.y).atan2(target.x - from.x).to_degrees() + 90.0;
    let mut diff = (bearing - heading_deg).rem_euclid(360.0);
    if diff > 180.0 {
        diff -= 360.0;
    }
    diff
}
