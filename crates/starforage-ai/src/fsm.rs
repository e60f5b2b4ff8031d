//! Zombie behavior finite state machine.
//!
//! Pure functions that compute state transitions and velocity for zombie
//! entities based on their distance to the rocket. No ECS dependency;
//! operates on plain data.

use starforage_core::components::Zombie;
use starforage_core::constants::{ZOMBIE_BOUNDS_MARGIN, ZOMBIE_DETECTION_RANGE};
use starforage_core::enums::{ZombieState, ZombieType};
use starforage_core::types::{Bounds, Position, Velocity};

use crate::profiles::zombie_profile;

/// Input to the zombie FSM for a single entity.
pub struct ZombieContext {
    pub state: ZombieState,
    pub health: f64,
    pub position: Position,
    pub rocket_position: Position,
    pub speed: f64,
    pub attack_range: f64,
}

/// Output from the zombie FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct ZombieUpdate {
    pub new_state: ZombieState,
    pub new_velocity: Velocity,
    pub new_target: Option<Position>,
    pub state_changed: bool,
}

/// Build a fresh zombie of the given archetype.
pub fn spawn_zombie(id: u32, zombie_type: ZombieType) -> Zombie {
    let profile = zombie_profile(zombie_type);
    Zombie {
        id,
        zombie_type,
        health: profile.health,
        max_health: profile.health,
        speed: profile.speed,
        damage: profile.damage,
        attack_range: profile.attack_range,
        attack_cooldown_ms: profile.attack_cooldown_ms,
        last_attack_ms: None,
        target: None,
        state: ZombieState::Idle,
        attack_flag_expires_ms: None,
    }
}

/// Evaluate the FSM for one zombie.
pub fn evaluate(ctx: &ZombieContext) -> ZombieUpdate {
    if ctx.health <= 0.0 || ctx.state == ZombieState::Dead {
        return transition(ctx.state, ZombieState::Dead, Velocity::zero(), None);
    }

    let distance = ctx.position.distance_to(&ctx.rocket_position);

    if distance > ZOMBIE_DETECTION_RANGE {
        return transition(ctx.state, ZombieState::Idle, Velocity::zero(), None);
    }

    let target = Some(ctx.rocket_position);
    if distance <= ctx.attack_range {
        // Holds position while attacking.
        return transition(ctx.state, ZombieState::Attacking, Velocity::zero(), target);
    }

    let direction = ctx.position.direction_to(&ctx.rocket_position);
    transition(
        ctx.state,
        ZombieState::Chasing,
        Velocity::along(direction, ctx.speed),
        target,
    )
}

fn transition(
    from: ZombieState,
    to: ZombieState,
    velocity: Velocity,
    target: Option<Position>,
) -> ZombieUpdate {
    ZombieUpdate {
        new_state: to,
        new_velocity: velocity,
        new_target: target,
        state_changed: from != to,
    }
}

/// Integrate one tick of movement. Dead and attacking zombies stay put.
pub fn step_position(
    state: ZombieState,
    position: &Position,
    velocity: &Velocity,
    bounds: &Bounds,
) -> Position {
    if matches!(state, ZombieState::Dead | ZombieState::Attacking) {
        return *position;
    }
    bounds.clamp(position.advanced(velocity), ZOMBIE_BOUNDS_MARGIN)
}

/// Whether the zombie may strike this tick.
pub fn can_attack(zombie: &Zombie, now_ms: f64) -> bool {
    zombie.state == ZombieState::Attacking
        && zombie.health > 0.0
        && cooldown_elapsed(zombie.last_attack_ms, zombie.attack_cooldown_ms, now_ms)
}

/// `true` when no previous attack exists or the cooldown has fully elapsed.
pub fn cooldown_elapsed(last_ms: Option<f64>, cooldown_ms: f64, now_ms: f64) -> bool {
    last_ms.is_none_or(|last| now_ms - last >= cooldown_ms)
}

/// Apply damage, flooring health at zero. Returns `true` if this killed the zombie.
pub fn apply_damage(zombie: &mut Zombie, damage: f64) -> bool {
    if zombie.state == ZombieState::Dead {
        return false;
    }
    zombie.health = (zombie.health - damage).max(0.0);
    if zombie.health <= 0.0 {
        zombie.state = ZombieState::Dead;
        zombie.target = None;
        return true;
    }
    false
}
