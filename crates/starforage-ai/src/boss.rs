//! Boss behavior: phase progression, pursuit FSM and attack patterns.
//!
//! Layered on the same distance-band logic as the zombie FSM, with a phase
//! dimension that rescales stats and changes how the boss attacks.

use starforage_core::components::Boss;
use starforage_core::constants::*;
use starforage_core::enums::{BossPhase, BossProjectileKind, BossState};
use starforage_core::types::{Bounds, Position, Velocity};

use crate::fsm::cooldown_elapsed;
use crate::profiles::boss_phase_profile;

/// Input to the boss FSM.
pub struct BossContext {
    pub state: BossState,
    pub health: f64,
    pub position: Position,
    pub rocket_position: Position,
    pub speed: f64,
    pub attack_range: f64,
    pub phase_timer_ms: f64,
    /// Logical time elapsed since the previous evaluation.
    pub dt_ms: f64,
}

/// Output from the boss FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct BossUpdate {
    pub new_state: BossState,
    pub new_velocity: Velocity,
    pub new_target: Option<Position>,
    pub phase_timer_ms: f64,
}

/// What the boss does when its attack comes off cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossAttack {
    /// Direct damage to the rocket.
    Contact { damage: f64 },
    /// Projectiles aimed at the rocket's current position.
    Launch(&'static [BossProjectileKind]),
}

/// Kinematic parameters of a boss projectile kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossProjectileSpec {
    pub speed: f64,
    pub lifetime_ms: f64,
    pub size: f64,
}

/// Build a fresh phase-1 boss.
pub fn spawn_boss() -> Boss {
    let profile = boss_phase_profile(BossPhase::BruteForce);
    Boss {
        health: BOSS_MAX_HEALTH,
        max_health: BOSS_MAX_HEALTH,
        phase: BossPhase::BruteForce,
        speed: profile.speed,
        damage: profile.damage,
        attack_range: profile.attack_range,
        attack_cooldown_ms: profile.attack_cooldown_ms,
        last_attack_ms: None,
        target: None,
        state: BossState::Spawning,
        phase_timer_ms: 0.0,
        next_phase_threshold: profile.exit_threshold,
        attack_flag_expires_ms: None,
    }
}

/// Advance the boss at most one phase if its health has crossed the current
/// phase's exit threshold. Returns the new phase on a transition.
///
/// Phases never regress; a large hit that skips several thresholds advances
/// one phase per call.
pub fn update_phase(boss: &mut Boss) -> Option<BossPhase> {
    if boss.health <= 0.0 {
        return None;
    }
    let next = boss.phase.next()?;
    if boss.health > boss_phase_profile(boss.phase).exit_threshold {
        return None;
    }

    let profile = boss_phase_profile(next);
    boss.phase = next;
    boss.speed = profile.speed;
    boss.damage = profile.damage;
    boss.attack_range = profile.attack_range;
    boss.attack_cooldown_ms = profile.attack_cooldown_ms;
    boss.next_phase_threshold = profile.exit_threshold;
    boss.state = BossState::PhaseTransition;
    boss.phase_timer_ms = BOSS_PHASE_TRANSITION_MS;
    Some(next)
}

/// Evaluate the FSM for the boss.
pub fn evaluate(ctx: &BossContext) -> BossUpdate {
    if ctx.health <= 0.0 || ctx.state == BossState::Dead {
        return BossUpdate {
            new_state: BossState::Dead,
            new_velocity: Velocity::zero(),
            new_target: None,
            phase_timer_ms: 0.0,
        };
    }

    if ctx.state == BossState::PhaseTransition {
        let remaining = ctx.phase_timer_ms - ctx.dt_ms;
        let new_state = if remaining <= 0.0 {
            BossState::Idle
        } else {
            BossState::PhaseTransition
        };
        return BossUpdate {
            new_state,
            new_velocity: Velocity::zero(),
            new_target: None,
            phase_timer_ms: remaining.max(0.0),
        };
    }

    let distance = ctx.position.distance_to(&ctx.rocket_position);

    if distance > BOSS_DETECTION_RANGE {
        return BossUpdate {
            new_state: BossState::Idle,
            new_velocity: Velocity::zero(),
            new_target: None,
            phase_timer_ms: 0.0,
        };
    }

    if distance <= ctx.attack_range {
        return BossUpdate {
            new_state: BossState::Attacking,
            new_velocity: Velocity::zero(),
            new_target: Some(ctx.rocket_position),
            phase_timer_ms: 0.0,
        };
    }

    let direction = ctx.position.direction_to(&ctx.rocket_position);
    BossUpdate {
        new_state: BossState::Moving,
        new_velocity: Velocity::along(direction, ctx.speed),
        new_target: Some(ctx.rocket_position),
        phase_timer_ms: 0.0,
    }
}

/// Integrate one tick of movement. Immobile while attacking, transitioning or dead.
pub fn step_position(
    state: BossState,
    position: &Position,
    velocity: &Velocity,
    bounds: &Bounds,
) -> Position {
    if matches!(
        state,
        BossState::Attacking | BossState::PhaseTransition | BossState::Dead
    ) {
        return *position;
    }
    bounds.clamp(position.advanced(velocity), BOSS_BOUNDS_MARGIN)
}

/// Whether the boss may attack this tick.
pub fn can_attack(boss: &Boss, now_ms: f64) -> bool {
    boss.state == BossState::Attacking
        && boss.health > 0.0
        && cooldown_elapsed(boss.last_attack_ms, boss.attack_cooldown_ms, now_ms)
}

/// Attack pattern for a phase.
pub fn attack_for(phase: BossPhase, damage: f64) -> BossAttack {
    match phase {
        BossPhase::BruteForce => BossAttack::Contact { damage },
        BossPhase::RangedAssault => BossAttack::Launch(&[BossProjectileKind::EnergyBlast]),
        BossPhase::AreaDevastation => BossAttack::Launch(&[BossProjectileKind::Shockwave]),
        BossPhase::FinalRage => BossAttack::Launch(&[
            BossProjectileKind::PoisonSpit,
            BossProjectileKind::Shockwave,
        ]),
    }
}

pub fn projectile_spec(kind: BossProjectileKind) -> BossProjectileSpec {
    match kind {
        BossProjectileKind::Shockwave => BossProjectileSpec {
            speed: SHOCKWAVE_SPEED,
            lifetime_ms: SHOCKWAVE_LIFETIME_MS,
            size: SHOCKWAVE_SIZE,
        },
        BossProjectileKind::EnergyBlast | BossProjectileKind::PoisonSpit => BossProjectileSpec {
            speed: BOSS_PROJECTILE_SPEED,
            lifetime_ms: BOSS_PROJECTILE_LIFETIME_MS,
            size: BOSS_PROJECTILE_SIZE,
        },
    }
}

/// Launch velocity toward `target`, fixed at spawn time.
pub fn launch_velocity(from: &Position, target: &Position, kind: BossProjectileKind) -> Velocity {
    Velocity::along(from.direction_to(target), projectile_spec(kind).speed)
}

/// Hit radius of a boss projectile against the rocket. Shockwaves grow, and
/// their reach grows with them.
pub fn projectile_hit_radius(kind: BossProjectileKind, size: f64) -> f64 {
    match kind {
        BossProjectileKind::Shockwave => BOSS_PROJECTILE_HIT_RADIUS.max(size),
        BossProjectileKind::EnergyBlast | BossProjectileKind::PoisonSpit => {
            BOSS_PROJECTILE_HIT_RADIUS
        }
    }
}

/// Apply damage, flooring health at zero. Returns `true` if this killed the boss.
pub fn apply_damage(boss: &mut Boss, damage: f64) -> bool {
    if boss.state == BossState::Dead {
        return false;
    }
    boss.health = (boss.health - damage).max(0.0);
    if boss.health <= 0.0 {
        boss.state = BossState::Dead;
        boss.target = None;
        return true;
    }
    false
}
