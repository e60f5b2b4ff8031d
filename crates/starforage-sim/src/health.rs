//! Rocket health model: shield absorbs damage first, then hull health.

use starforage_core::components::HealthState;

/// Full health and shield.
pub fn new_health_state(max: f64, max_shield: f64) -> HealthState {
    HealthState {
        current: max,
        max,
        shield: max_shield,
        max_shield,
    }
}

/// Apply damage. The shield absorbs up to its current value; the remainder
/// reduces health, floored at zero. Returns the damage taken by the hull.
pub fn take_damage(health: &mut HealthState, damage: f64) -> f64 {
    let damage = damage.max(0.0);
    let absorbed = damage.min(health.shield);
    health.shield -= absorbed;

    let remaining = damage - absorbed;
    if remaining <= 0.0 {
        return 0.0;
    }
    let before = health.current;
    health.current = (health.current - remaining).max(0.0);
    before - health.current
}

pub fn heal(health: &mut HealthState, amount: f64) {
    health.current = (health.current + amount.max(0.0)).min(health.max);
}

/// Recharge the shield toward its maximum. No-op when already full.
pub fn recharge_shield(health: &mut HealthState, amount: f64) {
    if health.shield < health.max_shield {
        health.shield = (health.shield + amount.max(0.0)).min(health.max_shield);
    }
}

pub fn is_dead(health: &HealthState) -> bool {
    health.current <= 0.0
}

pub fn health_percentage(health: &HealthState) -> f64 {
    percentage(health.current, health.max)
}

pub fn shield_percentage(health: &HealthState) -> f64 {
    percentage(health.shield, health.max_shield)
}

pub(crate) fn percentage(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        value / max * 100.0
    }
}
