//! Archetype and phase stat blocks.
//!
//! Consolidates the static per-zombie-type and per-boss-phase parameters.

use starforage_core::constants::BOSS_MAX_HEALTH;
use starforage_core::enums::{BossPhase, ZombieType};

/// Stat block for a zombie archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieProfile {
    pub health: f64,
    /// Pixels per tick.
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
    pub attack_cooldown_ms: f64,
}

/// Get the stat block for a zombie archetype.
pub fn zombie_profile(zombie_type: ZombieType) -> ZombieProfile {
    match zombie_type {
        ZombieType::Crawler => ZombieProfile {
            health: 30.0,
            speed: 0.8,
            damage: 10.0,
            attack_range: 25.0,
            attack_cooldown_ms: 2000.0,
        },
        ZombieType::Hunter => ZombieProfile {
            health: 50.0,
            speed: 1.5,
            damage: 15.0,
            attack_range: 30.0,
            attack_cooldown_ms: 1500.0,
        },
        ZombieType::Brute => ZombieProfile {
            health: 100.0,
            speed: 0.5,
            damage: 25.0,
            attack_range: 35.0,
            attack_cooldown_ms: 3000.0,
        },
        // Long reach, fragile.
        ZombieType::Spitter => ZombieProfile {
            health: 40.0,
            speed: 0.6,
            damage: 12.0,
            attack_range: 80.0,
            attack_cooldown_ms: 2500.0,
        },
    }
}

/// Stat block for one boss phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossPhaseProfile {
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
    pub attack_cooldown_ms: f64,
    /// Health at or below which this phase ends (0 for the final phase).
    pub exit_threshold: f64,
}

/// Get the stat block for a boss phase.
pub fn boss_phase_profile(phase: BossPhase) -> BossPhaseProfile {
    match phase {
        BossPhase::BruteForce => BossPhaseProfile {
            speed: 1.2,
            damage: 30.0,
            attack_range: 40.0,
            attack_cooldown_ms: 1500.0,
            exit_threshold: BOSS_MAX_HEALTH * 0.75,
        },
        BossPhase::RangedAssault => BossPhaseProfile {
            speed: 0.8,
            damage: 25.0,
            attack_range: 120.0,
            attack_cooldown_ms: 2000.0,
            exit_threshold: BOSS_MAX_HEALTH * 0.5,
        },
        BossPhase::AreaDevastation => BossPhaseProfile {
            speed: 0.6,
            damage: 35.0,
            attack_range: 80.0,
            attack_cooldown_ms: 3000.0,
            exit_threshold: BOSS_MAX_HEALTH * 0.25,
        },
        BossPhase::FinalRage => BossPhaseProfile {
            speed: 1.8,
            damage: 40.0,
            attack_range: 100.0,
            attack_cooldown_ms: 800.0,
            exit_threshold: 0.0,
        },
    }
}
