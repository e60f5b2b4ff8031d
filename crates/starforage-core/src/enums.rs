//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Harvestable resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Iron,
    Crystal,
    Energy,
    RareMetals,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Iron,
        ResourceType::Crystal,
        ResourceType::Energy,
        ResourceType::RareMetals,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ResourceType::Iron => "Iron",
            ResourceType::Crystal => "Crystal",
            ResourceType::Energy => "Energy",
            ResourceType::RareMetals => "Rare Metals",
        }
    }
}

/// Zombie archetype. Fixes health, speed, damage and attack timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZombieType {
    Crawler,
    Hunter,
    Brute,
    Spitter,
}

impl ZombieType {
    pub const ALL: [ZombieType; 4] = [
        ZombieType::Crawler,
        ZombieType::Hunter,
        ZombieType::Brute,
        ZombieType::Spitter,
    ];
}

/// Zombie behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZombieState {
    #[default]
    Idle,
    Chasing,
    Attacking,
    /// Terminal.
    Dead,
}

/// Boss behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossState {
    /// Freshly spawned, not yet evaluated.
    #[default]
    Spawning,
    Idle,
    Moving,
    Attacking,
    /// Locked for a fixed window after a phase change: no movement, no attacks.
    PhaseTransition,
    /// Terminal.
    Dead,
}

/// Boss difficulty tier. Only ever advances.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BossPhase {
    /// Melee contact attacks.
    #[default]
    BruteForce,
    /// Energy blasts at range.
    RangedAssault,
    /// Expanding shockwaves.
    AreaDevastation,
    /// Ranged and shockwave attacks together.
    FinalRage,
}

impl BossPhase {
    /// 1-based phase number.
    pub fn number(self) -> u8 {
        match self {
            BossPhase::BruteForce => 1,
            BossPhase::RangedAssault => 2,
            BossPhase::AreaDevastation => 3,
            BossPhase::FinalRage => 4,
        }
    }

    pub fn next(self) -> Option<BossPhase> {
        match self {
            BossPhase::BruteForce => Some(BossPhase::RangedAssault),
            BossPhase::RangedAssault => Some(BossPhase::AreaDevastation),
            BossPhase::AreaDevastation => Some(BossPhase::FinalRage),
            BossPhase::FinalRage => None,
        }
    }
}

/// Player weapon type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Laser,
    Flame,
}

/// Boss projectile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossProjectileKind {
    EnergyBlast,
    PoisonSpit,
    /// Grows every tick; hit radius follows its size.
    Shockwave,
}

/// Abstract input held by the player during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputCode {
    RotateLeft,
    RotateRight,
    Thrust,
    FireLaser,
    FireFlame,
}

impl InputCode {
    /// Map a keyboard `code` (DOM `KeyboardEvent.code` naming) to an input.
    pub fn from_key_code(code: &str) -> Option<InputCode> {
        match code {
            "ArrowLeft" | "KeyA" => Some(InputCode::RotateLeft),
            "ArrowRight" | "KeyD" => Some(InputCode::RotateRight),
            "ArrowUp" | "KeyW" => Some(InputCode::Thrust),
            "Space" => Some(InputCode::FireLaser),
            "KeyF" => Some(InputCode::FireFlame),
            _ => None,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Ready,
    Active,
    Paused,
    /// Rocket destroyed. Terminal until restart.
    GameOver,
    /// Boss defeated. Terminal until restart.
    Victory,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}
