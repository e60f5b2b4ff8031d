//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A weapon fired successfully.
    WeaponFired { weapon_type: WeaponType },
    /// Resources moved from a node into the inventory.
    ResourceHarvested {
        node_id: u32,
        resource_type: ResourceType,
        amount: f64,
    },
    /// The rocket took damage.
    RocketHit { damage: f64, remaining_health: f64 },
    /// A zombie reached zero health; it leaves the live collection this tick.
    ZombieDefeated { zombie_id: u32, zombie_type: ZombieType },
    /// The wave was cleared and the boss appeared.
    BossSpawned,
    /// The boss entered a new phase.
    BossPhaseChanged { phase: BossPhase },
    /// The boss launched a projectile.
    BossAttack { kind: BossProjectileKind },
    Victory,
    GameOver,
}
