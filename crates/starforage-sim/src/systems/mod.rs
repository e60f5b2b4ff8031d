//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod boss_ai;
pub mod boss_projectiles;
pub mod cleanup;
pub mod fire_control;
pub mod projectiles;
pub mod resources;
pub mod rocket;
pub mod snapshot;
pub mod zombie_ai;
