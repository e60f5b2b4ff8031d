//! Simulation engine for STARFORAGE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for render/UI consumers.

pub mod engine;
pub mod health;
pub mod resource_field;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use starforage_core as core;
