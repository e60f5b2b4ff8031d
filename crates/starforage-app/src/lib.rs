//! STARFORAGE headless runner.
//!
//! This crate wires the simulation engine to a fixed-interval game loop
//! thread, with TOML configuration, structured logging and an autopilot
//! for unattended runs.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod pilot;
pub mod state;

pub use error::AppError;
pub use starforage_core as core;
