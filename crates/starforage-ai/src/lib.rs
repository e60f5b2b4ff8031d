//! Enemy AI for STARFORAGE.
//!
//! Implements the zombie pursuit state machine, the multi-phase boss,
//! and the archetype/phase stat tables that drive them.

pub mod boss;
pub mod fsm;
pub mod profiles;

pub use starforage_core as core;

#[cfg(test)]
mod tests;
