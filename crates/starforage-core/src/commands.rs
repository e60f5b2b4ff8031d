//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::InputCode;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Input ---
    /// An input became held.
    KeyDown { input: InputCode },
    /// An input was released.
    KeyUp { input: InputCode },
    /// Replace the whole held-input set.
    SetInput { inputs: BTreeSet<InputCode> },

    // --- Lifecycle ---
    /// Start a session from the Ready phase.
    StartGame,
    /// Discard all state and start a fresh session.
    Restart,
    Pause,
    Resume,
}
