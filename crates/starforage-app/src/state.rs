//! Messages and results exchanged with the game loop thread.

use starforage_core::commands::PlayerCommand;
use starforage_core::enums::GamePhase;

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Why the game loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Shutdown,
    /// Every sender was dropped.
    Disconnected,
    /// Victory or GameOver with `stop_on_game_end` set.
    GameEnded,
    TickLimit,
}

/// Returned by the game loop thread when it exits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSummary {
    pub exit: LoopExit,
    /// Loop iterations run, including paused ones.
    pub iterations: u64,
    /// Simulation ticks advanced.
    pub sim_ticks: u64,
    pub final_phase: GamePhase,
}
