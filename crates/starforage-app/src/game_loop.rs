//! Game loop thread. Runs the simulation engine at a fixed tick interval.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in shared
//! state for polling. Dropping the handle shuts the thread down and joins it.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{debug, info, warn};

use starforage_core::commands::PlayerCommand;
use starforage_core::state::GameStateSnapshot;
use starforage_sim::{SimConfig, SimulationEngine};

use crate::config::LoopSettings;
use crate::error::AppError;
use crate::state::{GameLoopCommand, LoopExit, LoopSummary};

type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Owning handle to a running game loop thread.
pub struct GameLoopHandle {
    cmd_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<LoopSummary>>,
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig, settings: LoopSettings) -> Result<GameLoopHandle, AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("starforage-game-loop".into())
        .spawn(move || run_game_loop(config, settings, cmd_rx, &shared))
        .map_err(AppError::Spawn)?;

    Ok(GameLoopHandle {
        cmd_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.cmd_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::LoopStopped)
    }

    /// Latest snapshot produced by the loop, if any tick has run.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Whether the loop thread has exited on its own.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|t| t.is_finished())
    }

    /// Block until the loop exits on its own (tick limit or game end).
    pub fn wait(mut self) -> Result<LoopSummary, AppError> {
        self.join()
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(mut self) -> Result<LoopSummary, AppError> {
        // The loop may already have exited; a closed channel is fine.
        let _ = self.cmd_tx.send(GameLoopCommand::Shutdown);
        self.join()
    }

    fn join(&mut self) -> Result<LoopSummary, AppError> {
        let thread = self.thread.take().ok_or(AppError::LoopStopped)?;
        thread.join().map_err(|_| AppError::LoopPanicked)
    }
}

impl Drop for GameLoopHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.cmd_tx.send(GameLoopCommand::Shutdown);
            if self.join().is_err() {
                warn!("Game loop thread panicked during teardown");
            }
        }
    }
}

/// The game loop. Runs until Shutdown, channel disconnect, tick limit, or
/// (when configured) the end of the game.
fn run_game_loop(
    config: SimConfig,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    info!(seed = config.seed, interval = ?settings.tick_interval, "Game loop started");
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut iterations: u64 = 0;

    let exit = loop {
        // 1. Drain all pending commands
        let mut stop = None;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    debug!(?cmd, "Command received");
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    stop = Some(LoopExit::Shutdown);
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    stop = Some(LoopExit::Disconnected);
                    break;
                }
            }
        }
        if let Some(exit) = stop {
            break exit;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        iterations += 1;
        let game_ended = snapshot.phase.is_terminal();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if game_ended && settings.stop_on_game_end {
            break LoopExit::GameEnded;
        }
        if settings.max_ticks.is_some_and(|max| iterations >= max) {
            break LoopExit::TickLimit;
        }

        // 4. Sleep until next tick
        if settings.tick_interval.is_zero() {
            continue;
        }
        next_tick_time += settings.tick_interval;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > settings.tick_interval * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    };

    let summary = LoopSummary {
        exit,
        iterations,
        sim_ticks: engine.time().tick,
        final_phase: engine.phase(),
    };
    info!(?summary, "Game loop stopped");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use starforage_core::enums::GamePhase;

    fn unpaced(max_ticks: Option<u64>) -> LoopSettings {
        LoopSettings {
            tick_interval: Duration::ZERO,
            max_ticks,
            stop_on_game_end: true,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_limit_stops_loop() {
        let handle = spawn_game_loop(SimConfig::default(), unpaced(Some(25))).unwrap();
        let summary = handle.wait().unwrap();
        assert_eq!(summary.exit, LoopExit::TickLimit);
        assert_eq!(summary.iterations, 25);
        // Never started, so no simulation time passed.
        assert_eq!(summary.sim_ticks, 0);
        assert_eq!(summary.final_phase, GamePhase::Ready);
    }

    #[test]
    fn test_shutdown_joins_thread() {
        let handle = spawn_game_loop(
            SimConfig::default(),
            LoopSettings {
                tick_interval: Duration::from_millis(1),
                max_ticks: None,
                stop_on_game_end: true,
            },
        )
        .unwrap();
        handle.send(PlayerCommand::StartGame).unwrap();
        std::thread::sleep(Duration::from_millis(20));

        let summary = handle.shutdown().unwrap();
        assert_eq!(summary.exit, LoopExit::Shutdown);
        assert_eq!(summary.final_phase, GamePhase::Active);
        assert!(summary.sim_ticks > 0);
    }

    #[test]
    fn test_snapshot_published() {
        let handle = spawn_game_loop(
            SimConfig::default(),
            LoopSettings {
                tick_interval: Duration::from_millis(1),
                max_ticks: None,
                stop_on_game_end: true,
            },
        )
        .unwrap();
        handle.send(PlayerCommand::StartGame).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut active = false;
        while Instant::now() < deadline {
            if handle
                .latest_snapshot()
                .is_some_and(|s| s.phase == GamePhase::Active && !s.zombies.is_empty())
            {
                active = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(active, "Loop should publish an active snapshot");
        // Dropping the handle shuts the loop down.
    }

    #[test]
    fn test_send_after_exit_fails() {
        let handle = spawn_game_loop(SimConfig::default(), unpaced(Some(1))).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        while !handle.is_finished() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(handle.is_finished());
        assert!(matches!(
            handle.send(PlayerCommand::Pause),
            Err(AppError::LoopStopped)
        ));
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        // Run enough ticks to populate entities
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(50),
            "Snapshot serialization took {:?}, should be well under a frame budget",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
