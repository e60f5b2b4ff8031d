//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::{BTreeSet, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use starforage_core::commands::PlayerCommand;
use starforage_core::components::{HealthState, Rocket};
use starforage_core::constants::{RESOURCE_NODE_COUNT, ZOMBIE_COUNT};
use starforage_core::enums::{GamePhase, InputCode};
use starforage_core::events::GameEvent;
use starforage_core::state::GameStateSnapshot;
use starforage_core::types::{Bounds, SimTime};

use crate::health;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Play field size.
    pub bounds: Bounds,
    pub resource_node_count: usize,
    pub zombie_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: Bounds::default(),
            resource_node_count: RESOURCE_NODE_COUNT,
            zombie_count: ZOMBIE_COUNT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    /// Id source for projectiles, flame particles and boss projectiles.
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    /// Inputs held as of the last processed command.
    input: BTreeSet<InputCode>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    boss_spawned: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            input: BTreeSet::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            boss_spawned: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.evaluate_outcome();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Inputs currently held.
    pub fn input(&self) -> &BTreeSet<InputCode> {
        &self.input
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for scripted test setups).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { input } => {
                self.input.insert(input);
            }
            PlayerCommand::KeyUp { input } => {
                self.input.remove(&input);
            }
            PlayerCommand::SetInput { inputs } => {
                self.input = inputs;
            }
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Ready {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                info!(tick = self.time.tick, phase = ?self.phase, "Restarting session");
                self.start_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    debug!(tick = self.time.tick, "Paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    debug!(tick = self.time.tick, "Resumed");
                }
            }
        }
    }

    /// Discard all state and set up a fresh session. The RNG stream continues.
    fn start_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.next_entity_id = 0;
        self.input.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.boss_spawned = false;

        world_setup::setup_session(
            &mut self.world,
            &mut self.rng,
            &self.config.bounds,
            self.config.resource_node_count,
            self.config.zombie_count,
        );
        self.phase = GamePhase::Active;
        info!(
            seed = self.config.seed,
            zombies = self.config.zombie_count,
            resource_nodes = self.config.resource_node_count,
            "Session started"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.now_ms();
        let dt_ms = self.time.dt();
        let bounds = self.config.bounds;

        // 1. Rocket physics
        systems::rocket::run_physics(&mut self.world, &self.input, &bounds);
        // 2. Weapon fire from held inputs
        systems::fire_control::run(
            &mut self.world,
            &mut self.rng,
            &self.input,
            now_ms,
            &mut self.next_entity_id,
            &mut self.events,
        );
        // 3. Resource regeneration and harvesting
        systems::resources::run(&mut self.world, now_ms, dt_ms, &mut self.events);
        // 4. Zombie AI, movement and attacks
        systems::zombie_ai::run(&mut self.world, now_ms, &bounds, &mut self.events);
        // 5. Boss spawn once the wave is cleared
        systems::boss_ai::spawn_when_cleared(
            &mut self.world,
            &mut self.rng,
            &bounds,
            &mut self.boss_spawned,
            &mut self.events,
        );
        // 6. Boss phase, AI, movement and attacks
        systems::boss_ai::run(
            &mut self.world,
            now_ms,
            dt_ms,
            &bounds,
            &mut self.next_entity_id,
            &mut self.events,
        );
        // 7. Passive shield and energy regeneration
        systems::rocket::run_regen(&mut self.world);
        // 8. Laser bolts vs zombies and boss
        systems::projectiles::run_lasers(&mut self.world, dt_ms, &bounds, &mut self.despawn_buffer);
        // 9. Flame particles vs zombies and boss
        systems::projectiles::run_flames(
            &mut self.world,
            &mut self.rng,
            dt_ms,
            &mut self.despawn_buffer,
        );
        // 10. Boss projectiles vs rocket
        systems::boss_projectiles::run(
            &mut self.world,
            dt_ms,
            &bounds,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 11. Cleanup (defeated zombies, expired and consumed projectiles)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }

    /// Lose when the rocket is destroyed, win when the boss is. Losing takes
    /// precedence when both happen on the same tick.
    fn evaluate_outcome(&mut self) {
        let rocket_dead = self
            .world
            .query::<(&Rocket, &HealthState)>()
            .iter()
            .next()
            .is_some_and(|(_, (_, hp))| health::is_dead(hp));

        if rocket_dead {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            info!(tick = self.time.tick, "Rocket destroyed, game over");
            return;
        }

        if self.boss_spawned && systems::boss_ai::health(&self.world).is_some_and(|h| h <= 0.0) {
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::Victory);
            info!(tick = self.time.tick, "Boss defeated, victory");
        }
    }
}
