//! Runner configuration, loaded from `starforage.toml`.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use starforage_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, RESOURCE_NODE_COUNT, TICK_MS, ZOMBIE_COUNT};
use starforage_core::types::Bounds;
use starforage_sim::SimConfig;

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationSection,
    #[serde(default)]
    pub runner: RunnerSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
pub struct SimulationSection {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_resource_node_count")]
    pub resource_node_count: usize,
    #[serde(default = "default_zombie_count")]
    pub zombie_count: usize,
}

fn default_seed() -> u64 {
    42
}

fn default_canvas_width() -> f64 {
    CANVAS_WIDTH
}

fn default_canvas_height() -> f64 {
    CANVAS_HEIGHT
}

fn default_resource_node_count() -> usize {
    RESOURCE_NODE_COUNT
}

fn default_zombie_count() -> usize {
    ZOMBIE_COUNT
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            resource_node_count: default_resource_node_count(),
            zombie_count: default_zombie_count(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunnerSection {
    /// Wall-clock pacing per tick in milliseconds. 0 = run unpaced.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Stop after this many loop iterations. 0 = unbounded.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
    /// Stop once the game reaches Victory or GameOver.
    #[serde(default = "default_true")]
    pub stop_on_game_end: bool,
    /// Steer the rocket with the built-in pilot.
    #[serde(default = "default_true")]
    pub autopilot: bool,
    /// Print the final snapshot as JSON on exit.
    #[serde(default)]
    pub print_final_snapshot: bool,
}

fn default_tick_ms() -> u64 {
    TICK_MS as u64
}

fn default_max_ticks() -> u64 {
    60 * 60 * 5
}

fn default_true() -> bool {
    true
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            max_ticks: default_max_ticks(),
            stop_on_game_end: true,
            autopilot: true,
            print_final_snapshot: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Settings the game loop thread runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    pub tick_interval: Duration,
    pub max_ticks: Option<u64>,
    pub stop_on_game_end: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        RunnerSection::default().loop_settings()
    }
}

impl RunnerSection {
    pub fn loop_settings(&self) -> LoopSettings {
        LoopSettings {
            tick_interval: Duration::from_millis(self.tick_ms),
            max_ticks: (self.max_ticks > 0).then_some(self.max_ticks),
            stop_on_game_end: self.stop_on_game_end,
        }
    }
}

impl SimulationSection {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            bounds: Bounds::new(self.canvas_width, self.canvas_height),
            resource_node_count: self.resource_node_count,
            zombie_count: self.zombie_count,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(contents: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let sim = &self.simulation;
        if !(sim.canvas_width > 0.0 && sim.canvas_height > 0.0) {
            return Err(AppError::InvalidConfig(format!(
                "canvas must be positive, got {}x{}",
                sim.canvas_width, sim.canvas_height
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(AppError::InvalidConfig("logging.level is empty".into()));
        }
        Ok(())
    }
}
