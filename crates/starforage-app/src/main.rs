use std::time::Duration;

use tracing::{error, info};

use starforage_app::config::Config;
use starforage_app::core::commands::PlayerCommand;
use starforage_app::game_loop;
use starforage_app::pilot;
use starforage_app::AppError;

const DEFAULT_CONFIG_PATH: &str = "starforage.toml";

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match Config::load_or_default(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("STARFORAGE v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&config) {
        error!("Run failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let settings = config.runner.loop_settings();
    let handle = game_loop::spawn_game_loop(config.simulation.sim_config(), settings)?;
    handle.send(PlayerCommand::StartGame)?;

    // Re-plan a few times per second of play.
    let poll = settings.tick_interval.max(Duration::from_millis(1)) * 4;
    let mut held = None;
    while !handle.is_finished() {
        if config.runner.autopilot {
            if let Some(snapshot) = handle.latest_snapshot() {
                let inputs = pilot::steer(&snapshot);
                if held.as_ref() != Some(&inputs) {
                    // The loop may have just exited; `wait` reports it.
                    if handle.send(PlayerCommand::SetInput { inputs: inputs.clone() }).is_err() {
                        break;
                    }
                    held = Some(inputs);
                }
            }
        }
        std::thread::sleep(poll);
    }

    let final_snapshot = handle.latest_snapshot();
    let summary = handle.wait()?;
    info!(
        exit = ?summary.exit,
        phase = ?summary.final_phase,
        sim_ticks = summary.sim_ticks,
        "Run finished"
    );

    if let Some(snapshot) = final_snapshot {
        for (resource_type, amount) in &snapshot.inventory {
            info!("{}: {:.2}", resource_type.display_name(), amount);
        }
        info!(
            health = snapshot.health.current,
            zombies_left = snapshot.zombies.len(),
            boss_health = ?snapshot.boss.as_ref().map(|b| b.health),
            "Final state"
        );
        if config.runner.print_final_snapshot {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("Failed to serialize final snapshot: {e}"),
            }
        }
    }
    Ok(())
}
