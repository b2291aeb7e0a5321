mod app;
mod config;
mod engine;
mod simulation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{SimulationConfig, window_conf};
use macroquad::rand;

/// Command-line arguments for Antworld.
#[derive(Parser)]
#[command(name = "antworld", version, about = "Ant colony simulation")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Loads the simulation configuration from a TOML file or uses defaults.
fn load_config(path: Option<PathBuf>) -> Result<SimulationConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            let config: SimulationConfig = toml::from_str(&content)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            println!("Loaded config from '{}'", path.display());
            Ok(config)
        }
        None => {
            println!("No config file provided, using defaults.");
            Ok(SimulationConfig::default())
        }
    }
}

/// Main entry point for the Antworld application.
#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e:#}");
            return;
        }
    };

    rand::srand(macroquad::miniquad::date::now() as u64);

    let mut app = App::new(config);
    app.run().await;
}
