use clap::Parser;
use std::path::Path;

use pantry_sim_rs::cli::{Cli, Command};
use pantry_sim_rs::config::{load_scenario, save_scenario, ScenarioConfig};
use pantry_sim_rs::error::Result;
use pantry_sim_rs::runner::{write_csv, SimulationRun};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Run {
            config,
            output,
            seed,
            households,
            weeks,
        } => cmd_run(config.as_deref(), &output, seed, households, weeks),
        Command::InitConfig { path } => cmd_init_config(&path),
    }
}

fn cmd_run(
    config_path: Option<&str>,
    output: &str,
    seed: u64,
    households: Option<usize>,
    weeks: Option<u32>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default(),
    };
    if let Some(households) = households {
        config.households = households;
    }
    if let Some(weeks) = weeks {
        config.weeks = weeks;
    }

    println!(
        "Simulating {} households for {} weeks (seed {})",
        config.households, config.weeks, seed
    );

    let mut simulation = SimulationRun::new(config, seed)?;
    let rows = simulation.run()?;
    write_csv(output, &rows)?;

    println!("Wrote {} rows to {}", rows.len(), output);
    Ok(())
}

fn cmd_init_config(path: &str) -> Result<()> {
    if Path::new(path).exists() {
        eprintln!("Refusing to overwrite existing file: {}", path);
        return Ok(());
    }
    save_scenario(path, &ScenarioConfig::default())?;
    println!("Wrote default scenario to {}", path);
    Ok(())
}
