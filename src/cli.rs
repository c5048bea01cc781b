use clap::{Parser, Subcommand};

/// PantrySim — A household food-waste simulator.
#[derive(Parser, Debug)]
#[command(name = "pantry_sim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a simulation and export the per-day records as CSV.
    Run {
        /// Path to a scenario JSON file; omit to use the default scenario.
        #[arg(short, long)]
        config: Option<String>,

        /// Output CSV path.
        #[arg(short, long, default_value = "simulation.csv")]
        output: String,

        /// Master seed for the run.
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Override the scenario's household count.
        #[arg(long)]
        households: Option<usize>,

        /// Override the scenario's week count.
        #[arg(long)]
        weeks: Option<u32>,
    },

    /// Write a default scenario JSON file to edit and run.
    InitConfig {
        /// Where to write the scenario file.
        #[arg(short, long, default_value = "scenario.json")]
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Run {
            config: None,
            output: "simulation.csv".to_string(),
            seed: 42,
            households: None,
            weeks: None,
        }
    }
}
