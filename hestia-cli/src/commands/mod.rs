//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod history;
mod simulate;
mod weather;

pub use history::HistoryArgs;
pub use simulate::SimulateArgs;
pub use weather::WeatherArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a thermostat adjustment for a reading
    Simulate(SimulateArgs),
    /// Show the adjustment history with AI insights
    History(HistoryArgs),
    /// Look up the current outdoor temperature
    Weather(WeatherArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Simulate(args) => simulate::handle_simulate_command(args, config).await,
        Commands::History(args) => history::handle_history_command(args, config).await,
        Commands::Weather(args) => weather::handle_weather_command(args, config).await,
    }
}
