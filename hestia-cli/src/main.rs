//! Hestia CLI
//!
//! Command-line interface for the Hestia thermostat simulator.

mod commands;
mod config;
mod form;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "hestia")]
#[command(about = "Hestia AI Thermostat CLI", long_about = None)]
struct Cli {
    /// Thermostat service URL
    #[arg(
        long,
        env = "HESTIA_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
    };

    handle_command(cli.command, &config).await
}
