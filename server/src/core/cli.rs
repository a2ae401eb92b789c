use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::config::StoreBackend;
use super::constants::{ENV_CONFIG, ENV_DATABASE_BACKEND, ENV_HOST, ENV_PORT};

#[derive(Parser)]
#[command(name = "player-registry")]
#[command(version, about = "Game character registry API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Player store backend (sqlite or memory)
    #[arg(long, global = true, env = ENV_DATABASE_BACKEND, value_parser = parse_store_backend)]
    pub database_backend: Option<StoreBackend>,
}

/// Parse store backend from CLI/env string
fn parse_store_backend(s: &str) -> Result<StoreBackend, String> {
    match s.to_lowercase().as_str() {
        "sqlite" => Ok(StoreBackend::Sqlite),
        "memory" => Ok(StoreBackend::Memory),
        _ => Err(format!(
            "Invalid database backend '{}'. Valid options: sqlite, memory",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// System maintenance commands
    System {
        #[command(subcommand)]
        command: SystemCommands,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum SystemCommands {
    /// Delete local data directory (player database). Requires confirmation.
    Prune {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub database_backend: Option<StoreBackend>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        host: cli.host,
        port: cli.port,
        config: cli.config,
        database_backend: cli.database_backend,
    };
    (config, cli.command)
}
