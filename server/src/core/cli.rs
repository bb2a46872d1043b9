use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::config::StorageBackend;
use super::constants::{ENV_CONFIG, ENV_DATA_DIR, ENV_DEBUG, ENV_HOST, ENV_PORT, ENV_STORAGE};

#[derive(Parser)]
#[command(name = "string-analyzer")]
#[command(version, about = "String analysis and natural-language filtering service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Enable debug mode (request tracing)
    #[arg(long, global = true, env = ENV_DEBUG)]
    pub debug: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Storage backend (json or memory)
    #[arg(long, global = true, env = ENV_STORAGE, value_parser = parse_storage_backend)]
    pub storage: Option<StorageBackend>,

    /// Data directory for the json backend
    #[arg(long, global = true, env = ENV_DATA_DIR)]
    pub data_dir: Option<PathBuf>,
}

/// Parse storage backend from CLI/env string
fn parse_storage_backend(s: &str) -> Result<StorageBackend, String> {
    match s.to_lowercase().as_str() {
        "json" | "file" => Ok(StorageBackend::Json),
        "memory" => Ok(StorageBackend::Memory),
        _ => Err(format!(
            "Invalid storage backend '{}'. Valid options: json, memory",
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
    /// Delete the local data directory and every stored string. Requires confirmation.
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
    pub debug: bool,
    pub config: Option<PathBuf>,
    pub storage: Option<StorageBackend>,
    pub data_dir: Option<PathBuf>,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            debug: cli.debug,
            config: cli.config,
            storage: cli.storage,
            data_dir: cli.data_dir,
        }
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let mut cli = Cli::parse();
    let command = cli.command.take();
    (cli.into(), command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_storage_backend() {
        assert_eq!(parse_storage_backend("json"), Ok(StorageBackend::Json));
        assert_eq!(parse_storage_backend("MEMORY"), Ok(StorageBackend::Memory));
        assert!(parse_storage_backend("redis").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "string-analyzer",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--storage",
            "memory",
        ])
        .unwrap();
        let config = CliConfig::from(cli);
        assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.storage, Some(StorageBackend::Memory));
    }

    #[test]
    fn test_cli_prune_subcommand() {
        let cli = Cli::try_parse_from(["string-analyzer", "system", "prune", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::System {
                command: SystemCommands::Prune { yes: true }
            })
        ));
    }
}
