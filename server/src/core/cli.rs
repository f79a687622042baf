use clap::Parser;

use std::path::PathBuf;

use super::constants::{ENV_CONFIG, ENV_DATABASE_URL, ENV_HOST, ENV_PORT};

#[derive(Parser)]
#[command(name = "firmbase")]
#[command(version, about = "Company directory HTTP API", long_about = None)]
pub struct Cli {
    /// Server host address
    #[arg(long, short = 'H', env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// PostgreSQL connection URL
    #[arg(long, env = ENV_DATABASE_URL)]
    pub database_url: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub database_url: Option<String>,
}

/// Parse CLI arguments
pub fn parse() -> CliConfig {
    let cli = Cli::parse();
    CliConfig {
        host: cli.host,
        port: cli.port,
        config: cli.config,
        database_url: cli.database_url,
    }
}
