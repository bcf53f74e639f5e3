//! Server configuration.
//!
//! Settings come from an optional JSON file, then command-line or
//! environment overrides parsed by [`Cli`]. Anything left unset falls back to
//! a local development default.

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// UCSB course-management API server
#[derive(Debug, Parser)]
#[command(name = "ucsbapi", version, about)]
pub struct Cli {
    /// JSON config file
    #[arg(long, env = "UCSB_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding the config file
    #[arg(long, env = "UCSB_API_PORT")]
    pub port: Option<u16>,

    /// SQLite database path, overriding the config file
    #[arg(long, env = "UCSB_API_DATABASE")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the SHA-256 digest to store as an API key's `token_sha256`
    HashToken { token: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An API key accepted as a `Bearer` token.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyConfig {
    /// Label used in logs
    pub name: String,
    pub role: crate::types::Role,
    /// Lowercase hex SHA-256 digest of the token
    pub token_sha256: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub api_keys: Vec<ApiKeyConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            database_path: PathBuf::from("ucsb.db"),
            api_keys: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Loads the config file named on the command line (if any) and applies
    /// the remaining overrides.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => {
                warn!("No config file given, using default configuration");
                Self::default()
            }
        };

        config.apply_overrides(cli);

        if config.api_keys.is_empty() {
            warn!("No API keys configured, every request will be treated as anonymous");
        }

        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(port) = cli.port {
            info!("Overriding configured port with {port}");
            self.port = port;
        }
        if let Some(path) = &cli.database {
            info!("Overriding configured database path with {}", path.display());
            self.database_path = path.clone();
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}
