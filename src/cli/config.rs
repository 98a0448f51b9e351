use clap::Parser;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "jest-dash",
    version,
    about = "HTML dashboard server for Jest JSON test-run summaries"
)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Path of the fallback snapshot file
    #[arg(long)]
    pub snapshot: Option<String>,

    /// Path to config file (default: jest-dash.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "JEST_DASH_LOG", default_value = "info")]
    pub log_level: String,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `jest-dash.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_snapshot")]
    pub snapshot_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            snapshot_path: "tmp.json".to_string(),
        }
    }
}

// Serde default helpers
fn default_port() -> u16 { 8080 }
fn default_host() -> String { "127.0.0.1".to_string() }
fn default_snapshot() -> String { "tmp.json".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("jest-dash.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Merging (CLI args win over config file)
// ============================================================================

/// Resolve effective server settings: CLI > config file > defaults.
pub fn resolve_settings(cli: &Cli, config: &AppConfig) -> ServerConfig {
    ServerConfig {
        port: cli.port.unwrap_or(config.server.port),
        host: cli.host.clone().unwrap_or_else(|| config.server.host.clone()),
        snapshot_path: cli
            .snapshot
            .clone()
            .unwrap_or_else(|| config.server.snapshot_path.clone()),
    }
}
