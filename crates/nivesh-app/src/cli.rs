//! CLI argument definitions for the Nivesh application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use nivesh_core::types::RiskTolerance;

/// Nivesh — a terminal investment advisor with a durable chat history.
#[derive(Parser, Debug)]
#[command(name = "nivesh", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Data directory for the chat log and user profile.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; with none given the interactive chat starts.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the persisted conversation log and exit.
    History,
    /// Delete the persisted conversation log.
    Reset,
    /// View or update the saved user profile.
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the saved profile.
    Show,
    /// Update profile fields; unspecified fields keep their saved value.
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Monthly income, free-form (e.g. "85000").
        #[arg(long = "income")]
        monthly_income: Option<String>,
        /// Risk tolerance: low, medium, or high.
        #[arg(long = "risk", value_parser = parse_risk)]
        risk_tolerance: Option<RiskTolerance>,
        /// Comma-separated investment interests.
        #[arg(long = "interests")]
        investment_interests: Option<String>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > NIVESH_CONFIG env var > ~/.nivesh/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("NIVESH_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the data directory.
    ///
    /// Priority: --data-dir flag > config file value (with `~` expanded).
    pub fn resolve_data_dir(&self, config_value: &str) -> PathBuf {
        if let Some(ref p) = self.data_dir {
            return p.clone();
        }
        expand_home(config_value)
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_value: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_value.to_string())
    }
}

fn parse_risk(value: &str) -> Result<RiskTolerance, String> {
    match value.to_lowercase().as_str() {
        "low" => Ok(RiskTolerance::Low),
        "medium" => Ok(RiskTolerance::Medium),
        "high" => Ok(RiskTolerance::High),
        other => Err(format!(
            "invalid risk tolerance '{}' (expected low, medium, or high)",
            other
        )),
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".nivesh").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".nivesh").join("config.toml");
    }
    PathBuf::from("config.toml")
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if path.starts_with("~/") || path.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        return PathBuf::from(home).join(&path[2..]);
    }
    PathBuf::from(path)
}
