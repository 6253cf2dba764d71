//! Command-line and environment argument definitions.

pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::LeagueId;

use crate::config::{HubConfig, DEFAULT_API_BASE_URL, DEFAULT_LEAGUE_ID};

/// Every flag can also be supplied through the environment (or a `.env` file).
#[derive(Debug, Parser)]
#[clap(name = "fpl-hub", about = "FPL head-to-head league dashboard API")]
pub struct FplHub {
    /// Address to bind the HTTP server to.
    #[clap(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP server to.
    #[clap(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// League used by the matchup endpoint and the seed route.
    #[clap(long, short, env = "LEAGUE_ID", default_value_t = LeagueId::new(DEFAULT_LEAGUE_ID))]
    pub league_id: LeagueId,

    /// Base URL of the Fantasy Premier League API.
    #[clap(long, env = "FPL_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Timeout for each upstream request, in seconds.
    #[clap(long, env = "FPL_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Allowed CORS origin (repeatable, or comma separated in `CORS_ORIGINS`).
    #[clap(
        long = "cors-origin",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub cors_origins: Vec<String>,

    /// SQLite database file for cached leagues.
    #[clap(long, env = "DATABASE_PATH")]
    pub database: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable text.
    #[clap(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl FplHub {
    pub fn into_config(self) -> HubConfig {
        HubConfig {
            host: self.host,
            port: self.port,
            league_id: self.league_id,
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            request_timeout: std::time::Duration::from_secs(self.timeout_secs),
            cors_origins: self
                .cors_origins
                .into_iter()
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            database_path: self
                .database
                .unwrap_or_else(crate::config::default_database_path),
        }
    }
}
