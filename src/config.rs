//! Runtime configuration handed to the upstream client, the aggregator and
//! the HTTP layer at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::LeagueId;

pub const DEFAULT_API_BASE_URL: &str = "https://fantasy.premierleague.com/api";
pub const DEFAULT_LEAGUE_ID: u32 = 738279;

#[derive(Debug, Clone)]
pub struct HubConfig {
    pub host: String,
    pub port: u16,
    /// League used when a route does not name one explicitly.
    pub league_id: LeagueId,
    /// Upstream base URL without a trailing slash.
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
    pub database_path: PathBuf,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            league_id: LeagueId::new(DEFAULT_LEAGUE_ID),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            cors_origins: vec!["http://localhost:3000".to_string()],
            database_path: default_database_path(),
        }
    }
}

impl HubConfig {
    /// Whether `origin` may read responses cross-site.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }
}

/// Path: ~/.local/share/fpl-hub/leagues.db (platform data dir)
pub fn default_database_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("fpl-hub").join("leagues.db")
}
