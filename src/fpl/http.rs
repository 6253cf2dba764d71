//! Client for the Fantasy Premier League public API.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli::types::{EntryId, Gameweek, LeagueId, PlayerId};
use crate::config::HubConfig;
use crate::core::build_client;
use crate::fpl::types::{
    parse, BootstrapStatic, EntryHistory, EntryPicks, H2hStandings, LeagueMatchesPage,
    LiveEvent, ManagerIdentity,
};
use crate::error::{HubError, Result};


/// Thin wrapper around a shared [`Client`] and the upstream base URL.
///
/// Raw fetchers return the document as [`Value`] for passthrough routes; typed
/// fetchers additionally run it through [`parse`].
#[derive(Debug, Clone)]
pub struct FplClient {
    http: Client,
    base_url: String,
}

impl FplClient {
    pub fn new(config: &HubConfig) -> Result<Self> {
        let http = build_client(config.request_timeout)?;
        Ok(Self::with_client(http, &config.api_base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{path}/` and decode the body as JSON.
    ///
    /// Non-success statuses become [`HubError::UpstreamStatus`]; a body that is
    /// not JSON is a schema mismatch on `path`.
    pub async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}/", self.base_url, path);
        debug!(%url, ?query, "fetching from FPL API");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "FPL API returned an error status");
            return Err(HubError::UpstreamStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| HubError::schema(path, format!("response is not valid JSON: {e}")))
    }

    async fn fetch_as<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let value = self.fetch(path, query).await?;
        parse(path, value)
    }

    pub async fn bootstrap_static_raw(&self) -> Result<Value> {
        self.fetch("bootstrap-static", &[]).await
    }

    pub async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        self.fetch_as("bootstrap-static", &[]).await
    }

    /// Raw head-to-head match list for one gameweek, as upstream pages it by default.
    pub async fn league_matches_raw(&self, league_id: LeagueId, gameweek: Gameweek) -> Result<Value> {
        self.fetch(
            &format!("leagues-h2h-matches/league/{league_id}"),
            &[("event", gameweek.to_string())],
        )
        .await
    }

    pub async fn league_matches(
        &self,
        league_id: LeagueId,
        gameweek: Gameweek,
        page: u32,
    ) -> Result<LeagueMatchesPage> {
        let path = format!("leagues-h2h-matches/league/{league_id}");
        let query = [("event", gameweek.to_string()), ("page", page.to_string())];
        self.fetch_as(&path, &query).await
    }

    pub async fn league_standings_raw(&self, league_id: LeagueId) -> Result<Value> {
        self.fetch(&format!("leagues-h2h/{league_id}/standings"), &[])
            .await
    }

    pub async fn league_standings(&self, league_id: LeagueId) -> Result<H2hStandings> {
        self.fetch_as(&format!("leagues-h2h/{league_id}/standings"), &[])
            .await
    }

    pub async fn event_live(&self, gameweek: Gameweek) -> Result<LiveEvent> {
        self.fetch_as(&format!("event/{gameweek}/live"), &[]).await
    }

    pub async fn entry_raw(&self, entry_id: EntryId) -> Result<Value> {
        self.fetch(&format!("entry/{entry_id}"), &[]).await
    }

    pub async fn manager(&self, entry_id: EntryId) -> Result<ManagerIdentity> {
        self.fetch_as(&format!("entry/{entry_id}"), &[]).await
    }

    pub async fn entry_history_raw(&self, entry_id: EntryId) -> Result<Value> {
        self.fetch(&format!("entry/{entry_id}/history"), &[]).await
    }

    pub async fn entry_history(&self, entry_id: EntryId) -> Result<EntryHistory> {
        self.fetch_as(&format!("entry/{entry_id}/history"), &[])
            .await
    }

    pub async fn entry_transfers_raw(&self, entry_id: EntryId) -> Result<Value> {
        self.fetch(&format!("entry/{entry_id}/transfers"), &[]).await
    }

    pub async fn entry_picks_raw(&self, entry_id: EntryId, gameweek: Gameweek) -> Result<Value> {
        self.fetch(&format!("entry/{entry_id}/event/{gameweek}/picks"), &[])
            .await
    }

    pub async fn entry_picks(&self, entry_id: EntryId, gameweek: Gameweek) -> Result<EntryPicks> {
        self.fetch_as(&format!("entry/{entry_id}/event/{gameweek}/picks"), &[])
            .await
    }

    pub async fn fixtures_raw(&self, gameweek: Gameweek) -> Result<Value> {
        self.fetch("fixtures", &[("event", gameweek.to_string())])
            .await
    }

    pub async fn element_summary_raw(&self, player_id: PlayerId) -> Result<Value> {
        self.fetch(&format!("element-summary/{player_id}"), &[])
            .await
    }
}
