//! Typed views over the FPL API documents.
//!
//! Only the fields the hub reads are declared; everything else in the upstream
//! payloads is ignored. Parsing is a separate step ([`parse`]) so a missing
//! field is reported against the resource it came from.

use crate::cli::types::{EntryId, Gameweek, LeagueId, MatchId, PlayerId, TeamId};
use crate::error::{HubError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Deserialize `value` into `T`, mapping failures to a schema mismatch on `resource`.
pub fn parse<T: DeserializeOwned>(resource: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| HubError::schema(resource, e.to_string()))
}

/// Root of `bootstrap-static/`
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapStatic {
    pub elements: Vec<Element>,
    pub teams: Vec<Team>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Static player record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Element {
    pub id: PlayerId,
    pub web_name: String,
    pub element_type: i64,
    pub team: TeamId,
}

/// Real-world club
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub short_name: String,
}

/// One gameweek from the season calendar
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    pub id: Gameweek,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub is_next: bool,
    #[serde(default)]
    pub finished: bool,
}

/// One page of `leagues-h2h-matches/league/{id}/`
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueMatchesPage {
    pub results: Vec<MatchListing>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub page: u32,
}

/// A match as listed in the page: only the id is required up front, the rest is
/// validated once the match has been picked out (see [`MatchListing::into_record`]).
#[derive(Debug, Clone, Deserialize)]
pub struct MatchListing {
    pub id: MatchId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MatchListing {
    pub fn into_record(self, resource: &str) -> Result<MatchRecord> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::from(self.id.as_u64()));
        parse(resource, Value::Object(fields))
    }
}

/// Head-to-head fixture between two entries
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub entry_1_entry: EntryId,
    pub entry_1_name: String,
    pub entry_1_points: i32,
    pub entry_2_entry: EntryId,
    pub entry_2_name: String,
    pub entry_2_points: i32,
    #[serde(default)]
    pub event: Option<Gameweek>,
    #[serde(default)]
    pub finished: bool,
}

/// Root of `event/{gw}/live/`
#[derive(Debug, Clone, Deserialize)]
pub struct LiveEvent {
    pub elements: Vec<LiveElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveElement {
    pub id: PlayerId,
    pub stats: LiveStats,
}

/// Live performance of one player in one gameweek
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LiveStats {
    pub total_points: i32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

/// Root of `entry/{id}/event/{gw}/picks/`
#[derive(Debug, Clone, Deserialize)]
pub struct EntryPicks {
    pub picks: Vec<Pick>,
}

/// One squad slot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pick {
    pub element: PlayerId,
    /// Squad slot, 1..=15. Slots 1-11 start, 12-15 are the bench.
    pub position: u8,
    pub is_captain: bool,
    pub multiplier: u8,
}

/// The manager fields of `entry/{id}/`
#[derive(Debug, Clone, Deserialize)]
pub struct ManagerIdentity {
    pub player_first_name: String,
    pub player_last_name: String,
}

impl ManagerIdentity {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

/// Root of `entry/{id}/history/`
#[derive(Debug, Clone, Deserialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<GameweekHistory>,
    #[serde(default)]
    pub past: Vec<PastSeason>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameweekHistory {
    pub event: Gameweek,
    #[serde(default)]
    pub overall_rank: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PastSeason {
    pub season_name: String,
    pub total_points: i64,
    pub rank: u64,
}

/// Root of `leagues-h2h/{id}/standings/`
#[derive(Debug, Clone, Deserialize)]
pub struct H2hStandings {
    pub league: LeagueInfo,
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInfo {
    pub id: LeagueId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandingsPage {
    pub results: Vec<StandingRow>,
    #[serde(default)]
    pub has_next: bool,
}

/// One league table row
#[derive(Debug, Clone, Deserialize)]
pub struct StandingRow {
    pub entry: EntryId,
    pub points_for: i64,
}
