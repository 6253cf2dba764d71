//! Matchup detail aggregation.
//!
//! Combines four upstream documents into one denormalized view of a
//! head-to-head match:
//!
//! - `reference`: players and clubs from `bootstrap-static/`
//! - `locator`: the match record from the league's gameweek match list
//! - `live`: per-player live stats for the gameweek
//! - `squad`: each manager's picks joined against the above
//!
//! Reference data and the match are fetched concurrently, and the match
//! lookup's outcome is checked first. Live stats and the two squads are only
//! requested once the match is known to exist.

pub mod live;
pub mod locator;
pub mod reference;
pub mod squad;


use serde::Serialize;
use tracing::info;

use crate::cli::types::{Gameweek, LeagueId, MatchId};
use crate::error::Result;
use crate::fpl::FplClient;

pub use live::LiveStatIndex;
pub use locator::locate_match;
pub use reference::ReferenceData;
pub use squad::{resolve_picks, ResolvedSide, SquadEntry, SquadResolver};

/// Both sides of a head-to-head match, fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupDetail {
    pub team_h_name: String,
    pub team_a_name: String,
    pub team_h_manager: String,
    pub team_a_manager: String,
    pub team_h_score: i32,
    pub team_a_score: i32,
    pub team_h_picks: Vec<SquadEntry>,
    pub team_a_picks: Vec<SquadEntry>,
}

#[derive(Debug, Clone)]
pub struct MatchupAggregator {
    client: FplClient,
}

impl MatchupAggregator {
    pub fn new(client: FplClient) -> Self {
        Self { client }
    }

    pub async fn matchup(
        &self,
        league_id: LeagueId,
        match_id: MatchId,
        gameweek: Gameweek,
    ) -> Result<MatchupDetail> {
        info!(%league_id, %match_id, %gameweek, "aggregating matchup");

        let (reference, record) = tokio::join!(
            ReferenceData::load(&self.client),
            locate_match(&self.client, league_id, gameweek, match_id)
        );
        // A missing match is reported as such even if reference data also failed.
        let record = record?;
        let reference = reference?;
        let live = LiveStatIndex::load(&self.client, gameweek).await?;

        let resolver = SquadResolver::new(&self.client, gameweek, &reference, &live);
        let (home, away) = tokio::try_join!(
            resolver.resolve(record.entry_1_entry),
            resolver.resolve(record.entry_2_entry)
        )?;

        Ok(MatchupDetail {
            team_h_name: record.entry_1_name,
            team_a_name: record.entry_2_name,
            team_h_manager: home.manager,
            team_a_manager: away.manager,
            team_h_score: record.entry_1_points,
            team_a_score: record.entry_2_points,
            team_h_picks: home.squad,
            team_a_picks: away.squad,
        })
    }
}
