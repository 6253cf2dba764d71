//! Matchup detail route.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::cli::types::{Gameweek, LeagueId, MatchId};
use crate::error::{HubError, Result};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchupQuery {
    pub event: Option<u16>,
    pub league_id: Option<u32>,
}

impl MatchupQuery {
    pub fn gameweek(&self) -> Result<Gameweek> {
        self.event
            .map(Gameweek::new)
            .ok_or(HubError::MissingParameter { name: "Event" })
    }
}

#[get("/api/matchup/{match_id}")]
pub async fn matchup(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    query: web::Query<MatchupQuery>,
) -> Result<HttpResponse> {
    let gameweek = query.gameweek()?;
    let league_id = query
        .league_id
        .map(LeagueId::new)
        .unwrap_or(state.config.league_id);

    let detail = state
        .aggregator
        .matchup(league_id, MatchId::new(path.into_inner()), gameweek)
        .await?;
    Ok(HttpResponse::Ok().json(detail))
}
