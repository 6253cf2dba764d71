//! Routes that forward single upstream documents, lightly reshaped.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::cli::types::{EntryId, Gameweek, LeagueId, PlayerId};
use crate::error::{HubError, Result};
use crate::fpl::compute::{
    augment_team, current_gameweek as find_current_gameweek, previous_seasons as rank_seasons,
    standings_results, transfers_or_empty,
};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct EventQuery {
    pub event: Option<u16>,
}

#[get("/api/weekly-matchups/{league_id}")]
pub async fn weekly_matchups(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    query: web::Query<EventQuery>,
) -> Result<HttpResponse> {
    let gameweek = query
        .event
        .map(Gameweek::new)
        .ok_or(HubError::MissingParameter { name: "Event" })?;
    let matches = state
        .client
        .league_matches_raw(LeagueId::new(path.into_inner()), gameweek)
        .await?;
    Ok(HttpResponse::Ok().json(matches))
}

#[get("/api/leagues/{league_id}/standings")]
pub async fn league_standings(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse> {
    let league_id = LeagueId::new(path.into_inner());
    let standings = state
        .client
        .league_standings_raw(league_id)
        .await
        .map_err(|e| e.upstream_missing_as("league", league_id))?;
    Ok(HttpResponse::Ok().json(standings_results(standings)?))
}

#[get("/api/bootstrap-static")]
pub async fn bootstrap_static(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.client.bootstrap_static_raw().await?))
}

/// Entry document plus current gameweek and overall-rank movement.
///
/// The rank fields come from the entry's history, which is best-effort: if it
/// cannot be fetched the entry is served with `current_event` only.
#[get("/api/team/{team_id}")]
pub async fn team(state: web::Data<AppState>, path: web::Path<u64>) -> Result<HttpResponse> {
    let entry_id = EntryId::new(path.into_inner());

    let (entry, bootstrap) = tokio::try_join!(
        async {
            state
                .client
                .entry_raw(entry_id)
                .await
                .map_err(|e| e.upstream_missing_as("team", entry_id))
        },
        state.client.bootstrap_static()
    )?;
    let current = find_current_gameweek(&bootstrap.events).map(|event| event.id);

    let history = match current.and_then(|gw| gw.previous()) {
        Some(_) => match state.client.entry_history(entry_id).await {
            Ok(history) => Some(history),
            Err(error) => {
                warn!(%entry_id, %error, "could not fetch history for rank change");
                None
            }
        },
        None => None,
    };

    let team = augment_team(entry, current, history.as_ref())?;
    Ok(HttpResponse::Ok().json(team))
}

#[get("/api/team/{team_id}/history")]
pub async fn team_history(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    let entry_id = EntryId::new(path.into_inner());
    let history = state
        .client
        .entry_history_raw(entry_id)
        .await
        .map_err(|e| e.upstream_missing_as("team history", entry_id))?;
    Ok(HttpResponse::Ok().json(history))
}

#[get("/api/team/{team_id}/previous-seasons")]
pub async fn previous_seasons(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    let entry_id = EntryId::new(path.into_inner());
    let history = state
        .client
        .entry_history(entry_id)
        .await
        .map_err(|e| e.upstream_missing_as("team history", entry_id))?;
    Ok(HttpResponse::Ok().json(json!({ "seasons": rank_seasons(&history) })))
}

#[get("/api/fixtures/{gameweek}")]
pub async fn fixtures(state: web::Data<AppState>, path: web::Path<u16>) -> Result<HttpResponse> {
    let fixtures = state
        .client
        .fixtures_raw(Gameweek::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(fixtures))
}

#[get("/api/element-summary/{player_id}")]
pub async fn element_summary(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse> {
    let player_id = PlayerId::new(path.into_inner());
    let summary = state
        .client
        .element_summary_raw(player_id)
        .await
        .map_err(|e| e.upstream_missing_as("player", player_id))?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/api/current-gameweek")]
pub async fn current_gameweek(state: web::Data<AppState>) -> Result<HttpResponse> {
    let bootstrap = state.client.bootstrap_static().await?;
    let event = find_current_gameweek(&bootstrap.events).ok_or(HubError::NotFound {
        resource: "gameweek",
        id: "current".to_string(),
    })?;
    Ok(HttpResponse::Ok().json(json!({
        "current_gameweek": event.id,
        "finished": event.finished,
    })))
}

/// Always a list: upstream failures are logged and served as `[]`.
#[get("/api/entry/{entry_id}/transfers")]
pub async fn entry_transfers(state: web::Data<AppState>, path: web::Path<u64>) -> HttpResponse {
    let entry_id = EntryId::new(path.into_inner());
    let transfers = match state.client.entry_transfers_raw(entry_id).await {
        Ok(transfers) => transfers_or_empty(transfers),
        Err(error) => {
            warn!(%entry_id, %error, "transfers unavailable, serving empty list");
            json!([])
        }
    };
    HttpResponse::Ok().json(transfers)
}

#[get("/api/entry/{entry_id}/event/{gameweek}/picks")]
pub async fn entry_picks(
    state: web::Data<AppState>,
    path: web::Path<(u64, u16)>,
) -> Result<HttpResponse> {
    let (entry_id, gameweek) = path.into_inner();
    let entry_id = EntryId::new(entry_id);
    let picks = state
        .client
        .entry_picks_raw(entry_id, Gameweek::new(gameweek))
        .await
        .map_err(|e| e.upstream_missing_as("picks", entry_id))?;
    Ok(HttpResponse::Ok().json(picks))
}
