//! League cache CRUD and the seed route.

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use serde_json::json;
use tracing::info;

use crate::cli::types::LeagueId;
use crate::error::Result;
use crate::fpl::compute::league_summary;
use crate::server::AppState;
use crate::storage::{LeagueUpdate, NewLeague, SeedOutcome};

#[get("/api/leagues")]
pub async fn list_leagues(state: web::Data<AppState>) -> Result<HttpResponse> {
    let leagues = state.with_db(|db| db.list_leagues()).await?;
    Ok(HttpResponse::Ok().json(leagues))
}

#[post("/api/leagues")]
pub async fn create_league(
    state: web::Data<AppState>,
    body: web::Json<NewLeague>,
) -> Result<HttpResponse> {
    let league = body.into_inner();
    let created = state.with_db(move |db| db.create_league(&league)).await?;
    Ok(HttpResponse::Created().json(created))
}

#[get("/api/leagues/{league_id}")]
pub async fn get_league(state: web::Data<AppState>, path: web::Path<u32>) -> Result<HttpResponse> {
    let id = LeagueId::new(path.into_inner());
    let league = state.with_db(move |db| db.get_league(id)).await?;
    Ok(HttpResponse::Ok().json(league))
}

async fn apply_update(
    state: web::Data<AppState>,
    id: LeagueId,
    update: LeagueUpdate,
) -> Result<HttpResponse> {
    let league = state
        .with_db(move |db| db.update_league(id, &update))
        .await?;
    Ok(HttpResponse::Ok().json(league))
}

#[put("/api/leagues/{league_id}")]
pub async fn update_league(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    body: web::Json<LeagueUpdate>,
) -> Result<HttpResponse> {
    apply_update(state, LeagueId::new(path.into_inner()), body.into_inner()).await
}

#[patch("/api/leagues/{league_id}")]
pub async fn patch_league(
    state: web::Data<AppState>,
    path: web::Path<u32>,
    body: web::Json<LeagueUpdate>,
) -> Result<HttpResponse> {
    apply_update(state, LeagueId::new(path.into_inner()), body.into_inner()).await
}

#[delete("/api/leagues/{league_id}")]
pub async fn delete_league(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> Result<HttpResponse> {
    let id = LeagueId::new(path.into_inner());
    let league = state.with_db(move |db| db.delete_league(id)).await?;
    Ok(HttpResponse::Ok().json(league))
}

/// Cache the configured league from its live standings, once.
#[post("/debug/create_league")]
pub async fn seed_league(state: web::Data<AppState>) -> Result<HttpResponse> {
    let league_id = state.config.league_id;
    let standings = state.client.league_standings(league_id).await?;
    let summary = league_summary(&standings);

    let league = NewLeague {
        id: league_id,
        name: summary.name,
        total_teams: Some(summary.total_teams),
        average_score: summary.average_score,
        highest_score: summary.highest_score,
    };
    let outcome = state.with_db(move |db| db.seed_league(&league)).await?;

    let message = match &outcome {
        SeedOutcome::Created(_) => "League created",
        SeedOutcome::AlreadyExists(_) => "League already exists",
    };
    info!(%league_id, created = outcome.created(), "seed requested");
    Ok(HttpResponse::Ok().json(json!({
        "message": message,
        "created": outcome.created(),
        "league": outcome.league(),
    })))
}
