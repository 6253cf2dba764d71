//! HTTP surface of the hub: shared state, routing and server bootstrap.

mod error;
mod fpl;
mod health;
mod leagues;
mod matchup;
pub mod middleware;


use std::sync::{Arc, Mutex};

use actix_web::dev::Server;
use actix_web::{error::JsonPayloadError, error::PathError, error::QueryPayloadError};
use actix_web::{web, App, HttpRequest, HttpServer};
use tracing::info;

use crate::config::HubConfig;
use crate::error::{HubError, Result};
use crate::fpl::FplClient;
use crate::matchup::MatchupAggregator;
use crate::storage::{LeagueDatabase, SharedDatabase};

pub use error::ErrorBody;
pub use middleware::{cors, RequestLog};

/// Everything a handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HubConfig>,
    pub client: FplClient,
    pub aggregator: MatchupAggregator,
    pub db: SharedDatabase,
}

impl AppState {
    pub fn new(config: HubConfig, db: LeagueDatabase) -> Result<Self> {
        let client = FplClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            aggregator: MatchupAggregator::new(client.clone()),
            client,
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Run `f` against the database on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut LeagueDatabase) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        web::block(move || {
            let mut guard = db.lock().map_err(|e| HubError::Blocking {
                message: e.to_string(),
            })?;
            f(&mut guard)
        })
        .await?
    }
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    HubError::InvalidRequest {
        message: err.to_string(),
    }
    .into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    HubError::InvalidRequest {
        message: err.to_string(),
    }
    .into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    HubError::InvalidRequest {
        message: err.to_string(),
    }
    .into()
}

/// Register extractor configuration and every route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .service(health::index)
        .service(health::health)
        .service(matchup::matchup)
        .service(fpl::weekly_matchups)
        .service(fpl::league_standings)
        .service(fpl::bootstrap_static)
        .service(fpl::team)
        .service(fpl::team_history)
        .service(fpl::previous_seasons)
        .service(fpl::fixtures)
        .service(fpl::element_summary)
        .service(fpl::current_gameweek)
        .service(fpl::entry_transfers)
        .service(fpl::entry_picks)
        .service(leagues::list_leagues)
        .service(leagues::create_league)
        .service(leagues::get_league)
        .service(leagues::update_league)
        .service(leagues::patch_league)
        .service(leagues::delete_league)
        .service(leagues::seed_league)
        .default_service(web::to(health::not_found));
}

/// Bind the HTTP server; the returned [`Server`] must be awaited to run it.
pub fn run(state: AppState) -> std::io::Result<Server> {
    let addr = (state.config.host.clone(), state.config.port);
    info!(host = %addr.0, port = addr.1, "starting HTTP server");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(Arc::clone(&state.config)))
            .wrap(RequestLog)
            .configure(configure)
    })
    .bind(addr)?
    .run();
    Ok(server)
}
