//! Entry point: load configuration, open the league cache and serve the API.

use anyhow::Context;
use clap::Parser;
use fpl_hub::{cli::FplHub, server, storage::LeagueDatabase};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let args = FplHub::parse();
    init_tracing(args.log_json);
    let config = args.into_config();
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "failed to load .env file");
        }
    }

    let db = LeagueDatabase::open(&config.database_path)?;
    info!(
        database = %config.database_path.display(),
        league_id = %config.league_id,
        upstream = %config.api_base_url,
        "league cache ready"
    );

    let state = server::AppState::new(config, db).context("building upstream client")?;
    server::run(state)
        .context("binding HTTP server")?
        .await
        .context("running HTTP server")
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = if json {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}
