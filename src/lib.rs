//! FPL head-to-head league hub
//!
//! Backend for a Fantasy Premier League head-to-head league dashboard. It
//! aggregates several upstream FPL API documents into a single matchup view,
//! forwards a set of read-only FPL resources to the frontend, and keeps a small
//! SQLite cache of league summaries.
//!
//! ## Features
//!
//! - **Matchup detail**: both managers' squads for one match, joined with live
//!   points, cards and club codes
//! - **Passthrough routes**: bootstrap data, fixtures, team history, transfers
//!   and picks, with light reshaping where the dashboard needs it
//! - **League cache**: CRUD over cached league summaries plus an idempotent seed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_hub::{matchup::MatchupAggregator, fpl::FplClient, Gameweek, HubConfig, LeagueId, MatchId};
//!
//! # async fn example() -> fpl_hub::Result<()> {
//! let config = HubConfig::default();
//! let aggregator = MatchupAggregator::new(FplClient::new(&config)?);
//!
//! let detail = aggregator
//!     .matchup(LeagueId::new(738279), MatchId::new(55), Gameweek::new(10))
//!     .await?;
//! println!("{} vs {}", detail.team_h_name, detail.team_a_name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Every command-line flag has an environment variable, and a `.env` file is
//! read at startup:
//! ```bash
//! export LEAGUE_ID=738279
//! export CORS_ORIGINS=http://localhost:3000
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fpl;
pub mod matchup;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{EntryId, Gameweek, LeagueId, MatchId, PlayerId, Position, TeamId};
pub use config::HubConfig;
pub use error::{ErrorKind, HubError, Result};
