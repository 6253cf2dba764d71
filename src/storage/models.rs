//! Data models for the storage layer

use crate::cli::types::LeagueId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached league summary row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// `None` until first read or update, when it is backfilled from `created_at`.
    pub updated_at: Option<DateTime<Utc>>,
    pub total_teams: Option<u32>,
    pub average_score: Option<f64>,
    pub highest_score: Option<i64>,
}

/// Body of a create or seed request; the id comes from the FPL API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewLeague {
    pub id: LeagueId,
    pub name: String,
    #[serde(default)]
    pub total_teams: Option<u32>,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub highest_score: Option<i64>,
}

impl NewLeague {
    pub fn named(id: LeagueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_teams: None,
            average_score: None,
            highest_score: None,
        }
    }
}

/// Partial update: only fields that are present are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeagueUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_teams: Option<u32>,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub highest_score: Option<i64>,
}

/// Result of the idempotent seed path.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Created(League),
    AlreadyExists(League),
}

impl SeedOutcome {
    pub fn league(&self) -> &League {
        match self {
            SeedOutcome::Created(league) | SeedOutcome::AlreadyExists(league) => league,
        }
    }

    pub fn created(&self) -> bool {
        matches!(self, SeedOutcome::Created(_))
    }
}
