//! League CRUD operations

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::LeagueId;
use crate::error::{HubError, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, ErrorCode, OptionalExtension, Row};
use tracing::{debug, info};

const LEAGUE_COLUMNS: &str =
    "id, name, created_at, updated_at, total_teams, average_score, highest_score";

impl LeagueDatabase {
    /// All cached leagues, ordered by id
    pub fn list_leagues(&self) -> Result<Vec<League>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {LEAGUE_COLUMNS} FROM leagues ORDER BY id"))?;

        let rows = stmt.query_map([], row_to_league)?;

        let mut leagues = Vec::new();
        for row in rows {
            leagues.push(row?);
        }
        Ok(leagues)
    }

    fn find_league(&self, id: LeagueId) -> Result<Option<League>> {
        let league = self
            .conn
            .query_row(
                &format!("SELECT {LEAGUE_COLUMNS} FROM leagues WHERE id = ?"),
                params![id.as_u32()],
                row_to_league,
            )
            .optional()?;
        Ok(league)
    }

    /// Read one league, persisting `updated_at = created_at` if it was never set
    pub fn get_league(&mut self, id: LeagueId) -> Result<League> {
        let mut league = self
            .find_league(id)?
            .ok_or(HubError::LeagueNotFound { id: id.as_u32() })?;

        if league.updated_at.is_none() {
            self.conn.execute(
                "UPDATE leagues SET updated_at = created_at WHERE id = ? AND updated_at IS NULL",
                params![id.as_u32()],
            )?;
            league.updated_at = Some(league.created_at);
            debug!(league_id = %id, "backfilled updated_at");
        }
        Ok(league)
    }

    /// Insert a new league; an existing id is a conflict
    pub fn create_league(&mut self, league: &NewLeague) -> Result<League> {
        match self.insert_league(league, false) {
            Ok(_) => {}
            Err(HubError::Database(rusqlite::Error::SqliteFailure(e, _)))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                return Err(HubError::LeagueExists {
                    id: league.id.as_u32(),
                });
            }
            Err(e) => return Err(e),
        }
        info!(league_id = %league.id, name = %league.name, "league created");
        self.stored_league(league.id)
    }

    /// Insert a league unless its id is already present, reporting which happened
    pub fn seed_league(&mut self, league: &NewLeague) -> Result<SeedOutcome> {
        let inserted = self.insert_league(league, true)?;
        let stored = self.stored_league(league.id)?;
        if inserted {
            info!(league_id = %league.id, "league seeded");
            Ok(SeedOutcome::Created(stored))
        } else {
            debug!(league_id = %league.id, "league already seeded");
            Ok(SeedOutcome::AlreadyExists(stored))
        }
    }

    /// Merge the provided fields and move `updated_at` forward
    pub fn update_league(&mut self, id: LeagueId, update: &LeagueUpdate) -> Result<League> {
        let tx = self.conn.transaction()?;
        let prior: Option<(DateTime<Utc>, Option<DateTime<Utc>>)> = tx
            .query_row(
                "SELECT created_at, updated_at FROM leagues WHERE id = ?",
                params![id.as_u32()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let Some((created_at, updated_at)) = prior else {
            return Err(HubError::LeagueNotFound { id: id.as_u32() });
        };
        let now = next_timestamp(updated_at.unwrap_or(created_at));

        tx.execute(
            "UPDATE leagues SET
                name = COALESCE(?, name),
                total_teams = COALESCE(?, total_teams),
                average_score = COALESCE(?, average_score),
                highest_score = COALESCE(?, highest_score),
                updated_at = ?
             WHERE id = ?",
            params![
                update.name,
                update.total_teams,
                update.average_score,
                update.highest_score,
                now,
                id.as_u32()
            ],
        )?;
        tx.commit()?;

        info!(league_id = %id, "league updated");
        self.stored_league(id)
    }

    /// Remove a league, returning the row as it was
    pub fn delete_league(&mut self, id: LeagueId) -> Result<League> {
        let league = self
            .find_league(id)?
            .ok_or(HubError::LeagueNotFound { id: id.as_u32() })?;
        self.conn
            .execute("DELETE FROM leagues WHERE id = ?", params![id.as_u32()])?;
        info!(league_id = %id, "league deleted");
        Ok(league)
    }

    fn insert_league(&mut self, league: &NewLeague, ignore_existing: bool) -> Result<bool> {
        let verb = if ignore_existing {
            "INSERT OR IGNORE"
        } else {
            "INSERT"
        };
        let rows_affected = self.conn.execute(
            &format!(
                "{verb} INTO leagues
                 (id, name, created_at, updated_at, total_teams, average_score, highest_score)
                 VALUES (?, ?, ?, NULL, ?, ?, ?)"
            ),
            params![
                league.id.as_u32(),
                league.name,
                Utc::now(),
                league.total_teams,
                league.average_score,
                league.highest_score
            ],
        )?;
        Ok(rows_affected > 0)
    }

    fn stored_league(&self, id: LeagueId) -> Result<League> {
        self.find_league(id)?
            .ok_or(HubError::LeagueNotFound { id: id.as_u32() })
    }
}

/// Current time, but never at or before `prior`.
fn next_timestamp(prior: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(prior + Duration::microseconds(1))
}

fn row_to_league(row: &Row) -> rusqlite::Result<League> {
    Ok(League {
        id: LeagueId::new(row.get(0)?),
        name: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        total_teams: row.get(4)?,
        average_score: row.get(5)?,
        highest_score: row.get(6)?,
    })
}
