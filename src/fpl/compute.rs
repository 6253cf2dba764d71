//! Reshaping applied to single upstream documents before they are served.

use serde::Serialize;
use serde_json::Value;

use crate::cli::types::Gameweek;
use crate::error::{HubError, Result};
use crate::fpl::types::{EntryHistory, Event, H2hStandings};


/// Approximate number of FPL players per season, used to turn an overall rank
/// into a percentile.
const SEASON_PLAYER_COUNTS: &[(&str, u64)] = &[
    ("2023/24", 11_200_000),
    ("2022/23", 10_900_000),
    ("2021/22", 9_000_000),
    ("2020/21", 8_500_000),
    ("2019/20", 7_600_000),
    ("2018/19", 6_900_000),
    ("2017/18", 5_700_000),
    ("2016/17", 4_600_000),
    ("2015/16", 4_200_000),
    ("2014/15", 3_500_000),
    ("2013/14", 3_200_000),
];
const FALLBACK_PLAYER_COUNT: u64 = 10_000_000;

/// The gameweek in progress, or the next one between gameweeks.
pub fn current_gameweek(events: &[Event]) -> Option<&Event> {
    events
        .iter()
        .find(|e| e.is_current)
        .or_else(|| events.iter().find(|e| e.is_next))
}

/// Percentile band of a finishing rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Top1,
    Top5,
    Top10,
    Top25,
    Other,
}

impl RankTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 1.0 {
            RankTier::Top1
        } else if percentage <= 5.0 {
            RankTier::Top5
        } else if percentage <= 10.0 {
            RankTier::Top10
        } else if percentage <= 25.0 {
            RankTier::Top25
        } else {
            RankTier::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRank {
    pub season: String,
    pub total_points: i64,
    pub rank: u64,
    /// Rank as a percentage of that season's players, two decimal places.
    pub percentage: f64,
    pub tier: RankTier,
}

/// Finishing ranks of past seasons, most recent first.
pub fn previous_seasons(history: &EntryHistory) -> Vec<SeasonRank> {
    let mut seasons: Vec<SeasonRank> = history
        .past
        .iter()
        .map(|season| {
            let players = SEASON_PLAYER_COUNTS
                .iter()
                .find(|(name, _)| *name == season.season_name)
                .map(|(_, count)| *count)
                .unwrap_or(FALLBACK_PLAYER_COUNT);
            let percentage = season.rank as f64 / players as f64 * 100.0;
            SeasonRank {
                season: season.season_name.clone(),
                total_points: season.total_points,
                rank: season.rank,
                percentage: (percentage * 100.0).round() / 100.0,
                tier: RankTier::from_percentage(percentage),
            }
        })
        .collect();

    seasons.sort_by(|a, b| b.season.cmp(&a.season));
    seasons
}

/// Add gameweek context to a raw `entry/{id}/` document.
///
/// Sets `current_event` when a current gameweek is known. With history
/// available and a gameweek past the first, also sets `current_event_rank`,
/// and when the previous gameweek is present `previous_event_rank` and
/// `rank_change` (positive means the rank improved).
pub fn augment_team(
    entry: Value,
    current: Option<Gameweek>,
    history: Option<&EntryHistory>,
) -> Result<Value> {
    let Value::Object(mut team) = entry else {
        return Err(HubError::schema("entry", "expected a JSON object"));
    };
    let Some(current) = current else {
        return Ok(Value::Object(team));
    };
    team.insert("current_event".to_string(), Value::from(current.as_u16()));

    let (Some(history), Some(previous)) = (history, current.previous()) else {
        return Ok(Value::Object(team));
    };
    let rank_at = |gw: Gameweek| {
        history
            .current
            .iter()
            .find(|h| h.event == gw)
            .and_then(|h| h.overall_rank)
    };

    let current_rank = rank_at(current);
    if let Some(rank) = current_rank {
        team.insert("current_event_rank".to_string(), Value::from(rank));
    }
    if let (Some(current_rank), Some(previous_rank)) = (current_rank, rank_at(previous)) {
        let change = previous_rank as i64 - current_rank as i64;
        team.insert("rank_change".to_string(), Value::from(change));
        team.insert("previous_event_rank".to_string(), Value::from(previous_rank));
    }
    Ok(Value::Object(team))
}

/// Pull `standings.results` out of a raw standings document.
pub fn standings_results(mut standings: Value) -> Result<Value> {
    match standings
        .get_mut("standings")
        .and_then(|s| s.get_mut("results"))
    {
        Some(results) => Ok(results.take()),
        None => Err(HubError::schema(
            "leagues-h2h standings",
            "missing field `standings.results`",
        )),
    }
}

/// Transfers are served as a list; anything else collapses to `[]`.
pub fn transfers_or_empty(transfers: Value) -> Value {
    match transfers {
        Value::Array(_) => transfers,
        _ => Value::Array(Vec::new()),
    }
}

/// Figures cached on the league row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSummary {
    pub name: String,
    pub total_teams: u32,
    pub average_score: Option<f64>,
    pub highest_score: Option<i64>,
}

/// Summarise one page of head-to-head standings by `points_for`.
pub fn league_summary(standings: &H2hStandings) -> LeagueSummary {
    let rows = &standings.standings.results;
    let total: i64 = rows.iter().map(|r| r.points_for).sum();
    let average_score = if rows.is_empty() {
        None
    } else {
        Some(((total as f64 / rows.len() as f64) * 100.0).round() / 100.0)
    };

    LeagueSummary {
        name: standings.league.name.clone(),
        total_teams: rows.len() as u32,
        average_score,
        highest_score: rows.iter().map(|r| r.points_for).max(),
    }
}
