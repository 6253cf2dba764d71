//! Resolving one side of a matchup: picks joined with reference data and live stats.

use serde::Serialize;
use tracing::debug;

use crate::cli::types::{EntryId, Gameweek, PlayerId, Position};
use crate::error::{HubError, Result};
use crate::fpl::types::Pick;
use crate::fpl::FplClient;

use super::{LiveStatIndex, ReferenceData};

/// Squad slots 1 through 11 are the starting XI.
pub const STARTING_SLOTS: u8 = 11;

/// One resolved squad slot, shaped for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadEntry {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub points: i32,
    pub is_captain: bool,
    pub club: String,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub is_starting: bool,
    pub multiplier: u8,
}

/// A manager's display name together with their resolved squad.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSide {
    pub manager: String,
    pub squad: Vec<SquadEntry>,
}

/// Join picks against the lookups, keeping upstream pick order.
///
/// Picks for players missing from `reference` are dropped; players missing from
/// `live` score zero. A known player whose club is missing from `reference`
/// means the bootstrap document is inconsistent and is reported as such.
pub fn resolve_picks(
    picks: &[Pick],
    reference: &ReferenceData,
    live: &LiveStatIndex,
) -> Result<Vec<SquadEntry>> {
    let mut squad = Vec::with_capacity(picks.len());
    for pick in picks {
        let Some(player) = reference.player(pick.element) else {
            debug!(element = %pick.element, "dropping pick with no reference player");
            continue;
        };
        let club = reference.team_code(player.team).ok_or_else(|| {
            HubError::schema(
                "bootstrap-static",
                format!(
                    "team {} referenced by element {} is missing",
                    player.team, player.id
                ),
            )
        })?;
        let stats = live.stats_or_zero(pick.element);

        squad.push(SquadEntry {
            id: pick.element,
            name: player.web_name.clone(),
            position: Position::from_element_type(player.element_type),
            points: stats.total_points,
            is_captain: pick.is_captain,
            club: club.to_string(),
            yellow_cards: stats.yellow_cards,
            red_cards: stats.red_cards,
            is_starting: pick.position <= STARTING_SLOTS,
            multiplier: pick.multiplier,
        });
    }
    Ok(squad)
}

/// Resolves either side of a matchup against shared, read-only lookups.
#[derive(Debug, Clone, Copy)]
pub struct SquadResolver<'a> {
    client: &'a FplClient,
    gameweek: Gameweek,
    reference: &'a ReferenceData,
    live: &'a LiveStatIndex,
}

impl<'a> SquadResolver<'a> {
    pub fn new(
        client: &'a FplClient,
        gameweek: Gameweek,
        reference: &'a ReferenceData,
        live: &'a LiveStatIndex,
    ) -> Self {
        Self {
            client,
            gameweek,
            reference,
            live,
        }
    }

    /// Fetch picks and manager identity for `entry`; either failing aborts the side.
    pub async fn resolve(&self, entry: EntryId) -> Result<ResolvedSide> {
        let (picks, manager) = tokio::try_join!(
            self.client.entry_picks(entry, self.gameweek),
            self.client.manager(entry)
        )?;
        let squad = resolve_picks(&picks.picks, self.reference, self.live)?;
        Ok(ResolvedSide {
            manager: manager.display_name(),
            squad,
        })
    }
}
