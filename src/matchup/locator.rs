//! Locating one head-to-head match in a gameweek's match list.

use tracing::debug;

use crate::cli::types::{Gameweek, LeagueId, MatchId};
use crate::error::{HubError, Result};
use crate::fpl::types::{LeagueMatchesPage, MatchRecord};
use crate::fpl::FplClient;

/// Only the first page of the match list is searched.
pub const MATCH_PAGE: u32 = 1;

/// Fetch page 1 of the league's matches for `gameweek` and pick out `match_id`.
pub async fn locate_match(
    client: &FplClient,
    league_id: LeagueId,
    gameweek: Gameweek,
    match_id: MatchId,
) -> Result<MatchRecord> {
    let page = client
        .league_matches(league_id, gameweek, MATCH_PAGE)
        .await?;
    if page.has_next {
        debug!(%league_id, %gameweek, "match list has further pages that are not searched");
    }
    find_match(page, match_id, &format!("leagues-h2h-matches/league/{league_id}"))
}

/// Linear scan for `match_id`; absence is [`HubError::MatchNotFound`].
pub fn find_match(
    page: LeagueMatchesPage,
    match_id: MatchId,
    resource: &str,
) -> Result<MatchRecord> {
    page.results
        .into_iter()
        .find(|listing| listing.id == match_id)
        .ok_or(HubError::MatchNotFound {
            match_id: match_id.as_u64(),
        })?
        .into_record(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::types::parse;
    use serde_json::json;

    fn page() -> LeagueMatchesPage {
        parse(
            "matches",
            json!({
                "has_next": false,
                "page": 1,
                "results": [
                    {"id": 54, "entry_1_entry": 1, "entry_1_name": "X", "entry_1_points": 1,
                     "entry_2_entry": null, "entry_2_name": "AVERAGE", "entry_2_points": 2},
                    {"id": 55, "entry_1_entry": 100, "entry_1_name": "Team A", "entry_1_points": 45,
                     "entry_2_entry": 200, "entry_2_name": "Team B", "entry_2_points": 38}
                ]
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_find_match_by_id() {
        let record = find_match(page(), MatchId::new(55), "matches").unwrap();
        assert_eq!(record.entry_1_name, "Team A");
        assert_eq!(record.entry_2_points, 38);
    }

    #[test]
    fn test_find_match_not_found() {
        let err = find_match(page(), MatchId::new(99), "matches").unwrap_err();
        assert!(matches!(err, HubError::MatchNotFound { match_id: 99 }));
    }

    #[test]
    fn test_malformed_neighbour_does_not_break_lookup() {
        // Match 54 has no second entry but is never validated.
        assert!(find_match(page(), MatchId::new(55), "matches").is_ok());
        assert!(matches!(
            find_match(page(), MatchId::new(54), "matches"),
            Err(HubError::SchemaMismatch { .. })
        ));
    }
}
