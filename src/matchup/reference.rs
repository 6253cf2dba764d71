//! Static reference data: players and clubs, indexed by id.

use std::collections::HashMap;

use tracing::debug;

use crate::cli::types::{PlayerId, TeamId};
use crate::error::Result;
use crate::fpl::types::{BootstrapStatic, Element};
use crate::fpl::FplClient;

/// Request-scoped lookups built from one `bootstrap-static/` document.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    players: HashMap<PlayerId, Element>,
    team_codes: HashMap<TeamId, String>,
}

impl ReferenceData {
    /// Fetch and index the bootstrap document. Any failure here is fatal to the
    /// matchup, every later join depends on it.
    pub async fn load(client: &FplClient) -> Result<Self> {
        let bootstrap = client.bootstrap_static().await?;
        let reference = Self::from_bootstrap(bootstrap);
        debug!(
            players = reference.players.len(),
            teams = reference.team_codes.len(),
            "reference data indexed"
        );
        Ok(reference)
    }

    pub fn from_bootstrap(bootstrap: BootstrapStatic) -> Self {
        let players = bootstrap
            .elements
            .into_iter()
            .map(|element| (element.id, element))
            .collect();
        let team_codes = bootstrap
            .teams
            .into_iter()
            .map(|team| (team.id, team.short_name))
            .collect();
        Self {
            players,
            team_codes,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Element> {
        self.players.get(&id)
    }

    pub fn team_code(&self, id: TeamId) -> Option<&str> {
        self.team_codes.get(&id).map(String::as_str)
    }
}
