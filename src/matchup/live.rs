//! Live per-player stats for one gameweek.

use std::collections::HashMap;

use crate::cli::types::{Gameweek, PlayerId};
use crate::error::Result;
use crate::fpl::types::{LiveEvent, LiveStats};
use crate::fpl::FplClient;

/// Sparse lookup: players with no recorded involvement are absent, not zero.
#[derive(Debug, Clone, Default)]
pub struct LiveStatIndex {
    stats: HashMap<PlayerId, LiveStats>,
}

impl LiveStatIndex {
    pub async fn load(client: &FplClient, gameweek: Gameweek) -> Result<Self> {
        Ok(Self::from_event(client.event_live(gameweek).await?))
    }

    pub fn from_event(event: LiveEvent) -> Self {
        Self {
            stats: event
                .elements
                .into_iter()
                .map(|element| (element.id, element.stats))
                .collect(),
        }
    }

    pub fn get(&self, player: PlayerId) -> Option<&LiveStats> {
        self.stats.get(&player)
    }

    /// Stats for rendering: an absent player scores zero.
    pub fn stats_or_zero(&self, player: PlayerId) -> LiveStats {
        self.get(player).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::types::LiveElement;

    #[test]
    fn test_absence_is_preserved_but_renders_as_zero() {
        let index = LiveStatIndex::from_event(LiveEvent {
            elements: vec![LiveElement {
                id: PlayerId::new(7),
                stats: LiveStats {
                    total_points: 12,
                    yellow_cards: 1,
                    red_cards: 0,
                },
            }],
        });

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(PlayerId::new(7)).unwrap().total_points, 12);
        assert!(index.get(PlayerId::new(8)).is_none());
        assert_eq!(index.stats_or_zero(PlayerId::new(8)), LiveStats::default());
    }
}
