use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-provided player identifier.
pub type PlayerId = u64;

/// Rating given to players with no recorded matches.
pub const INITIAL_RATING: f64 = 1500.;

fn initial_rating() -> f64 {
    INITIAL_RATING
}

fn is_initial_rating(&rating: &f64) -> bool {
    rating == INITIAL_RATING
}

/// A player as supplied by the roster owner. The engine reads the rating and
/// hands back new values; storing them is up to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    #[serde(default = "initial_rating", skip_serializing_if = "is_initial_rating")]
    pub skill_rating: f64,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>, skill_rating: f64) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            skill_rating,
        }
    }

    /// A player who hasn't played yet, starting from `INITIAL_RATING`.
    pub fn newcomer(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, INITIAL_RATING)
    }
}

/// Lookup from player id to skill rating, used by the match scorer.
#[derive(Clone, Debug, Default)]
pub struct RatingTable {
    ratings: HashMap<PlayerId, f64>,
}

impl RatingTable {
    pub fn from_players<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        Self {
            ratings: players
                .into_iter()
                .map(|player| (player.id, player.skill_rating))
                .collect(),
        }
    }

    /// Ids missing from the table are treated as newcomers.
    pub fn get(&self, id: PlayerId) -> f64 {
        match self.ratings.get(&id) {
            Some(&rating) => rating,
            None => {
                tracing::warn!("No rating known for player {}, using {}", id, INITIAL_RATING);
                INITIAL_RATING
            }
        }
    }
}
