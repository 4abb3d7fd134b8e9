use super::{RatingSystem, RatingUpdate, expected_score, team_rating};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Maximum rating change from a single match.
pub const K_FACTOR: f64 = 32.;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamElo {
    pub k_factor: f64,
}

impl Default for TeamElo {
    fn default() -> Self {
        Self { k_factor: K_FACTOR }
    }
}

impl TeamElo {
    fn delta(&self, actual: f64, expected: f64) -> f64 {
        (self.k_factor * (actual - expected)).round()
    }
}

impl RatingSystem for TeamElo {
    fn match_update(
        &self,
        team1_ratings: &[f64],
        team2_ratings: &[f64],
        team1_won: bool,
    ) -> Result<RatingUpdate, EngineError> {
        let (&[a1, a2], &[b1, b2]) = (team1_ratings, team2_ratings) else {
            return Err(EngineError::InvalidTeamSize {
                team1: team1_ratings.len(),
                team2: team2_ratings.len(),
            });
        };

        let rating1 = team_rating(a1, a2);
        let rating2 = team_rating(b1, b2);
        let (actual1, actual2) = if team1_won { (1., 0.) } else { (0., 1.) };
        let team1_delta = self.delta(actual1, expected_score(rating1, rating2));
        let team2_delta = self.delta(actual2, expected_score(rating2, rating1));

        Ok(RatingUpdate {
            team1_new_ratings: [a1 + team1_delta, a2 + team1_delta],
            team2_new_ratings: [b1 + team2_delta, b2 + team2_delta],
            team1_delta,
            team2_delta,
        })
    }
}
