//! Elo-style rating updates for doubles, where each side is rated as the mean
//! of its two players: https://en.wikipedia.org/wiki/Elo_rating_system
mod team_elo;

use crate::error::EngineError;
use serde::Serialize;

pub use team_elo::{K_FACTOR, TeamElo};

/// Rating difference at which the stronger side is expected to score 10:1.
pub const ELO_SCALE: f64 = 400.;

/// Probability that a side rated `rating_a` beats a side rated `rating_b`.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    (1. + 10f64.powf((rating_b - rating_a) / ELO_SCALE)).recip()
}

pub fn team_rating(player1: f64, player2: f64) -> f64 {
    0.5 * (player1 + player2)
}

/// Outcome of rating one finished match. Both players on a side receive the
/// same delta.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RatingUpdate {
    pub team1_new_ratings: [f64; 2],
    pub team2_new_ratings: [f64; 2],
    pub team1_delta: f64,
    pub team2_delta: f64,
}

impl RatingUpdate {
    /// Writes the new ratings onto the caller's players, in the order the
    /// ratings were passed in.
    pub fn apply_to(&self, team1: [&mut crate::Player; 2], team2: [&mut crate::Player; 2]) {
        for (player, &rating) in team1.into_iter().zip(&self.team1_new_ratings) {
            player.skill_rating = rating;
        }
        for (player, &rating) in team2.into_iter().zip(&self.team2_new_ratings) {
            player.skill_rating = rating;
        }
    }
}

pub trait RatingSystem: std::fmt::Debug {
    fn match_update(
        &self,
        team1_ratings: &[f64],
        team2_ratings: &[f64],
        team1_won: bool,
    ) -> Result<RatingUpdate, EngineError>;
}

/// Rates a finished match with the default `TeamElo` parameters.
pub fn apply_match_result(
    team1_ratings: &[f64],
    team2_ratings: &[f64],
    team1_won: bool,
) -> Result<RatingUpdate, EngineError> {
    TeamElo::default().match_update(team1_ratings, team2_ratings, team1_won)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ratings_are_a_coin_flip() {
        assert_eq!(expected_score(1500., 1500.), 0.5);
        assert_eq!(expected_score(-220., -220.), 0.5);
    }

    #[test]
    fn a_400_point_gap_is_ten_to_one() {
        let p = expected_score(1900., 1500.);
        assert!((p - 10. / 11.).abs() < 1e-12);
        assert!((p + expected_score(1500., 1900.) - 1.).abs() < 1e-12);
    }

    #[test]
    fn team_rating_is_the_mean() {
        assert_eq!(team_rating(1600., 1400.), 1500.);
    }

    #[test]
    fn new_ratings_are_written_back_in_order() {
        let update = apply_match_result(&[1600., 1400.], &[1500., 1500.], false).unwrap();
        let mut players = [
            crate::Player::new(1, "A", 1600.),
            crate::Player::new(2, "B", 1400.),
            crate::Player::new(3, "C", 1500.),
            crate::Player::new(4, "D", 1500.),
        ];
        let [a, b, c, d] = &mut players;
        update.apply_to([a, b], [c, d]);
        assert_eq!(players[0].skill_rating, 1584.);
        assert_eq!(players[1].skill_rating, 1384.);
        assert_eq!(players[2].skill_rating, 1516.);
        assert_eq!(players[3].skill_rating, 1516.);
    }
}
