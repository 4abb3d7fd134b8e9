use crate::domain::{
    CandidateMatch, OppositionHistory, PartnershipHistory, PlayerId, RatingTable, ScheduledMatch,
};
use crate::systems::team_rating;
use serde::{Deserialize, Serialize};

pub const LEVEL_FAIRNESS_WEIGHT: f64 = 10.;
pub const PARTNERSHIP_VARIETY_WEIGHT: f64 = 5.;
pub const OPPOSITION_VARIETY_WEIGHT: f64 = 3.;
pub const PLAYER_REST_WEIGHT: f64 = 8.;

/// Team rating gap at which level fairness saturates.
pub const RATING_GAP_CAP: f64 = 200.;
/// Combined past partnerships of both teams at which partnership variety saturates.
pub const PARTNERSHIP_CAP: f64 = 20.;
/// Combined past oppositions of the four cross pairs at which opposition variety saturates.
pub const OPPOSITION_CAP: f64 = 40.;

/// Multipliers applied to each sub-score when forming the total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub level_fairness: f64,
    pub partnership_variety: f64,
    pub opposition_variety: f64,
    pub player_rest: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            level_fairness: LEVEL_FAIRNESS_WEIGHT,
            partnership_variety: PARTNERSHIP_VARIETY_WEIGHT,
            opposition_variety: OPPOSITION_VARIETY_WEIGHT,
            player_rest: PLAYER_REST_WEIGHT,
        }
    }
}

/// Raw values that map to a sub-score of 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationCaps {
    pub rating_gap: f64,
    pub partnerships: f64,
    pub oppositions: f64,
}

impl Default for NormalizationCaps {
    fn default() -> Self {
        Self {
            rating_gap: RATING_GAP_CAP,
            partnerships: PARTNERSHIP_CAP,
            oppositions: OPPOSITION_CAP,
        }
    }
}

/// Desirability of a candidate; every sub-score lies in [0, 1] and lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MatchScore {
    pub total: f64,
    pub level_fairness: f64,
    pub partnership_variety: f64,
    pub opposition_variety: f64,
    pub player_rest: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScorer {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub caps: NormalizationCaps,
}

impl MatchScorer {
    pub fn new(weights: ScoringWeights, caps: NormalizationCaps) -> Self {
        Self { weights, caps }
    }

    /// Histories are read-only here: scheduling a match is not playing it.
    pub fn score(
        &self,
        candidate: &CandidateMatch,
        ratings: &RatingTable,
        partnerships: &PartnershipHistory,
        oppositions: &OppositionHistory,
        prior_matches: &[ScheduledMatch],
    ) -> MatchScore {
        let rating_of = |[a, b]: [PlayerId; 2]| team_rating(ratings.get(a), ratings.get(b));
        let team1_rating = rating_of(candidate.team1.players());
        let team2_rating = rating_of(candidate.team2.players());
        let gap = (team1_rating - team2_rating).abs();
        let level_fairness = saturate(gap, self.caps.rating_gap);

        let times_partnered =
            partnerships.count(candidate.team1.pair()) + partnerships.count(candidate.team2.pair());
        let partnership_variety = saturate(times_partnered as f64, self.caps.partnerships);

        let times_opposed: u32 = candidate
            .cross_pairs()
            .iter()
            .map(|&pair| oppositions.count(pair))
            .sum();
        let opposition_variety = saturate(times_opposed as f64, self.caps.oppositions);

        let player_rest = candidate
            .players()
            .iter()
            .map(|&id| rest_penalty(id, prior_matches))
            .fold(0., f64::max);

        let total = self.weights.level_fairness * level_fairness
            + self.weights.partnership_variety * partnership_variety
            + self.weights.opposition_variety * opposition_variety
            + self.weights.player_rest * player_rest;

        MatchScore {
            total,
            level_fairness,
            partnership_variety,
            opposition_variety,
            player_rest,
        }
    }
}

fn saturate(value: f64, cap: f64) -> f64 {
    (value / cap).min(1.)
}

/// `1 / k` if the player's most recent appearance is `k` matches back in
/// `prior_matches` (`k = 1` is the last one), 0 if they haven't played yet.
// The lookback spans the whole schedule built so far, not just recent rounds.
pub fn rest_penalty(player: PlayerId, prior_matches: &[ScheduledMatch]) -> f64 {
    prior_matches
        .iter()
        .rev()
        .position(|scheduled| scheduled.contains(player))
        .map_or(0., |matches_ago| ((matches_ago + 1) as f64).recip())
}

/// Scores a candidate with the default weights and caps.
pub fn score_candidate(
    candidate: &CandidateMatch,
    ratings: &RatingTable,
    partnerships: &PartnershipHistory,
    oppositions: &OppositionHistory,
    prior_matches: &[ScheduledMatch],
) -> MatchScore {
    MatchScorer::default().score(candidate, ratings, partnerships, oppositions, prior_matches)
}
