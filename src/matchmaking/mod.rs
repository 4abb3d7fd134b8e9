//! Greedy doubles scheduling: every round, each court in turn takes the
//! lowest-scoring disjoint 2-vs-2 split of the players still available.
mod candidates;
mod pairing;
mod scheduler;
mod scoring;

pub use candidates::generate_candidate_matches;
pub use pairing::generate_team_pairings;
pub use scheduler::{RoundScheduler, benched_players, generate_schedule, matches_in_round};
pub use scoring::{
    LEVEL_FAIRNESS_WEIGHT, MatchScore, MatchScorer, NormalizationCaps, OPPOSITION_CAP,
    OPPOSITION_VARIETY_WEIGHT, PARTNERSHIP_CAP, PARTNERSHIP_VARIETY_WEIGHT, PLAYER_REST_WEIGHT,
    RATING_GAP_CAP, ScoringWeights, rest_penalty, score_candidate,
};
