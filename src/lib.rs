//! doubles-skill: pairing and rating for recurring doubles sessions.
//!
//! Two independent entry points:
//! - [`generate_schedule`] assigns a player pool to courts over a number of
//!   rounds, greedily picking the lowest-scoring 2-vs-2 split for each court.
//! - [`apply_match_result`] turns a finished match into new Elo ratings.
//!
//! Both are pure: callers own persistence of players, ratings and histories.
//! Candidate generation is quartic in the pool size, so keep pools club-sized.
//!
//! ```rust
//! use doubles_skill::{PairHistory, Player, apply_match_result, generate_schedule};
//!
//! let pool: Vec<Player> = ["Ann", "Bo", "Cy", "Di", "Ed"]
//!     .into_iter()
//!     .enumerate()
//!     .map(|(i, name)| Player::newcomer(i as u64, name))
//!     .collect();
//! let history = PairHistory::new();
//! let schedule = generate_schedule(&pool, 1, 3, &history, &history).unwrap();
//! assert_eq!(schedule.len(), 3);
//!
//! let update = apply_match_result(&[1500., 1500.], &[1500., 1500.], true).unwrap();
//! assert_eq!(update.team1_delta, 16.);
//! ```

pub mod data_processing;
pub mod domain;
pub mod error;
pub mod matchmaking;
pub mod session_config;
pub mod summary;
pub mod systems;

pub use domain::{
    CandidateMatch, INITIAL_RATING, OppositionHistory, PairHistory, PairRecord,
    PartnershipHistory, Player, PlayerId, PlayerPair, RatingTable, ScheduledMatch, Team,
    record_match_result,
};
pub use error::{ConfigError, EngineError};
pub use matchmaking::{
    MatchScore, MatchScorer, NormalizationCaps, RoundScheduler, ScoringWeights, benched_players,
    generate_candidate_matches, generate_schedule, generate_team_pairings, matches_in_round,
    rest_penalty, score_candidate,
};
pub use session_config::SessionConfig;
pub use systems::{
    RatingSystem, RatingUpdate, TeamElo, apply_match_result, expected_score, team_rating,
};
