mod history;
mod matches;
mod player;

pub use history::{
    OppositionHistory, PairHistory, PairRecord, PartnershipHistory, record_match_result,
};
pub use matches::{CandidateMatch, PlayerPair, ScheduledMatch, Team};
pub use player::{INITIAL_RATING, Player, PlayerId, RatingTable};
