use crate::data_processing::read_json;
use crate::domain::{OppositionHistory, PartnershipHistory, Player};
use crate::error::ConfigError;
use crate::matchmaking::{MatchScorer, NormalizationCaps, RoundScheduler, ScoringWeights};
use crate::systems::{K_FACTOR, TeamElo};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn k_factor() -> f64 {
    K_FACTOR
}

fn is_k_factor(&k: &f64) -> bool {
    k == K_FACTOR
}

/// Everything needed to schedule one play session, as read from a JSON5 file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub courts: usize,
    pub rounds: usize,
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub caps: NormalizationCaps,
    #[serde(default = "k_factor", skip_serializing_if = "is_k_factor")]
    pub k_factor: f64,
    pub players: Vec<Player>,
    #[serde(default)]
    pub partnerships: PartnershipHistory,
    #[serde(default)]
    pub oppositions: OppositionHistory,
}

impl SessionConfig {
    pub fn from_file(source: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = source.as_ref();
        let config: Self = read_json(source)?;
        tracing::info!(
            "Loaded session from {:?}: {} players, {} courts, {} rounds",
            source,
            config.players.len(),
            config.courts,
            config.rounds
        );
        Ok(config)
    }

    pub fn scheduler(&self) -> RoundScheduler {
        RoundScheduler::new(MatchScorer::new(self.weights, self.caps))
    }

    pub fn rating_system(&self) -> TeamElo {
        TeamElo {
            k_factor: self.k_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerPair;
    use crate::matchmaking::{LEVEL_FAIRNESS_WEIGHT, RATING_GAP_CAP};

    #[test]
    fn minimal_session_uses_default_parameters() {
        let config: SessionConfig = json5::from_str(
            r#"{
                // two courts tonight
                courts: 2,
                rounds: 6,
                players: [
                    { id: 1, display_name: "Ann", skill_rating: 1620 },
                    { id: 2, display_name: "Bo" },
                ],
            }"#,
        )
        .unwrap();
        assert_eq!(config.courts, 2);
        assert_eq!(config.players[1].skill_rating, 1500.);
        assert_eq!(config.weights.level_fairness, LEVEL_FAIRNESS_WEIGHT);
        assert_eq!(config.caps.rating_gap, RATING_GAP_CAP);
        assert_eq!(config.rating_system(), TeamElo::default());
        assert!(config.partnerships.is_empty());
    }

    #[test]
    fn overrides_reach_the_scheduler() {
        let config: SessionConfig = json5::from_str(
            r#"{
                courts: 1,
                rounds: 1,
                weights: { player_rest: 0 },
                caps: { rating_gap: 100 },
                k_factor: 24,
                players: [],
                partnerships: [{ pair: [4, 3], times: 2 }],
            }"#,
        )
        .unwrap();
        let scorer = config.scheduler().scorer;
        assert_eq!(scorer.weights.player_rest, 0.);
        assert_eq!(scorer.weights.partnership_variety, 5.);
        assert_eq!(scorer.caps.rating_gap, 100.);
        assert_eq!(scorer.caps.oppositions, 40.);
        assert_eq!(config.rating_system().k_factor, 24.);
        assert_eq!(config.partnerships.count(PlayerPair::new(3, 4)), 2);
    }
}
