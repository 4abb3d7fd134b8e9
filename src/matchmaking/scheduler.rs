use super::{MatchScore, MatchScorer, generate_candidate_matches, generate_team_pairings};
use crate::domain::{
    CandidateMatch, OppositionHistory, PartnershipHistory, Player, PlayerId, RatingTable,
    ScheduledMatch,
};
use crate::error::EngineError;
use std::collections::HashSet;

const PLAYERS_PER_MATCH: usize = 4;

/// Fills `rounds` x `courts` slots one at a time, each with the best-scoring
/// candidate among the players still free in that round. There is no
/// backtracking or lookahead: a court never reconsiders once filled.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundScheduler {
    pub scorer: MatchScorer,
}

impl RoundScheduler {
    pub fn new(scorer: MatchScorer) -> Self {
        Self { scorer }
    }

    pub fn generate(
        &self,
        player_pool: &[Player],
        courts: usize,
        rounds: usize,
        partnerships: &PartnershipHistory,
        oppositions: &OppositionHistory,
    ) -> Result<Vec<ScheduledMatch>, EngineError> {
        self.generate_scored(player_pool, courts, rounds, partnerships, oppositions)
            .map(|scored| scored.into_iter().map(|(scheduled, _)| scheduled).collect())
    }

    /// Like `generate`, but also returns the score that won each slot.
    pub fn generate_scored(
        &self,
        player_pool: &[Player],
        courts: usize,
        rounds: usize,
        partnerships: &PartnershipHistory,
        oppositions: &OppositionHistory,
    ) -> Result<Vec<(ScheduledMatch, MatchScore)>, EngineError> {
        if player_pool.len() < PLAYERS_PER_MATCH {
            return Err(EngineError::InsufficientPlayers(player_pool.len()));
        }
        let mut seen = HashSet::with_capacity(player_pool.len());
        if let Some(duplicate) = player_pool.iter().find(|player| !seen.insert(player.id)) {
            return Err(EngineError::DuplicatePlayer(duplicate.id));
        }
        if courts == 0 || rounds == 0 {
            tracing::warn!("Nothing to schedule with {} courts and {} rounds", courts, rounds);
        }

        let ratings = RatingTable::from_players(player_pool);
        let pool_ids: Vec<PlayerId> = player_pool.iter().map(|player| player.id).collect();

        // No round can fill more courts than the pool has foursomes.
        let capacity = courts
            .min(player_pool.len() / PLAYERS_PER_MATCH)
            .saturating_mul(rounds);
        // Every match scheduled so far, across rounds, in scheduling order.
        let mut schedule: Vec<ScheduledMatch> = Vec::with_capacity(capacity);
        let mut scores: Vec<MatchScore> = Vec::with_capacity(capacity);

        for round in 1..=rounds {
            let mut available = pool_ids.clone();
            for court in 1..=courts {
                if available.len() < PLAYERS_PER_MATCH {
                    tracing::debug!(
                        "Round {} courts {} onwards left empty: only {} players free",
                        round,
                        court,
                        available.len()
                    );
                    break;
                }
                let candidates = generate_candidate_matches(&generate_team_pairings(&available));
                let Some((best, score)) = self.select_best(
                    candidates,
                    &ratings,
                    partnerships,
                    oppositions,
                    &schedule,
                ) else {
                    tracing::debug!("Round {} court {} left empty: no candidates", round, court);
                    continue;
                };

                tracing::debug!(
                    "Round {} court {}: {:?} vs {:?} (score {:.3})",
                    round,
                    court,
                    best.team1.players(),
                    best.team2.players(),
                    score.total
                );
                available.retain(|&id| !best.contains(id));
                schedule.push(ScheduledMatch::new(round, court, best));
                scores.push(score);
            }
        }

        tracing::info!(
            "Scheduled {} matches for {} players over {} rounds on {} courts",
            schedule.len(),
            player_pool.len(),
            rounds,
            courts
        );
        Ok(schedule.into_iter().zip(scores).collect())
    }

    // Iterator::min_by keeps the first of several equal minima, so ties go to
    // the earliest candidate in generation order.
    fn select_best(
        &self,
        candidates: Vec<CandidateMatch>,
        ratings: &RatingTable,
        partnerships: &PartnershipHistory,
        oppositions: &OppositionHistory,
        prior_matches: &[ScheduledMatch],
    ) -> Option<(CandidateMatch, MatchScore)> {
        candidates
            .into_iter()
            .map(|candidate| {
                let score =
                    self.scorer
                        .score(&candidate, ratings, partnerships, oppositions, prior_matches);
                (candidate, score)
            })
            .min_by(|(_, a), (_, b)| a.total.total_cmp(&b.total))
    }
}

/// Schedules with the default scoring weights and caps.
pub fn generate_schedule(
    player_pool: &[Player],
    courts: usize,
    rounds: usize,
    partnerships: &PartnershipHistory,
    oppositions: &OppositionHistory,
) -> Result<Vec<ScheduledMatch>, EngineError> {
    RoundScheduler::default().generate(player_pool, courts, rounds, partnerships, oppositions)
}

pub fn matches_in_round(
    schedule: &[ScheduledMatch],
    round: usize,
) -> impl Iterator<Item = &ScheduledMatch> {
    schedule.iter().filter(move |scheduled| scheduled.round == round)
}

/// Players from the pool who sit out `round`, in pool order.
pub fn benched_players(
    player_pool: &[Player],
    schedule: &[ScheduledMatch],
    round: usize,
) -> Vec<PlayerId> {
    let playing: HashSet<PlayerId> = matches_in_round(schedule, round)
        .flat_map(ScheduledMatch::players)
        .collect();
    player_pool
        .iter()
        .map(|player| player.id)
        .filter(|id| !playing.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PairHistory, PairRecord, PlayerPair};
    use claims::{assert_matches, assert_ok};

    fn pool(ratings: &[f64]) -> Vec<Player> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| Player::new(i as PlayerId + 1, format!("P{}", i + 1), rating))
            .collect()
    }

    #[test]
    fn fewer_than_four_players_is_rejected() {
        let empty = PairHistory::new();
        assert_eq!(
            generate_schedule(&pool(&[1500.; 3]), 2, 3, &empty, &empty),
            Err(EngineError::InsufficientPlayers(3))
        );
        assert_matches!(
            generate_schedule(&[], 1, 1, &empty, &empty),
            Err(EngineError::InsufficientPlayers(0))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut players = pool(&[1500.; 5]);
        players[4].id = 2;
        let empty = PairHistory::new();
        assert_eq!(
            generate_schedule(&players, 1, 1, &empty, &empty),
            Err(EngineError::DuplicatePlayer(2))
        );
    }

    #[test]
    fn zero_courts_or_rounds_schedule_nothing() {
        let empty = PairHistory::new();
        let players = pool(&[1500.; 8]);
        assert!(assert_ok!(generate_schedule(&players, 0, 3, &empty, &empty)).is_empty());
        assert!(assert_ok!(generate_schedule(&players, 2, 0, &empty, &empty)).is_empty());
    }

    #[test]
    fn extra_courts_stay_empty() {
        let empty = PairHistory::new();
        let schedule = assert_ok!(generate_schedule(&pool(&[1500.; 6]), 3, 2, &empty, &empty));
        assert_eq!(schedule.len(), 2);
        assert!(schedule.iter().all(|scheduled| scheduled.court == 1));
        assert_eq!(schedule[1].round, 2);
    }

    #[test]
    fn huge_court_counts_are_bounded_by_the_pool() {
        let empty = PairHistory::new();
        let players = pool(&[1500.; 5]);
        let schedule = assert_ok!(generate_schedule(&players, usize::MAX, 3, &empty, &empty));
        assert_eq!(schedule.len(), 3);
        assert!(schedule.iter().all(|scheduled| scheduled.court == 1));

        let schedule = assert_ok!(generate_schedule(&players, usize::MAX / 2, 3, &empty, &empty));
        assert_eq!(schedule.len(), 3);
        assert_eq!(
            assert_ok!(generate_schedule(&players, usize::MAX, 1, &empty, &empty)).len(),
            1
        );
    }

    #[test]
    fn rested_players_come_back_next_round() {
        let empty = PairHistory::new();
        let players = pool(&[1500.; 8]);
        let schedule = assert_ok!(generate_schedule(&players, 1, 2, &empty, &empty));
        // Round 1 takes the first split in generation order.
        assert_eq!(schedule[0].players(), [1, 2, 3, 4]);
        assert_eq!(benched_players(&players, &schedule, 1), vec![5, 6, 7, 8]);
        // The benched four carry no rest penalty in round 2.
        assert_eq!(schedule[1].players(), [5, 6, 7, 8]);
        assert_eq!(benched_players(&players, &schedule, 2), vec![1, 2, 3, 4]);
    }

    #[test]
    fn partnership_history_steers_the_split() {
        let players = pool(&[1500.; 4]);
        let partnerships = PairHistory::from_records([PairRecord {
            pair: PlayerPair::new(1, 2),
            times: 4,
            last_at: None,
        }]);
        let schedule = assert_ok!(generate_schedule(
            &players,
            1,
            1,
            &partnerships,
            &PairHistory::new()
        ));
        assert_eq!(schedule[0].team1.players(), [1, 3]);
        assert_eq!(schedule[0].team2.players(), [2, 4]);
    }

    #[test]
    fn scored_schedule_reports_the_winning_breakdown() {
        let empty = PairHistory::new();
        let scored = assert_ok!(RoundScheduler::default().generate_scored(
            &pool(&[1600., 1400., 1500., 1500.]),
            1,
            2,
            &empty,
            &empty
        ));
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].1.total, 0.);
        // Everyone played the previous match.
        assert_eq!(scored[1].1.player_rest, 1.);
        assert_eq!(scored[1].1.total, 8.);
    }

    #[test]
    fn matches_in_round_filters_by_round() {
        let empty = PairHistory::new();
        let schedule = assert_ok!(generate_schedule(&pool(&[1500.; 8]), 2, 3, &empty, &empty));
        assert_eq!(schedule.len(), 6);
        for round in 1..=3 {
            let courts: Vec<usize> = matches_in_round(&schedule, round)
                .map(|scheduled| scheduled.court)
                .collect();
            assert_eq!(courts, vec![1, 2]);
        }
    }
}
