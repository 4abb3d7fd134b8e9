use crate::domain::{CandidateMatch, Team};
use itertools::Itertools;

/// Every `(team_pairings[i], team_pairings[j])` with `i < j` whose players are
/// disjoint, in `(i, j)` order.
///
/// The scan is quadratic in the number of teams, so quartic in the number of
/// players: roughly `3 * C(n, 4)` candidates survive from `n` players. This is
/// meant for club-sized pools of a few dozen players at most; callers bound the
/// pool size before scheduling.
pub fn generate_candidate_matches(team_pairings: &[Team]) -> Vec<CandidateMatch> {
    team_pairings
        .iter()
        .tuple_combinations()
        .filter_map(|(&team1, &team2)| CandidateMatch::new(team1, team2))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlayerId;
    use crate::matchmaking::generate_team_pairings;

    fn ids(candidate: &CandidateMatch) -> ([PlayerId; 2], [PlayerId; 2]) {
        (candidate.team1.players(), candidate.team2.players())
    }

    #[test]
    fn four_players_split_three_ways() {
        let candidates = generate_candidate_matches(&generate_team_pairings(&[1, 2, 3, 4]));
        let splits: Vec<_> = candidates.iter().map(ids).collect();
        assert_eq!(
            splits,
            vec![([1, 2], [3, 4]), ([1, 3], [2, 4]), ([1, 4], [2, 3])]
        );
    }

    #[test]
    fn candidate_count_grows_with_four_player_subsets() {
        for n in 4..=10u64 {
            let players: Vec<PlayerId> = (0..n).collect();
            let candidates = generate_candidate_matches(&generate_team_pairings(&players));
            let subsets = n * (n - 1) * (n - 2) * (n - 3) / 24;
            assert_eq!(candidates.len() as u64, 3 * subsets);
        }
    }

    #[test]
    fn no_candidate_reuses_a_player() {
        let players: Vec<PlayerId> = (0..7).collect();
        for candidate in generate_candidate_matches(&generate_team_pairings(&players)) {
            assert!(!candidate.team1.shares_player_with(&candidate.team2));
        }
    }

    #[test]
    fn overlapping_teams_alone_give_nothing() {
        let pairings = generate_team_pairings(&[1, 2, 3]);
        assert!(generate_candidate_matches(&pairings).is_empty());
    }
}
