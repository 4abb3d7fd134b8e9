use crate::domain::{PlayerId, Team};
use itertools::Itertools;

/// All 2-player teams from `players`, as `(players[i], players[j])` for `i < j`
/// in input order. For `n` distinct players this yields `n * (n - 1) / 2` teams.
pub fn generate_team_pairings(players: &[PlayerId]) -> Vec<Team> {
    players
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a != b)
        .map(|(&a, &b)| Team::from_distinct(a, b))
        .collect()
}
