use crate::data_processing::try_write_slice_to_file;
use crate::domain::{Player, PlayerId, ScheduledMatch};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One line of a session board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub display_name: String,
    pub skill_rating: f64,
    pub matches_played: usize,
    pub rounds_benched: usize,
    pub distinct_partners: usize,
    pub distinct_opponents: usize,
}

/// Flat form of a scheduled match, one column per slot, for CSV output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub round: usize,
    pub court: usize,
    pub team1_player1: PlayerId,
    pub team1_player2: PlayerId,
    pub team2_player1: PlayerId,
    pub team2_player2: PlayerId,
}

impl From<&ScheduledMatch> for ScheduleRow {
    fn from(scheduled: &ScheduledMatch) -> Self {
        let [team1_player1, team1_player2] = scheduled.team1.players();
        let [team2_player1, team2_player2] = scheduled.team2.players();
        Self {
            round: scheduled.round,
            court: scheduled.court,
            team1_player1,
            team1_player2,
            team2_player1,
            team2_player2,
        }
    }
}

#[derive(Default)]
struct Tally {
    matches_played: usize,
    partners: BTreeSet<PlayerId>,
    opponents: BTreeSet<PlayerId>,
}

pub fn summarize_session(
    player_pool: &[Player],
    schedule: &[ScheduledMatch],
    rounds: usize,
) -> Vec<PlayerSummary> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();
    for scheduled in schedule {
        for (team, foes) in [
            (scheduled.team1, scheduled.team2),
            (scheduled.team2, scheduled.team1),
        ] {
            let [a, b] = team.players();
            for (me, partner) in [(a, b), (b, a)] {
                let tally = tallies.entry(me).or_default();
                tally.matches_played += 1;
                tally.partners.insert(partner);
                tally.opponents.extend(foes.players());
            }
        }
    }

    let mut board: Vec<PlayerSummary> = player_pool
        .iter()
        .map(|player| {
            let tally = tallies.remove(&player.id).unwrap_or_default();
            PlayerSummary {
                id: player.id,
                display_name: player.display_name.clone(),
                skill_rating: player.skill_rating,
                matches_played: tally.matches_played,
                rounds_benched: rounds.saturating_sub(tally.matches_played),
                distinct_partners: tally.partners.len(),
                distinct_opponents: tally.opponents.len(),
            }
        })
        .collect();
    board.sort_by_key(|summary| (std::cmp::Reverse(summary.matches_played), summary.id));
    board
}

pub fn print_schedule(
    player_pool: &[Player],
    schedule: &[ScheduledMatch],
    rounds: usize,
    dir: impl AsRef<std::path::Path>,
) {
    let names: HashMap<PlayerId, &str> = player_pool
        .iter()
        .map(|player| (player.id, player.display_name.as_str()))
        .collect();
    let name = |id: PlayerId| names.get(&id).copied().unwrap_or("?");

    for round in 1..=rounds {
        for scheduled in crate::matchmaking::matches_in_round(schedule, round) {
            let [a, b] = scheduled.team1.players();
            let [c, d] = scheduled.team2.players();
            tracing::info!(
                "Round {} court {}: {} & {} vs {} & {}",
                round,
                scheduled.court,
                name(a),
                name(b),
                name(c),
                name(d)
            );
        }
        let benched = crate::matchmaking::benched_players(player_pool, schedule, round);
        if !benched.is_empty() {
            let benched: Vec<&str> = benched.into_iter().map(name).collect();
            tracing::info!("Round {} bench: {}", round, benched.join(", "));
        }
    }

    let rows: Vec<ScheduleRow> = schedule.iter().map(ScheduleRow::from).collect();
    let dir = dir.as_ref();
    try_write_slice_to_file(&rows, dir.join("schedule.csv"));
    try_write_slice_to_file(
        &summarize_session(player_pool, schedule, rounds),
        dir.join("summary.csv"),
    );
}
