use doubles_skill::{
    PartnershipHistory, Player, PlayerId, RatingSystem, SessionConfig, expected_score,
    record_match_result, team_rating,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;

/// Plays `num_sessions` consecutive sessions, feeding each session's results
/// into the ratings and histories used to schedule the next one. Returns the
/// players by descending rating along with the final partnership history.
fn simulate_season(
    config: &SessionConfig,
    num_sessions: usize,
    seed: u64,
) -> Result<(Vec<Player>, PartnershipHistory), doubles_skill::EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let scheduler = config.scheduler();
    let system = config.rating_system();
    let mut players = config.players.clone();
    let mut partnerships = config.partnerships.clone();
    let mut oppositions = config.oppositions.clone();

    for _ in 0..num_sessions {
        let schedule = scheduler.generate(
            &players,
            config.courts,
            config.rounds,
            &partnerships,
            &oppositions,
        )?;
        let index: HashMap<PlayerId, usize> = players
            .iter()
            .enumerate()
            .map(|(i, player)| (player.id, i))
            .collect();

        for scheduled in &schedule {
            let [a, b, c, d] = scheduled.players().map(|id| index[&id]);
            let team1 = [players[a].skill_rating, players[b].skill_rating];
            let team2 = [players[c].skill_rating, players[d].skill_rating];
            let p_team1 = expected_score(
                team_rating(team1[0], team1[1]),
                team_rating(team2[0], team2[1]),
            );
            let team1_won = rng.random::<f64>() < p_team1;

            let update = system.match_update(&team1, &team2, team1_won)?;
            for (i, rating) in [a, b].into_iter().zip(update.team1_new_ratings) {
                players[i].skill_rating = rating;
            }
            for (i, rating) in [c, d].into_iter().zip(update.team2_new_ratings) {
                players[i].skill_rating = rating;
            }
            record_match_result(
                &mut partnerships,
                &mut oppositions,
                &scheduled.team1,
                &scheduled.team2,
                Some(chrono::Utc::now()),
            );
        }
    }

    players.sort_by(|x, y| y.skill_rating.total_cmp(&x.skill_rating));
    Ok((players, partnerships))
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        tracing::error!("Usage: {} session_file num_sessions [num_trials]", args[0]);
        return;
    }
    let config = match SessionConfig::from_file(&args[1]) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return;
        }
    };
    let Ok(num_sessions) = args[2].parse::<usize>() else {
        tracing::error!("num_sessions must be a non-negative integer, got {}", args[2]);
        return;
    };
    let num_trials = args.get(3).and_then(|s| s.parse::<u64>().ok()).unwrap_or(1);

    // Trials share nothing, so they run in parallel.
    (0..num_trials).into_par_iter().for_each(|seed| {
        match simulate_season(&config, num_sessions, seed) {
            Ok((players, partnerships)) => {
                let board: Vec<String> = players
                    .iter()
                    .map(|player| format!("{} {:.0}", player.display_name, player.skill_rating))
                    .collect();
                tracing::info!(
                    "Trial {} after {} sessions: {}",
                    seed,
                    num_sessions,
                    board.join(", ")
                );
                if let Some(record) = partnerships.iter().max_by_key(|record| record.times) {
                    tracing::info!(
                        "Trial {} most frequent partners: {} & {} ({} times)",
                        seed,
                        record.pair.first(),
                        record.pair.second(),
                        record.times
                    );
                }
            }
            Err(err) => tracing::error!("Trial {} failed: {}", seed, err),
        }
    });
}
