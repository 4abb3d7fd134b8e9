use doubles_skill::SessionConfig;
use doubles_skill::summary::print_schedule;

/// Builds the schedule for one session file and writes it out as CSV.
fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 3 {
        tracing::error!("Usage: {} session_file [output_dir]", args[0]);
        return;
    }
    let config = match SessionConfig::from_file(&args[1]) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            return;
        }
    };

    let schedule = match config.scheduler().generate(
        &config.players,
        config.courts,
        config.rounds,
        &config.partnerships,
        &config.oppositions,
    ) {
        Ok(schedule) => schedule,
        Err(err) => {
            tracing::error!("Could not build a schedule: {}", err);
            return;
        }
    };

    let dir = std::path::PathBuf::from(args.get(2).map_or("../data/output", String::as_str));
    if let Err(err) = std::fs::create_dir_all(&dir) {
        tracing::error!("Could not create {:?}: {}", dir, err);
        return;
    }
    print_schedule(&config.players, &schedule, config.rounds, &dir);
}
