use crate::domain::PlayerId;

/// Failures of a single engine call. Unfillable court slots are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("each team must have exactly 2 players, got {team1} and {team2}")]
    InvalidTeamSize { team1: usize, team2: usize },
    #[error("at least 4 players are needed to build a schedule, got {0}")]
    InsufficientPlayers(usize),
    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse session file: {0}")]
    Json5(#[from] json5::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported file extension for {0:?}")]
    Extension(std::path::PathBuf),
}
