use super::PlayerId;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Unordered pair of players, stored with the smaller id first so that
/// `(a, b)` and `(b, a)` are the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(PlayerId, PlayerId)")]
pub struct PlayerPair(PlayerId, PlayerId);

impl From<(PlayerId, PlayerId)> for PlayerPair {
    fn from((a, b): (PlayerId, PlayerId)) -> Self {
        Self::new(a, b)
    }
}

impl PlayerPair {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn first(&self) -> PlayerId {
        self.0
    }

    pub fn second(&self) -> PlayerId {
        self.1
    }
}

/// Two distinct players on the same side of the net.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    players: [PlayerId; 2],
}

impl Team {
    pub fn new(a: PlayerId, b: PlayerId) -> Result<Self, EngineError> {
        if a == b {
            return Err(EngineError::DuplicatePlayer(a));
        }
        Ok(Self { players: [a, b] })
    }

    // Callers guarantee a != b.
    pub(crate) fn from_distinct(a: PlayerId, b: PlayerId) -> Self {
        debug_assert_ne!(a, b);
        Self { players: [a, b] }
    }

    pub fn players(&self) -> [PlayerId; 2] {
        self.players
    }

    pub fn pair(&self) -> PlayerPair {
        PlayerPair::new(self.players[0], self.players[1])
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains(&id)
    }

    pub fn shares_player_with(&self, other: &Team) -> bool {
        self.players.iter().any(|&id| other.contains(id))
    }
}

/// An unscored 2-vs-2 matchup whose teams share no player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateMatch {
    pub team1: Team,
    pub team2: Team,
}

impl CandidateMatch {
    /// Returns `None` if the two teams overlap.
    pub fn new(team1: Team, team2: Team) -> Option<Self> {
        if team1.shares_player_with(&team2) {
            None
        } else {
            Some(Self { team1, team2 })
        }
    }

    pub fn players(&self) -> [PlayerId; 4] {
        let [a, b] = self.team1.players();
        let [c, d] = self.team2.players();
        [a, b, c, d]
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.team1.contains(id) || self.team2.contains(id)
    }

    /// The four opponent pairs, one player from each team.
    pub fn cross_pairs(&self) -> [PlayerPair; 4] {
        let [a, b] = self.team1.players();
        let [c, d] = self.team2.players();
        [
            PlayerPair::new(a, c),
            PlayerPair::new(a, d),
            PlayerPair::new(b, c),
            PlayerPair::new(b, d),
        ]
    }
}

/// A candidate that was assigned to a court. Rounds and courts count from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduledMatch {
    pub round: usize,
    pub court: usize,
    pub team1: Team,
    pub team2: Team,
}

impl ScheduledMatch {
    pub fn new(round: usize, court: usize, candidate: CandidateMatch) -> Self {
        Self {
            round,
            court,
            team1: candidate.team1,
            team2: candidate.team2,
        }
    }

    pub fn candidate(&self) -> CandidateMatch {
        CandidateMatch {
            team1: self.team1,
            team2: self.team2,
        }
    }

    pub fn players(&self) -> [PlayerId; 4] {
        self.candidate().players()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.team1.contains(id) || self.team2.contains(id)
    }
}
