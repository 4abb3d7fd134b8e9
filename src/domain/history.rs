use super::{PlayerId, PlayerPair, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How often a pair of players has shared a court in some role, and when
/// they last did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    pub pair: PlayerPair,
    pub times: u32,
    #[serde(default)]
    pub last_at: Option<DateTime<Utc>>,
}

/// Per-pair counters for one relationship (partners or opponents). Serialized
/// as a flat list of records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PairRecord>", into = "Vec<PairRecord>")]
pub struct PairHistory {
    records: BTreeMap<PlayerPair, PairRecord>,
}

pub type PartnershipHistory = PairHistory;
pub type OppositionHistory = PairHistory;

impl PairHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from records, merging repeated pairs.
    pub fn from_records(records: impl IntoIterator<Item = PairRecord>) -> Self {
        let mut history = Self::new();
        for record in records {
            history
                .records
                .entry(record.pair)
                .and_modify(|existing| {
                    existing.times += record.times;
                    existing.last_at = existing.last_at.max(record.last_at);
                })
                .or_insert(record);
        }
        history
    }

    pub fn get(&self, a: PlayerId, b: PlayerId) -> Option<&PairRecord> {
        self.records.get(&PlayerPair::new(a, b))
    }

    /// Number of co-occurrences, 0 for pairs that were never recorded.
    pub fn count(&self, pair: PlayerPair) -> u32 {
        self.records.get(&pair).map_or(0, |record| record.times)
    }

    /// Creates the record on first co-occurrence, increments it after.
    pub fn record(&mut self, pair: PlayerPair, at: Option<DateTime<Utc>>) {
        let record = self.records.entry(pair).or_insert(PairRecord {
            pair,
            times: 0,
            last_at: None,
        });
        record.times += 1;
        if at.is_some() {
            record.last_at = at;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<PairRecord>> for PairHistory {
    fn from(records: Vec<PairRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<PairHistory> for Vec<PairRecord> {
    fn from(history: PairHistory) -> Self {
        history.records.into_values().collect()
    }
}

/// Updates both histories after a match has actually been played: one
/// partnership per team and four oppositions across the net.
pub fn record_match_result(
    partnerships: &mut PartnershipHistory,
    oppositions: &mut OppositionHistory,
    team1: &Team,
    team2: &Team,
    at: Option<DateTime<Utc>>,
) {
    partnerships.record(team1.pair(), at);
    partnerships.record(team2.pair(), at);
    for a in team1.players() {
        for b in team2.players() {
            oppositions.record(PlayerPair::new(a, b), at);
        }
    }
}
