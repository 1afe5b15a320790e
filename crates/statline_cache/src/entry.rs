//! Persisted cache documents.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use statline_core::{PlayerId, Season, StatRecord, StatType};
use std::collections::BTreeMap;

/// One cached record with the time it was fetched.
///
/// Overwritten wholesale on refresh, never merged, never evicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Player the record belongs to
    pub subject_id: PlayerId,
    /// Aggregation mode of the record
    pub stat_type: StatType,
    /// The cached record
    pub record: StatRecord,
    /// When the record was fetched from the provider
    pub last_fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Wrap a freshly fetched record.
    pub fn new(record: StatRecord, fetched_at: DateTime<Utc>) -> Self {
        Self {
            subject_id: record.subject_id,
            stat_type: record.stat_type,
            record,
            last_fetched_at: fetched_at,
        }
    }

    /// Time since the record was fetched.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_fetched_at
    }

    /// Whether the entry has reached `threshold` at `now`.
    pub fn is_stale(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        self.age(now) >= threshold
    }
}

/// Display name to player id for one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterTable {
    /// Season the roster was captured in
    pub season: Season,
    /// When the roster was fetched
    pub built_at: DateTime<Utc>,
    /// Display name to identifier
    pub players: BTreeMap<String, PlayerId>,
}

impl RosterTable {
    /// Exact, case-sensitive lookup.
    pub fn get(&self, display_name: &str) -> Option<PlayerId> {
        self.players.get(display_name).copied()
    }

    /// Number of players on the roster.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
