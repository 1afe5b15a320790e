//! Stat record cache with season-conditioned freshness.

use crate::{CacheConfig, CacheEntry};
use statline_core::{Clock, PlayerId, Season, StatRecord, StatType, SystemClock};
use statline_error::{NotFoundError, StatlineErrorKind, StatlineResult};
use statline_provider::FetchGateway;
use statline_storage::{TableStorage, TableStorageExt};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Table holding one [`CacheEntry`] per (player, stat type).
pub const PLAYER_STATS_TABLE: &str = "player_stats";

/// Storage key for a (player, stat type) pair, e.g. `1718_PerGame`.
pub fn entry_key(id: PlayerId, stat_type: StatType) -> String {
    format!("{}_{}", id, stat_type)
}

/// Cache of stat records in front of the provider.
///
/// Freshness depends on the season being asked about, not on the record:
/// a request about the current season refetches once the entry is older
/// than the staleness threshold, while a request about any past season
/// reuses whatever is cached. Each [`get`](Self::get) makes at most one
/// provider round-trip.
#[derive(Clone)]
pub struct StatRecordStore {
    storage: Arc<dyn TableStorage>,
    gateway: FetchGateway,
    clock: Arc<dyn Clock>,
    config: CacheConfig,
}

impl StatRecordStore {
    /// Store persisting into `storage` and fetching through `gateway`.
    pub fn new(storage: Arc<dyn TableStorage>, gateway: FetchGateway, config: CacheConfig) -> Self {
        tracing::debug!(
            current_season = %config.current_season(),
            staleness_threshold_secs = config.staleness_threshold_secs(),
            "Creating StatRecordStore"
        );
        Self {
            storage,
            gateway,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the clock used for staleness checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Cache configuration in use.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Record for `subject` and `stat_type`, fetching when missing or stale.
    ///
    /// # Errors
    ///
    /// - `NotFound` when `subject` is `None`; nothing is fetched.
    /// - `Fetch` when the provider call fails. The failure is logged and the
    ///   existing entry, if any, is left untouched.
    /// - `Storage` / `Json` when the fresh entry cannot be persisted.
    #[instrument(
        skip_all,
        fields(
            subject_id = ?subject,
            season = %season,
            stat_type = %stat_type,
        )
    )]
    pub async fn get(
        &self,
        subject: Option<PlayerId>,
        season: &Season,
        stat_type: StatType,
    ) -> StatlineResult<StatRecord> {
        let Some(id) = subject else {
            debug!("No player id, not fetching");
            return Err(NotFoundError::new("unresolved player", season.as_str()).into());
        };

        let Some(entry) = self.entry(id, stat_type).await? else {
            debug!("Cache miss");
            return self.refresh(id, stat_type).await;
        };

        if !self.config.is_current(season) {
            debug!("Past season, reusing cached entry");
            return Ok(entry.record);
        }

        let now = self.clock.now();
        if entry.is_stale(now, self.config.staleness_threshold()) {
            debug!(age_secs = entry.age(now).num_seconds(), "Cache entry stale");
            self.refresh(id, stat_type).await
        } else {
            debug!(age_secs = entry.age(now).num_seconds(), "Cache hit");
            Ok(entry.record)
        }
    }

    /// Persisted entry for (`id`, `stat_type`), without fetching.
    ///
    /// An entry that can no longer be decoded reads as missing so the next
    /// `get` replaces it.
    pub async fn entry(&self, id: PlayerId, stat_type: StatType) -> StatlineResult<Option<CacheEntry>> {
        let key = entry_key(id, stat_type);
        match self.storage.load_json(PLAYER_STATS_TABLE, &key).await {
            Ok(entry) => Ok(entry),
            Err(e) if matches!(e.kind(), StatlineErrorKind::Json(_)) => {
                warn!(key = %key, error = %e, "Unreadable cache entry, treating as miss");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn refresh(&self, id: PlayerId, stat_type: StatType) -> StatlineResult<StatRecord> {
        let record = self.gateway.fetch_stats(id, stat_type).await.inspect_err(|e| {
            error!(subject_id = %id, stat_type = %stat_type, error = %e, "Stat fetch failed");
        })?;

        let entry = CacheEntry::new(record, self.clock.now());
        self.storage
            .save_json(PLAYER_STATS_TABLE, &entry_key(id, stat_type), &entry)
            .await?;

        info!(
            subject_id = %id,
            stat_type = %stat_type,
            categories = entry.record.categories.len(),
            "Cached stat record"
        );
        Ok(entry.record)
    }
}

impl std::fmt::Debug for StatRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatRecordStore")
            .field("gateway", &self.gateway)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
