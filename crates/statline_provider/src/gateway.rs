//! Provider trait and the stateless gateway the caches call.

use crate::{RequestThrottle, ResultSet, record_from_result_sets, roster_from_result_sets};
use async_trait::async_trait;
use statline_core::{PlayerId, PlayerIdentity, Season, StatRecord, StatType};
use statline_error::StatlineResult;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Raw calls against a statistics provider.
///
/// Implementations return the provider's result sets untouched; shaping them
/// into Statline types is the gateway's job.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Every player listed for `season`.
    async fn roster_sets(&self, season: &Season) -> StatlineResult<Vec<ResultSet>>;

    /// Career tables for one player in the given aggregation mode.
    async fn career_sets(&self, id: PlayerId, stat_type: StatType)
    -> StatlineResult<Vec<ResultSet>>;

    /// Provider name (e.g., "stats.nba.com").
    fn provider_name(&self) -> &'static str;
}

/// Stateless adapter between the caches and a [`StatsProvider`].
///
/// Each call is exactly one provider round-trip, spaced by the throttle.
#[derive(Clone)]
pub struct FetchGateway {
    provider: Arc<dyn StatsProvider>,
    throttle: RequestThrottle,
}

impl FetchGateway {
    /// Gateway over `provider` with no throttling.
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self {
            provider,
            throttle: RequestThrottle::unlimited(),
        }
    }

    /// Replace the throttle.
    pub fn with_throttle(mut self, throttle: RequestThrottle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Fetch the full roster for `season`. An empty roster is valid.
    #[instrument(skip(self), fields(provider = self.provider.provider_name()))]
    pub async fn fetch_roster(&self, season: &Season) -> StatlineResult<Vec<PlayerIdentity>> {
        self.throttle.acquire().await;
        let sets = self.provider.roster_sets(season).await?;
        let roster = roster_from_result_sets(season, &sets);
        debug!(players = roster.len(), "Fetched roster");
        Ok(roster)
    }

    /// Fetch every category for one player and stat type.
    #[instrument(skip(self), fields(provider = self.provider.provider_name()))]
    pub async fn fetch_stats(&self, id: PlayerId, stat_type: StatType) -> StatlineResult<StatRecord> {
        self.throttle.acquire().await;
        let sets = self.provider.career_sets(id, stat_type).await?;
        Ok(record_from_result_sets(id, stat_type, &sets))
    }
}

impl std::fmt::Debug for FetchGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchGateway")
            .field("provider", &self.provider.provider_name())
            .field("throttled", &self.throttle.is_limited())
            .finish()
    }
}
