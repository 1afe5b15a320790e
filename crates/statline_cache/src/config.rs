//! Cache freshness settings.

use chrono::Duration;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use statline_core::Season;

/// Configuration for the stat record cache.
///
/// # Examples
///
/// ```
/// use statline_cache::CacheConfig;
/// use statline_core::Season;
///
/// let config = CacheConfig::default()
///     .with_current_season("2016-17".parse::<Season>().unwrap())
///     .with_staleness_threshold_secs(0);
/// assert_eq!(config.current_season().as_str(), "2016-17");
/// assert!(config.staleness_threshold().is_zero());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct CacheConfig {
    /// The only season whose cached records can go stale
    #[serde(default = "default_current_season")]
    current_season: Season,

    /// Age after which a current-season entry is refetched (seconds)
    #[serde(default = "default_staleness_threshold_secs")]
    staleness_threshold_secs: u64,
}

fn default_current_season() -> Season {
    Season::from_start_year(2026)
}

fn default_staleness_threshold_secs() -> u64 {
    6 * 60 * 60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            current_season: default_current_season(),
            staleness_threshold_secs: default_staleness_threshold_secs(),
        }
    }
}

impl CacheConfig {
    /// Staleness threshold as a duration.
    ///
    /// Thresholds beyond what a duration can hold saturate at
    /// [`Duration::MAX`], so such entries never go stale.
    pub fn staleness_threshold(&self) -> Duration {
        i64::try_from(self.staleness_threshold_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }

    /// Whether `season` is the volatile current season.
    pub fn is_current(&self, season: &Season) -> bool {
        season == &self.current_season
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staleness_threshold_saturates() {
        let config = CacheConfig::default().with_staleness_threshold_secs(u64::MAX);
        assert_eq!(config.staleness_threshold(), Duration::MAX);

        let config = CacheConfig::default().with_staleness_threshold_secs(i64::MAX as u64 / 1000 + 1);
        assert_eq!(config.staleness_threshold(), Duration::MAX);
    }

    #[test]
    fn test_staleness_threshold_default() {
        assert_eq!(CacheConfig::default().staleness_threshold(), Duration::hours(6));
    }
}
