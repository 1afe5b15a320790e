//! Freshness-aware caches in front of the statistics provider.
//!
//! - [`IdentityIndex`] maps display names to player ids, one persisted table
//!   per season, built once from a bulk roster fetch.
//! - [`StatRecordStore`] keeps one [`CacheEntry`] per (player, stat type).
//!   Entries are refreshed after a staleness threshold when the request is
//!   about the current season and reused forever otherwise.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entry;
mod identity;
mod store;

pub use config::{CacheConfig, CacheConfigBuilder};
pub use entry::{CacheEntry, RosterTable};
pub use identity::{IdentityIndex, PLAYER_IDS_TABLE};
pub use store::{PLAYER_STATS_TABLE, StatRecordStore, entry_key};
