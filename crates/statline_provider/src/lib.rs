//! Remote statistics provider adapter.
//!
//! The provider is treated as a black box that answers two questions: "who
//! was on a roster in this season" and "what are this player's career
//! tables". Its payloads are nested result sets (`name`, `headers`, `rows`);
//! this crate turns them into [`PlayerIdentity`](statline_core::PlayerIdentity)
//! lists and [`StatRecord`](statline_core::StatRecord)s.
//!
//! - [`StatsProvider`] - trait over the raw provider calls
//! - [`NbaStatsClient`] - reqwest implementation against stats.nba.com
//! - [`FetchGateway`] - stateless adapter used by the caches

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod conversion;
mod dto;
mod gateway;
mod throttle;

pub use client::NbaStatsClient;
pub use config::{ProviderConfig, ProviderConfigBuilder};
pub use conversion::{record_from_result_sets, roster_from_result_sets};
pub use dto::{ResultSet, ResultSetsResponse};
pub use gateway::{FetchGateway, StatsProvider};
pub use throttle::RequestThrottle;
