//! Statline: free-text NBA player stat requests answered from a local cache.
//!
//! A request such as `Get Paul Pierce's 2008-09 regular season per game totals`
//! is parsed, the player is looked up in a season-scoped id index, the stat
//! record is read from a freshness-aware cache (fetching from stats.nba.com on
//! a miss or when a current-season entry has gone stale) and one category is
//! rendered as a markdown-style table.
//!
//! # Crates
//!
//! - `statline_error` - error kinds with location tracking
//! - `statline_core` - seasons, ids, category keys, records, clocks
//! - `statline_storage` - keyed JSON tables on disk or in memory
//! - `statline_provider` - stats.nba.com adapter
//! - `statline_cache` - [`IdentityIndex`] and [`StatRecordStore`]
//! - `statline_query` - parser, [`RecordFormatter`], [`QueryResolver`]
//! - `statline_social` - comment stream listener
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use statline::{Statline, StatlineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StatlineConfig::load()?;
//!     let statline = Statline::from_config(&config)?;
//!
//!     let table = statline
//!         .query("Get Kevin Garnett's career postseason per 36 totals")
//!         .await?;
//!     println!("{table}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod telemetry;

pub use app::Statline;
pub use config::{CacheSection, StatlineConfig};
pub use telemetry::init_tracing;

// Re-export the workspace crates' public types
pub use statline_cache::{
    CacheConfig, CacheConfigBuilder, CacheEntry, IdentityIndex, RosterTable, StatRecordStore,
};
pub use statline_core::{
    CategoryKey, CategoryScope, CategoryTable, Clock, ManualClock, PlayerId, PlayerIdentity,
    Season, SeasonType, StatRecord, StatRow, StatType, SystemClock,
};
pub use statline_error::{
    CategoryNotFoundError, ConfigError, FetchError, FetchErrorKind, JsonError, NotFoundError,
    ParseError, ParseErrorKind, StatlineError, StatlineErrorKind, StatlineResult, StorageError,
    StorageErrorKind,
};
pub use statline_provider::{
    FetchGateway, NbaStatsClient, ProviderConfig, RequestThrottle, ResultSet, StatsProvider,
};
pub use statline_query::{
    ColumnRename, FormatterConfig, ParsedRequest, QueryResolver, RecordFormatter, parse_request,
};
pub use statline_social::{CommentFilter, ListenerConfig, QueryResponder, listen};
pub use statline_storage::{FileSystemStorage, MemoryStorage, TableStorage, TableStorageExt};
