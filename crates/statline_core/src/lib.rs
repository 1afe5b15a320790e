//! Core data types for the Statline player statistics cache.
//!
//! This crate provides the domain types shared by the cache, the provider
//! adapter and the request resolver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod clock;
mod player;
mod record;
mod season;

pub use category::{CategoryKey, CategoryScope, CategoryTable, SeasonType};
pub use clock::{Clock, ManualClock, SystemClock};
pub use player::{PlayerId, PlayerIdentity};
pub use record::{StatRecord, StatRow, StatType};
pub use season::Season;
