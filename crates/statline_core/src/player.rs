//! Player identifiers.

use crate::Season;
use serde::{Deserialize, Serialize};

/// Provider-assigned player identifier.
///
/// Stable within the season it was captured in; the same display name may
/// carry a different identifier in another season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Wrap a raw provider identifier.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw provider identifier.
    pub fn get(&self) -> i64 {
        self.0
    }
}

/// One roster entry: a display name and its identifier for a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    /// Name as the provider displays it, e.g. "Paul Pierce"
    pub display_name: String,
    /// Identifier within `season`
    pub id: PlayerId,
    /// Season the identity was captured in
    pub season: Season,
}
