//! Provider connection settings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Configuration for the remote statistics provider.
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
pub struct ProviderConfig {
    /// Root URL of the stats API
    #[serde(default = "default_base_url")]
    #[builder(setter(into))]
    base_url: String,

    /// League identifier sent with every request (`00` is the NBA)
    #[serde(default = "default_league_id")]
    #[builder(setter(into))]
    league_id: String,

    /// Per-request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    timeout_secs: Option<u64>,

    /// Upper bound on requests per minute; unset means unthrottled
    #[serde(default)]
    requests_per_minute: Option<u32>,
}

fn default_base_url() -> String {
    "https://stats.nba.com/stats".to_string()
}

fn default_league_id() -> String {
    "00".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            league_id: default_league_id(),
            timeout_secs: None,
            requests_per_minute: None,
        }
    }
}
