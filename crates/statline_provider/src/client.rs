//! stats.nba.com client.

use crate::{ProviderConfig, ResultSet, ResultSetsResponse, StatsProvider};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use statline_core::{PlayerId, Season, StatType};
use statline_error::{FetchError, FetchErrorKind, StatlineResult};
use std::time::Duration;
use tracing::{debug, instrument, warn};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// HTTP client for the stats.nba.com JSON API.
///
/// The API rejects requests that do not look like they come from a browser
/// on nba.com, so every request carries a browser user agent and an nba.com
/// referer/origin.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    config: ProviderConfig,
}

impl NbaStatsClient {
    /// Creates a client from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: ProviderConfig) -> StatlineResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }

        let client = builder.build().map_err(|e| {
            FetchError::new(FetchErrorKind::Http(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self { client, config })
    }

    async fn get_sets(&self, endpoint: &str, query: &[(&str, String)]) -> StatlineResult<Vec<ResultSet>> {
        let url = format!("{}/{}", self.config.base_url().trim_end_matches('/'), endpoint);
        debug!(url = %url, ?query, "Sending stats request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::new(FetchErrorKind::Http(format!("{}: {}", endpoint, e))))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(endpoint, status, "Provider returned error status");
            return Err(FetchError::new(FetchErrorKind::Status { status, message }).into());
        }

        let body: ResultSetsResponse = response.json().await.map_err(|e| {
            FetchError::new(FetchErrorKind::Decode(format!("{}: {}", endpoint, e)))
        })?;

        debug!(endpoint, sets = body.result_sets.len(), "Received result sets");
        Ok(body.result_sets)
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    #[instrument(skip(self))]
    async fn roster_sets(&self, season: &Season) -> StatlineResult<Vec<ResultSet>> {
        self.get_sets(
            "commonallplayers",
            &[
                ("LeagueID", self.config.league_id().clone()),
                ("Season", season.to_string()),
                ("IsOnlyCurrentSeason", "1".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn career_sets(
        &self,
        id: PlayerId,
        stat_type: StatType,
    ) -> StatlineResult<Vec<ResultSet>> {
        self.get_sets(
            "playercareerstats",
            &[
                ("PlayerID", id.to_string()),
                ("PerMode", stat_type.as_ref().to_string()),
                ("LeagueID", self.config.league_id().clone()),
            ],
        )
        .await
    }

    fn provider_name(&self) -> &'static str {
        "stats.nba.com"
    }
}
