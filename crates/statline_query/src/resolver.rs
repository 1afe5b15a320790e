//! End-to-end request resolution.

use crate::{ParsedRequest, RecordFormatter, parse_request};
use statline_cache::{IdentityIndex, StatRecordStore};
use statline_core::Season;
use statline_error::{NotFoundError, StatlineResult};
use tracing::{debug, info, instrument};

/// Turns a free-text request into a rendered table.
///
/// Resolution runs parse, name lookup, cached fetch and rendering in order;
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    index: IdentityIndex,
    store: StatRecordStore,
    formatter: RecordFormatter,
}

impl QueryResolver {
    /// Resolver over the given caches and formatter.
    pub fn new(index: IdentityIndex, store: StatRecordStore, formatter: RecordFormatter) -> Self {
        Self {
            index,
            store,
            formatter,
        }
    }

    /// Season used when a request does not name one.
    pub fn current_season(&self) -> &Season {
        self.store.config().current_season()
    }

    /// Player id index.
    pub fn index(&self) -> &IdentityIndex {
        &self.index
    }

    /// Stat record store.
    pub fn store(&self) -> &StatRecordStore {
        &self.store
    }

    /// Parse `text` without touching the caches.
    pub fn parse(&self, text: &str) -> StatlineResult<ParsedRequest> {
        Ok(parse_request(text, self.current_season())?)
    }

    /// Resolve `text` to a rendered table.
    ///
    /// # Errors
    ///
    /// - `Parse` for malformed requests.
    /// - `NotFound` when the player has no id in the requested season.
    /// - `Fetch` when the provider call fails.
    /// - `CategoryNotFound` when the record lacks the requested category.
    #[instrument(skip_all, fields(text = %text))]
    pub async fn resolve(&self, text: &str) -> StatlineResult<String> {
        let request = self.parse(text)?;

        let Some(id) = self.index.resolve(&request.player, &request.season).await else {
            debug!(player = %request.player, "Player not in roster");
            return Err(NotFoundError::new(&request.player, request.season.as_str()).into());
        };

        let record = self
            .store
            .get(Some(id), &request.season, request.stat_type)
            .await?;

        let table = self
            .formatter
            .render(&record, &request.category_key.to_string())?;

        info!(
            player = %request.player,
            category = %request.category_key,
            stat_type = %request.stat_type,
            "Resolved request"
        );
        Ok(table)
    }
}
