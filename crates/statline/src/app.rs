//! Wiring from configuration to a ready resolver.

use crate::StatlineConfig;
use statline_cache::{IdentityIndex, RosterTable, StatRecordStore};
use statline_core::Season;
use statline_error::StatlineResult;
use statline_provider::{FetchGateway, NbaStatsClient, RequestThrottle};
use statline_query::{QueryResolver, RecordFormatter};
use statline_social::{CommentFilter, QueryResponder};
use statline_storage::{FileSystemStorage, TableStorage};
use std::sync::Arc;
use tracing::info;

/// A configured Statline instance.
#[derive(Debug, Clone)]
pub struct Statline {
    resolver: QueryResolver,
    filter: CommentFilter,
}

impl Statline {
    /// Build against the live provider and file-backed tables from `config`.
    pub fn from_config(config: &StatlineConfig) -> StatlineResult<Self> {
        let data_dir = config.cache().resolved_data_dir();
        let storage = Arc::new(FileSystemStorage::new(data_dir.clone())?);

        let client = NbaStatsClient::new(config.provider().clone())?;
        let throttle = RequestThrottle::new(*config.provider().requests_per_minute());
        let gateway = FetchGateway::new(Arc::new(client)).with_throttle(throttle);

        info!(
            data_dir = %data_dir.display(),
            base_url = %config.provider().base_url(),
            "Statline configured"
        );
        Self::with_parts(storage, gateway, config)
    }

    /// Build from explicit storage and gateway, taking the remaining settings from `config`.
    pub fn with_parts(
        storage: Arc<dyn TableStorage>,
        gateway: FetchGateway,
        config: &StatlineConfig,
    ) -> StatlineResult<Self> {
        let index = IdentityIndex::new(storage.clone(), gateway.clone());
        let store = StatRecordStore::new(storage, gateway, config.cache().cache_config());
        let formatter = RecordFormatter::new(config.formatter().clone());
        let filter = CommentFilter::from_config(config.listener())?;

        Ok(Self {
            resolver: QueryResolver::new(index, store, formatter),
            filter,
        })
    }

    /// The request resolver.
    pub fn resolver(&self) -> &QueryResolver {
        &self.resolver
    }

    /// Resolve one free-text request to a table.
    pub async fn query(&self, text: &str) -> StatlineResult<String> {
        self.resolver.resolve(text).await
    }

    /// Roster for `season`, building it first if needed or fetching anew when `rebuild`.
    pub async fn roster(&self, season: &Season, rebuild: bool) -> StatlineResult<Option<RosterTable>> {
        let index = self.resolver.index();
        if rebuild {
            return index.rebuild(season).await.map(Some);
        }
        index.ensure_built(season).await?;
        index.table(season).await
    }

    /// Filter picking request comments out of a stream.
    pub fn comment_filter(&self) -> &CommentFilter {
        &self.filter
    }

    /// Responder answering request comments.
    pub fn responder(&self) -> QueryResponder {
        QueryResponder::new(self.resolver.clone())
    }
}
