//! Season-scoped display name to player id index.

use crate::RosterTable;
use statline_core::{Clock, PlayerId, Season, SystemClock};
use statline_error::{StatlineErrorKind, StatlineResult};
use statline_provider::FetchGateway;
use statline_storage::{TableStorage, TableStorageExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Table holding one roster document per season.
pub const PLAYER_IDS_TABLE: &str = "player_ids";

/// Maps display names to player ids, one persisted roster per season.
///
/// A season's roster is fetched in bulk the first time it is needed and
/// reused until [`rebuild`](Self::rebuild) is called. The same name may map
/// to different ids in different seasons.
#[derive(Clone)]
pub struct IdentityIndex {
    storage: Arc<dyn TableStorage>,
    gateway: FetchGateway,
    clock: Arc<dyn Clock>,
}

impl IdentityIndex {
    /// Index persisting into `storage` and fetching through `gateway`.
    pub fn new(storage: Arc<dyn TableStorage>, gateway: FetchGateway) -> Self {
        Self {
            storage,
            gateway,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to stamp built rosters.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Make sure a roster exists for `season`, fetching it if it does not.
    ///
    /// A no-op once a readable roster is persisted. A roster that can no
    /// longer be decoded counts as missing and is rebuilt.
    #[instrument(skip_all, fields(season = %season))]
    pub async fn ensure_built(&self, season: &Season) -> StatlineResult<()> {
        match self.table(season).await {
            Ok(Some(_)) => {
                debug!("Roster already built");
                return Ok(());
            }
            Ok(None) => debug!("No roster stored"),
            Err(e) if matches!(e.kind(), StatlineErrorKind::Json(_)) => {
                warn!(error = %e, "Unreadable roster, rebuilding");
            }
            Err(e) => return Err(e),
        }
        self.rebuild(season).await.map(|_| ())
    }

    /// Fetch the roster for `season` and overwrite the persisted table.
    #[instrument(skip_all, fields(season = %season))]
    pub async fn rebuild(&self, season: &Season) -> StatlineResult<RosterTable> {
        let roster = self.gateway.fetch_roster(season).await.inspect_err(|e| {
            error!(season = %season, error = %e, "Roster fetch failed");
        })?;

        let mut players = BTreeMap::new();
        for identity in roster {
            if let Some(previous) = players.insert(identity.display_name.clone(), identity.id) {
                warn!(
                    name = %identity.display_name,
                    previous = %previous,
                    kept = %identity.id,
                    "Duplicate display name in roster"
                );
            }
        }

        let table = RosterTable {
            season: season.clone(),
            built_at: self.clock.now(),
            players,
        };
        self.storage
            .save_json(PLAYER_IDS_TABLE, season.as_str(), &table)
            .await?;

        info!(players = table.len(), "Built player id index");
        Ok(table)
    }

    /// Persisted roster for `season`, without fetching.
    pub async fn table(&self, season: &Season) -> StatlineResult<Option<RosterTable>> {
        self.storage.load_json(PLAYER_IDS_TABLE, season.as_str()).await
    }

    /// Look up `name` in the roster for `season`.
    ///
    /// Builds the roster first if needed. Any failure along the way, including
    /// a failed roster fetch, is logged and reported as "not found".
    #[instrument(skip_all, fields(name = %name, season = %season))]
    pub async fn resolve(&self, name: &str, season: &Season) -> Option<PlayerId> {
        if let Err(e) = self.ensure_built(season).await {
            warn!(error = %e, "Could not build roster, treating player as not found");
            return None;
        }

        let table = match self.table(season).await {
            Ok(Some(table)) => table,
            Ok(None) => {
                warn!("Roster missing after build");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Could not read roster, treating player as not found");
                return None;
            }
        };

        let id = table.get(name);
        debug!(name, found = id.is_some(), "Resolved player name");
        id
    }
}

impl std::fmt::Debug for IdentityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityIndex")
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}
