//! End-to-end resolution against a scripted provider.

use async_trait::async_trait;
use serde_json::json;
use statline_cache::{CacheConfig, IdentityIndex, StatRecordStore};
use statline_core::{PlayerId, Season, StatType};
use statline_error::{FetchError, FetchErrorKind, StatlineErrorKind, StatlineResult};
use statline_provider::{FetchGateway, ResultSet, StatsProvider};
use statline_query::{QueryResolver, RecordFormatter};
use statline_storage::MemoryStorage;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
struct ScriptedProvider {
    stats_calls: AtomicUsize,
    stats_failing: AtomicBool,
}

#[async_trait]
impl StatsProvider for ScriptedProvider {
    async fn roster_sets(&self, _season: &Season) -> StatlineResult<Vec<ResultSet>> {
        Ok(vec![ResultSet {
            name: "CommonAllPlayers".to_string(),
            headers: vec![
                "PERSON_ID".to_string(),
                "DISPLAY_LAST_COMMA_FIRST".to_string(),
                "DISPLAY_FIRST_LAST".to_string(),
            ],
            rows: vec![vec![json!(1718), json!("Pierce, Paul"), json!("Paul Pierce")]],
        }])
    }

    async fn career_sets(&self, id: PlayerId, _stat_type: StatType) -> StatlineResult<Vec<ResultSet>> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        if self.stats_failing.load(Ordering::SeqCst) {
            return Err(FetchError::new(FetchErrorKind::Http("connection reset".to_string())).into());
        }
        let headers = vec![
            "PLAYER_ID".to_string(),
            "SEASON_ID".to_string(),
            "TEAM_ABBREVIATION".to_string(),
            "PTS".to_string(),
        ];
        Ok(vec![
            ResultSet {
                name: "SeasonTotalsRegularSeason".to_string(),
                headers: headers.clone(),
                rows: vec![
                    vec![json!(id.get()), json!("2007-08"), json!("BOS"), json!(19.6)],
                    vec![json!(id.get()), json!("2008-09"), json!("BOS"), json!(20.5)],
                ],
            },
            ResultSet {
                name: "CareerTotalsRegularSeason".to_string(),
                headers: vec!["PLAYER_ID".to_string(), "PTS".to_string()],
                rows: vec![vec![json!(id.get()), json!(19.7)]],
            },
            ResultSet {
                name: "CareerTotalsPostSeason".to_string(),
                headers,
                rows: vec![],
            },
        ])
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

fn resolver(provider: &Arc<ScriptedProvider>) -> QueryResolver {
    let storage = Arc::new(MemoryStorage::new());
    let gateway = FetchGateway::new(provider.clone());
    let config = CacheConfig::default().with_current_season("2016-17".parse().unwrap());
    QueryResolver::new(
        IdentityIndex::new(storage.clone(), gateway.clone()),
        StatRecordStore::new(storage, gateway, config),
        RecordFormatter::default(),
    )
}

#[tokio::test]
async fn test_resolve_season_request() {
    let provider = Arc::new(ScriptedProvider::default());

    let table = resolver(&provider)
        .resolve("Get Paul Pierce's 2008-09 regular season per game totals")
        .await
        .unwrap();

    assert_eq!(table, "season|team|PTS\n:-:|:-:|:-:\n2008-09|BOS|20.5");
}

#[tokio::test]
async fn test_resolve_career_request() {
    let provider = Arc::new(ScriptedProvider::default());

    let table = resolver(&provider)
        .resolve("Get Paul Pierce's career regular season totals")
        .await
        .unwrap();

    assert_eq!(table, "PTS\n:-:\n19.7");
}

#[tokio::test]
async fn test_resolve_empty_category() {
    let provider = Arc::new(ScriptedProvider::default());

    let table = resolver(&provider)
        .resolve("Get Paul Pierce's career postseason totals")
        .await
        .unwrap();

    assert_eq!(table, "\n\n");
}

#[tokio::test]
async fn test_resolve_unknown_player_never_fetches_stats() {
    let provider = Arc::new(ScriptedProvider::default());

    let err = resolver(&provider)
        .resolve("Get Larry Bird's 1985-86 regular season totals")
        .await
        .unwrap_err();

    match err.kind() {
        StatlineErrorKind::NotFound(not_found) => {
            assert_eq!(not_found.player, "Larry Bird");
            assert_eq!(not_found.season, "1985-86");
        }
        other => panic!("expected NotFound, got {other}"),
    }
    assert_eq!(provider.stats_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_resolve_missing_category() {
    let provider = Arc::new(ScriptedProvider::default());

    let err = resolver(&provider)
        .resolve("Get Paul Pierce's 2008-09 allstar totals")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StatlineErrorKind::CategoryNotFound(_)));
}

#[tokio::test]
async fn test_resolve_surfaces_fetch_failure() {
    let provider = Arc::new(ScriptedProvider::default());
    provider.stats_failing.store(true, Ordering::SeqCst);

    let err = resolver(&provider)
        .resolve("Get Paul Pierce's 2008-09 regular season totals")
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StatlineErrorKind::Fetch(_)));
    assert_eq!(provider.stats_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resolve_surfaces_parse_error() {
    let provider = Arc::new(ScriptedProvider::default());

    let err = resolver(&provider).resolve("How many points?").await.unwrap_err();

    assert!(matches!(err.kind(), StatlineErrorKind::Parse(_)));
}

#[tokio::test]
async fn test_repeat_request_hits_cache() {
    let provider = Arc::new(ScriptedProvider::default());
    let resolver = resolver(&provider);

    for _ in 0..3 {
        resolver
            .resolve("Get Paul Pierce's 2008-09 regular season totals")
            .await
            .unwrap();
    }

    assert_eq!(provider.stats_calls.load(Ordering::SeqCst), 1);
}
