//! Tests for stat record freshness.

mod cache_test_helpers;

use cache_test_helpers::{CountingProvider, gateway, season};
use chrono::Duration;
use serde_json::json;
use statline_cache::{CacheConfig, PLAYER_STATS_TABLE, StatRecordStore, entry_key};
use statline_core::{ManualClock, PlayerId, StatType};
use statline_error::StatlineErrorKind;
use statline_storage::{MemoryStorage, TableStorage};
use std::sync::Arc;

const CURRENT: &str = "2016-17";

fn store(provider: &Arc<CountingProvider>, threshold_secs: u64) -> (StatRecordStore, ManualClock) {
    let clock = ManualClock::default();
    let config = CacheConfig::default()
        .with_current_season(season(CURRENT))
        .with_staleness_threshold_secs(threshold_secs);
    let store = StatRecordStore::new(Arc::new(MemoryStorage::new()), gateway(provider), config)
        .with_clock(Arc::new(clock.clone()));
    (store, clock)
}

fn fetch_number(record: &statline_core::StatRecord) -> serde_json::Value {
    record
        .category("CareerTotalsRegularSeason")
        .and_then(|row| row.get("FETCH"))
        .cloned()
        .unwrap()
}

#[tokio::test]
async fn test_missing_subject_never_fetches() {
    let provider = CountingProvider::new();
    let (store, _clock) = store(&provider, 6 * 3600);

    let err = store
        .get(None, &season(CURRENT), StatType::Totals)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), StatlineErrorKind::NotFound(_)));
    assert_eq!(provider.stats_calls(), 0);
}

#[tokio::test]
async fn test_miss_fetches_and_persists() {
    let provider = CountingProvider::new();
    let (store, _clock) = store(&provider, 6 * 3600);
    let id = PlayerId::new(1718);

    let record = store.get(Some(id), &season("2008-09"), StatType::PerGame).await.unwrap();

    assert_eq!(record.stat_type, StatType::PerGame);
    assert_eq!(provider.stats_calls(), 1);
    let entry = store.entry(id, StatType::PerGame).await.unwrap().unwrap();
    assert_eq!(entry.record, record);
}

#[tokio::test]
async fn test_past_season_never_refetches() {
    let provider = CountingProvider::new();
    let (store, clock) = store(&provider, 6 * 3600);
    let id = Some(PlayerId::new(1718));

    store.get(id, &season("2008-09"), StatType::Totals).await.unwrap();
    for days in [1, 30, 365, 3650] {
        clock.advance(Duration::days(days));
        let record = store.get(id, &season("2008-09"), StatType::Totals).await.unwrap();
        assert_eq!(fetch_number(&record), json!(1));
    }

    assert_eq!(provider.stats_calls(), 1);
}

#[tokio::test]
async fn test_current_season_fresh_entry_is_reused() {
    let provider = CountingProvider::new();
    let (store, clock) = store(&provider, 6 * 3600);
    let id = Some(PlayerId::new(1718));

    store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();
    clock.advance(Duration::hours(5) + Duration::minutes(59));
    store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();

    assert_eq!(provider.stats_calls(), 1);
}

#[tokio::test]
async fn test_current_season_stale_entry_refetches_once() {
    let provider = CountingProvider::new();
    let (store, clock) = store(&provider, 6 * 3600);
    let id = Some(PlayerId::new(1718));

    store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();
    clock.advance(Duration::hours(6));

    let refreshed = store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();
    assert_eq!(fetch_number(&refreshed), json!(2));
    assert_eq!(provider.stats_calls(), 2);

    // The refresh reset the timestamp
    let again = store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();
    assert_eq!(fetch_number(&again), json!(2));
    assert_eq!(provider.stats_calls(), 2);
}

#[tokio::test]
async fn test_zero_threshold_always_refetches_current_season() {
    let provider = CountingProvider::new();
    let (store, _clock) = store(&provider, 0);
    let id = Some(PlayerId::new(1718));

    for _ in 0..3 {
        store.get(id, &season(CURRENT), StatType::Per36).await.unwrap();
    }

    assert_eq!(provider.stats_calls(), 3);
}

#[tokio::test]
async fn test_stat_types_are_cached_separately() {
    let provider = CountingProvider::new();
    let (store, _clock) = store(&provider, 6 * 3600);
    let id = Some(PlayerId::new(1718));

    store.get(id, &season("2008-09"), StatType::Totals).await.unwrap();
    store.get(id, &season("2008-09"), StatType::PerGame).await.unwrap();
    store.get(id, &season("2008-09"), StatType::Totals).await.unwrap();

    assert_eq!(provider.stats_calls(), 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_old_entry() {
    let provider = CountingProvider::new();
    let (store, clock) = store(&provider, 60);
    let id = PlayerId::new(1718);

    store.get(Some(id), &season(CURRENT), StatType::Totals).await.unwrap();
    clock.advance(Duration::minutes(5));
    provider.set_failing(true);

    let err = store
        .get(Some(id), &season(CURRENT), StatType::Totals)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), StatlineErrorKind::Fetch(_)));

    let entry = store.entry(id, StatType::Totals).await.unwrap().unwrap();
    assert_eq!(fetch_number(&entry.record), json!(1));
}

#[tokio::test]
async fn test_corrupt_entry_is_replaced() {
    let provider = CountingProvider::new();
    let storage = Arc::new(MemoryStorage::new());
    let id = PlayerId::new(1718);
    storage
        .write(PLAYER_STATS_TABLE, &entry_key(id, StatType::Totals), b"garbage")
        .await
        .unwrap();

    let store = StatRecordStore::new(storage, gateway(&provider), CacheConfig::default());
    store.get(Some(id), &season("2008-09"), StatType::Totals).await.unwrap();

    assert_eq!(provider.stats_calls(), 1);
    assert!(store.entry(id, StatType::Totals).await.unwrap().is_some());
}

#[tokio::test]
async fn test_huge_threshold_never_goes_stale() {
    let provider = CountingProvider::new();
    let (store, clock) = store(&provider, u64::MAX);
    let id = Some(PlayerId::new(1718));

    store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();
    clock.advance(Duration::days(36_500));
    let record = store.get(id, &season(CURRENT), StatType::Totals).await.unwrap();

    assert_eq!(fetch_number(&record), json!(1));
    assert_eq!(provider.stats_calls(), 1);
}
