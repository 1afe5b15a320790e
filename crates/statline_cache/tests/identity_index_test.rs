//! Tests for the season-scoped player id index.

mod cache_test_helpers;

use cache_test_helpers::{CountingProvider, gateway, season};
use statline_cache::{IdentityIndex, PLAYER_IDS_TABLE};
use statline_core::PlayerId;
use statline_error::StatlineErrorKind;
use statline_storage::{FileSystemStorage, MemoryStorage, TableStorage};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_ensure_built_fetches_once() {
    let provider = CountingProvider::new();
    let index = IdentityIndex::new(Arc::new(MemoryStorage::new()), gateway(&provider));

    for _ in 0..5 {
        index.ensure_built(&season("2008-09")).await.unwrap();
    }

    assert_eq!(provider.roster_calls(), 1);
}

#[tokio::test]
async fn test_resolve_exact_name() {
    let provider = CountingProvider::new();
    let index = IdentityIndex::new(Arc::new(MemoryStorage::new()), gateway(&provider));

    let id = index.resolve("Paul Pierce", &season("2008-09")).await;
    assert_eq!(id, Some(PlayerId::new(1718)));
}

#[tokio::test]
async fn test_resolve_is_case_sensitive() {
    let provider = CountingProvider::new();
    let index = IdentityIndex::new(Arc::new(MemoryStorage::new()), gateway(&provider));

    assert!(index.resolve("paul pierce", &season("2008-09")).await.is_none());
    assert!(index.resolve("Paul", &season("2008-09")).await.is_none());
}

#[tokio::test]
async fn test_ids_are_scoped_per_season() {
    let provider = CountingProvider::new();
    let index = IdentityIndex::new(Arc::new(MemoryStorage::new()), gateway(&provider));

    let early = index.resolve("Kevin Garnett", &season("2008-09")).await;
    let later = index.resolve("Kevin Garnett", &season("2015-16")).await;

    assert_eq!(early, Some(PlayerId::new(708)));
    assert_eq!(later, Some(PlayerId::new(10_708)));
    assert_eq!(provider.roster_calls(), 2);
}

#[tokio::test]
async fn test_build_failure_degrades_to_not_found() {
    let provider = CountingProvider::new();
    provider.set_failing(true);
    let storage = Arc::new(MemoryStorage::new());
    let index = IdentityIndex::new(storage.clone(), gateway(&provider));

    assert!(index.resolve("Paul Pierce", &season("2008-09")).await.is_none());
    assert!(storage.is_empty());

    let err = index.ensure_built(&season("2008-09")).await.unwrap_err();
    assert!(matches!(err.kind(), StatlineErrorKind::Fetch(_)));
}

#[tokio::test]
async fn test_failed_build_is_retried_on_next_call() {
    let provider = CountingProvider::new();
    provider.set_failing(true);
    let index = IdentityIndex::new(Arc::new(MemoryStorage::new()), gateway(&provider));

    assert!(index.resolve("Paul Pierce", &season("2008-09")).await.is_none());
    provider.set_failing(false);
    assert!(index.resolve("Paul Pierce", &season("2008-09")).await.is_some());
    assert_eq!(provider.roster_calls(), 2);
}

#[tokio::test]
async fn test_rebuild_refetches() {
    let provider = CountingProvider::new();
    let index = IdentityIndex::new(Arc::new(MemoryStorage::new()), gateway(&provider));

    index.ensure_built(&season("2008-09")).await.unwrap();
    let table = index.rebuild(&season("2008-09")).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(provider.roster_calls(), 2);
}

#[tokio::test]
async fn test_roster_persists_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let provider = CountingProvider::new();

    let first = IdentityIndex::new(
        Arc::new(FileSystemStorage::new(temp_dir.path()).unwrap()),
        gateway(&provider),
    );
    first.ensure_built(&season("2008-09")).await.unwrap();

    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    assert!(storage.exists(PLAYER_IDS_TABLE, "2008-09").await.unwrap());

    let second = IdentityIndex::new(Arc::new(storage), gateway(&provider));
    assert_eq!(
        second.resolve("Paul Pierce", &season("2008-09")).await,
        Some(PlayerId::new(1718))
    );
    assert_eq!(provider.roster_calls(), 1);
}

#[tokio::test]
async fn test_corrupt_roster_is_rebuilt() {
    let provider = CountingProvider::new();
    let storage = Arc::new(MemoryStorage::new());
    storage
        .write(PLAYER_IDS_TABLE, "2008-09", b"garbage")
        .await
        .unwrap();
    let index = IdentityIndex::new(storage.clone(), gateway(&provider));

    for _ in 0..3 {
        assert_eq!(
            index.resolve("Paul Pierce", &season("2008-09")).await,
            Some(PlayerId::new(1718))
        );
    }

    assert_eq!(provider.roster_calls(), 1);
    assert!(index.table(&season("2008-09")).await.unwrap().is_some());
}
