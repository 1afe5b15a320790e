//! Tests for the assembled application against a scripted provider.

use async_trait::async_trait;
use serde_json::json;
use statline::{
    FetchGateway, FileSystemStorage, PlayerId, ResultSet, Season, Statline, StatlineConfig,
    StatlineResult, StatType, StatsProvider,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

#[derive(Default)]
struct RosterOnlyProvider {
    roster_calls: AtomicUsize,
}

#[async_trait]
impl StatsProvider for RosterOnlyProvider {
    async fn roster_sets(&self, _season: &Season) -> StatlineResult<Vec<ResultSet>> {
        self.roster_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![ResultSet {
            name: "CommonAllPlayers".to_string(),
            headers: vec!["PERSON_ID".to_string(), "DISPLAY_FIRST_LAST".to_string()],
            rows: vec![
                vec![json!(201142), json!("Kevin Durant")],
                vec![json!(2544), json!("LeBron James")],
            ],
        }])
    }

    async fn career_sets(&self, _id: PlayerId, _stat_type: StatType) -> StatlineResult<Vec<ResultSet>> {
        Ok(vec![ResultSet {
            name: "CareerTotalsAllStarSeason".to_string(),
            headers: vec!["PLAYER_ID".to_string(), "GP".to_string(), "PTS".to_string()],
            rows: vec![vec![json!(201142), json!(14), json!(301)]],
        }])
    }

    fn provider_name(&self) -> &'static str {
        "roster-only"
    }
}

fn statline(dir: &TempDir, provider: &Arc<RosterOnlyProvider>) -> Statline {
    let config = StatlineConfig::bundled().unwrap().with_data_dir(dir.path());
    let storage = Arc::new(FileSystemStorage::new(config.cache().resolved_data_dir()).unwrap());
    Statline::with_parts(storage, FetchGateway::new(provider.clone()), &config).unwrap()
}

#[tokio::test]
async fn test_query_end_to_end() {
    let dir = TempDir::new().unwrap();
    let provider = Arc::new(RosterOnlyProvider::default());

    let table = statline(&dir, &provider)
        .query("Get Kevin Durant's career allstar totals")
        .await
        .unwrap();

    assert_eq!(table, "GP|PTS\n:-:|:-:\n14|301");
}

#[tokio::test]
async fn test_roster_build_and_rebuild() {
    let dir = TempDir::new().unwrap();
    let provider = Arc::new(RosterOnlyProvider::default());
    let app = statline(&dir, &provider);
    let season: Season = "2016-17".parse().unwrap();

    let table = app.roster(&season, false).await.unwrap().unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("LeBron James"), Some(PlayerId::new(2544)));

    app.roster(&season, false).await.unwrap();
    assert_eq!(provider.roster_calls.load(Ordering::SeqCst), 1);

    app.roster(&season, true).await.unwrap();
    assert_eq!(provider.roster_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_bundled_listener_pattern() {
    let dir = TempDir::new().unwrap();
    let provider = Arc::new(RosterOnlyProvider::default());
    let app = statline(&dir, &provider);

    assert!(app.comment_filter().matches("Get LeBron James's career allstar totals"));
    assert!(!app.comment_filter().matches("get LeBron James's career allstar totals"));
    assert!(!app.comment_filter().matches("what a dunk"));

    let reply = app
        .responder()
        .respond("Get LeBron James's career allstar totals")
        .await;
    assert!(reply.is_some());
}
