//! Test helpers for cache tests.
//!
//! Provides a scripted provider that counts round-trips.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use statline_core::{PlayerId, Season, StatType};
use statline_error::{FetchError, FetchErrorKind, StatlineResult};
use statline_provider::{FetchGateway, ResultSet, StatsProvider};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Provider that serves a fixed roster and a points column that changes per call.
#[derive(Default)]
pub struct CountingProvider {
    roster_calls: AtomicUsize,
    stats_calls: AtomicUsize,
    failing: AtomicBool,
}

impl CountingProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn roster_calls(&self) -> usize {
        self.roster_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StatlineResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::new(FetchErrorKind::Status {
                status: 400,
                message: "player not found upstream".to_string(),
            })
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl StatsProvider for CountingProvider {
    async fn roster_sets(&self, season: &Season) -> StatlineResult<Vec<ResultSet>> {
        self.roster_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        // Ids differ per season on purpose
        let offset = if season.as_str() == "2008-09" { 0 } else { 10_000 };
        Ok(vec![ResultSet {
            name: "CommonAllPlayers".to_string(),
            headers: vec![
                "PERSON_ID".to_string(),
                "DISPLAY_LAST_COMMA_FIRST".to_string(),
                "DISPLAY_FIRST_LAST".to_string(),
            ],
            rows: vec![
                vec![json!(1718 + offset), json!("Pierce, Paul"), json!("Paul Pierce")],
                vec![json!(708 + offset), json!("Garnett, Kevin"), json!("Kevin Garnett")],
            ],
        }])
    }

    async fn career_sets(&self, _id: PlayerId, _stat_type: StatType) -> StatlineResult<Vec<ResultSet>> {
        let call = self.stats_calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.check()?;
        Ok(vec![ResultSet {
            name: "CareerTotalsRegularSeason".to_string(),
            headers: vec!["PLAYER_ID".to_string(), "GP".to_string(), "FETCH".to_string()],
            rows: vec![vec![json!(1718), json!(1343), json!(call)]],
        }])
    }

    fn provider_name(&self) -> &'static str {
        "counting"
    }
}

pub fn gateway(provider: &Arc<CountingProvider>) -> FetchGateway {
    FetchGateway::new(provider.clone())
}

pub fn season(label: &str) -> Season {
    label.parse().unwrap()
}
