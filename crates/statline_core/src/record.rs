//! Stat records as cached and rendered.

use crate::PlayerId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

/// Aggregation mode requested from the provider.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum StatType {
    /// Raw season totals
    #[default]
    Totals,
    /// Per-game averages
    PerGame,
    /// Normalized to 36 minutes
    Per36,
}

/// One row of a category: column name to scalar, in provider order.
///
/// An empty row means the category exists but had no data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRow(Map<String, JsonValue>);

impl StatRow {
    /// Empty row.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a row by zipping headers with values. Extra values are dropped.
    pub fn from_columns(headers: &[String], values: &[JsonValue]) -> Self {
        let mut map = Map::new();
        for (header, value) in headers.iter().zip(values.iter()) {
            map.insert(header.clone(), value.clone());
        }
        Self(map)
    }

    /// Append a column, keeping insertion order.
    pub fn push(&mut self, column: impl Into<String>, value: JsonValue) {
        self.0.insert(column.into(), value);
    }

    /// Value in `column`, if present.
    pub fn get(&self, column: &str) -> Option<&JsonValue> {
        self.0.get(column)
    }

    /// Columns with their values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.0.iter()
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Every category fetched for one player and stat type.
///
/// # Examples
///
/// ```
/// use statline_core::{PlayerId, StatRecord, StatRow, StatType};
///
/// let mut record = StatRecord::new(PlayerId::new(1718), StatType::PerGame);
/// record.insert("CareerTotalsAllStarSeason", StatRow::new());
///
/// assert!(record.category("CareerTotalsAllStarSeason").unwrap().is_empty());
/// assert!(record.category("CareerTotalsCollegeSeason").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    /// Player the record belongs to
    pub subject_id: PlayerId,
    /// Aggregation mode the record was fetched with
    pub stat_type: StatType,
    /// Category key to row
    pub categories: BTreeMap<String, StatRow>,
}

impl StatRecord {
    /// Record with no categories.
    pub fn new(subject_id: PlayerId, stat_type: StatType) -> Self {
        Self {
            subject_id,
            stat_type,
            categories: BTreeMap::new(),
        }
    }

    /// Insert or replace a category.
    pub fn insert(&mut self, key: impl Into<String>, row: StatRow) {
        self.categories.insert(key.into(), row);
    }

    /// Row stored under `key`, if the key is present.
    pub fn category(&self, key: &str) -> Option<&StatRow> {
        self.categories.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_keeps_provider_order() {
        let headers = vec!["PTS".to_string(), "AST".to_string(), "GP".to_string()];
        let row = StatRow::from_columns(&headers, &[json!(26.1), json!(4.5), json!(82)]);
        let columns: Vec<_> = row.columns().cloned().collect();
        assert_eq!(columns, headers);
    }

    #[test]
    fn test_row_order_survives_serde() {
        let mut row = StatRow::new();
        row.push("Z", json!(1));
        row.push("A", json!(2));
        let encoded = serde_json::to_string(&row).unwrap();
        let decoded: StatRow = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.columns().collect::<Vec<_>>(), vec!["Z", "A"]);
    }

    #[test]
    fn test_stat_type_provider_names() {
        assert_eq!(StatType::PerGame.as_ref(), "PerGame");
        assert_eq!(StatType::Per36.to_string(), "Per36");
        assert_eq!("Totals".parse::<StatType>().unwrap(), StatType::Totals);
    }
}
