//! Wire types for the provider's tabular JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Top-level envelope returned by every provider endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSetsResponse {
    /// One entry per table in the response
    #[serde(rename = "resultSets", alias = "resultSet")]
    pub result_sets: Vec<ResultSet>,
}

/// One named table: ordered headers and zero or more rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Category name, e.g. `SeasonTotalsRegularSeason`
    pub name: String,
    /// Column names in provider order
    pub headers: Vec<String>,
    /// Rows of scalars aligned with `headers`
    #[serde(rename = "rowSet")]
    pub rows: Vec<Vec<JsonValue>>,
}

impl ResultSet {
    /// Position of `header` in this set's columns.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}
