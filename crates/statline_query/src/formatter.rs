//! Markdown-style table rendering of a record category.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use statline_core::{StatRecord, StatRow};
use statline_error::CategoryNotFoundError;

/// Column filtering and renaming rules.
///
/// # Examples
///
/// ```
/// use statline_query::FormatterConfig;
///
/// let config = FormatterConfig::default().with_hidden_columns(vec!["GP".to_string()]);
/// assert_eq!(config.hidden_columns(), &vec!["GP".to_string()]);
/// assert!(config.renamed_columns().iter().any(|r| r.from == "SEASON_ID" && r.to == "season"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct FormatterConfig {
    /// Columns never shown
    #[serde(default = "default_hidden_columns")]
    hidden_columns: Vec<String>,

    /// Provider column name to displayed name
    #[serde(default = "default_renamed_columns")]
    renamed_columns: Vec<ColumnRename>,
}

/// Display name for one provider column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRename {
    /// Column name as the provider sends it
    pub from: String,
    /// Name shown in the rendered header
    pub to: String,
}

impl ColumnRename {
    /// Show column `from` as `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

fn default_hidden_columns() -> Vec<String> {
    ["PLAYER_ID", "LEAGUE_ID", "TEAM_ID", "Team_ID", "ORGANIZATION_ID"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_renamed_columns() -> Vec<ColumnRename> {
    vec![
        ColumnRename::new("SEASON_ID", "season"),
        ColumnRename::new("TEAM_ABBREVIATION", "team"),
        ColumnRename::new("PLAYER_AGE", "age"),
    ]
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            hidden_columns: default_hidden_columns(),
            renamed_columns: default_renamed_columns(),
        }
    }
}

/// Renders one category of a [`StatRecord`] as a three-line table.
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    config: FormatterConfig,
}

impl RecordFormatter {
    /// Formatter applying `config`.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Rules in use.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render the category stored under `key`.
    ///
    /// Produces a header line, a `:-:` separator line and a values line,
    /// joined by `\n`. Hidden columns are dropped, renamed columns relabelled,
    /// and the remaining columns keep the row's order. A category with an
    /// empty row renders as three empty lines.
    ///
    /// # Errors
    ///
    /// [`CategoryNotFoundError`] when the record has no category `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use statline_core::{PlayerId, StatRecord, StatRow, StatType};
    /// use statline_query::RecordFormatter;
    ///
    /// let mut row = StatRow::new();
    /// row.push("PLAYER_ID", json!(1718));
    /// row.push("SEASON_ID", json!("2008-09"));
    /// row.push("PTS", json!(1528));
    ///
    /// let mut record = StatRecord::new(PlayerId::new(1718), StatType::Totals);
    /// record.insert("SeasonTotalsRegularSeason 2008-09", row);
    ///
    /// let table = RecordFormatter::default()
    ///     .render(&record, "SeasonTotalsRegularSeason 2008-09")
    ///     .unwrap();
    /// assert_eq!(table, "season|PTS\n:-:|:-:\n2008-09|1528");
    /// ```
    pub fn render(&self, record: &StatRecord, key: &str) -> Result<String, CategoryNotFoundError> {
        let row = record
            .category(key)
            .ok_or_else(|| CategoryNotFoundError::new(key))?;
        Ok(self.render_row(row))
    }

    fn render_row(&self, row: &StatRow) -> String {
        let (headers, values): (Vec<&str>, Vec<String>) = row
            .iter()
            .filter(|(column, _)| !self.config.hidden_columns.iter().any(|hidden| hidden == *column))
            .map(|(column, value)| {
                let header = self
                    .config
                    .renamed_columns
                    .iter()
                    .find(|rename| rename.from == *column)
                    .map(|rename| rename.to.as_str())
                    .unwrap_or(column.as_str());
                (header, render_scalar(value))
            })
            .unzip();

        let separator = vec![":-:"; headers.len()];
        [headers.join("|"), separator.join("|"), values.join("|")].join("\n")
    }
}

fn render_scalar(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
