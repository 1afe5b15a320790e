//! Conversions from provider result sets to Statline records.

use crate::ResultSet;
use serde_json::Value as JsonValue;
use statline_core::{PlayerId, PlayerIdentity, Season, StatRecord, StatRow, StatType};
use tracing::{debug, warn};

const SEASON_COLUMN: &str = "SEASON_ID";
const ID_COLUMN: &str = "PERSON_ID";
const NAME_COLUMN: &str = "DISPLAY_FIRST_LAST";

/// Build a record from a career-stats response.
///
/// - A set with no rows becomes an empty row under its bare name.
/// - `Season*` sets always produce one category per row, keyed
///   `"<name> <season>"`. When a season repeats (a traded player's per-team
///   rows followed by the combined row), the last row wins.
/// - Any other set with several rows is split the same way; a single row is
///   stored under the bare name.
pub fn record_from_result_sets(
    subject_id: PlayerId,
    stat_type: StatType,
    sets: &[ResultSet],
) -> StatRecord {
    let mut record = StatRecord::new(subject_id, stat_type);

    for set in sets {
        let per_season = set.name.starts_with("Season") || set.rows.len() > 1;

        match set.rows.as_slice() {
            [] => record.insert(set.name.clone(), StatRow::new()),
            [row] if !per_season => {
                record.insert(set.name.clone(), StatRow::from_columns(&set.headers, row))
            }
            rows => {
                let season_index = set.column(SEASON_COLUMN).unwrap_or(1);
                for row in rows {
                    let Some(label) = row.get(season_index).and_then(scalar_label) else {
                        warn!(category = %set.name, "Row without a season label, skipping");
                        continue;
                    };
                    record.insert(
                        format!("{} {}", set.name, label),
                        StatRow::from_columns(&set.headers, row),
                    );
                }
            }
        }
    }

    debug!(
        subject_id = %subject_id,
        stat_type = %stat_type,
        categories = record.categories.len(),
        "Converted result sets into record"
    );
    record
}

/// Build a season roster from a player-list response.
///
/// Reads the first result set, taking the id from `PERSON_ID` and the name
/// from `DISPLAY_FIRST_LAST` (columns 0 and 2 when headers are missing).
/// Rows whose id or name cannot be read are skipped.
pub fn roster_from_result_sets(season: &Season, sets: &[ResultSet]) -> Vec<PlayerIdentity> {
    let Some(set) = sets.first() else {
        return Vec::new();
    };

    let id_index = set.column(ID_COLUMN).unwrap_or(0);
    let name_index = set.column(NAME_COLUMN).unwrap_or(2);

    set.rows
        .iter()
        .filter_map(|row| {
            let id = row.get(id_index).and_then(scalar_id);
            let name = row.get(name_index).and_then(JsonValue::as_str);
            match (id, name) {
                (Some(id), Some(name)) => Some(PlayerIdentity {
                    display_name: name.to_string(),
                    id,
                    season: season.clone(),
                }),
                _ => {
                    warn!(season = %season, ?row, "Unreadable roster row, skipping");
                    None
                }
            }
        })
        .collect()
}

fn scalar_label(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_id(value: &JsonValue) -> Option<PlayerId> {
    match value {
        JsonValue::Number(n) => n.as_i64().map(PlayerId::new),
        JsonValue::String(s) => s.parse().ok().map(PlayerId::new),
        _ => None,
    }
}
