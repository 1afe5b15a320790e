//! Category keys identifying one table inside a [`StatRecord`](crate::StatRecord).

use crate::Season;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a category covers a single season or a whole career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString)]
pub enum CategoryScope {
    /// One row per season
    Season,
    /// Aggregate row
    Career,
}

/// Raw numbers or league rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString)]
pub enum CategoryTable {
    /// Counting stats
    Totals,
    /// League-wide ranks
    Rankings,
}

/// Which part of the calendar a category covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString)]
pub enum SeasonType {
    /// Regular season games
    RegularSeason,
    /// Playoff games
    PostSeason,
    /// College games
    CollegeSeason,
    /// All-Star games
    AllStarSeason,
}

/// Composite key naming one category of a record.
///
/// Renders as the provider's result-set name, with a trailing season label for
/// single-season rows.
///
/// # Examples
///
/// ```
/// use statline_core::{CategoryKey, CategoryScope, CategoryTable, SeasonType};
///
/// let career = CategoryKey::new(CategoryScope::Career, CategoryTable::Totals, SeasonType::PostSeason);
/// assert_eq!(career.to_string(), "CareerTotalsPostSeason");
///
/// let season = CategoryKey::new(CategoryScope::Season, CategoryTable::Totals, SeasonType::RegularSeason)
///     .with_season("2008-09".parse().unwrap());
/// assert_eq!(season.to_string(), "SeasonTotalsRegularSeason 2008-09");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryKey {
    /// Season or career
    pub scope: CategoryScope,
    /// Totals or rankings
    pub table: CategoryTable,
    /// Regular, post, college or all-star
    pub season_type: SeasonType,
    /// Season suffix, present only for single-season rows
    pub season: Option<Season>,
}

impl CategoryKey {
    /// Key without a season suffix.
    pub fn new(scope: CategoryScope, table: CategoryTable, season_type: SeasonType) -> Self {
        Self {
            scope,
            table,
            season_type,
            season: None,
        }
    }

    /// Attach a season suffix.
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Result-set name without the season suffix.
    pub fn base_name(&self) -> String {
        format!("{}{}{}", self.scope, self.table, self.season_type)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.season {
            Some(season) => write!(f, "{} {}", self.base_name(), season),
            None => write!(f, "{}", self.base_name()),
        }
    }
}
