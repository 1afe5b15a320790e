//! Free-text request parser.
//!
//! Requests look like `Get Paul Pierce's 2008-09 regular season per game totals`.
//! Only a handful of keywords matter; everything else in the sentence is
//! ignored.

use regex::Regex;
use statline_core::{CategoryKey, CategoryScope, CategoryTable, Season, SeasonType, StatType};
use statline_error::{ParseError, ParseErrorKind};
use std::sync::LazyLock;

const NAME_START: &str = "Get ";
const NAME_END: &str = "'s ";

static SEASON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{4}-\d{2})\b").expect("season pattern is a valid regex")
});

/// Season-type keywords in priority order.
const SEASON_TYPE_WORDS: [(&str, SeasonType); 4] = [
    ("regular", SeasonType::RegularSeason),
    ("postseason", SeasonType::PostSeason),
    ("college", SeasonType::CollegeSeason),
    ("allstar", SeasonType::AllStarSeason),
];

/// Structured form of a free-text request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Display name, matched exactly against the roster
    pub player: String,
    /// Season the roster lookup and freshness check are scoped to
    pub season: Season,
    /// Category to render
    pub category_key: CategoryKey,
    /// Aggregation mode to fetch
    pub stat_type: StatType,
}

impl ParsedRequest {
    /// Whether the request named a season instead of falling back to the current one.
    pub fn has_explicit_season(&self) -> bool {
        self.category_key.season.is_some()
    }
}

/// Parse a request, using `current_season` when none is named.
///
/// A request without a season is a career request: its category key carries
/// no season suffix.
///
/// # Errors
///
/// - [`ParseErrorKind::NoName`] when there is no `Get <name>'s ` phrase.
/// - [`ParseErrorKind::NoSeasonType`] when none of `regular`, `postseason`,
///   `college` or `allstar` appears.
///
/// # Examples
///
/// ```
/// use statline_core::{Season, StatType};
/// use statline_query::parse_request;
///
/// let current: Season = "2016-17".parse().unwrap();
/// let request = parse_request("Get Kevin Garnett's career postseason per 36 totals", &current).unwrap();
/// assert_eq!(request.player, "Kevin Garnett");
/// assert_eq!(request.category_key.to_string(), "CareerTotalsPostSeason");
/// assert_eq!(request.stat_type, StatType::Per36);
/// ```
pub fn parse_request(text: &str, current_season: &Season) -> Result<ParsedRequest, ParseError> {
    let (player, rest) = split_name(text).ok_or_else(|| ParseError::new(ParseErrorKind::NoName))?;

    let lowered = text.to_lowercase();

    let scope = if lowered.contains("career") {
        CategoryScope::Career
    } else {
        CategoryScope::Season
    };
    let table = if lowered.contains("rankings") {
        CategoryTable::Rankings
    } else {
        CategoryTable::Totals
    };
    let season_type = SEASON_TYPE_WORDS
        .iter()
        .find(|(word, _)| lowered.contains(word))
        .map(|(_, season_type)| *season_type)
        .ok_or_else(|| ParseError::new(ParseErrorKind::NoSeasonType))?;

    let mut category_key = CategoryKey::new(scope, table, season_type);
    let season = match leading_season(rest) {
        Some(season) => {
            category_key = category_key.with_season(season.clone());
            season
        }
        None => current_season.clone(),
    };

    let stat_type = if lowered.contains("per game") {
        StatType::PerGame
    } else if lowered.contains("per 36") {
        StatType::Per36
    } else {
        StatType::Totals
    };

    tracing::debug!(
        player,
        season = %season,
        category = %category_key,
        stat_type = %stat_type,
        "Parsed request"
    );

    Ok(ParsedRequest {
        player: player.to_string(),
        season,
        category_key,
        stat_type,
    })
}

/// Name between the first `Get ` and the next `'s `, plus the text after it.
fn split_name(text: &str) -> Option<(&str, &str)> {
    let (_, after_get) = text.split_once(NAME_START)?;
    let (name, rest) = after_get.split_once(NAME_END)?;
    if name.trim().is_empty() {
        return None;
    }
    Some((name, rest))
}

fn leading_season(rest: &str) -> Option<Season> {
    let label = SEASON_PATTERN.captures(rest)?.get(1)?.as_str();
    label.parse().ok()
}
