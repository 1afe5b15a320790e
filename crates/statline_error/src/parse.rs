//! Request parsing errors.

/// What the request parser expected but did not find.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ParseErrorKind {
    /// No `Get <name>'s ` phrase in the request
    #[display("no name")]
    NoName,
    /// None of the season-type words appear in the request
    #[display("no season type")]
    NoSeasonType,
    /// A season string is not in `YYYY-YY` form
    #[display("invalid season: {}", _0)]
    InvalidSeason(String),
}

/// Parse error with location tracking.
///
/// # Examples
///
/// ```
/// use statline_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::NoSeasonType);
/// assert_eq!(err.kind.to_string(), "no season type");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The unmet expectation
    pub kind: ParseErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ParseError {
    /// Create a new parse error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
