//! Player lookup misses.

/// No identifier could be resolved for a player in a season.
///
/// This is a normal negative result rather than a system fault.
///
/// # Examples
///
/// ```
/// use statline_error::NotFoundError;
///
/// let err = NotFoundError::new("Paul Pierce", "2030-31");
/// assert_eq!(err.player, "Paul Pierce");
/// assert!(err.to_string().contains("2030-31"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Player not found: {} in season {} at line {} in {}", player, season, line, file)]
pub struct NotFoundError {
    /// Display name that was looked up, or a placeholder when unknown
    pub player: String,
    /// Season the lookup was scoped to
    pub season: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new not-found error at the current location.
    #[track_caller]
    pub fn new(player: impl Into<String>, season: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            player: player.into(),
            season: season.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
