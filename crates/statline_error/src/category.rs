//! Missing record category.

/// A category key is absent from an otherwise successful record.
///
/// Usually points at a mismatch between the parsed request and the data the
/// provider returned (e.g. asking for a season the player did not play).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Category not found: {} at line {} in {}", key, line, file)]
pub struct CategoryNotFoundError {
    /// The category key that was requested
    pub key: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CategoryNotFoundError {
    /// Create a new error for `key` at the current location.
    #[track_caller]
    pub fn new(key: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: key.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
