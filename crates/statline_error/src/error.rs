//! Top-level error wrapper types.

use crate::{
    CategoryNotFoundError, ConfigError, FetchError, JsonError, NotFoundError, ParseError,
    StorageError,
};

/// Every failure a Statline operation can report.
///
/// # Examples
///
/// ```
/// use statline_error::{StatlineError, StatlineErrorKind, NotFoundError};
///
/// let err: StatlineError = NotFoundError::new("LeBron Jamez", "2016-17").into();
/// assert!(matches!(err.kind(), StatlineErrorKind::NotFound(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StatlineErrorKind {
    /// Free-text request could not be parsed
    #[from(ParseError)]
    Parse(ParseError),
    /// Player has no identifier for the requested season
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Remote provider call failed
    #[from(FetchError)]
    Fetch(FetchError),
    /// Requested category is missing from a fetched record
    #[from(CategoryNotFoundError)]
    CategoryNotFound(CategoryNotFoundError),
    /// Persisted table could not be read or written
    #[from(StorageError)]
    Storage(StorageError),
    /// Persisted table could not be encoded or decoded
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Statline error with kind discrimination.
///
/// # Examples
///
/// ```
/// use statline_error::{ConfigError, StatlineResult};
///
/// fn might_fail() -> StatlineResult<()> {
///     Err(ConfigError::new("current_season must look like 2016-17"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Statline Error: {}", _0)]
pub struct StatlineError(Box<StatlineErrorKind>);

impl StatlineError {
    /// Create a new error from a kind.
    pub fn new(kind: StatlineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StatlineErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    pub fn into_kind(self) -> StatlineErrorKind {
        *self.0
    }
}

impl<T> From<T> for StatlineError
where
    T: Into<StatlineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Statline operations.
pub type StatlineResult<T> = std::result::Result<T, StatlineError>;
