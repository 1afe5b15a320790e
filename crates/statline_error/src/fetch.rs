//! Remote provider errors.

/// Ways a provider call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FetchErrorKind {
    /// Request could not be sent or the connection failed
    #[display("Request failed: {}", _0)]
    Http(String),
    /// Provider answered with a non-success status
    #[display("Provider returned {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body did not have the expected shape
    #[display("Unexpected response: {}", _0)]
    Decode(String),
}

/// Provider error with location tracking.
///
/// # Examples
///
/// ```
/// use statline_error::{FetchError, FetchErrorKind};
///
/// let err = FetchError::new(FetchErrorKind::Status { status: 400, message: "PlayerID".into() });
/// assert!(err.to_string().contains("400"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
