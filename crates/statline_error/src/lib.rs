//! Error types for the Statline library.
//!
//! This crate provides the error types shared by every Statline crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use statline_error::{ParseError, ParseErrorKind, StatlineErrorKind, StatlineResult};
//!
//! fn parse_request() -> StatlineResult<String> {
//!     Err(ParseError::new(ParseErrorKind::NoName))?
//! }
//!
//! let err = parse_request().unwrap_err();
//! assert!(matches!(err.kind(), StatlineErrorKind::Parse(_)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod config;
mod error;
mod fetch;
mod json;
mod not_found;
mod parse;
mod storage;

pub use category::CategoryNotFoundError;
pub use config::ConfigError;
pub use error::{StatlineError, StatlineErrorKind, StatlineResult};
pub use fetch::{FetchError, FetchErrorKind};
pub use json::JsonError;
pub use not_found::NotFoundError;
pub use parse::{ParseError, ParseErrorKind};
pub use storage::{StorageError, StorageErrorKind};
