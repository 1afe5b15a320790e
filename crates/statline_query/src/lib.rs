//! Request parsing, resolution and rendering.
//!
//! - [`parse_request`] extracts player, season, category and stat type from a
//!   sentence such as `Get Paul Pierce's 2008-09 regular season per game totals`.
//! - [`RecordFormatter`] renders one category of a record as a table.
//! - [`QueryResolver`] ties the parser to the caches and the formatter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod formatter;
mod parser;
mod resolver;

pub use formatter::{ColumnRename, FormatterConfig, FormatterConfigBuilder, RecordFormatter};
pub use parser::{ParsedRequest, parse_request};
pub use resolver::QueryResolver;
