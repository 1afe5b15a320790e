//! Comment stream filtering.

use derive_getters::Getters;
use futures::{Stream, StreamExt, future};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use statline_error::ConfigError;

/// Listener settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct ListenerConfig {
    /// Regex a comment must match, case-insensitively, to be answered.
    ///
    /// The default pins the `Get ` prefix to its exact case with `(?-i:...)`,
    /// since the request parser only recognises that spelling.
    #[serde(default = "default_pattern")]
    pattern: String,
}

fn default_pattern() -> String {
    r"(?-i:Get ).+'s .*(regular|postseason|college|allstar)".to_string()
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
        }
    }
}

/// Case-insensitive regex deciding which comments are requests.
///
/// # Examples
///
/// ```
/// use statline_social::CommentFilter;
///
/// let filter = CommentFilter::new(r"get .+'s ").unwrap();
/// assert!(filter.matches("GET Paul Pierce's career regular season totals"));
/// assert!(!filter.matches("nice game last night"));
/// ```
#[derive(Debug, Clone)]
pub struct CommentFilter {
    regex: Regex,
}

impl CommentFilter {
    /// Compile `pattern` case-insensitively.
    #[track_caller]
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid listener pattern '{}': {}", pattern, e)))?;
        Ok(Self { regex })
    }

    /// Filter built from listener settings.
    #[track_caller]
    pub fn from_config(config: &ListenerConfig) -> Result<Self, ConfigError> {
        Self::new(config.pattern())
    }

    /// Whether `comment` should be answered.
    pub fn matches(&self, comment: &str) -> bool {
        self.regex.is_match(comment)
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Keep only the comments of `comments` that `filter` matches.
///
/// Lazy: nothing is pulled from `comments` until the returned stream is
/// polled, and an unbounded input yields an unbounded output.
pub fn listen<S>(comments: S, filter: CommentFilter) -> impl Stream<Item = String>
where
    S: Stream<Item = String>,
{
    comments.filter(move |comment| {
        let keep = filter.matches(comment);
        if keep {
            tracing::debug!(comment = %comment, "Comment matched listener pattern");
        }
        future::ready(keep)
    })
}
