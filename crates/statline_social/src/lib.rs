//! Discussion-stream listener for Statline.
//!
//! Watches a stream of comments for stat requests and answers them.
//!
//! - [`CommentFilter`] - case-insensitive regex picking out requests
//! - [`listen`] - lazily filters a comment stream
//! - [`QueryResponder`] - resolves a request and phrases the reply
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use statline_social::{CommentFilter, QueryResponder, listen};
//!
//! let filter = CommentFilter::from_config(&ListenerConfig::default())?;
//! let responder = QueryResponder::new(resolver);
//! let mut replies = std::pin::pin!(responder.replies(listen(comments, filter)));
//! while let Some((comment, reply)) = replies.next().await {
//!     println!("{comment}\n{reply}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod listener;
mod responder;

pub use listener::{CommentFilter, ListenerConfig, ListenerConfigBuilder, listen};
pub use responder::QueryResponder;
