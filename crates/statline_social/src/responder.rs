//! Replies to matched comments.

use futures::{Stream, StreamExt, future};
use statline_error::StatlineErrorKind;
use statline_query::QueryResolver;
use tracing::{error, info, instrument, warn};

/// Answers request comments through a [`QueryResolver`].
///
/// Normal negative outcomes (unparseable request, unknown player, missing
/// category) get a short human reply. Provider and storage failures are
/// logged and get no reply.
#[derive(Debug, Clone)]
pub struct QueryResponder {
    resolver: QueryResolver,
}

impl QueryResponder {
    /// Responder backed by `resolver`.
    pub fn new(resolver: QueryResolver) -> Self {
        Self { resolver }
    }

    /// Reply to one comment, if it warrants one.
    #[instrument(skip_all, fields(comment = %comment))]
    pub async fn respond(&self, comment: &str) -> Option<String> {
        let err = match self.resolver.resolve(comment).await {
            Ok(table) => {
                info!("Answered request");
                return Some(table);
            }
            Err(e) => e,
        };

        match err.kind() {
            StatlineErrorKind::Parse(parse) => {
                warn!(error = %err, "Could not parse request");
                Some(format!("Sorry, I couldn't read that request ({}).", parse.kind))
            }
            StatlineErrorKind::NotFound(not_found) => {
                warn!(error = %err, "Player not found");
                Some(format!(
                    "Sorry, I couldn't find {} in the {} season.",
                    not_found.player, not_found.season
                ))
            }
            StatlineErrorKind::CategoryNotFound(missing) => {
                warn!(error = %err, "Category not found");
                Some(format!("Sorry, there are no {} stats for that player.", missing.key))
            }
            _ => {
                error!(error = %err, "Request failed, not replying");
                None
            }
        }
    }

    /// Answer every comment of `comments` in order, skipping those without a reply.
    ///
    /// Each comment is resolved to completion before the next one is pulled.
    pub fn replies<S>(&self, comments: S) -> impl Stream<Item = (String, String)>
    where
        S: Stream<Item = String>,
    {
        comments
            .then(move |comment| async move {
                let reply = self.respond(&comment).await;
                reply.map(|reply| (comment, reply))
            })
            .filter_map(future::ready)
    }
}
