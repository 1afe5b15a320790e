//! Command handlers.

use futures::StreamExt;
use statline::{Season, Statline, listen};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tracing::{info, warn};

/// Resolve one request and print the table.
pub async fn run_query(statline: &Statline, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let table = statline.query(text).await?;
    println!("{}", table);
    Ok(())
}

/// Build (or rebuild) a season's roster and print a summary.
pub async fn run_roster(
    statline: &Statline,
    season: &str,
    rebuild: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let season: Season = season.parse()?;
    match statline.roster(&season, rebuild).await? {
        Some(table) => {
            println!(
                "{}: {} players (built {})",
                table.season,
                table.len(),
                table.built_at.to_rfc3339()
            );
        }
        None => warn!(season = %season, "No roster stored"),
    }
    Ok(())
}

/// Treat stdin lines as the comment stream and print each reply.
pub async fn run_listen(statline: &Statline) -> Result<(), Box<dyn std::error::Error>> {
    let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines()).filter_map(|line| {
        futures::future::ready(match line {
            Ok(line) => Some(line),
            Err(e) => {
                warn!(error = %e, "Could not read comment");
                None
            }
        })
    });

    info!(pattern = %statline.comment_filter().pattern(), "Listening on stdin");

    let responder = statline.responder();
    let replies = responder.replies(listen(lines, statline.comment_filter().clone()));
    let mut replies = std::pin::pin!(replies);
    while let Some((comment, reply)) = replies.next().await {
        println!("> {}\n{}\n", comment, reply);
    }

    info!("Comment stream ended");
    Ok(())
}
