//! Read-only commands that print upstream data as JSON on stdout.

use chrono::{Datelike, Utc};
use heritage_client::{CompactSchema, FullSchema, HeritageClient};

/// Run the enrichment pipeline and print the items as pretty JSON.
///
/// # Errors
///
/// Returns an error only if serialization fails; upstream failures are
/// absorbed by the pipeline and show up as fewer items or placeholders.
pub(crate) async fn run_fetch(
    client: &HeritageClient,
    limit: usize,
    compact: bool,
) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string_pretty(&client.enrich::<CompactSchema>(limit).await)?
    } else {
        serde_json::to_string_pretty(&client.enrich::<FullSchema>(limit).await)?
    };
    println!("{json}");
    Ok(())
}

/// Print festivals for `year`/`month`, defaulting either to the current UTC
/// date.
///
/// # Errors
///
/// Returns an error if the upstream request fails or serialization fails.
pub(crate) async fn run_festivals(
    client: &HeritageClient,
    year: Option<String>,
    month: Option<String>,
    limit: usize,
) -> anyhow::Result<()> {
    let now = Utc::now();
    let year = year.unwrap_or_else(|| now.year().to_string());
    let month = month.unwrap_or_else(|| format!("{:02}", now.month()));

    let festivals = client.try_fetch_festivals(&year, &month, limit).await?;
    if festivals.is_empty() {
        tracing::info!(%year, %month, "no festivals listed");
    }
    println!("{}", serde_json::to_string_pretty(&festivals)?);
    Ok(())
}
