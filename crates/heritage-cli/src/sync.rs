//! `sync`: enrich with the full schema and store the result in `heritage`.

use heritage_client::{FullSchema, HeritageClient};

/// Enrich up to `limit` items and insert them.
///
/// When `dry_run` is `true` the items are listed on stdout and nothing is
/// written.
///
/// # Errors
///
/// Returns an error if an insert fails. Rows inserted before the failure are
/// kept.
pub(crate) async fn run_sync(
    pool: &sqlx::PgPool,
    client: &HeritageClient,
    limit: usize,
    dry_run: bool,
) -> anyhow::Result<()> {
    let items = client.enrich::<FullSchema>(limit).await;

    if dry_run {
        let names: Vec<&str> = items.iter().map(|i| i.listing.name.as_str()).collect();
        println!(
            "dry-run: would store {} items: [{}]",
            items.len(),
            names.join(", ")
        );
        return Ok(());
    }

    let inserted = heritage_db::insert_heritage(pool, &items).await?;
    tracing::info!(requested = limit, inserted, "sync complete");
    println!("stored {inserted} heritage items");
    Ok(())
}
