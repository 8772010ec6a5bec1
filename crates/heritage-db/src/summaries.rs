//! Database operations for the `heritage_vo` table.

use chrono::{DateTime, Utc};
use heritage_core::HeritageSummary;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `heritage_vo` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HeritageSummaryRow {
    pub id: i64,
    pub sn: String,
    pub no: String,
    pub ccma_name: String,
    pub ccba_mnm1: String,
    pub ccba_mnm2: String,
    pub longitude: String,
    pub latitude: String,
    pub gcode_name: String,
    pub image_url: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Inserts one row per summary, sequentially and without a transaction.
///
/// Binds exactly the ten stored columns. Returns the number of rows inserted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on the first failing insert; earlier rows stay.
pub async fn insert_heritage_summaries(
    pool: &PgPool,
    summaries: &[HeritageSummary],
) -> Result<usize, DbError> {
    for summary in summaries {
        sqlx::query(
            "INSERT INTO heritage_vo \
                 (sn, no, ccma_name, ccba_mnm1, ccba_mnm2, longitude, latitude, gcode_name, \
                  image_url, content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(&summary.sn)
        .bind(&summary.no)
        .bind(&summary.designation)
        .bind(&summary.name)
        .bind(&summary.name_hanja)
        .bind(&summary.longitude)
        .bind(&summary.latitude)
        .bind(&summary.category_major)
        .bind(&summary.image_url)
        .bind(&summary.content)
        .execute(pool)
        .await?;
    }

    tracing::debug!(count = summaries.len(), "inserted heritage summaries");
    Ok(summaries.len())
}

/// Returns stored summary rows in insertion order, up to `limit`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_heritage_summaries(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<HeritageSummaryRow>, DbError> {
    let rows = sqlx::query_as::<_, HeritageSummaryRow>(
        "SELECT id, sn, no, ccma_name, ccba_mnm1, ccba_mnm2, longitude, latitude, gcode_name, \
                image_url, content, created_at \
         FROM heritage_vo \
         ORDER BY id \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
