//! Database operations for the `heritage_image` table.

use chrono::{DateTime, Utc};
use heritage_core::HeritageImage;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `heritage_image` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HeritageImageRow {
    pub id: i64,
    pub image_no: String,
    pub image_url: String,
    pub ccim_desc: String,
    pub sn: String,
    pub no: String,
    pub ccba_kdcd: String,
    pub ccba_ctcd: String,
    pub ccba_asno: String,
    pub created_at: DateTime<Utc>,
}

/// Inserts one row per image, sequentially and without a transaction.
///
/// Returns the number of rows inserted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on the first failing insert; earlier rows stay.
pub async fn insert_heritage_images(
    pool: &PgPool,
    images: &[HeritageImage],
) -> Result<usize, DbError> {
    for image in images {
        sqlx::query(
            "INSERT INTO heritage_image \
                 (image_no, image_url, ccim_desc, sn, no, ccba_kdcd, ccba_ctcd, ccba_asno) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&image.image_no)
        .bind(&image.image_url)
        .bind(&image.description)
        .bind(&image.sn)
        .bind(&image.no)
        .bind(&image.kind_code)
        .bind(&image.city_code)
        .bind(&image.serial_no)
        .execute(pool)
        .await?;
    }

    tracing::debug!(count = images.len(), "inserted heritage images");
    Ok(images.len())
}

/// Returns stored image rows in insertion order, up to `limit`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_heritage_images(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<HeritageImageRow>, DbError> {
    let rows = sqlx::query_as::<_, HeritageImageRow>(
        "SELECT id, image_no, image_url, ccim_desc, sn, no, ccba_kdcd, ccba_ctcd, ccba_asno, \
                created_at \
         FROM heritage_image \
         ORDER BY id \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
