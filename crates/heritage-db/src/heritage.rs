//! Database operations for the `heritage` table.
//!
//! Each row is one enriched full-schema record: the list fields and the
//! detail fields flattened into columns.

use chrono::{DateTime, Utc};
use heritage_core::{EnrichedItem, HeritageDetail, HeritageListing};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `heritage` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HeritageRow {
    pub id: i64,
    pub sn: String,
    pub no: String,
    pub ccma_name: String,
    pub crltsno_nm: String,
    pub ccba_mnm1: String,
    pub ccba_mnm2: String,
    pub ccba_ctcd_nm: String,
    pub ccsi_name: String,
    pub ccba_admin: String,
    pub longitude: String,
    pub latitude: String,
    pub ccba_kdcd: String,
    pub ccba_asno: String,
    pub ccba_ctcd: String,
    pub gcode_name: String,
    pub bcode_name: String,
    pub ccba_lcad: String,
    pub ccce_name: String,
    pub image_url: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

const HERITAGE_COLUMNS: &str = "id, sn, no, ccma_name, crltsno_nm, ccba_mnm1, ccba_mnm2, \
     ccba_ctcd_nm, ccsi_name, ccba_admin, longitude, latitude, ccba_kdcd, ccba_asno, ccba_ctcd, \
     gcode_name, bcode_name, ccba_lcad, ccce_name, image_url, content, created_at";

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Inserts one row per enriched item, in order, one statement at a time.
///
/// No transaction wraps the batch: a failure leaves earlier rows in place.
/// Returns the number of rows inserted.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on the first failing insert.
pub async fn insert_heritage(
    pool: &PgPool,
    items: &[EnrichedItem<HeritageListing, HeritageDetail>],
) -> Result<usize, DbError> {
    for EnrichedItem { listing, detail } in items {
        sqlx::query(
            "INSERT INTO heritage (sn, no, ccma_name, crltsno_nm, ccba_mnm1, ccba_mnm2, \
                 ccba_ctcd_nm, ccsi_name, ccba_admin, longitude, latitude, ccba_kdcd, ccba_asno, \
                 ccba_ctcd, gcode_name, bcode_name, ccba_lcad, ccce_name, image_url, content) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, \
                     $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)",
        )
        .bind(&listing.sn)
        .bind(&listing.no)
        .bind(&listing.designation)
        .bind(&listing.designation_no)
        .bind(&listing.name)
        .bind(&listing.name_hanja)
        .bind(&listing.province)
        .bind(&listing.district)
        .bind(&listing.admin)
        .bind(&listing.longitude)
        .bind(&listing.latitude)
        .bind(&listing.kind_code)
        .bind(&listing.serial_no)
        .bind(&listing.city_code)
        .bind(&detail.category_major)
        .bind(&detail.category_minor)
        .bind(&detail.location)
        .bind(&detail.era)
        .bind(&detail.image_url)
        .bind(&detail.content)
        .execute(pool)
        .await?;
    }

    Ok(items.len())
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Returns stored heritage rows in insertion order, up to `limit`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_heritage(pool: &PgPool, limit: i64) -> Result<Vec<HeritageRow>, DbError> {
    let rows = sqlx::query_as::<_, HeritageRow>(&format!(
        "SELECT {HERITAGE_COLUMNS} FROM heritage ORDER BY id LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns the earliest stored row with the given `sn`, or `None`.
///
/// `sn` is the upstream sequence number and is not unique across syncs.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_heritage_by_sn(pool: &PgPool, sn: &str) -> Result<Option<HeritageRow>, DbError> {
    let row = sqlx::query_as::<_, HeritageRow>(&format!(
        "SELECT {HERITAGE_COLUMNS} FROM heritage WHERE sn = $1 ORDER BY id LIMIT 1"
    ))
    .bind(sn)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
