//! Read endpoints over the stored `heritage` table.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, normalize_limit, ApiError, ApiResponse, AppState};

const LIST_DEFAULT_LIMIT: usize = 50;

/// One stored record, keyed by the upstream field names.
#[derive(Debug, Serialize)]
pub(super) struct HeritageItem {
    id: i64,
    sn: String,
    no: String,
    #[serde(rename = "ccmaName")]
    ccma_name: String,
    #[serde(rename = "crltsnoNm")]
    crltsno_nm: String,
    #[serde(rename = "ccbaMnm1")]
    ccba_mnm1: String,
    #[serde(rename = "ccbaMnm2")]
    ccba_mnm2: String,
    #[serde(rename = "ccbaCtcdNm")]
    ccba_ctcd_nm: String,
    #[serde(rename = "ccsiName")]
    ccsi_name: String,
    #[serde(rename = "ccbaAdmin")]
    ccba_admin: String,
    longitude: String,
    latitude: String,
    #[serde(rename = "ccbaKdcd")]
    ccba_kdcd: String,
    #[serde(rename = "ccbaAsno")]
    ccba_asno: String,
    #[serde(rename = "ccbaCtcd")]
    ccba_ctcd: String,
    #[serde(rename = "gcodeName")]
    gcode_name: String,
    #[serde(rename = "bcodeName")]
    bcode_name: String,
    #[serde(rename = "ccbaLcad")]
    ccba_lcad: String,
    #[serde(rename = "ccceName")]
    ccce_name: String,
    #[serde(rename = "imageUrl")]
    image_url: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<heritage_db::HeritageRow> for HeritageItem {
    fn from(row: heritage_db::HeritageRow) -> Self {
        Self {
            id: row.id,
            sn: row.sn,
            no: row.no,
            ccma_name: row.ccma_name,
            crltsno_nm: row.crltsno_nm,
            ccba_mnm1: row.ccba_mnm1,
            ccba_mnm2: row.ccba_mnm2,
            ccba_ctcd_nm: row.ccba_ctcd_nm,
            ccsi_name: row.ccsi_name,
            ccba_admin: row.ccba_admin,
            longitude: row.longitude,
            latitude: row.latitude,
            ccba_kdcd: row.ccba_kdcd,
            ccba_asno: row.ccba_asno,
            ccba_ctcd: row.ccba_ctcd,
            gcode_name: row.gcode_name,
            bcode_name: row.bcode_name,
            ccba_lcad: row.ccba_lcad,
            ccce_name: row.ccce_name,
            image_url: row.image_url,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct HeritageQuery {
    pub limit: Option<String>,
}

pub(super) async fn list_heritage(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<HeritageQuery>,
) -> Result<Json<ApiResponse<Vec<HeritageItem>>>, ApiError> {
    let limit = normalize_limit(query.limit.as_deref(), LIST_DEFAULT_LIMIT);
    let rows = heritage_db::list_heritage(&state.pool, i64::try_from(limit).unwrap_or(i64::MAX))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows.into_iter().map(HeritageItem::from).collect();
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn get_heritage(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(sn): Path<String>,
) -> Result<Json<ApiResponse<HeritageItem>>, ApiError> {
    let row = heritage_db::get_heritage_by_sn(&state.pool, &sn)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("heritage {sn} not found"),
            )
        })?;

    Ok(Json(ApiResponse::new(HeritageItem::from(row), req_id.0)))
}
