use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Datelike, Utc};
use heritage_core::Festival;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{normalize_limit, ApiResponse, AppState};

const FESTIVAL_DEFAULT_LIMIT: usize = 2;

#[derive(Debug, Deserialize)]
pub(super) struct FestivalQuery {
    pub year: Option<String>,
    pub month: Option<String>,
    pub limit: Option<String>,
}

pub(super) async fn list_festivals(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<FestivalQuery>,
) -> Json<ApiResponse<Vec<Festival>>> {
    let (year, month) = resolve_period(query.year, query.month, Utc::now());
    let limit = normalize_limit(query.limit.as_deref(), FESTIVAL_DEFAULT_LIMIT);

    let festivals = state.client.fetch_festivals(&year, &month, limit).await;
    Json(ApiResponse::new(festivals, req_id.0))
}

/// Fills a missing or blank year/month from `now`; the month is zero-padded.
fn resolve_period(
    year: Option<String>,
    month: Option<String>,
    now: DateTime<Utc>,
) -> (String, String) {
    let year = year
        .filter(|y| !y.trim().is_empty())
        .unwrap_or_else(|| now.year().to_string());
    let month = month
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{:02}", now.month()));
    (year, month)
}
