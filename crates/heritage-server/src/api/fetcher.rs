//! Live enrichment endpoints. Nothing here touches the database.

use axum::{
    extract::{Query, State},
    response::Html,
    Extension, Json,
};
use heritage_client::{CompactSchema, FullSchema};
use heritage_core::{
    CompactDetail, CompactListing, EnrichedItem, HeritageDetail, HeritageListing,
};
use quick_xml::escape::escape;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{normalize_limit, ApiResponse, AppState};

const FULL_DEFAULT_LIMIT: usize = 2;
const COMPACT_DEFAULT_LIMIT: usize = 1;

#[derive(Debug, Deserialize)]
pub(super) struct FetcherQuery {
    pub limit: Option<String>,
}

type FullItem = EnrichedItem<HeritageListing, HeritageDetail>;
type CompactItem = EnrichedItem<CompactListing, CompactDetail>;

pub(super) async fn fetch_full(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<FetcherQuery>,
) -> Json<ApiResponse<Vec<FullItem>>> {
    let limit = normalize_limit(query.limit.as_deref(), FULL_DEFAULT_LIMIT);
    let items = state.client.enrich::<FullSchema>(limit).await;
    Json(ApiResponse::new(items, req_id.0))
}

pub(super) async fn fetch_compact(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<FetcherQuery>,
) -> Json<ApiResponse<Vec<CompactItem>>> {
    let limit = normalize_limit(query.limit.as_deref(), COMPACT_DEFAULT_LIMIT);
    let items = state.client.enrich::<CompactSchema>(limit).await;
    Json(ApiResponse::new(items, req_id.0))
}

pub(super) async fn fetch_html(
    State(state): State<AppState>,
    Query(query): Query<FetcherQuery>,
) -> Html<String> {
    let limit = normalize_limit(query.limit.as_deref(), FULL_DEFAULT_LIMIT);
    let items = state.client.enrich::<FullSchema>(limit).await;
    Html(render_items(&items))
}

fn render_items(items: &[FullItem]) -> String {
    let mut html = String::from("<section class=\"heritage-list\">\n");
    for EnrichedItem { listing, detail } in items {
        html.push_str(&format!(
            "<article class=\"heritage-item\" data-id=\"{kind}-{serial}-{city}\">\n\
             <h2>{name}</h2>\n\
             <p class=\"designation\">{designation} {province} {district}</p>\n\
             <p class=\"location\">{location}</p>\n\
             <p class=\"era\">{era}</p>\n\
             <img src=\"{image}\" alt=\"{name}\">\n\
             <div class=\"content\">{content}</div>\n\
             </article>\n",
            kind = escape(listing.kind_code.as_str()),
            serial = escape(listing.serial_no.as_str()),
            city = escape(listing.city_code.as_str()),
            name = escape(listing.name.as_str()),
            designation = escape(listing.designation.as_str()),
            province = escape(listing.province.as_str()),
            district = escape(listing.district.as_str()),
            location = escape(detail.location.as_str()),
            era = escape(detail.era.as_str()),
            image = escape(detail.image_url.as_str()),
            content = escape(detail.content.as_str()),
        ));
    }
    html.push_str("</section>\n");
    html
}
