//! Fetch-one-page-and-store endpoints for images and paged detail rows.
//!
//! Each request fetches a single upstream page, inserts every record in
//! order, then echoes the fetched records back.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use heritage_core::{HeritageImage, HeritageSummary};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_client_error, map_db_error, normalize_page, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct PageQuery {
    pub page: Option<String>,
}

pub(super) async fn sync_images(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<HeritageImage>>>, ApiError> {
    let page = normalize_page(query.page.as_deref());

    let images = state
        .client
        .fetch_image_page(page)
        .await
        .map_err(|e| map_client_error(req_id.0.clone(), &e))?;
    let inserted = heritage_db::insert_heritage_images(&state.pool, &images)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    tracing::info!(page, inserted, "stored heritage image page");

    Ok(Json(ApiResponse::new(images, req_id.0)))
}

pub(super) async fn sync_summaries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<HeritageSummary>>>, ApiError> {
    let page = normalize_page(query.page.as_deref());

    let summaries = state
        .client
        .fetch_summary_page(page)
        .await
        .map_err(|e| map_client_error(req_id.0.clone(), &e))?;
    let inserted = heritage_db::insert_heritage_summaries(&state.pool, &summaries)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    tracing::info!(page, inserted, "stored heritage detail page");

    Ok(Json(ApiResponse::new(summaries, req_id.0)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use heritage_client::{ClientConfig, HeritageClient};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::{app_with_upstream, get_json};
    use super::super::{build_app, AppState};

    const IMAGE_PAGE: &str = "<response><body><items>\
        <item><imageNo>1</imageNo><imageUrl>http://img/1.jpg</imageUrl><sn>1</sn></item>\
        <item><imageNo>2</imageNo><imageUrl>http://img/2.jpg</imageUrl><sn>1</sn></item>\
        </items></body></response>";

    const SUMMARY_PAGE: &str = "<response><body><items>\
        <item><sn>1</sn><ccmaName>국보</ccmaName><ccbaMnm1>서울 숭례문</ccbaMnm1></item>\
        </items></body></response>";

    fn app_for(pool: sqlx::PgPool, server: &MockServer) -> axum::Router {
        let client = HeritageClient::new(ClientConfig::with_base_url(&server.uri()))
            .expect("client");
        build_app(AppState { pool, client })
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn heritage_images_stores_requested_page(pool: sqlx::PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cha/SearchImageOpenapi.do"))
            .and(query_param("pageIndex", "3"))
            .and(query_param("pageUnit", "15"))
            .respond_with(ResponseTemplate::new(200).set_body_string(IMAGE_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let (status, json) = get_json(
            app_for(pool.clone(), &server),
            "/api/v1/heritage-images?page=3",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().expect("data array").len(), 2);
        assert_eq!(json["data"][1]["imageNo"], "2");

        let stored = heritage_db::list_heritage_images(&pool, 10)
            .await
            .expect("list images");
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].image_url, "http://img/1.jpg");
        assert_eq!(stored[0].ccim_desc, "-");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn heritage_details_defaults_invalid_page_to_first(pool: sqlx::PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cha/SearchKindOpenapiDt.do"))
            .and(query_param("pageIndex", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SUMMARY_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let (status, json) = get_json(
            app_for(pool.clone(), &server),
            "/api/v1/heritage-details?page=abc",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["ccbaMnm1"], "서울 숭례문");

        let stored = heritage_db::list_heritage_summaries(&pool, 10)
            .await
            .expect("list summaries");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].ccma_name, "국보");
    }

    #[tokio::test]
    async fn missing_item_path_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cha/SearchImageOpenapi.do"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<response><header><resultCode>99</resultCode></header></response>"),
            )
            .mount(&server)
            .await;

        let (status, json) =
            get_json(app_with_upstream(&server.uri()), "/api/v1/heritage-images").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "internal_error");
    }

    #[tokio::test]
    async fn upstream_failure_on_details_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let (status, _) =
            get_json(app_with_upstream(&server.uri()), "/api/v1/heritage-details?page=2").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
