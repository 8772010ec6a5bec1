//! Endpoint and paging settings for [`crate::HeritageClient`].

use heritage_core::config::{
    DEFAULT_DETAIL_URL, DEFAULT_FESTIVAL_URL, DEFAULT_IMAGE_URL, DEFAULT_LIST_URL,
};
use heritage_core::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub list_url: String,
    pub detail_url: String,
    pub image_url: String,
    pub festival_url: String,
    /// `pageUnit` sent to the list endpoint.
    pub page_size: u32,
    /// Highest `pageIndex` the paginator requests.
    pub max_pages: u32,
    /// `pageUnit` sent to the image and paged-detail endpoints.
    pub persist_page_size: u32,
    /// Detail requests allowed in flight at once during enrichment.
    pub detail_concurrency: usize,
    /// `0` means no timeout.
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            list_url: DEFAULT_LIST_URL.to_string(),
            detail_url: DEFAULT_DETAIL_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            festival_url: DEFAULT_FESTIVAL_URL.to_string(),
            page_size: 100,
            max_pages: 99,
            persist_page_size: 15,
            detail_concurrency: 1,
            request_timeout_secs: 0,
            user_agent: "heritage-proxy/0.1".to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            list_url: config.list_url.clone(),
            detail_url: config.detail_url.clone(),
            image_url: config.image_url.clone(),
            festival_url: config.festival_url.clone(),
            page_size: config.page_size,
            max_pages: config.max_pages,
            persist_page_size: config.persist_page_size,
            detail_concurrency: config.detail_concurrency,
            request_timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Points every endpoint at `base_url`, using the upstream paths.
    ///
    /// Used to substitute a mock server in tests.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            list_url: format!("{base}/cha/SearchKindOpenapiList.do"),
            detail_url: format!("{base}/cha/SearchKindOpenapiDt.do"),
            image_url: format!("{base}/cha/SearchImageOpenapi.do"),
            festival_url: format!("{base}/cha/openapi/selectEventListOpenapi.do"),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_feed() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_pages, 99);
        assert_eq!(config.persist_page_size, 15);
        assert_eq!(config.detail_concurrency, 1);
        assert_eq!(config.request_timeout_secs, 0);
        assert!(config.list_url.ends_with("/cha/SearchKindOpenapiList.do"));
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:4000/");
        assert_eq!(
            config.detail_url,
            "http://127.0.0.1:4000/cha/SearchKindOpenapiDt.do"
        );
        assert_eq!(config.max_pages, 99);
    }
}
