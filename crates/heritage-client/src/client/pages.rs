//! Single-page fetches from the `response.body.items.item` shaped endpoints.
//!
//! Unlike the enrichment pipeline these surface every failure to the caller,
//! including a response that lacks the item path.

use heritage_core::{or_placeholder, HeritageImage, HeritageSummary};

use crate::error::ClientError;
use crate::xml::Element;

use super::{build_url, HeritageClient};

const PAGE_ITEM_PATH: [&str; 4] = ["response", "body", "items", "item"];

impl HeritageClient {
    /// Fetches one page of the image endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingPath`] when the response has no
    /// `response.body.items.item` elements, or any transport/parse error.
    pub async fn fetch_image_page(&self, page: u32) -> Result<Vec<HeritageImage>, ClientError> {
        let items = self.fetch_item_page(&self.config.image_url, page).await?;
        Ok(items.iter().map(image_from_element).collect())
    }

    /// Fetches one page of the detail endpoint in paged mode.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingPath`] when the response has no
    /// `response.body.items.item` elements, or any transport/parse error.
    pub async fn fetch_summary_page(
        &self,
        page: u32,
    ) -> Result<Vec<HeritageSummary>, ClientError> {
        let items = self.fetch_item_page(&self.config.detail_url, page).await?;
        Ok(items.iter().map(summary_from_element).collect())
    }

    async fn fetch_item_page(&self, base: &str, page: u32) -> Result<Vec<Element>, ClientError> {
        let page_size = self.config.persist_page_size.to_string();
        let page = page.to_string();
        let url = build_url(
            base,
            &[("pageUnit", page_size.as_str()), ("pageIndex", page.as_str())],
        )?;
        let context = url.to_string();

        let doc = self.get_document(url).await?;
        let items: Vec<Element> = doc
            .select(&PAGE_ITEM_PATH)
            .into_iter()
            .cloned()
            .collect();

        if items.is_empty() {
            return Err(ClientError::MissingPath {
                path: PAGE_ITEM_PATH.join("."),
                url: context,
            });
        }
        tracing::debug!(url = %context, count = items.len(), "fetched item page");
        Ok(items)
    }
}

// Identifier fields are read from their first occurrence like every other
// field; the feed does not repeat them.
fn image_from_element(item: &Element) -> HeritageImage {
    let field = |name: &str| or_placeholder(item.field(name));
    HeritageImage {
        image_no: field("imageNo"),
        image_url: field("imageUrl"),
        description: field("ccimDesc"),
        sn: field("sn"),
        no: field("no"),
        kind_code: field("ccbaKdcd"),
        city_code: field("ccbaCtcd"),
        serial_no: field("ccbaAsno"),
    }
}

fn summary_from_element(item: &Element) -> HeritageSummary {
    let field = |name: &str| or_placeholder(item.field(name));
    HeritageSummary {
        sn: field("sn"),
        no: field("no"),
        designation: field("ccmaName"),
        name: field("ccbaMnm1"),
        name_hanja: field("ccbaMnm2"),
        longitude: field("longitude"),
        latitude: field("latitude"),
        category_major: field("gcodeName"),
        image_url: field("imageUrl"),
        content: field("content"),
    }
}
