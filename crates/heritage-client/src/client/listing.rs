//! Page-by-page iteration over the list endpoint.

use std::collections::VecDeque;

use futures::stream::{self, Stream, StreamExt};
use reqwest::Url;

use crate::error::ClientError;
use crate::schema::ItemSchema;
use crate::xml::Element;

use super::{build_url, HeritageClient};

const LIST_ITEM_PATH: [&str; 2] = ["result", "item"];

struct PageCursor<'a> {
    client: &'a HeritageClient,
    next_page: u32,
    pending: VecDeque<Element>,
    remaining: usize,
}

impl HeritageClient {
    /// Lazily yields raw `item` elements from pages `1..=max_pages`.
    ///
    /// A page is only requested once every item of the previous page has been
    /// consumed. The stream ends after `limit` items or after the last page,
    /// whichever comes first. A page that fails to load or parse is logged and
    /// treated as empty; an empty page does not end pagination.
    pub fn list_elements(&self, limit: usize) -> impl Stream<Item = Element> + Send + '_ {
        let cursor = PageCursor {
            client: self,
            next_page: 1,
            pending: VecDeque::new(),
            remaining: limit,
        };

        stream::unfold(cursor, |mut cursor| async move {
            loop {
                if cursor.remaining == 0 {
                    return None;
                }
                if let Some(item) = cursor.pending.pop_front() {
                    cursor.remaining -= 1;
                    return Some((item, cursor));
                }
                if cursor.next_page > cursor.client.config.max_pages {
                    tracing::debug!(
                        max_pages = cursor.client.config.max_pages,
                        "page cap reached"
                    );
                    return None;
                }

                let page = cursor.next_page;
                cursor.next_page += 1;

                match cursor.client.fetch_list_page(page).await {
                    Ok(items) => {
                        tracing::debug!(page, count = items.len(), "fetched list page");
                        cursor.pending.extend(items);
                    }
                    Err(e) => {
                        tracing::warn!(page, error = %e, "list page failed; skipping");
                    }
                }
            }
        })
    }

    /// Lazily yields listings extracted with schema `S`.
    pub fn list_items<S: ItemSchema>(
        &self,
        limit: usize,
    ) -> impl Stream<Item = S::Listing> + Send + '_ {
        self.list_elements(limit).map(|item| S::listing(&item))
    }

    /// Fetches one page of the list endpoint and returns its `item` elements
    /// in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx status, or a
    /// body that is not well-formed XML. A page without `result.item` is
    /// empty, not an error.
    pub async fn fetch_list_page(&self, page: u32) -> Result<Vec<Element>, ClientError> {
        let url = self.list_page_url(page)?;
        let doc = self.get_document(url).await?;
        Ok(doc.select(&LIST_ITEM_PATH).into_iter().cloned().collect())
    }

    pub(super) fn list_page_url(&self, page: u32) -> Result<Url, ClientError> {
        let page_size = self.config.page_size.to_string();
        let page = page.to_string();
        build_url(
            &self.config.list_url,
            &[("pageUnit", page_size.as_str()), ("pageIndex", page.as_str())],
        )
    }
}
