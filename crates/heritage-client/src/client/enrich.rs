//! List-then-detail enrichment.

use futures::StreamExt;
use heritage_core::EnrichedItem;

use crate::schema::ItemSchema;

use super::HeritageClient;

impl HeritageClient {
    /// Lists up to `limit` items and merges each one's detail record onto it.
    ///
    /// Output order is encounter order (page ascending, then position within
    /// the page). Detail requests run `detail_concurrency` at a time and are
    /// only issued for items that make it into the output. Upstream failures
    /// never surface here: a total outage yields an empty list.
    pub async fn enrich<S: ItemSchema>(
        &self,
        limit: usize,
    ) -> Vec<EnrichedItem<S::Listing, S::Detail>> {
        let concurrency = self.config.detail_concurrency.max(1);

        let items: Vec<EnrichedItem<S::Listing, S::Detail>> = self
            .list_items::<S>(limit)
            .map(|listing| async move {
                let detail = self.fetch_detail::<S>(&S::key(&listing)).await;
                EnrichedItem { listing, detail }
            })
            .buffered(concurrency)
            .collect()
            .await;

        tracing::info!(
            schema = S::NAME,
            limit,
            returned = items.len(),
            "enrichment finished"
        );
        items
    }
}
