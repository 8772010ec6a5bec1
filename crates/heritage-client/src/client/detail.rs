//! Per-item detail lookups.

use heritage_core::HeritageKey;
use reqwest::Url;

use crate::error::ClientError;
use crate::schema::ItemSchema;

use super::{build_url, HeritageClient};

const DETAIL_ITEM_PATH: [&str; 2] = ["result", "item"];

impl HeritageClient {
    /// Fetches the detail record for `key`.
    ///
    /// Never fails: transport, status and parse errors are logged and the
    /// schema's placeholder record is returned instead.
    pub async fn fetch_detail<S: ItemSchema>(&self, key: &HeritageKey) -> S::Detail {
        match self.try_fetch_detail::<S>(key).await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(
                    schema = S::NAME,
                    kind_code = %key.kind_code,
                    serial_no = %key.serial_no,
                    city_code = %key.city_code,
                    error = %e,
                    "detail fetch failed; using placeholder record"
                );
                S::detail(None)
            }
        }
    }

    /// Fetches the detail record for `key`, surfacing failures.
    ///
    /// A response without a `result.item` element is not an error; it yields
    /// the placeholder record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx status, or a
    /// body that is not well-formed XML.
    pub async fn try_fetch_detail<S: ItemSchema>(
        &self,
        key: &HeritageKey,
    ) -> Result<S::Detail, ClientError> {
        let url = self.detail_url(key)?;
        let doc = self.get_document(url).await?;
        Ok(S::detail(doc.select(&DETAIL_ITEM_PATH).first().copied()))
    }

    pub(super) fn detail_url(&self, key: &HeritageKey) -> Result<Url, ClientError> {
        build_url(
            &self.config.detail_url,
            &[
                ("ccbaKdcd", key.kind_code.as_str()),
                ("ccbaAsno", key.serial_no.as_str()),
                ("ccbaCtcd", key.city_code.as_str()),
            ],
        )
    }
}
