//! HTTP client for the heritage open-data XML endpoints.

mod detail;
mod enrich;
mod festival;
mod listing;
mod pages;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::xml::{parse_document, Element};

/// Client for the list, detail, image and festival endpoints.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// mutable state, so concurrent pipeline runs are independent.
#[derive(Debug, Clone)]
pub struct HeritageClient {
    pub(super) client: Client,
    pub(super) config: ClientConfig,
}

impl HeritageClient {
    /// Creates a client for the endpoints in `config`.
    ///
    /// A `request_timeout_secs` of `0` leaves outbound requests without a
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a GET expecting an XML body and parses it into an element tree.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ClientError::Xml`] if the body is not well-formed XML.
    pub(super) async fn get_document(&self, url: Url) -> Result<Element, ClientError> {
        let context = url.to_string();
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: context,
            });
        }

        let body = response.text().await?;
        parse_document(&body).map_err(|source| ClientError::Xml { context, source })
    }
}

/// Appends percent-encoded query parameters to an endpoint URL.
///
/// # Errors
///
/// Returns [`ClientError::InvalidUrl`] if `base` does not parse.
pub(crate) fn build_url(base: &str, params: &[(&str, &str)]) -> Result<Url, ClientError> {
    let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl {
        url: base.to_owned(),
        reason: e.to_string(),
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
