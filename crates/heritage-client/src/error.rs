use thiserror::Error;

use crate::xml::XmlError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error for {context}: {source}")]
    Xml {
        context: String,
        #[source]
        source: XmlError,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("response from {url} has no `{path}` elements")]
    MissingPath { path: String, url: String },
}
