pub mod client;
pub mod config;
pub mod error;
pub mod schema;
pub mod xml;

pub use client::HeritageClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use schema::{CompactSchema, FullSchema, ItemSchema};
pub use xml::{parse_document, Element, XmlError};
