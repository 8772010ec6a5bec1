pub mod app_config;
pub mod config;
pub mod festival;
pub mod heritage;
pub mod text;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use festival::{Festival, FESTIVAL_PLACEHOLDER};
pub use heritage::{
    CompactDetail, CompactListing, EnrichedItem, HeritageDetail, HeritageImage, HeritageKey,
    HeritageListing, HeritageSummary,
};
pub use text::{clean_text, or_placeholder, PLACEHOLDER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
