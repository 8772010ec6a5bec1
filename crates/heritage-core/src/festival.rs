use serde::{Deserialize, Serialize};

/// Placeholder used by the festival feed for missing fields.
pub const FESTIVAL_PLACEHOLDER: &str = "N/A";

/// One event from the monthly festival listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Festival {
    pub program_name: String,
    pub program_content: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub contact: String,
    pub image: String,
    pub target_audience: String,
    /// `"<subDesc2>, <subDesc_3>"`, each side defaulted independently.
    pub additional_info: String,
}
