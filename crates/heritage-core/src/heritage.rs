//! Heritage records as exposed by the JSON API.
//!
//! Field names on the wire keep the upstream feed's keys (`ccbaKdcd`,
//! `ccbaMnm1`, ...) so consumers of the original feed can read the output
//! without a mapping table. Every field is a plain `String`; missing values
//! carry [`crate::PLACEHOLDER`] rather than being omitted.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::text::PLACEHOLDER;

/// Composite identifier shared by the list, detail and image endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeritageKey {
    /// Designation type code (`ccbaKdcd`).
    pub kind_code: String,
    /// Serial number within the designation type (`ccbaAsno`).
    pub serial_no: String,
    /// Region code (`ccbaCtcd`).
    pub city_code: String,
}

/// Full listing row from the paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageListing {
    pub sn: String,
    pub no: String,
    #[serde(rename = "ccmaName")]
    pub designation: String,
    #[serde(rename = "crltsnoNm")]
    pub designation_no: String,
    #[serde(rename = "ccbaMnm1")]
    pub name: String,
    #[serde(rename = "ccbaMnm2")]
    pub name_hanja: String,
    #[serde(rename = "ccbaCtcdNm")]
    pub province: String,
    #[serde(rename = "ccsiName")]
    pub district: String,
    #[serde(rename = "ccbaAdmin")]
    pub admin: String,
    pub longitude: String,
    pub latitude: String,
    #[serde(rename = "ccbaKdcd")]
    pub kind_code: String,
    #[serde(rename = "ccbaAsno")]
    pub serial_no: String,
    #[serde(rename = "ccbaCtcd")]
    pub city_code: String,
}

impl HeritageListing {
    #[must_use]
    pub fn key(&self) -> HeritageKey {
        HeritageKey {
            kind_code: self.kind_code.clone(),
            serial_no: self.serial_no.clone(),
            city_code: self.city_code.clone(),
        }
    }
}

/// Identifier-and-name listing row used by the compact pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactListing {
    #[serde(rename = "ccbaKdcd")]
    pub kind_code: String,
    #[serde(rename = "ccbaAsno")]
    pub serial_no: String,
    #[serde(rename = "ccbaCtcd")]
    pub city_code: String,
    #[serde(rename = "ccbaMnm1")]
    pub name: String,
}

impl CompactListing {
    #[must_use]
    pub fn key(&self) -> HeritageKey {
        HeritageKey {
            kind_code: self.kind_code.clone(),
            serial_no: self.serial_no.clone(),
            city_code: self.city_code.clone(),
        }
    }
}

/// Detail record fetched per item for the full pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageDetail {
    #[serde(rename = "gcodeName")]
    pub category_major: String,
    #[serde(rename = "bcodeName")]
    pub category_minor: String,
    #[serde(rename = "ccbaLcad")]
    pub location: String,
    #[serde(rename = "ccceName")]
    pub era: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub content: String,
}

impl HeritageDetail {
    /// Every field set to [`PLACEHOLDER`]; used when the detail fetch fails.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            category_major: PLACEHOLDER.to_string(),
            category_minor: PLACEHOLDER.to_string(),
            location: PLACEHOLDER.to_string(),
            era: PLACEHOLDER.to_string(),
            image_url: PLACEHOLDER.to_string(),
            content: PLACEHOLDER.to_string(),
        }
    }
}

/// Detail record fetched per item for the compact pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactDetail {
    #[serde(rename = "ccbaLcad")]
    pub location: String,
    #[serde(rename = "ccceName")]
    pub era: String,
    pub content: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl CompactDetail {
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            location: PLACEHOLDER.to_string(),
            era: PLACEHOLDER.to_string(),
            content: PLACEHOLDER.to_string(),
            image_url: PLACEHOLDER.to_string(),
        }
    }
}

/// One output row: a listing with its detail merged on top.
///
/// Serializes as a single flat object. Detail keys override listing keys when
/// both records carry the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedItem<L, D> {
    pub listing: L,
    pub detail: D,
}

impl<L: Serialize, D: Serialize> Serialize for EnrichedItem<L, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        let mut merged = to_object(&self.listing).map_err(S::Error::custom)?;
        merged.extend(to_object(&self.detail).map_err(S::Error::custom)?);
        merged.serialize(serializer)
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "expected a flat record, got {other}"
        ))),
    }
}

/// Row from the image endpoint, stored in `heritage_image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageImage {
    #[serde(rename = "imageNo")]
    pub image_no: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "ccimDesc")]
    pub description: String,
    pub sn: String,
    pub no: String,
    #[serde(rename = "ccbaKdcd")]
    pub kind_code: String,
    #[serde(rename = "ccbaCtcd")]
    pub city_code: String,
    #[serde(rename = "ccbaAsno")]
    pub serial_no: String,
}

/// Row from the paged detail endpoint, stored in `heritage_vo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeritageSummary {
    pub sn: String,
    pub no: String,
    #[serde(rename = "ccmaName")]
    pub designation: String,
    #[serde(rename = "ccbaMnm1")]
    pub name: String,
    #[serde(rename = "ccbaMnm2")]
    pub name_hanja: String,
    pub longitude: String,
    pub latitude: String,
    #[serde(rename = "gcodeName")]
    pub category_major: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact_listing() -> CompactListing {
        CompactListing {
            kind_code: "11".to_string(),
            serial_no: "00010000".to_string(),
            city_code: "11".to_string(),
            name: "서울 숭례문".to_string(),
        }
    }

    #[test]
    fn enriched_item_serializes_as_flat_object() {
        let item = EnrichedItem {
            listing: compact_listing(),
            detail: CompactDetail::placeholder(),
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["ccbaKdcd"], "11");
        assert_eq!(json["ccbaAsno"], "00010000");
        assert_eq!(json["ccbaMnm1"], "서울 숭례문");
        assert_eq!(json["ccbaLcad"], PLACEHOLDER);
        assert_eq!(json["imageUrl"], PLACEHOLDER);
        assert_eq!(json.as_object().map(Map::len), Some(8));
    }

    #[derive(Serialize)]
    struct Clashing {
        #[serde(rename = "ccbaMnm1")]
        name: &'static str,
        extra: &'static str,
    }

    #[test]
    fn detail_keys_override_listing_keys() {
        let item = EnrichedItem {
            listing: compact_listing(),
            detail: Clashing {
                name: "from detail",
                extra: "x",
            },
        };
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["ccbaMnm1"], "from detail");
        assert_eq!(json["ccbaKdcd"], "11");
        assert_eq!(json["extra"], "x");
    }

    #[test]
    fn non_object_records_fail_to_serialize() {
        let item = EnrichedItem {
            listing: compact_listing(),
            detail: "not a record",
        };
        assert!(serde_json::to_value(&item).is_err());
    }

    #[test]
    fn listing_key_copies_identifiers() {
        let key = compact_listing().key();
        assert_eq!(key.kind_code, "11");
        assert_eq!(key.serial_no, "00010000");
        assert_eq!(key.city_code, "11");
    }

    #[test]
    fn placeholder_detail_has_no_empty_fields() {
        let json = serde_json::to_value(HeritageDetail::placeholder()).expect("serialize");
        for (key, value) in json.as_object().expect("object") {
            assert_eq!(value, PLACEHOLDER, "field {key} should be the placeholder");
        }
    }
}
