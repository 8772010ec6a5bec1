//! Field-extraction schemas for the enrichment pipeline.
//!
//! The list and detail endpoints are the same for every schema; a schema only
//! decides which fields are read from each `item` element and how they are
//! normalized. Identifier fields are copied verbatim; location and era text
//! is run through [`clean_text`].

use heritage_core::{
    clean_text, or_placeholder, CompactDetail, CompactListing, HeritageDetail, HeritageKey,
    HeritageListing,
};
use serde::Serialize;

use crate::xml::Element;

pub trait ItemSchema {
    type Listing: Serialize + Send + 'static;
    type Detail: Serialize + Send + 'static;

    /// Short label used in log fields.
    const NAME: &'static str;

    fn listing(item: &Element) -> Self::Listing;

    fn key(listing: &Self::Listing) -> HeritageKey;

    /// Builds the detail record from the first `result.item` element.
    ///
    /// `None` (no element, or a failed fetch) yields a record whose fields are
    /// all [`heritage_core::PLACEHOLDER`].
    fn detail(item: Option<&Element>) -> Self::Detail;
}

/// Every listing field plus category, location, era, image and content.
pub struct FullSchema;

/// Identifiers and name plus location, era, content and image.
pub struct CompactSchema;

impl ItemSchema for FullSchema {
    type Listing = HeritageListing;
    type Detail = HeritageDetail;

    const NAME: &'static str = "full";

    fn listing(item: &Element) -> HeritageListing {
        let field = |name: &str| or_placeholder(item.field(name));
        HeritageListing {
            sn: field("sn"),
            no: field("no"),
            designation: field("ccmaName"),
            designation_no: field("crltsnoNm"),
            name: field("ccbaMnm1"),
            name_hanja: field("ccbaMnm2"),
            province: field("ccbaCtcdNm"),
            district: field("ccsiName"),
            admin: field("ccbaAdmin"),
            longitude: field("longitude"),
            latitude: field("latitude"),
            kind_code: field("ccbaKdcd"),
            serial_no: field("ccbaAsno"),
            city_code: field("ccbaCtcd"),
        }
    }

    fn key(listing: &HeritageListing) -> HeritageKey {
        listing.key()
    }

    fn detail(item: Option<&Element>) -> HeritageDetail {
        let Some(item) = item else {
            return HeritageDetail::placeholder();
        };
        HeritageDetail {
            category_major: or_placeholder(item.field("gcodeName")),
            category_minor: or_placeholder(item.field("bcodeName")),
            location: clean_text(item.field("ccbaLcad")),
            era: clean_text(item.field("ccceName")),
            image_url: or_placeholder(item.field("imageUrl")),
            content: or_placeholder(item.field("content")),
        }
    }
}

impl ItemSchema for CompactSchema {
    type Listing = CompactListing;
    type Detail = CompactDetail;

    const NAME: &'static str = "compact";

    fn listing(item: &Element) -> CompactListing {
        CompactListing {
            kind_code: or_placeholder(item.field("ccbaKdcd")),
            serial_no: or_placeholder(item.field("ccbaAsno")),
            city_code: or_placeholder(item.field("ccbaCtcd")),
            name: or_placeholder(item.field("ccbaMnm1")),
        }
    }

    fn key(listing: &CompactListing) -> HeritageKey {
        listing.key()
    }

    fn detail(item: Option<&Element>) -> CompactDetail {
        let Some(item) = item else {
            return CompactDetail::placeholder();
        };
        CompactDetail {
            location: clean_text(item.field("ccbaLcad")),
            era: clean_text(item.field("ccceName")),
            content: or_placeholder(item.field("content")),
            image_url: or_placeholder(item.field("imageUrl")),
        }
    }
}
