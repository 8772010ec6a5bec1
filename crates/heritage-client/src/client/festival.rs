//! Monthly festival listing.

use heritage_core::{Festival, FESTIVAL_PLACEHOLDER};

use crate::error::ClientError;
use crate::xml::Element;

use super::{build_url, HeritageClient};

const FESTIVAL_ITEM_PATH: [&str; 2] = ["result", "item"];

impl HeritageClient {
    /// Fetches the first `limit` festival events for the given year and month.
    ///
    /// Any failure is logged and yields an empty list.
    pub async fn fetch_festivals(&self, year: &str, month: &str, limit: usize) -> Vec<Festival> {
        match self.try_fetch_festivals(year, month, limit).await {
            Ok(festivals) => festivals,
            Err(e) => {
                tracing::warn!(year, month, error = %e, "festival fetch failed");
                Vec::new()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-2xx status, or a
    /// body that is not well-formed XML.
    pub async fn try_fetch_festivals(
        &self,
        year: &str,
        month: &str,
        limit: usize,
    ) -> Result<Vec<Festival>, ClientError> {
        let url = build_url(
            &self.config.festival_url,
            &[("searchYear", year), ("searchMonth", month)],
        )?;
        let doc = self.get_document(url).await?;
        Ok(doc
            .select(&FESTIVAL_ITEM_PATH)
            .into_iter()
            .take(limit)
            .map(festival_from_element)
            .collect())
    }
}

fn festival_from_element(item: &Element) -> Festival {
    let field = |name: &str| match item.field(name).map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => FESTIVAL_PLACEHOLDER.to_string(),
    };

    Festival {
        program_name: field("subTitle"),
        program_content: field("subContent"),
        start_date: field("sDate"),
        end_date: field("eDate"),
        location: field("subDesc"),
        contact: field("contact"),
        image: field("fileNm"),
        target_audience: field("subDesc1"),
        additional_info: format!("{}, {}", field("subDesc2"), field("subDesc_3")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn maps_fields_and_defaults_missing_ones() {
        let doc = parse_document(
            "<result><item><subTitle>  궁중문화축전 </subTitle><sDate>20240501</sDate>\
             <subDesc2>무료</subDesc2></item></result>",
        )
        .expect("parse");
        let item = doc.select(&FESTIVAL_ITEM_PATH)[0];
        let festival = festival_from_element(item);
        assert_eq!(festival.program_name, "궁중문화축전");
        assert_eq!(festival.start_date, "20240501");
        assert_eq!(festival.end_date, FESTIVAL_PLACEHOLDER);
        assert_eq!(festival.additional_info, "무료, N/A");
    }
}
