//! Minimal element tree over `quick_xml` events.
//!
//! The feed's payloads are addressed by tag path (`result.item`,
//! `response.body.items.item`) and every field is read as the text of its
//! first occurrence. Attributes, comments and processing instructions are
//! dropped; text and CDATA inside an element are concatenated in document
//! order.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error(transparent)]
    Syntax(#[from] quick_xml::Error),

    #[error("invalid text content: {0}")]
    Text(String),

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("document has no root element")]
    NoRoot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.as_str())
    }

    /// Resolves a dotted path whose first segment names this element.
    ///
    /// Intermediate segments follow the first matching child; the final
    /// segment returns every matching child. An empty result means the path
    /// does not exist.
    #[must_use]
    pub fn select(&self, path: &[&str]) -> Vec<&Element> {
        let Some((root, rest)) = path.split_first() else {
            return Vec::new();
        };
        if self.name != *root {
            return Vec::new();
        }
        let Some((last, middle)) = rest.split_last() else {
            return vec![self];
        };

        let mut current = self;
        for segment in middle {
            match current.child(segment) {
                Some(next) => current = next,
                None => return Vec::new(),
            }
        }
        current.children.iter().filter(|c| c.name == *last).collect()
    }
}

/// Parses an XML payload into its root [`Element`].
///
/// # Errors
///
/// Returns [`XmlError`] for malformed markup, mismatched or unclosed tags, or
/// a payload with no root element (e.g. an HTML error page rendered as text
/// or a JSON body).
pub fn parse_document(xml: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(Element::new(
                    String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                ));
            }
            Event::Empty(e) => {
                let element =
                    Element::new(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.unescape().map_err(|err| XmlError::Text(err.to_string()))?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::Unclosed(open.name));
    }
    root.ok_or(XmlError::NoRoot)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
  <totalCnt>2</totalCnt>
  <item>
    <sn>1</sn>
    <ccbaKdcd>11</ccbaKdcd>
    <ccbaMnm1><![CDATA[서울 숭례문]]></ccbaMnm1>
  </item>
  <item>
    <sn>2</sn>
    <ccbaKdcd>12</ccbaKdcd>
    <ccbaMnm1>Tom &amp; Jerry</ccbaMnm1>
    <empty/>
  </item>
</result>"#;

    #[test]
    fn parses_items_under_root() {
        let doc = parse_document(LIST_PAGE).expect("parse");
        let items = doc.select(&["result", "item"]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].field("sn"), Some("1"));
        assert_eq!(items[1].field("ccbaKdcd"), Some("12"));
    }

    #[test]
    fn reads_cdata_and_unescapes_entities() {
        let doc = parse_document(LIST_PAGE).expect("parse");
        let items = doc.select(&["result", "item"]);
        assert_eq!(items[0].field("ccbaMnm1"), Some("서울 숭례문"));
        assert_eq!(items[1].field("ccbaMnm1"), Some("Tom & Jerry"));
    }

    #[test]
    fn self_closing_element_has_empty_text() {
        let doc = parse_document(LIST_PAGE).expect("parse");
        let items = doc.select(&["result", "item"]);
        assert_eq!(items[1].field("empty"), Some(""));
        assert_eq!(items[1].field("missing"), None);
    }

    #[test]
    fn field_reads_first_occurrence() {
        let doc = parse_document("<item><a>first</a><a>second</a></item>").expect("parse");
        assert_eq!(doc.field("a"), Some("first"));
    }

    #[test]
    fn select_walks_nested_path() {
        let xml = "<response><header/><body><items><item><imageNo>7</imageNo></item></items></body></response>";
        let doc = parse_document(xml).expect("parse");
        let items = doc.select(&["response", "body", "items", "item"]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].field("imageNo"), Some("7"));
    }

    #[test]
    fn select_returns_empty_for_wrong_root_or_missing_path() {
        let doc = parse_document(LIST_PAGE).expect("parse");
        assert!(doc.select(&["response", "item"]).is_empty());
        assert!(doc.select(&["result", "nothing"]).is_empty());
        assert!(doc.select(&[]).is_empty());
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        let result = parse_document("<result><item></result>");
        assert!(result.is_err(), "expected error, got {result:?}");
    }

    #[test]
    fn unclosed_root_is_rejected() {
        let result = parse_document("<result><item><sn>1</sn></item>");
        assert!(result.is_err(), "expected error, got {result:?}");
    }

    #[test]
    fn non_xml_payload_has_no_root() {
        let result = parse_document(r#"{"result": []}"#);
        assert!(
            matches!(result, Err(XmlError::NoRoot)),
            "expected NoRoot, got {result:?}"
        );
    }
}
