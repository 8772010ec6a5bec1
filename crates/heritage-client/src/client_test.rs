use heritage_core::HeritageKey;

use super::*;

fn test_client() -> HeritageClient {
    HeritageClient::new(ClientConfig::with_base_url("https://www.cha.go.kr"))
        .expect("client construction should not fail")
}

#[test]
fn list_page_url_carries_page_size_and_index() {
    let url = test_client().list_page_url(3).unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.cha.go.kr/cha/SearchKindOpenapiList.do?pageUnit=100&pageIndex=3"
    );
}

#[test]
fn detail_url_carries_composite_key() {
    let key = HeritageKey {
        kind_code: "11".to_string(),
        serial_no: "00010000".to_string(),
        city_code: "11".to_string(),
    };
    let url = test_client().detail_url(&key).unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.cha.go.kr/cha/SearchKindOpenapiDt.do?ccbaKdcd=11&ccbaAsno=00010000&ccbaCtcd=11"
    );
}

#[test]
fn detail_url_passes_placeholder_identifiers_through() {
    let key = HeritageKey {
        kind_code: "-".to_string(),
        serial_no: "-".to_string(),
        city_code: "-".to_string(),
    };
    let url = test_client().detail_url(&key).unwrap();
    assert!(url.as_str().ends_with("?ccbaKdcd=-&ccbaAsno=-&ccbaCtcd=-"));
}

#[test]
fn build_url_keeps_existing_query() {
    let url = build_url("https://example.com/api?serviceKey=abc", &[("pageIndex", "1")]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/api?serviceKey=abc&pageIndex=1"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let url = build_url("https://example.com/api", &[("q", "a&b c")]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/api?q=a%26b+c");
}

#[test]
fn build_url_rejects_invalid_base() {
    let result = build_url("not-a-url", &[]);
    assert!(
        matches!(result, Err(ClientError::InvalidUrl { .. })),
        "expected InvalidUrl, got: {result:?}"
    );
}
