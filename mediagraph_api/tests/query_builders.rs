use std::collections::BTreeMap;

use mediagraph_api::types::Sort;
use mediagraph_api::{MessageQuery, Query};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

#[test]
fn message_query_defaults_to_no_params() {
    let url = MessageQuery::default().add_to_url(&base_url());
    assert!(url.query().unwrap_or("").is_empty());
}

#[test]
fn message_query_with_paging_params() {
    let url = MessageQuery::default()
        .with_limit(20)
        .with_offset(40)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("limit=20"));
    assert!(query.contains("offset=40"));
}

#[test]
fn message_query_with_ordering() {
    let url = MessageQuery::default()
        .with_order_by("date")
        .with_sort(Sort::Desc)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("order_by=date"));
    assert!(query.contains("sort=desc"));

    let url = MessageQuery::default()
        .with_sort(Sort::Asc)
        .add_to_url(&base_url());
    assert!(url.query().unwrap().contains("sort=asc"));
}

#[test]
fn message_query_flattens_filters_to_bracketed_keys() {
    let url = MessageQuery::default()
        .with_filter("topic", "grace")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("filter%5Btopic%5D=grace"));
    assert!(!query.contains("filter="));
}

#[test]
fn message_query_with_multiple_filters() {
    let mut filters = BTreeMap::new();
    filters.insert("topic".to_string(), "grace".to_string());
    filters.insert("speaker".to_string(), "Jordan Wells".to_string());

    let url = MessageQuery::default()
        .with_filters(filters)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("filter%5Btopic%5D=grace"));
    assert!(
        query.contains("filter%5Bspeaker%5D=Jordan+Wells")
            || query.contains("filter%5Bspeaker%5D=Jordan%20Wells")
    );
}

#[test]
fn message_query_combined() {
    let url = MessageQuery::default()
        .with_limit(2)
        .with_offset(2)
        .with_order_by("date")
        .with_sort(Sort::Desc)
        .with_filter("topic", "grace")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("limit=2"));
    assert!(query.contains("offset=2"));
    assert!(query.contains("order_by=date"));
    assert!(query.contains("sort=desc"));
    assert!(query.contains("filter%5Btopic%5D=grace"));
}
