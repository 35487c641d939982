//! The worked examples every implementation of the ranking must reproduce.

use super::common::titles;
use mahout_search::{build_index, search, ContentItem, IndexedItem};

fn primer_and_guide() -> Vec<IndexedItem> {
    build_index(vec![
        ContentItem::new("Qumat Primer", "An introduction to quantum circuits.", "qumat"),
        ContentItem::new("MapReduce Guide", "quantum note inside", "legacy"),
    ])
}

#[test]
fn test_featured_first_when_both_match() {
    let index = primer_and_guide();
    let results = search("Quantum", &index);
    assert_eq!(titles(&results), vec!["Qumat Primer", "MapReduce Guide"]);
    assert_eq!(results[0].weight, 2.0);
    assert_eq!(results[1].weight, 1.0);
}

#[test]
fn test_empty_query_returns_everything_featured_first() {
    let index = primer_and_guide();
    let results = search("", &index);
    assert_eq!(titles(&results), vec!["Qumat Primer", "MapReduce Guide"]);
}

#[test]
fn test_only_matching_item_returned() {
    let index = build_index(vec![
        ContentItem::new("A", "x", "qumat"),
        ContentItem::new("B contains keyword", "y", "legacy"),
    ]);
    let results = search("keyword", &index);
    assert_eq!(titles(&results), vec!["B contains keyword"]);
}

#[test]
fn test_empty_collection() {
    let index = build_index(Vec::new());
    assert!(search("anything", &index).is_empty());
    assert!(search("", &index).is_empty());
}

#[test]
fn test_missing_fields_still_searchable() {
    let item: ContentItem = serde_json::from_str(r#"{"content": "orphaned quantum page"}"#).unwrap();
    let index = build_index(vec![item]);
    let results = search("QUANTUM", &index);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title(), "");
    assert_eq!(results[0].weight, 1.0);
}
