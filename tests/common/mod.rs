//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use mahout_search::IndexedItem;
use std::fs;
use std::path::Path;

// Re-export canonical test utilities from mahout_search::testing
pub use mahout_search::testing::{make_featured, make_legacy, sample_site};

/// Titles of a result list, in order.
pub fn titles<'a>(results: &[&'a IndexedItem]) -> Vec<&'a str> {
    results.iter().copied().map(IndexedItem::title).collect()
}

/// Write a site export (manifest + one JSON file per document) into `dir`.
///
/// `docs` are raw JSON bodies; files are named `doc-{i}.json`.
pub fn write_site(dir: &Path, docs: &[&str], ranking: Option<&str>) {
    let names: Vec<String> = (0..docs.len()).map(|i| format!("doc-{}.json", i)).collect();
    for (name, body) in names.iter().zip(docs) {
        fs::write(dir.join(name), body).expect("Failed to write document");
    }

    let documents = names
        .iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(", ");
    let manifest = match ranking {
        Some(r) => format!(r#"{{"version": 1, "documents": [{}], "ranking": {}}}"#, documents, r),
        None => format!(r#"{{"version": 1, "documents": [{}]}}"#, documents),
    };
    fs::write(dir.join("manifest.json"), manifest).expect("Failed to write manifest");
}

/// The three-page site used by the build tests.
pub const SITE_DOCS: &[&str] = &[
    r#"{"slug": "mapreduce", "title": "MapReduce Guide", "content": "Batch jobs. A quantum note inside.", "category": "legacy"}"#,
    r#"{"slug": "qumat/primer", "title": "Qumat Primer", "text": "Build a quantum circuit.", "category": "qumat"}"#,
    r#"{"title": "Community", "body": "Mailing lists."}"#,
];
