//! WebAssembly bindings for in-browser search.
//!
//! The site fetches `index-{crc}.json` and hands the bytes to
//! `MahoutSearcher`. Ranking is identical to the native CLI because it is the
//! same code.

use crate::search::{search, shown_count};
use crate::store::IndexFile;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    title: &'a str,
    href: &'a str,
    category: &'a str,
    weight: f64,
}

#[wasm_bindgen]
pub struct MahoutSearcher {
    index: IndexFile,
}

#[wasm_bindgen]
impl MahoutSearcher {
    /// Load a searcher from index file bytes. Rejects bad checksums.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8]) -> Result<MahoutSearcher, JsValue> {
        let index = IndexFile::from_bytes(bytes, "index").map_err(|e| e.to_string())?;
        Ok(MahoutSearcher { index })
    }

    /// Search and return up to `limit` results (0 = all).
    #[wasm_bindgen]
    pub fn search(&self, query: &str, limit: usize) -> Result<JsValue, JsValue> {
        let results = search(query, &self.index.items);
        let take = shown_count(results.len(), limit);
        let output: Vec<SearchResultOutput<'_>> = results
            .into_iter()
            .take(take)
            .map(|item| SearchResultOutput {
                title: item.title(),
                href: item.href(),
                category: item.category(),
                weight: item.weight,
            })
            .collect();
        to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn item_count(&self) -> usize {
        self.index.items.len()
    }

    #[wasm_bindgen]
    pub fn featured_category(&self) -> String {
        self.index.featured_category.clone()
    }
}
