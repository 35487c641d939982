// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search index construction.
//!
//! The "index" is the input collection with a weight stapled to each item.
//! There is no inverted structure: search is a linear scan, and the only work
//! worth doing ahead of time is the category lookup.
//!
//! # Invariants
//!
//! 1. **LENGTH_PRESERVED**: output has exactly as many items as input
//! 2. **ORDER_PRESERVED**: output item `i` is input item `i`
//! 3. **WEIGHT_BY_CATEGORY**: `weight` depends on `category` alone

use crate::scoring::BoostTable;
use crate::types::{ContentItem, IndexedItem};

/// Attach a weight to every item using `boosts`.
pub fn build_index_with(items: Vec<ContentItem>, boosts: &BoostTable) -> Vec<IndexedItem> {
    items
        .into_iter()
        .map(|item| {
            let weight = boosts.weight_for(&item.category);
            IndexedItem { item, weight }
        })
        .collect()
}

/// Attach a weight to every item using the default table (`qumat` boosted 2x).
pub fn build_index(items: Vec<ContentItem>) -> Vec<IndexedItem> {
    build_index_with(items, &BoostTable::default())
}
