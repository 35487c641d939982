// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching and result ordering.
//!
//! One pass to filter, one stable sort to rank. The query is normalized once,
//! and the title test doubles as the ranking key, so a title hit never scans
//! the body.

use crate::scoring::ranking::{compare_matches, RankedMatch};
use crate::types::IndexedItem;
use crate::utils::{contains_normalized, normalize};

/// Does `item` match the normalized query, and was it a title hit?
///
/// Returns `None` for no match, `Some(true)` for a title match, and
/// `Some(false)` when only the content contains the query.
fn match_item(item: &IndexedItem, needle: &str) -> Option<bool> {
    if contains_normalized(item.title(), needle) {
        Some(true)
    } else if contains_normalized(item.content(), needle) {
        Some(false)
    } else {
        None
    }
}

/// Search an index for `query`.
///
/// Matching is case-insensitive substring containment in title or content;
/// an empty query matches everything. Results are ordered by weight
/// (descending), then title hits before content-only hits, then input order.
pub fn search<'a>(query: &str, index: &'a [IndexedItem]) -> Vec<&'a IndexedItem> {
    let needle = normalize(query);

    let mut matches: Vec<RankedMatch<'a>> = index
        .iter()
        .filter_map(|item| {
            match_item(item, &needle).map(|title_match| RankedMatch { item, title_match })
        })
        .collect();

    // Stable: equal keys keep input order.
    matches.sort_by(compare_matches);

    matches.into_iter().map(|m| m.item).collect()
}

/// [`search`] with an optional query; `None` is the empty query.
pub fn search_opt<'a>(query: Option<&str>, index: &'a [IndexedItem]) -> Vec<&'a IndexedItem> {
    search(query.unwrap_or_default(), index)
}

/// How many of `total` results to show under a display `limit` (0 = all).
///
/// Search never truncates; this is for the CLI and browser surfaces.
pub fn shown_count(total: usize, limit: usize) -> usize {
    if limit == 0 {
        total
    } else {
        limit.min(total)
    }
}
