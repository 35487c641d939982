// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matching items get sorted.
//!
//! Weight is the outer bucket, title match the inner one. A featured item that
//! only matched in its body still beats a default-category item with the query
//! in its title. Everything else is a tie, and ties keep input order because
//! the caller sorts stably.

use crate::types::IndexedItem;
use std::cmp::Ordering;

/// A matching item plus the one fact about the match that ranking needs.
#[derive(Debug, Clone, Copy)]
pub struct RankedMatch<'a> {
    pub item: &'a IndexedItem,
    pub title_match: bool,
}

/// Compare two matches for ranking.
///
/// Sort order:
/// 1. **Weight** - descending (featured category first)
/// 2. **Title match** - title hits before content-only hits
///
/// Returns `Equal` for everything else. Use with a stable sort.
///
/// # Example
///
/// ```ignore
/// // Featured content-only match beats a legacy title match
/// assert_eq!(compare_matches(&featured_body, &legacy_title), Ordering::Less);
/// ```
pub fn compare_matches(a: &RankedMatch<'_>, b: &RankedMatch<'_>) -> Ordering {
    match b.item.weight.total_cmp(&a.item.weight) {
        Ordering::Equal => b.title_match.cmp(&a.title_match),
        ord => ord,
    }
}
