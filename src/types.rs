// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for content search.
//!
//! Two records: the `ContentItem` that the site build hands us, and the
//! `IndexedItem` that carries its precomputed weight. Every text field defaults
//! to the empty string, so a document exported with a missing `category` or
//! `content` still loads and still searches. Nothing here can fail.

use serde::{Deserialize, Serialize};

/// A single indexable unit of site content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Link target for rendering. Never consulted by ranking.
    pub href: String,
}

impl ContentItem {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
            href: String::new(),
        }
    }

    /// Builder-style href setter.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }
}

/// A content item with its ranking weight attached.
///
/// Produced only by [`build_index`](crate::build_index); the weight is a pure
/// function of the item's category under the boost table used at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedItem {
    #[serde(flatten)]
    pub item: ContentItem,
    pub weight: f64,
}

impl IndexedItem {
    pub fn title(&self) -> &str {
        &self.item.title
    }

    pub fn content(&self) -> &str {
        &self.item.content
    }

    pub fn category(&self) -> &str {
        &self.item.category
    }

    pub fn href(&self) -> &str {
        &self.item.href
    }
}
