//! Category-boosted content search for the Apache Mahout website.
//!
//! The site is moving its weight from legacy machine-learning pages to
//! quantum computing ("Qumat") content, and search should follow. Every page
//! gets a weight from its category, and results are ranked by that weight
//! before anything else.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  index.rs    │────▶│  search/    │
//! │(ContentItem,│     │ (build_index)│     │  (search)   │
//! │ IndexedItem)│     │              │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    scoring/                          │
//! │  (BoostTable, compare_matches)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! `build/` and `store.rs` wrap the core with file loading and a
//! checksummed index format for the CLI and the browser.
//!
//! # Usage
//!
//! ```
//! use mahout_search::{build_index, search, ContentItem};
//!
//! let index = build_index(vec![
//!     ContentItem::new("MapReduce Guide", "quantum note inside", "legacy"),
//!     ContentItem::new("Qumat Primer", "first quantum circuit", "qumat"),
//! ]);
//!
//! let results = search("quantum", &index);
//! assert_eq!(results[0].title(), "Qumat Primer");
//! ```

pub mod build;
pub mod error;
mod index;
mod scoring;
mod search;
pub mod store;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::BuildError;
pub use index::{build_index, build_index_with};
pub use scoring::ranking::{compare_matches, RankedMatch};
pub use scoring::{is_valid_boost, BoostTable, DEFAULT_BOOST, DEFAULT_WEIGHT, FEATURED_CATEGORY};
pub use search::{search, search_opt, shown_count};
pub use store::{IndexFile, IndexStats};
pub use types::{ContentItem, IndexedItem};
pub use utils::normalize;

#[cfg(feature = "wasm")]
pub use wasm::MahoutSearcher;
