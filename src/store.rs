// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index file format: a checksummed JSON snapshot of weighted items.
//!
//! The site build writes one of these; the browser (or the CLI) loads it and
//! searches it. JSON because the consumer is JavaScript and the corpus is a
//! few hundred pages.
//!
//! ```text
//! {
//!   "version": 1,
//!   "featuredCategory": "qumat",
//!   "boost": 2.0,
//!   "checksum": 3735928559,       ← CRC32 of compact JSON of `items`
//!   "items": [ {title, content, category, href, weight}, ... ]
//! }
//! ```
//!
//! The checksum covers the items only. The ranking header records how the
//! weights were computed, so loading recomputes every weight from it and
//! rejects a file where the two disagree.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use crc32fast::Hasher as Crc32Hasher;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};
use crate::scoring::BoostTable;
use crate::types::IndexedItem;

/// Current index file format version.
pub const VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFile {
    pub version: u32,
    pub featured_category: String,
    pub boost: f64,
    pub checksum: u32,
    pub items: Vec<IndexedItem>,
}

/// Summary numbers for `inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    pub item_count: usize,
    pub featured_count: usize,
    /// Items per category, sorted by name. Empty categories appear as `""`.
    pub categories: BTreeMap<String, usize>,
    pub raw_bytes: usize,
    pub brotli_bytes: usize,
}

/// CRC32 over the compact JSON encoding of `items`.
pub fn compute_checksum(items: &[IndexedItem]) -> Result<u32> {
    let bytes = serde_json::to_vec(items).map_err(|source| BuildError::Encode {
        what: "index items".to_string(),
        source,
    })?;
    let mut hasher = Crc32Hasher::new();
    hasher.update(&bytes);
    Ok(hasher.finalize())
}

impl IndexFile {
    pub fn new(items: Vec<IndexedItem>, featured_category: &str, boost: f64) -> Result<Self> {
        let checksum = compute_checksum(&items)?;
        Ok(Self {
            version: VERSION,
            featured_category: featured_category.to_string(),
            boost,
            checksum,
            items,
        })
    }

    /// Content-addressed file name, e.g. `index-1a2b3c4d.json`.
    pub fn file_name(&self) -> String {
        format!("index-{:08x}.json", self.checksum)
    }

    /// The boost table the weights were computed with.
    pub fn boost_table(&self) -> BoostTable {
        BoostTable::featured(self.featured_category.clone(), self.boost)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|source| BuildError::Encode {
            what: "index file".to_string(),
            source,
        })
    }

    /// Parse and validate an index file. `what` names the source in errors.
    pub fn from_bytes(bytes: &[u8], what: &str) -> Result<Self> {
        let file: IndexFile = serde_json::from_slice(bytes).map_err(|source| BuildError::Parse {
            what: what.to_string(),
            source,
        })?;

        if file.version != VERSION {
            return Err(BuildError::UnsupportedVersion {
                found: file.version,
                expected: VERSION,
            });
        }

        let computed = compute_checksum(&file.items)?;
        if computed != file.checksum {
            return Err(BuildError::ChecksumMismatch {
                stored: file.checksum,
                computed,
            });
        }

        file.check_weights()?;

        tracing::debug!(items = file.items.len(), checksum = file.checksum, "index file validated");
        Ok(file)
    }

    /// Every weight must be what the header's boost table gives its category.
    pub fn check_weights(&self) -> Result<()> {
        let table = self.boost_table();
        for (position, item) in self.items.iter().enumerate() {
            let expected = table.weight_for(item.category());
            if item.weight != expected {
                return Err(BuildError::WeightMismatch {
                    position,
                    category: item.category().to_string(),
                    stored: item.weight,
                    expected,
                });
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| BuildError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, &path.display().to_string())
    }

    pub fn stats(&self) -> Result<IndexStats> {
        let bytes = self.to_bytes()?;
        let mut categories = BTreeMap::new();
        for item in &self.items {
            *categories.entry(item.category().to_string()).or_insert(0) += 1;
        }
        let table = self.boost_table();
        let featured_count = self
            .items
            .iter()
            .filter(|i| table.is_boosted(i.category()))
            .count();

        Ok(IndexStats {
            item_count: self.items.len(),
            featured_count,
            categories,
            raw_bytes: bytes.len(),
            brotli_bytes: brotli_size(&bytes),
        })
    }
}

fn brotli_size(data: &[u8]) -> usize {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        // Writing into a Vec cannot fail.
        let _ = encoder.write_all(data);
    }
    compressed.len()
}
