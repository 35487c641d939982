// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from building, writing, and loading index files.
//!
//! Search itself cannot fail. Everything that touches the filesystem or parses
//! bytes returns `BuildError`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// A manifest, document, or index file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not the JSON we expected.
    #[error("Invalid JSON in {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {what}: {source}")]
    Encode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Boost must be finite and positive.
    #[error("Invalid boost {0}: must be a finite number greater than zero")]
    InvalidBoost(f64),

    /// The featured category must name real content.
    #[error("Featured category must not be empty")]
    EmptyFeaturedCategory,

    /// An item's weight disagrees with the ranking recorded in the header.
    #[error(
        "Weight mismatch at item {position} (category {category:?}): stored {stored}, header implies {expected}"
    )]
    WeightMismatch {
        position: usize,
        category: String,
        stored: f64,
        expected: f64,
    },

    #[error("Unsupported index version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Stored checksum does not match the items.
    #[error("Checksum mismatch: stored {stored:08x}, computed {computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
