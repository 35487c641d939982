// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading and parsing a few hundred JSON files is the only part of a build
//! that takes noticeable time, and it's embarrassingly parallel. Rayon's
//! `par_iter().collect()` keeps manifest order, so the index comes out the
//! same no matter how the threads were scheduled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::Path;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::{BuildError, Result};

use super::{Document, InputManifest};

fn load_one(input_dir: &Path, filename: &str) -> Result<Document> {
    let path = input_dir.join(filename);
    let content = fs::read_to_string(&path).map_err(|source| BuildError::Read {
        path: path.clone(),
        source,
    })?;
    let doc = serde_json::from_str::<Document>(&content).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to parse document");
        BuildError::Parse {
            what: filename.to_string(),
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), title = %doc.title, "loaded document");
    Ok(doc)
}

/// Load all documents listed in the manifest, in manifest order.
///
/// Fails on the first unreadable or unparseable file.
pub fn load_documents(input_dir: &Path, manifest: &InputManifest) -> Result<Vec<Document>> {
    #[cfg(feature = "parallel")]
    let iter = manifest.documents.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = manifest.documents.iter();

    iter.map(|filename| load_one(input_dir, filename)).collect()
}

/// Load all documents in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<Document>> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    manifest
        .documents
        .par_iter()
        .map(|filename| {
            let doc = load_one(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect()
}
