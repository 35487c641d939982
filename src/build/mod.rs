// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index build pipeline: manifest + documents in, one index file out.
//!
//! ```text
//! input/manifest.json ──▶ load_documents ──▶ build_index_with ──▶ output/index-{crc}.json
//! input/*.json        ──┘                    (ranking config)
//! ```

pub mod document;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{BuildError, Result};
use crate::index::build_index_with;
use crate::store::IndexFile;
use crate::types::ContentItem;

pub use document::*;
pub use manifest::*;
pub use parallel::*;

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub path: PathBuf,
    pub item_count: usize,
    pub featured_count: usize,
    pub ranking: RankingConfig,
    pub bytes: usize,
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Read and parse `manifest.json` from the input directory.
pub fn read_manifest(input_dir: &Path) -> Result<InputManifest> {
    let manifest_path = input_dir.join("manifest.json");
    let manifest_content = fs::read_to_string(&manifest_path).map_err(|source| BuildError::Read {
        path: manifest_path.clone(),
        source,
    })?;
    serde_json::from_str(&manifest_content).map_err(|source| BuildError::Parse {
        what: manifest_path.display().to_string(),
        source,
    })
}

pub fn run_build(
    input_dir: &Path,
    output_dir: &Path,
    overrides: &RankingOverrides,
) -> Result<BuildSummary> {
    // 1. Read manifest and settle the ranking before touching documents
    let manifest = read_manifest(input_dir)?;
    let ranking = overrides.resolve(&manifest)?;

    // 2. Load documents
    #[cfg(feature = "parallel")]
    let documents = {
        let load_pb = ProgressBar::new(manifest.documents.len() as u64);
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("documents...");
        let documents = load_documents_with_progress(input_dir, &manifest, &load_pb)?;
        load_pb.finish_with_message(format!("loaded {} documents", documents.len()));
        documents
    };
    #[cfg(not(feature = "parallel"))]
    let documents = load_documents(input_dir, &manifest)?;

    if documents.is_empty() {
        tracing::warn!(input = %input_dir.display(), "no documents listed; writing empty index");
    }

    // 3. Attach weights
    let items: Vec<ContentItem> = documents.into_iter().map(ContentItem::from).collect();
    let boosts = ranking.boost_table();
    let indexed = build_index_with(items, &boosts);
    let featured_count = indexed
        .iter()
        .filter(|i| boosts.is_boosted(i.category()))
        .count();

    // 4. Write index file
    let file = IndexFile::new(indexed, &ranking.featured_category, ranking.boost)?;
    let bytes = file.to_bytes()?;

    fs::create_dir_all(output_dir).map_err(|source| BuildError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(file.file_name());
    fs::write(&path, &bytes).map_err(|source| BuildError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        items = file.items.len(),
        featured = featured_count,
        featured_category = %ranking.featured_category,
        boost = ranking.boost,
        "index written"
    );

    Ok(BuildSummary {
        path,
        item_count: file.items.len(),
        featured_count,
        ranking,
        bytes: bytes.len(),
    })
}
