// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the mahout-search command-line interface.
//!
//! Three subcommands: `index` builds an index file from the site's exported
//! documents, `search` queries one, and `inspect` summarizes one.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mahout-search",
    about = "Category-boosted search index builder for the Mahout website",
    version
)]
pub struct Cli {
    /// Log build progress to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a search index from a directory of JSON documents
    Index {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Output directory for the index file
        #[arg(short, long)]
        output: String,

        /// Category to boost (overrides the manifest; default: qumat)
        #[arg(long)]
        featured: Option<String>,

        /// Boost factor for the featured category (overrides the manifest; default: 2.0)
        #[arg(long)]
        boost: Option<f64>,
    },

    /// Search an index file and display ranked results
    Search {
        /// Path to index file
        file: String,

        /// Search query (empty matches everything)
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of results to display (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Inspect an index file
    Inspect {
        /// Path to index file
        file: String,
    },
}
