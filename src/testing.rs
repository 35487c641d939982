//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::ContentItem;

/// Create a featured (`qumat`) item with a body.
pub fn make_featured(title: &str, content: &str) -> ContentItem {
    ContentItem::new(title, content, "qumat")
}

/// Create a default-category (`legacy`) item with a body.
pub fn make_legacy(title: &str, content: &str) -> ContentItem {
    ContentItem::new(title, content, "legacy")
}

/// A small site corpus mixing Qumat and legacy pages.
pub fn sample_site() -> Vec<ContentItem> {
    vec![
        make_legacy("MapReduce Guide", "Running batch jobs on Hadoop. A quantum note inside."),
        make_featured("Qumat Primer", "Build your first quantum circuit with Qumat."),
        make_legacy("Samsara Algebra", "Distributed linear algebra DSL."),
        make_featured("Quantum Kernels", "Kernel methods on quantum hardware."),
        make_legacy("Quantum-Ready Recommenders", "Legacy recommenders, revisited."),
        ContentItem::new("Community", "Mailing lists and meetups.", ""),
    ]
}
