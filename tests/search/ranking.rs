//! Ranking order: weight buckets, title hits, then input order.

use super::common::{make_featured, make_legacy, sample_site, titles};
use mahout_search::{build_index, build_index_with, search, BoostTable, ContentItem};

#[test]
fn test_sample_site_quantum_query() {
    let index = build_index(sample_site());
    let results = search("quantum", &index);

    // Featured: title hit ("Quantum Kernels") before body-only hit ("Qumat Primer").
    // Legacy: title hit ("Quantum-Ready ...") before body-only hit ("MapReduce Guide").
    assert_eq!(
        titles(&results),
        vec![
            "Quantum Kernels",
            "Qumat Primer",
            "Quantum-Ready Recommenders",
            "MapReduce Guide",
        ]
    );
}

#[test]
fn test_legacy_title_hit_loses_to_featured_body_hit() {
    let index = build_index(vec![
        make_legacy("Spark Bindings", ""),
        make_featured("Qumat Backends", "Runs next to spark clusters."),
    ]);
    let results = search("spark", &index);
    assert_eq!(titles(&results), vec!["Qumat Backends", "Spark Bindings"]);
}

#[test]
fn test_ties_keep_input_order() {
    let index = build_index(vec![
        make_legacy("Notes 3", "shared"),
        make_legacy("Notes 1", "shared"),
        make_legacy("Notes 2", "shared"),
    ]);
    let results = search("shared", &index);
    assert_eq!(titles(&results), vec!["Notes 3", "Notes 1", "Notes 2"]);
}

#[test]
fn test_uncategorized_ranks_with_legacy() {
    let index = build_index(vec![
        ContentItem::new("Download", "get mahout", ""),
        make_legacy("Mahout on Spark", ""),
        make_featured("Mahout Qumat", ""),
    ]);
    let results = search("mahout", &index);
    assert_eq!(titles(&results), vec!["Mahout Qumat", "Mahout on Spark", "Download"]);
}

#[test]
fn test_custom_boost_table_changes_winner() {
    let table = BoostTable::featured("legacy", 3.0);
    let index = build_index_with(
        vec![make_featured("Qumat Primer", "guide"), make_legacy("MapReduce Guide", "")],
        &table,
    );
    let results = search("guide", &index);
    assert_eq!(titles(&results), vec!["MapReduce Guide", "Qumat Primer"]);
}

#[test]
fn test_unicode_case_insensitive() {
    let index = build_index(vec![make_legacy("Über Algebra", ""), make_featured("ÉCOLE", "")]);
    assert_eq!(titles(&search("über", &index)), vec!["Über Algebra"]);
    assert_eq!(titles(&search("école", &index)), vec!["ÉCOLE"]);
}
