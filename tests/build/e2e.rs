//! End-to-end tests for the build workflow.

use super::common::{titles, write_site, SITE_DOCS};
use mahout_search::build::{run_build, RankingOverrides};
use mahout_search::{search, BuildError, IndexFile};
use tempfile::TempDir;

#[test]
fn test_run_build_e2e_basic() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_site(input.path(), SITE_DOCS, None);

    let out_dir = output.path().join("search");
    let summary = run_build(input.path(), &out_dir, &RankingOverrides::default()).unwrap();

    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.featured_count, 1);
    assert!(summary.path.exists(), "index file should be created");
    let name = summary.path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("index-") && name.ends_with(".json"), "{}", name);

    let index = IndexFile::load(&summary.path).unwrap();
    assert_eq!(index.featured_category, "qumat");
    assert_eq!(index.boost, 2.0);
    assert_eq!(index.file_name(), name);

    let results = search("quantum", &index.items);
    assert_eq!(titles(&results), vec!["Qumat Primer", "MapReduce Guide"]);
    assert_eq!(results[0].href(), "/qumat/primer/");
}

#[test]
fn test_manifest_ranking_applies() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_site(
        input.path(),
        SITE_DOCS,
        Some(r#"{"featuredCategory": "legacy", "boost": 4.0}"#),
    );

    let summary = run_build(input.path(), output.path(), &RankingOverrides::default()).unwrap();
    let index = IndexFile::load(&summary.path).unwrap();

    assert_eq!(index.featured_category, "legacy");
    let results = search("quantum", &index.items);
    assert_eq!(titles(&results), vec!["MapReduce Guide", "Qumat Primer"]);
    assert_eq!(results[0].weight, 4.0);
}

#[test]
fn test_cli_overrides_beat_manifest() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_site(
        input.path(),
        SITE_DOCS,
        Some(r#"{"featuredCategory": "legacy", "boost": 4.0}"#),
    );

    let overrides = RankingOverrides {
        featured_category: Some("qumat".to_string()),
        boost: Some(1.5),
    };
    let summary = run_build(input.path(), output.path(), &overrides).unwrap();
    assert_eq!(summary.ranking.featured_category, "qumat");
    assert_eq!(summary.ranking.boost, 1.5);

    let index = IndexFile::load(&summary.path).unwrap();
    let weights: Vec<f64> = index.items.iter().map(|i| i.weight).collect();
    assert_eq!(weights, vec![1.0, 1.5, 1.0]);
}

#[test]
fn test_invalid_boost_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_site(input.path(), SITE_DOCS, None);

    let overrides = RankingOverrides {
        featured_category: None,
        boost: Some(-2.0),
    };
    let err = run_build(input.path(), output.path(), &overrides).unwrap_err();
    assert!(matches!(err, BuildError::InvalidBoost(_)));
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_site_builds_empty_index() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_site(input.path(), &[], None);

    let summary = run_build(input.path(), output.path(), &RankingOverrides::default()).unwrap();
    assert_eq!(summary.item_count, 0);

    let index = IndexFile::load(&summary.path).unwrap();
    assert!(index.items.is_empty());
    assert!(search("", &index.items).is_empty());
}

#[test]
fn test_rebuild_is_deterministic() {
    let input = TempDir::new().unwrap();
    write_site(input.path(), SITE_DOCS, None);

    let out1 = TempDir::new().unwrap();
    let out2 = TempDir::new().unwrap();
    let a = run_build(input.path(), out1.path(), &RankingOverrides::default()).unwrap();
    let b = run_build(input.path(), out2.path(), &RankingOverrides::default()).unwrap();

    assert_eq!(a.path.file_name(), b.path.file_name());
    assert_eq!(std::fs::read(&a.path).unwrap(), std::fs::read(&b.path).unwrap());
}
