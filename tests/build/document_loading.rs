//! Tests for document loading.

use super::common::{write_site, SITE_DOCS};
use mahout_search::build::{load_documents, read_manifest};
use mahout_search::BuildError;
use tempfile::TempDir;

#[test]
fn test_load_valid_documents() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path(), SITE_DOCS, None);

    let manifest = read_manifest(dir.path()).unwrap();
    let docs = load_documents(dir.path(), &manifest).unwrap();

    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].title, "MapReduce Guide");
    assert_eq!(docs[1].content, "Build a quantum circuit.");
    assert_eq!(docs[2].content, "Mailing lists.");
    assert_eq!(docs[2].category, "");
}

#[test]
fn test_load_documents_consistent_order() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path(), SITE_DOCS, None);
    let manifest = read_manifest(dir.path()).unwrap();

    let docs1 = load_documents(dir.path(), &manifest).unwrap();
    let docs2 = load_documents(dir.path(), &manifest).unwrap();
    assert_eq!(docs1, docs2);
}

#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();
    let err = read_manifest(dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::Read { .. }));
    assert!(err.to_string().contains("manifest.json"), "{}", err);
}

#[test]
fn test_missing_document_file() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path(), SITE_DOCS, None);
    std::fs::remove_file(dir.path().join("doc-1.json")).unwrap();

    let manifest = read_manifest(dir.path()).unwrap();
    let err = load_documents(dir.path(), &manifest).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "{}", err);
}

#[test]
fn test_invalid_document_json() {
    let dir = TempDir::new().unwrap();
    write_site(dir.path(), &[r#"{"title": "ok"}"#, "{ broken"], None);

    let manifest = read_manifest(dir.path()).unwrap();
    let err = load_documents(dir.path(), &manifest).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON in doc-1.json"), "{}", err);
}
