//! Tests for loading category record files

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use rsforest::application::{load_categories, ApplicationError, Catalog, Category};
use rsforest::config::LabelStyle;
use rsforest::util::testing;

const CATEGORIES: &str = "tests/resources/categories.toml";

#[rstest]
fn given_sample_file_when_loading_then_keeps_file_order() {
    testing::init_test_setup();
    let categories = load_categories(Path::new(CATEGORIES)).unwrap();

    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(categories[5], Category::new(6, "Orphan", Some(99)));
}

#[rstest]
fn given_sample_file_when_building_catalog_then_orphan_does_not_resolve() {
    let catalog = Catalog::load(Path::new(CATEGORIES)).unwrap();

    assert!(catalog.resolve(5).is_ok());
    assert!(matches!(catalog.resolve(6), Err(ApplicationError::UnknownId(6))));
    assert_eq!(catalog.forest().len(), 6);
    assert_eq!(catalog.forest().flatten().len(), 5);
}

#[rstest]
fn given_resolved_node_when_labelling_then_uses_style() {
    let catalog = Catalog::load(Path::new(CATEGORIES)).unwrap();
    let node = catalog.resolve(4).unwrap();

    assert_eq!(catalog.label(node, LabelStyle::Id), "4");
    assert_eq!(catalog.label(node, LabelStyle::Name), "Child3");
    assert_eq!(catalog.label(node, LabelStyle::Both), "Child3 (4)");
}

#[rstest]
fn given_missing_file_when_loading_then_operation_failed() {
    let err = load_categories(Path::new("tests/resources/does-not-exist.toml")).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("read record file"));
}

#[rstest]
fn given_record_without_id_when_loading_then_invalid_records() {
    let err = load_categories(Path::new("tests/resources/broken.toml")).unwrap_err();

    match err {
        ApplicationError::InvalidRecords { path, message } => {
            assert!(path.ends_with("broken.toml"));
            assert!(message.contains("id"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn given_empty_file_when_loading_then_no_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert!(catalog.forest().is_empty());
}
