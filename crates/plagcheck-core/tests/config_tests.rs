use std::path::PathBuf;
use tempfile::TempDir;

use plagcheck_core::config::{expand_path, resolve_with_base};

#[test]
fn resolve_with_base_joins_relative_paths() {
    let tmp = TempDir::new().unwrap();
    let resolved = resolve_with_base(tmp.path(), "notes/input.txt");
    assert_eq!(resolved, tmp.path().join("notes/input.txt"));
}

#[test]
fn resolve_with_base_keeps_absolute_paths() {
    let tmp = TempDir::new().unwrap();
    let resolved = resolve_with_base(tmp.path(), "/var/data/input.txt");
    assert_eq!(resolved, PathBuf::from("/var/data/input.txt"));
}

#[test]
fn expand_path_substitutes_env_vars() {
    std::env::set_var("PLAGCHECK_TEST_DIR", "/tmp/plagcheck-test");
    let expanded = expand_path("${PLAGCHECK_TEST_DIR}/in.txt");
    assert_eq!(expanded, PathBuf::from("/tmp/plagcheck-test/in.txt"));
}
