//! Tests for configuration loading

use std::fs;
use std::path::PathBuf;

use lbtas::config::Config;
use lbtas::core::models::{CriteriaError, DEFAULT_CATEGORIES};
use lbtas::paths;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage.path, PathBuf::from("lbtas_ratings.json"));
    assert_eq!(config.ratings.categories, DEFAULT_CATEGORIES);
    assert_eq!(config.criteria().unwrap().len(), 4);
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    assert!(Config::load_from(&temp.path().join("absent.toml")).unwrap().is_none());
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[storage]\npath = \"data/ratings.json\"\n").unwrap();

    let config = Config::load_from(&path).unwrap().unwrap();
    assert_eq!(config.storage.path, PathBuf::from("data/ratings.json"));
    assert_eq!(config.ratings.categories, DEFAULT_CATEGORIES);
}

#[test]
fn test_project_file_wins_over_global() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join(paths::PROJECT_CONFIG);
    let global = temp.path().join("global.toml");
    fs::write(&project, "[ratings]\ncategories = [\"speed\", \"accuracy\"]\n").unwrap();
    fs::write(&global, "[ratings]\ncategories = [\"courtesy\"]\n").unwrap();

    let config = Config::load_layered(&project, &global);
    assert_eq!(config.ratings.categories, ["speed", "accuracy"]);
}

#[test]
fn test_global_file_used_without_project_file() {
    let temp = TempDir::new().unwrap();
    let global = temp.path().join("global.toml");
    fs::write(&global, "[ratings]\ncategories = [\"courtesy\"]\n").unwrap();

    let config = Config::load_layered(&temp.path().join("missing.toml"), &global);
    assert_eq!(config.ratings.categories, ["courtesy"]);
}

#[test]
fn test_malformed_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join(paths::PROJECT_CONFIG);
    fs::write(&project, "this is = = not toml").unwrap();

    assert!(Config::load_from(&project).is_err());
    let config = Config::load_layered(&project, &temp.path().join("missing.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.ratings.categories = vec!["speed".to_string(), "accuracy".to_string()];
    config.save(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Some(config));
}

#[test]
fn test_invalid_categories_rejected() {
    let mut config = Config::default();
    config.ratings.categories = Vec::new();
    assert_eq!(config.criteria().unwrap_err(), CriteriaError::Empty);
}

#[test]
fn test_project_paths() {
    let dir = PathBuf::from("/work");
    assert_eq!(paths::project_config(&dir), dir.join(".lbtas.toml"));
    assert_eq!(Config::default().storage.path, PathBuf::from(paths::DEFAULT_STORAGE_FILE));
}
