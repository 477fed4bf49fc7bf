use std::fs;
use std::path::Path;

use envswitch_catalog::{Catalog, CommandSource, list_candidate_files, list_commands};
use envswitch_core::{CatalogConfig, Command, SwitchError};

fn config_for(dir: &Path) -> CatalogConfig {
    CatalogConfig::builder()
        .directory(dir)
        .search_user_config(false)
        .build()
        .unwrap()
}

#[test]
fn test_candidates_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    for name in [".env.prod", ".env.dev", ".env", ".envrc", "README.md", ".env.staging"] {
        fs::write(dir.path().join(name), name).unwrap();
    }
    fs::create_dir(dir.path().join(".env.d")).unwrap();

    let files = list_candidate_files(&config_for(dir.path())).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec![".env.dev", ".env.prod", ".env.staging"]);
    assert_eq!(files[0].path, dir.path().join(".env.dev"));
}

#[test]
fn test_no_candidates() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "A=1").unwrap();

    let files = list_candidate_files(&config_for(dir.path())).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_unreadable_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");

    let err = list_candidate_files(&config_for(&missing)).unwrap_err();
    assert!(matches!(err, SwitchError::CatalogRead { .. }));
}

#[test]
fn test_custom_pattern() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("prod.env"), "").unwrap();
    fs::write(dir.path().join(".env.prod"), "").unwrap();

    let config = CatalogConfig::builder()
        .directory(dir.path())
        .pattern("*.env")
        .search_user_config(false)
        .build()
        .unwrap();
    let files = list_candidate_files(&config).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "prod.env");
}

#[test]
fn test_commands_from_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"scripts":{"build":"tsc","test":"vitest"}}"#,
    )
    .unwrap();

    let list = list_commands(&config_for(dir.path()));
    assert_eq!(
        list.commands,
        vec![
            Command::new("build", "npm run build"),
            Command::new("test", "npm run test"),
        ]
    );
    assert_eq!(list.source, CommandSource::Manifest(dir.path().join("package.json")));
    assert!(list.diagnostics.is_empty());
}

#[test]
fn test_commands_without_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let list = list_commands(&config_for(dir.path()));

    assert!(list.commands.is_empty());
    assert_eq!(list.source, CommandSource::None);
    assert_eq!(list.source.path(), None);
    assert!(list.diagnostics.is_empty());
}

#[test]
fn test_broken_manifest_degrades_to_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.json"), "{ oops").unwrap();

    let list = list_commands(&config_for(dir.path()));
    assert!(list.commands.is_empty());
    assert_eq!(list.diagnostics.len(), 1);
    assert!(list.diagnostics[0].contains("package.json"));
}

#[test]
fn test_user_config_takes_precedence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"scripts":{"build":"tsc","test":"vitest"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join(".env-switcher.json"),
        r#"{"commands":[{"name":"Start development server","command":"npm run dev"}]}"#,
    )
    .unwrap();

    let config = CatalogConfig::new(dir.path());
    let list = list_commands(&config);

    assert_eq!(list.commands, vec![Command::new("Start development server", "npm run dev")]);
    assert_eq!(
        list.source,
        CommandSource::UserConfig(dir.path().join(".env-switcher.json"))
    );
    assert_eq!(
        list.source.path(),
        Some(dir.path().join(".env-switcher.json").as_path())
    );
}

#[test]
fn test_empty_user_config_falls_back_to_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"scripts":{"dev":"vite"}}"#).unwrap();
    fs::write(dir.path().join(".env-switcher.json"), r#"{"commands":[]}"#).unwrap();

    let list = list_commands(&CatalogConfig::new(dir.path()));
    assert_eq!(list.commands, vec![Command::new("dev", "npm run dev")]);
}

#[test]
fn test_broken_user_config_falls_back_to_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"scripts":{"dev":"vite"}}"#).unwrap();
    fs::write(dir.path().join(".env-switcher.json"), "not json").unwrap();

    let list = list_commands(&CatalogConfig::new(dir.path()));
    assert_eq!(list.commands, vec![Command::new("dev", "npm run dev")]);
    assert_eq!(list.diagnostics.len(), 1);
}

#[test]
fn test_catalog_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env.dev"), "A=1").unwrap();
    fs::write(dir.path().join("package.json"), r#"{"scripts":{"dev":"vite"}}"#).unwrap();

    let catalog = Catalog::load(&config_for(dir.path())).unwrap();
    assert_eq!(catalog.files.len(), 1);
    assert_eq!(catalog.commands.len(), 1);
}

#[test]
fn test_catalog_load_empty_directory_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::load(&config_for(dir.path())).unwrap();
    assert!(catalog.files.is_empty());
}
