//! Tests for template storage back ends.

use std::{path::Path, sync::Arc};
use switchboard_prompt::{
    Error, LocalStorage, MemoryStorage, Pattern, PromptConfig, PromptRepository, Storage, Syntax,
    Variables,
};

#[test]
fn local_storage_reads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("test_prompt.txt");
    std::fs::write(&file, "Hello, $name!").unwrap();

    let storage = LocalStorage::new(dir.path());
    let template = storage.load_template("test_prompt.txt").unwrap();
    assert_eq!(template.content(), "Hello, $name!");
    assert_eq!(Path::new(template.path()), file);
}

#[test]
fn local_storage_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path());

    let err = storage.load_template("ghost.txt").unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound { .. }));
    assert!(err.to_string().contains("prompt template not found at"));
}

#[test]
fn local_storage_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("category").join("subcategory");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("template.txt"), "Nested content").unwrap();

    let storage = LocalStorage::new(dir.path().to_path_buf());
    let template = storage
        .load_template("category/subcategory/template.txt")
        .unwrap();
    assert_eq!(template.content(), "Nested content");
    assert_eq!(Path::new(template.path()), nested.join("template.txt"));
}

#[test]
fn local_storage_accepts_str_and_path_roots() {
    let dir = tempfile::tempdir().unwrap();
    let as_str = LocalStorage::new(dir.path().to_str().unwrap());
    let as_path = LocalStorage::new(dir.path());
    assert_eq!(as_str.base(), as_path.base());
}

#[test]
fn local_storage_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("folder")).unwrap();

    let err = LocalStorage::new(dir.path())
        .load_template("folder")
        .unwrap_err();
    assert!(!matches!(err, Error::TemplateNotFound { .. }));
}

#[test]
fn memory_storage_round_trip() {
    let mut storage = MemoryStorage::new();
    storage.insert("a", "first");
    storage.insert("a", "second");

    let template = storage.load_template("a").unwrap();
    assert_eq!(template.content(), "second");
    assert_eq!(template.path(), "a");
    assert!(matches!(
        storage.load_template("b"),
        Err(Error::TemplateNotFound { .. })
    ));
}

#[test]
fn shared_storage_works_through_arc() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new().with("t", "Hi {{who}}"));
    let repo = PromptRepository::new(storage);
    let mut vars = Variables::new();
    vars.insert("who".into(), "there".into());
    assert_eq!(repo.build("t", &vars).unwrap().content(), "Hi there");
}

#[test]
fn prompt_config_defaults_to_mustache() {
    let config: PromptConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.syntax, Syntax::Mustache);
    assert_eq!(config.pattern().as_str(), Pattern::default().as_str());
}

#[test]
fn prompt_config_builds_local_repository() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("t.txt"), "Dear $who").unwrap();

    let config: PromptConfig = serde_json::from_value(serde_json::json!({
        "dir": dir.path(),
        "syntax": "dollar",
    }))
    .unwrap();
    let repo = config.repository();
    assert_eq!(repo.storage().base(), dir.path());

    let mut vars = Variables::new();
    vars.insert("who".into(), "team".into());
    assert_eq!(repo.build("t.txt", &vars).unwrap().content(), "Dear team");
}
