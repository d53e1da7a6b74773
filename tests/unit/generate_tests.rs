use super::*;
use clio::ClioPath;
use dbstructs::*;
use std::fs;

#[test]
fn test_generate_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.go");

    let written = generate(
        &users_and_orders(),
        &GenerationConfig::default(),
        ClioPath::local(path.clone()),
    )
    .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(written, content.len());
    assert!(content.starts_with("package DbStructs\n"));
    assert!(content.contains("type Orders struct{"));
}

#[test]
fn test_generate_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.go");
    fs::write(&path, "x".repeat(4096)).unwrap();

    let written = generate(&[], &GenerationConfig::default(), ClioPath::local(path.clone())).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "package DbStructs\n\n");
    assert_eq!(written, "package DbStructs\n\n".len());
}

#[test]
fn test_failed_generation_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.go");

    let mut cols = users_and_orders();
    cols.insert(1, col("users", "location", "point", Nullable::No));

    let result = generate(&cols, &GenerationConfig::default(), ClioPath::local(path.clone()));

    assert!(matches!(result, Err(Error::UnsupportedType { .. })));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate(
        &users_and_orders(),
        &GenerationConfig::default(),
        ClioPath::local(dir.path().to_path_buf()),
    );

    assert!(matches!(result, Err(Error::OutputSink(_))));
}

#[test]
fn test_builder_overrides() {
    let builder = DbStructsBuilder::new()
        .db_name("shop")
        .package_name("models")
        .tag_label("")
        .connection_string("mysql://root@localhost:3306/shop");

    let config = builder.get_config();
    assert_eq!(config.db_name, "shop");
    assert_eq!(
        config.generation(),
        GenerationConfig {
            package_name: "models".to_string(),
            tag_label: String::new(),
        }
    );
    assert_eq!(
        config.connection_string.as_deref(),
        Some("mysql://root@localhost:3306/shop")
    );
}
