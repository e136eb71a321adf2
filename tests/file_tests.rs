//! Integration tests for loading data files and resolving paths in them.

use dotpath::file::loader::{load_file, parse_bytes, parse_str, Format};
use dotpath::output::{render, OutputFormat};
use dotpath::value::Value;
use dotpath::{resolve, resolve_as};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create a temporary file path with the given name
fn temp_file_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn gzip(content: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "deployment.yaml");
    fs::write(
        &path,
        "spec:\n  containers:\n    - name: web\n      image: nginx:1.27\n",
    )
    .unwrap();

    let data = load_file(&path).unwrap();
    assert_eq!(
        resolve_as::<Value>("spec.containers[0].image", &data).unwrap(),
        Some(&Value::from("nginx:1.27"))
    );
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "user.json");
    fs::write(
        &path,
        r#"{"user": {"name": "Alice", "age": 30, "manager": null}, "items": [1, 2, 3]}"#,
    )
    .unwrap();

    let data = load_file(&path).unwrap();
    assert_eq!(
        resolve_as::<Value>("user.age", &data).unwrap(),
        Some(&Value::Int(30))
    );
    assert_eq!(
        resolve_as::<Value>("items[2]", &data).unwrap(),
        Some(&Value::Int(3))
    );
    assert!(resolve("user.manager", &data).unwrap().is_none());
    assert!(resolve("user.manager.name", &data).unwrap().is_none());
}

#[test]
fn test_load_jsonl_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "events.jsonl");
    fs::write(&path, "{\"id\": 1}\n\n{\"id\": 2}\n").unwrap();

    let data = load_file(&path).unwrap();
    assert_eq!(
        resolve_as::<Value>("[1].id", &data).unwrap(),
        Some(&Value::Int(2))
    );
}

#[test]
fn test_load_gzipped_json_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "data.json.gz");
    fs::write(&path, gzip(r#"{"name": "compressed"}"#)).unwrap();

    let data = load_file(&path).unwrap();
    assert_eq!(
        resolve_as::<Value>("name", &data).unwrap(),
        Some(&Value::from("compressed"))
    );
}

#[test]
fn test_load_multi_document_yaml() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "stream.yml");
    fs::write(&path, "kind: Service\n---\nkind: Deployment\n").unwrap();

    let data = load_file(&path).unwrap();
    assert_eq!(
        resolve_as::<Value>("[1].kind", &data).unwrap(),
        Some(&Value::from("Deployment"))
    );
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "missing.yaml");

    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn test_load_invalid_json_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "broken.json");
    fs::write(&path, "{\"unterminated\": ").unwrap();

    assert!(load_file(&path).is_err());
}

#[test]
fn test_empty_yaml_file_is_null_root() {
    let dir = TempDir::new().unwrap();
    let path = temp_file_path(&dir, "empty.yaml");
    fs::write(&path, "").unwrap();

    let data = load_file(&path).unwrap();
    assert!(data.is_null());
    assert_eq!(
        resolve("a", &data).unwrap_err().to_string(),
        "invalid data arg"
    );
}

#[test]
fn test_parse_bytes_detects_json_and_yaml() {
    let json = parse_bytes(br#"{"a": [true]}"#).unwrap();
    assert_eq!(
        resolve_as::<Value>("a[0]", &json).unwrap(),
        Some(&Value::Bool(true))
    );

    let yaml = parse_bytes(b"a:\n  - b: 1.5\n").unwrap();
    assert_eq!(
        resolve_as::<Value>("a[0].b", &yaml).unwrap(),
        Some(&Value::Float(1.5))
    );
}

#[test]
fn test_parse_bytes_gzip_yaml() {
    let data = parse_bytes(&gzip("name: zipped\n")).unwrap();
    assert_eq!(
        resolve_as::<Value>("name", &data).unwrap(),
        Some(&Value::from("zipped"))
    );
}

#[test]
fn test_format_detection_ignores_gz_suffix() {
    assert_eq!(Format::from_path("a.jsonl.gz"), Format::Jsonl);
    assert_eq!(Format::from_path("a.yaml.gz"), Format::Yaml);
    assert_eq!(Format::from_path("dir/a.json"), Format::Json);
}

#[test]
fn test_large_unsigned_integers_keep_precision() {
    let json = parse_str(r#"{"id": 18446744073709551615}"#, Format::Json).unwrap();
    assert_eq!(
        resolve_as::<Value>("id", &json).unwrap(),
        Some(&Value::Uint(u64::MAX))
    );
    let found = resolve("id", &json).unwrap();
    assert_eq!(
        render(found, OutputFormat::Json, false).unwrap(),
        "18446744073709551615"
    );

    let yaml = parse_str("id: 18446744073709551615\n", Format::Yaml).unwrap();
    let found = resolve("id", &yaml).unwrap();
    assert_eq!(
        render(found, OutputFormat::Yaml, true).unwrap(),
        "18446744073709551615"
    );
}
