//! Data file loading functionality.
//!
//! This module provides functions to load YAML, JSON and JSONL documents from
//! files or stdin, converting them into a dynamic [`Value`] that paths can be
//! resolved against. Gzip-compressed input is decompressed transparently.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use serde::Deserialize;

use crate::value::Value;

/// Format of a data document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML, including multi-document streams
    Yaml,
    /// A single JSON document
    Json,
    /// Newline-delimited JSON
    Jsonl,
}

impl Format {
    /// Determines the format from a file name, ignoring a `.gz` suffix.
    ///
    /// Examples:
    /// - `data.jsonl` → Jsonl
    /// - `data.json.gz` → Json
    /// - `config.yml` → Yaml
    /// - anything else → Yaml (a superset of JSON)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

        if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
            Format::Jsonl
        } else if base.ends_with(".json") {
            Format::Json
        } else {
            Format::Yaml
        }
    }
}

/// Loads and parses a data file from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use dotpath::file::loader::load_file;
///
/// let data = load_file("deployment.yaml").unwrap();
/// let image = dotpath::resolve("spec.template.spec.containers[0].image", &data).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid for the detected format
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    let format = Format::from_path(path_ref);
    log::debug!("loading {} as {:?}", path_ref.display(), format);
    parse_str(&content, format)
}

/// Loads and parses data from standard input.
///
/// The input may be gzip-compressed. Regular JSON is tried first, then
/// YAML, then JSONL.
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is none of JSON, YAML or JSONL
pub fn load_from_stdin() -> Result<Value> {
    let mut buffer = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    parse_bytes(&buffer)
}

/// Parses raw input bytes, detecting gzip and the document format.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value> {
    // gzip magic bytes
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Invalid UTF-8 in input")?
    };

    if let Ok(value) = parse_str(&content, Format::Json) {
        return Ok(value);
    }
    if let Ok(value) = parse_str(&content, Format::Yaml) {
        return Ok(value);
    }
    parse_str(&content, Format::Jsonl)
        .context("Failed to parse input: it is neither valid JSON, YAML nor JSONL")
}

/// Parses `content` in the given format.
///
/// JSONL becomes a list with one element per non-blank line. A YAML stream
/// with several documents becomes a list of documents.
pub fn parse_str(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => {
            let json: serde_json::Value =
                serde_json::from_str(content).context("Failed to parse JSON")?;
            Ok(Value::from(json))
        }
        Format::Jsonl => parse_jsonl_content(content),
        Format::Yaml => parse_yaml_content(content),
    }
}

/// Parses JSONL content (newline-delimited JSON).
///
/// Each line must be a valid JSON value. Blank lines are skipped.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(Value::from(value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::List(lines))
}

fn parse_yaml_content(content: &str) -> Result<Value> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = serde_yaml::Value::deserialize(document).context("Failed to parse YAML")?;
        documents.push(Value::from(value));
    }

    match documents.len() {
        0 => Ok(Value::Null),
        1 => Ok(documents.remove(0)),
        _ => Ok(Value::List(documents)),
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
