//! Catalog data model, CSV input and JSON output.
//!
//! The input is a CSV with a header row; only the `act` (title) and `prompt`
//! (body) columns are consulted, any other columns are ignored. The output is
//! a JSON array of catalog entries with 2-space indentation and non-ASCII
//! characters preserved un-escaped, matching what the consuming portal reads.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::synth::CustomizableField;

/// One input row from the prompts CSV. Extra columns are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRow {
    /// Short title of the prompt ("act" in the upstream CSV).
    pub act: String,
    /// Free-form prompt body.
    pub prompt: String,
}

/// One entry of the output catalog.
///
/// `id` is a position marker assigned sequentially from a caller-supplied
/// base offset, recomputed on every run; it is not a stable identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptEntry {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub prompt: String,
    pub tags: Vec<String>,
    #[serde(rename = "customizableFields")]
    pub customizable_fields: Vec<CustomizableField>,
}

/// Reads all rows from the input CSV.
///
/// Fails before any row is returned if the file cannot be opened, the header
/// lacks the `act`/`prompt` columns, or a record is malformed. Failing fast
/// here costs nothing: no API call has been made yet, and a CSV without the
/// expected columns is the wrong input file.
pub fn read_rows(path: &Path) -> Result<Vec<PromptRow>, ConvertError> {
    let file = fs::File::open(path).map_err(|source| ConvertError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<PromptRow>().enumerate() {
        let row = result.map_err(|e| match e.kind() {
            csv::ErrorKind::Deserialize { .. } => ConvertError::MissingColumns {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            _ => ConvertError::MalformedRecord {
                index,
                message: e.to_string(),
            },
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Serializes the catalog as pretty-printed JSON (2-space indent, UTF-8).
pub fn to_catalog_json(entries: &[PromptEntry]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Writes the catalog to `path` as a single JSON document.
pub fn write_catalog(path: &Path, entries: &[PromptEntry]) -> Result<(), ConvertError> {
    let json = to_catalog_json(entries)?;
    fs::write(path, json).map_err(|source| ConvertError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    fn entry(id: u64, title: &str) -> PromptEntry {
        PromptEntry {
            id,
            title: title.to_string(),
            category: "Technical".to_string(),
            description: format!("A prompt for {title}"),
            prompt: "body".to_string(),
            tags: vec!["AI".to_string()],
            customizable_fields: Vec::new(),
        }
    }

    #[test]
    fn test_read_rows_basic() {
        let file = csv_file("act,prompt\nLinux Terminal,act as a terminal\nPoet,write poems\n");
        let rows = read_rows(file.path()).expect("rows should parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].act, "Linux Terminal");
        assert_eq!(rows[1].prompt, "write poems");
    }

    #[test]
    fn test_read_rows_ignores_extra_columns() {
        let file = csv_file("act,prompt,for_devs\nPoet,write poems,FALSE\n");
        let rows = read_rows(file.path()).expect("rows should parse");
        assert_eq!(rows[0].act, "Poet");
        assert_eq!(rows[0].prompt, "write poems");
    }

    #[test]
    fn test_read_rows_quoted_multiline_body() {
        let file = csv_file("act,prompt\nPoet,\"line one\nline two\"\n");
        let rows = read_rows(file.path()).expect("rows should parse");
        assert_eq!(rows[0].prompt, "line one\nline two");
    }

    #[test]
    fn test_read_rows_missing_columns_fails() {
        let file = csv_file("title,body\nPoet,write poems\n");
        let err = read_rows(file.path()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingColumns { .. }));
    }

    #[test]
    fn test_read_rows_missing_file_fails() {
        let err = read_rows(Path::new("/nonexistent/prompts.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::InputUnreadable { .. }));
    }

    #[test]
    fn test_catalog_json_uses_camel_case_field_names() {
        let json = to_catalog_json(&[entry(1000, "Poet")]).expect("serializes");
        assert!(json.contains("\"customizableFields\""));
        assert!(!json.contains("customizable_fields"));
    }

    #[test]
    fn test_catalog_json_two_space_indent() {
        let json = to_catalog_json(&[entry(1000, "Poet")]).expect("serializes");
        assert!(json.starts_with("[\n  {\n    \"id\": 1000"));
    }

    #[test]
    fn test_catalog_json_preserves_non_ascii() {
        let mut e = entry(1, "Çevirmen");
        e.description = "Türkçe çeviri asistanı".to_string();
        let json = to_catalog_json(&[e]).expect("serializes");
        assert!(json.contains("Çevirmen"));
        assert!(json.contains("Türkçe çeviri asistanı"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_catalog_round_trips() {
        let out = NamedTempFile::new().expect("create temp output");
        write_catalog(out.path(), &[entry(1000, "Poet"), entry(1001, "Chef")])
            .expect("write succeeds");
        let contents = fs::read_to_string(out.path()).expect("read back");
        let parsed: Vec<PromptEntry> = serde_json::from_str(&contents).expect("parse back");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, 1000);
        assert_eq!(parsed[1].title, "Chef");
    }
}
