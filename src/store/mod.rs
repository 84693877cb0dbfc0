//! Writer persisting fetched payloads to the output directory.
//!
//! Each dataset kind has its own on-disk form:
//! - text is written verbatim
//! - CSV is parsed into a [`Table`] and re-serialized canonically
//! - JSON is pretty-printed with four-space indentation, keys in received order
//! - spreadsheets are written byte-for-byte

mod error;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

pub use error::StoreError;

use crate::dataset::DatasetKind;
use crate::fetch::Payload;
use crate::table::Table;

/// Creates `dir` and any missing parents.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the directory cannot be created.
pub async fn prepare_output_dir(dir: &Path) -> Result<(), StoreError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| StoreError::io(dir, e))?;
    debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}

/// Persists `payload` for a dataset of `kind` as `dir/filename`.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`StoreError`] on file system errors, when CSV content does not
/// parse as a table, or when the payload shape does not match `kind`.
pub async fn save(
    dir: &Path,
    kind: DatasetKind,
    filename: &str,
    payload: &Payload,
) -> Result<PathBuf, StoreError> {
    let path = dir.join(filename);

    let bytes = match (kind, payload) {
        (DatasetKind::Text, Payload::Text(text)) => text.as_bytes().to_vec(),
        (DatasetKind::Csv, Payload::Text(text)) => Table::from_csv_str(text)
            .and_then(|table| table.to_csv_bytes())
            .map_err(|e| StoreError::csv(&path, e))?,
        (DatasetKind::Json, Payload::Json(value)) => {
            to_pretty_json(value).map_err(|e| StoreError::json(&path, e))?
        }
        (DatasetKind::Spreadsheet, Payload::Bytes(bytes)) => bytes.clone(),
        (kind, payload) => {
            return Err(StoreError::PayloadMismatch {
                kind,
                format: payload.format(),
            });
        }
    };

    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| StoreError::io(&path, e))?;

    info!(bytes = bytes.len(), "{} data saved to {}", kind.label(), path.display());
    Ok(path)
}

/// Serializes `value` with four-space indentation and no trailing newline.
fn to_pretty_json(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fetch::PayloadFormat;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_text_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let content = "  hello\tworld \n\nagain";
        let path = save(
            dir.path(),
            DatasetKind::Text,
            "data.txt",
            &Payload::Text(content.to_string()),
        )
        .await
        .unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), content);
    }

    #[tokio::test]
    async fn test_save_json_uses_four_space_indent_and_key_order() {
        let dir = TempDir::new().unwrap();
        let value: Value = serde_json::from_str(r#"{"z":1,"a":{"b":[1,2]}}"#).unwrap();
        let path = save(dir.path(), DatasetKind::Json, "data.json", &Payload::Json(value))
            .await
            .unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            written,
            "{\n    \"z\": 1,\n    \"a\": {\n        \"b\": [\n            1,\n            2\n        ]\n    }\n}"
        );
    }

    #[tokio::test]
    async fn test_save_csv_normalizes_through_table() {
        let dir = TempDir::new().unwrap();
        let path = save(
            dir.path(),
            DatasetKind::Csv,
            "data.csv",
            &Payload::Text("\"a\",b\r\n1.50,x\r\n1.50,x\r\n".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "a,b\n1.5,x\n1.5,x\n"
        );
    }

    #[tokio::test]
    async fn test_save_spreadsheet_is_byte_for_byte() {
        let dir = TempDir::new().unwrap();
        let bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0x00, 0xFF];
        let path = save(
            dir.path(),
            DatasetKind::Spreadsheet,
            "data.xls",
            &Payload::Bytes(bytes.clone()),
        )
        .await
        .unwrap();
        assert_eq!(std::fs::read(path).unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_save_rejects_mismatched_payload() {
        let dir = TempDir::new().unwrap();
        let err = save(
            dir.path(),
            DatasetKind::Json,
            "data.json",
            &Payload::Text("{}".to_string()),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::PayloadMismatch {
                kind: DatasetKind::Json,
                format: PayloadFormat::Text
            }
        ));
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails_with_io() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = save(
            &missing,
            DatasetKind::Text,
            "data.txt",
            &Payload::Text("x".to_string()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }), "got {err}");
    }

    #[tokio::test]
    async fn test_prepare_output_dir_creates_nested_dirs() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        prepare_output_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        // Existing directory is fine.
        prepare_output_dir(&nested).await.unwrap();
    }
}
