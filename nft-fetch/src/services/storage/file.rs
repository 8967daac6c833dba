use crate::interfaces::error::StorageError;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const DATA_FILE_NAME: &str = "data.json";

/// Creates `out_dir` and its parents when missing.
pub async fn ensure_output_dir(out_dir: &Path) -> Result<(), StorageError> {
    if fs::try_exists(out_dir).await.unwrap_or(false) {
        return Ok(());
    }

    fs::create_dir_all(out_dir)
        .await
        .map_err(|source| StorageError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

    let resolved = fs::canonicalize(out_dir)
        .await
        .unwrap_or_else(|_| out_dir.to_path_buf());
    info!("Created output directory at {}", resolved.display());
    Ok(())
}

/// Writes `data` as indented JSON to `<out_dir>/data.json`, replacing any
/// previous export.
pub async fn save_json<T: Serialize + ?Sized>(
    data: &T,
    out_dir: &Path,
) -> Result<PathBuf, StorageError> {
    let file_path = out_dir.join(DATA_FILE_NAME);
    let content = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, content)
        .await
        .map_err(|source| StorageError::Write {
            path: file_path.clone(),
            source,
        })?;
    Ok(file_path)
}

/// Exports `data` to the output directory.
///
/// Only a failure to create the directory is returned. A failed write is
/// logged and reported as `Ok(None)`.
pub async fn export_json<T: Serialize + ?Sized>(
    data: &T,
    out_dir: &Path,
) -> Result<Option<PathBuf>, StorageError> {
    ensure_output_dir(out_dir).await?;

    match save_json(data, out_dir).await {
        Ok(file_path) => {
            info!("Successfully created {}", file_path.display());
            Ok(Some(file_path))
        }
        Err(e) => {
            error!("{:?}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_output_dir_creates_nested_dirs() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("output").join("growth-one");

        ensure_output_dir(&out_dir).await.unwrap();
        assert!(out_dir.is_dir());

        // already there
        ensure_output_dir(&out_dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_output_dir_fails_under_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("output");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = ensure_output_dir(&blocker.join("duet")).await;
        assert!(matches!(result, Err(StorageError::CreateDir { .. })));
    }

    #[tokio::test]
    async fn test_export_json_overwrites_previous_file() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("duet");

        export_json(&json!({ "name": "first" }), &out_dir)
            .await
            .unwrap();
        let file_path = export_json(&vec![json!({ "name": "second" })], &out_dir)
            .await
            .unwrap()
            .unwrap();

        let content = std::fs::read_to_string(file_path).unwrap();
        assert!(content.contains("\n  "));
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, json!([{ "name": "second" }]));
    }

    #[tokio::test]
    async fn test_export_json_write_failure_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("duet");
        // a directory where data.json should go makes the write fail
        std::fs::create_dir_all(out_dir.join(DATA_FILE_NAME)).unwrap();

        let result = export_json(&json!({ "name": "duet" }), &out_dir)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
