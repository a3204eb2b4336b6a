//! Document naming and delivery

use super::GeneratedDocument;
use crate::constants::{FILE_NAME_EXTENSION, FILE_NAME_PREFIX};
use crate::types::*;
use std::path::{Path, PathBuf};

/// File name for a document generated at `timestamp_millis` (unix epoch).
///
/// Two runs in the same millisecond get the same name.
pub fn file_name_for(timestamp_millis: i64) -> String {
    format!("{FILE_NAME_PREFIX}{timestamp_millis}.{FILE_NAME_EXTENSION}")
}

/// Save a generated document.
///
/// If `target` is an existing directory the document's own file name is used
/// inside it; otherwise `target` is the file path. Returns the written path.
pub async fn save_document(document: &GeneratedDocument, target: impl AsRef<Path>) -> Result<PathBuf> {
    let target = target.as_ref();
    let is_dir = tokio::fs::metadata(target)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    let path = if is_dir {
        target.join(&document.file_name)
    } else {
        target.to_owned()
    };

    tokio::fs::write(&path, &document.bytes).await?;
    log::info!("Saved {}", path.display());
    Ok(path)
}
