//! Persistent storage for locale files.
//!
//! The merge cache only talks to storage through [`TranslationStore`], which
//! keeps the load-once and flush logic independent of the filesystem.

use std::{fs, io, path::Path};

use serde::Serialize;
use thiserror::Error;

use super::data::TranslationData;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and write access to locale files.
///
/// `write` may be called from several threads at once, each call for a
/// different path.
pub trait TranslationStore: Sync {
    fn read(&self, path: &Path) -> Result<TranslationData, StoreError>;

    fn write(&self, path: &Path, data: &TranslationData) -> Result<(), StoreError>;
}

/// Render a value the way every generated JSON file is written: 2-space
/// indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value).map(|content| format!("{}\n", content))
}

/// Locale files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl TranslationStore for FsStore {
    fn read(&self, path: &Path) -> Result<TranslationData, StoreError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, path: &Path, data: &TranslationData) -> Result<(), StoreError> {
        let content = to_pretty_json(data)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
