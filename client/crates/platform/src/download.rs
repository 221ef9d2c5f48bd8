//! Client-side downloads
//!
//! A download hands a named byte buffer to a sink. The buffer is owned by the
//! caller and released as soon as `save` returns; sinks never keep it.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("Invalid download file name: {0}")]
    InvalidName(String),

    #[error("Download failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a download ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub name: String,
    pub location: Option<PathBuf>,
    pub size: usize,
}

pub trait DownloadSink: Send + Sync {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<SavedFile, DownloadError>;
}

fn check_name(file_name: &str) -> Result<(), DownloadError> {
    let bad = file_name.is_empty()
        || file_name.contains(['/', '\\'])
        || file_name == "."
        || file_name == "..";
    if bad {
        return Err(DownloadError::InvalidName(file_name.to_string()));
    }
    Ok(())
}

/// Writes downloads into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<SavedFile, DownloadError> {
        check_name(file_name)?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Download saved");

        Ok(SavedFile {
            name: file_name.to_string(),
            location: Some(path),
            size: bytes.len(),
        })
    }
}

/// Keeps downloads in memory (tests, previews)
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All saved files, oldest first
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files
            .lock()
            .map(|files| files.clone())
            .unwrap_or_default()
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<SavedFile, DownloadError> {
        check_name(file_name)?;
        if let Ok(mut files) = self.files.lock() {
            files.push((file_name.to_string(), bytes.to_vec()));
        }
        Ok(SavedFile {
            name: file_name.to_string(),
            location: None,
            size: bytes.len(),
        })
    }
}
