use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("refusing to write outside the output directory: {0}")]
    InvalidPath(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), WriteError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(WriteError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| WriteError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes files under a site root, each one via temp file plus rename so a
/// reader never sees half a page.
pub struct AtomicFileWriter {
    root: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Writes `content` to `{root}/{relative}`, creating intermediate
    /// directories. `relative` may not be absolute or climb out of the root.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf, WriteError> {
        let relative_path = Path::new(relative);
        let escapes = relative_path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if relative.is_empty() || escapes {
            return Err(WriteError::InvalidPath(relative.to_string()));
        }

        let target = self.root.join(relative_path);
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        ensure_output_dir(&self.root)?;
        ensure_output_dir(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep determinism.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| WriteError::Io(e.error))?;
        Ok(target)
    }
}
