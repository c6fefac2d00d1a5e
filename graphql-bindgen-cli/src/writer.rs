//! Binding file output.
//!
//! Writes the generated binding to disk. In dry-run mode nothing touches the
//! filesystem; when the target already holds identical content it is left
//! alone so that editors and bundlers watching it do not rebuild.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// File already held this content.
    Unchanged {
        /// Path to the existing file.
        path: PathBuf,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file, creating parent directories as needed.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
            debug!(path = %path.display(), "binding unchanged");
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "binding written");

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}

impl WriteResult {
    /// Check if the file was written.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}
