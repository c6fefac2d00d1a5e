//! Schema file watching.
//!
//! Watches the directory containing the schema file and reports debounced
//! changes to that file only, so replacing the file by rename is seen too.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;
use tracing::{debug, trace};

/// Event types for schema file changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// The schema file was written or created.
    Modified(PathBuf),
    /// The schema file no longer exists.
    Deleted(PathBuf),
    /// An error occurred.
    Error(String),
}

/// Watcher for a single schema file.
pub struct FileWatcher {
    schema: PathBuf,
    debounce_ms: u64,
}

impl FileWatcher {
    /// Create a watcher for the given schema file.
    pub fn new(schema: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            debounce_ms: 500,
        }
    }

    /// Directory that is actually registered with the OS watcher.
    pub fn watch_dir(&self) -> PathBuf {
        match self.schema.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Start watching.
    ///
    /// The returned debouncer must be kept alive for events to arrive.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel::<WatchEvent>();
        let file_name = self.schema.file_name().map(|name| name.to_os_string());

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    for event in events {
                        let path = event.path;
                        if path.file_name().map(|name| name.to_os_string()) != file_name {
                            trace!(path = %path.display(), "ignoring unrelated change");
                            continue;
                        }

                        let watch_event = if path.exists() {
                            WatchEvent::Modified(path)
                        } else {
                            WatchEvent::Deleted(path)
                        };

                        let _ = tx.send(watch_event);
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        let dir = self.watch_dir();
        debouncer
            .watcher()
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| WatchError::Init(e.to_string()))?;

        debug!(dir = %dir.display(), schema = %self.schema.display(), "watching schema");

        Ok((debouncer, rx))
    }

    /// The schema file being watched.
    pub fn schema(&self) -> &Path {
        &self.schema
    }
}
