//! Append-only line writer with size-based rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotate once the file grows past this many bytes.
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
const MAX_BACKUP_FILES: usize = 3;

/// Writes lines to a file, moving it aside to `<file>.<timestamp>` when it
/// grows too large and pruning the oldest backups.
///
/// The handle is opened lazily and guarded by a mutex, so the exporter can
/// share one writer across threads.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening or writing fails, or if the lock
    /// was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() > self.max_bytes) {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::other("trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let suffix = chrono::Utc::now().format("%Y%m%dT%H%M%S%.9f");
        let file_name = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| io::Error::other("trace file has no name"))?;

        fs::rename(&self.file_path, self.file_path.with_file_name(format!("{file_name}.{suffix}")))?;
        self.prune_backups(file_name)
    }

    /// Deletes all but the newest `max_backups` rotated files.
    fn prune_backups(&self, file_name: &str) -> io::Result<()> {
        let parent = self.file_path.parent().unwrap_or_else(|| Path::new("."));
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.max_backups) {
            if let Err(e) = fs::remove_file(stale) {
                tracing::trace!(path = ?stale, error = %e, "could not remove old trace file");
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
