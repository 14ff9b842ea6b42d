//! Rotating trace log file with numbered backups.
//!
//! Provides a thread-safe line writer that rotates the file once it passes a
//! size threshold, keeping a fixed number of numbered backups
//! (`<name>.1` is the newest backup, `<name>.2` the one before it). This
//! bounds disk usage for trace output.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Default rotation threshold (5 MB).
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;

/// Number of numbered backups to retain.
const BACKUP_COUNT: u32 = 2;

/// Thread-safe rotating line writer.
///
/// The file opens lazily on first write, so construction always succeeds even
/// when the target directory is missing or read-only. When the file passes
/// the threshold, backups shift up one number (the oldest falls off) and a
/// fresh file starts.
pub struct TraceLogFile {
    /// Path of the active log file.
    path: PathBuf,
    /// Rotation threshold in bytes.
    rotate_at: u64,
    /// Lazily-initialized file handle.
    handle: Mutex<Option<File>>,
}

impl TraceLogFile {
    /// Creates a writer with the default rotation threshold.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_threshold(path, ROTATE_AT_BYTES)
    }

    /// Creates a writer rotating at an explicit byte threshold.
    #[must_use]
    pub const fn with_threshold(path: PathBuf, rotate_at: u64) -> Self {
        Self {
            path,
            rotate_at,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file has grown past the
    /// threshold. The line is flushed to disk before returning.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, missing directory, full
    /// disk) or when another thread panicked while holding the writer lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no file available"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|metadata| metadata.len() > self.rotate_at)
    }

    /// Shifts backups up one number and moves the active file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        let _ = fs::remove_file(self.backup_path(BACKUP_COUNT));
        for index in (1..BACKUP_COUNT).rev() {
            let _ = fs::rename(self.backup_path(index), self.backup_path(index + 1));
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }

    fn backup_path(&self, index: u32) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }
}

impl std::fmt::Debug for TraceLogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceLogFile")
            .field("path", &self.path)
            .field("rotate_at", &self.rotate_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = TraceLogFile::new(path.clone());

        writer.append_line("{\"a\":1}").unwrap();
        writer.append_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_the_threshold_and_keeps_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = TraceLogFile::with_threshold(path.clone(), 8);

        writer.append_line("0123456789").unwrap();
        writer.append_line("next file").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next file\n");
        let backup = fs::read_to_string(dir.path().join("trace.json.1")).unwrap();
        assert_eq!(backup, "0123456789\n");
    }

    #[test]
    fn the_oldest_backup_falls_off() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = TraceLogFile::with_threshold(path.clone(), 4);

        writer.append_line("first").unwrap();
        writer.append_line("second").unwrap();
        writer.append_line("third").unwrap();
        writer.append_line("fourth").unwrap();

        assert!(dir.path().join("trace.json.1").exists());
        assert!(dir.path().join("trace.json.2").exists());
        assert!(!dir.path().join("trace.json.3").exists());
    }
}
