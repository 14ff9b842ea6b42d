//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`,
//! which points to the cwd of the last focused terminal (or the folder Zellij
//! was started from). The plugin keeps its writable state under that mount.

use std::path::PathBuf;

/// Returns the data directory for Zatlas output.
///
/// The directory is located at `/host/.local/share/zellij/zatlas` in the
/// Zellij sandbox, which typically resolves to
/// `~/.local/share/zellij/zatlas` when Zellij is started from a home
/// directory terminal. Trace files are written within this directory; the
/// plugin persists nothing else.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zatlas")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_sandbox_mount() {
        let dir = data_dir();
        assert!(dir.starts_with("/host"));
        assert!(dir.ends_with("zatlas"));
    }
}
