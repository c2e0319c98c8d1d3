//! Filesystem access for javelin.
//!
//! Launch composition touches the filesystem in exactly one place: resolving
//! and checking the working directory. That access goes through the
//! [`Filesystem`] trait so the failure paths can be driven deterministically
//! by an in-memory fake in tests, while production code uses the host
//! implementation.

use std::io;
use std::path::{Path, PathBuf};

/// Minimal filesystem capability needed by launch composition.
pub trait Filesystem {
    /// Resolve a path to its canonical absolute form.
    ///
    /// Follows symlinks and normalizes `.`/`..` components. Fails when the
    /// path cannot be resolved (on most platforms this includes paths that
    /// do not exist).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Returns true if the path refers to an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Host filesystem implementation backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl Filesystem for HostFilesystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn canonicalize_resolves_dot_components() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("..");
        std::fs::create_dir_all(temp_dir.path().join("a")).unwrap();

        let resolved = HostFilesystem.canonicalize(&nested).unwrap();
        assert_eq!(resolved, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn canonicalize_fails_for_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-entry");

        assert!(HostFilesystem.canonicalize(&missing).is_err());
    }

    #[test]
    fn is_dir_distinguishes_files_from_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "contents\n").unwrap();

        assert!(HostFilesystem.is_dir(temp_dir.path()));
        assert!(!HostFilesystem.is_dir(&file));
    }
}
