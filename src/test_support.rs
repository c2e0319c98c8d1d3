//! Shared test fixtures.

use crate::fs::Filesystem;
use crate::settings::JvmSettings;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem fake for driving working-directory error paths
/// deterministically, with no real disk access.
///
/// Paths must be registered explicitly: `canonicalize` resolves only
/// registered entries and fails with `NotFound` for everything else, and
/// `is_dir` is true only for entries registered as directories.
#[derive(Debug, Default)]
pub(crate) struct FakeFilesystem {
    canonical: HashMap<PathBuf, PathBuf>,
    directories: HashSet<PathBuf>,
}

impl FakeFilesystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a directory that resolves to the given canonical path.
    pub(crate) fn with_directory(
        mut self,
        raw: impl Into<PathBuf>,
        canonical: impl Into<PathBuf>,
    ) -> Self {
        let canonical = canonical.into();
        self.canonical.insert(raw.into(), canonical.clone());
        self.canonical.insert(canonical.clone(), canonical.clone());
        self.directories.insert(canonical);
        self
    }

    /// Register an entry that resolves but is not a directory (a plain file).
    pub(crate) fn with_file(
        mut self,
        raw: impl Into<PathBuf>,
        canonical: impl Into<PathBuf>,
    ) -> Self {
        let canonical = canonical.into();
        self.canonical.insert(raw.into(), canonical.clone());
        self.canonical.insert(canonical.clone(), canonical);
        self
    }
}

impl Filesystem for FakeFilesystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.canonical.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory")
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }
}

/// Settings used across launch tests: 512/1024 heap, explicit runtime path,
/// one user flag.
pub(crate) fn test_settings() -> JvmSettings {
    JvmSettings {
        xms_mb: 512,
        xmx_mb: 1024,
        java_runtime: "/usr/bin/java".to_string(),
        arguments: vec!["-Dfoo=bar".to_string()],
    }
}
