//! Error types for javelin.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use std::io;
use thiserror::Error;

/// Main error type for launch composition.
///
/// Every failure in this crate is a configuration problem: either the launch
/// state is incomplete, the working directory is unusable, or the settings
/// input could not be read. Heap sizes and user-supplied JVM flags are never
/// validated here; a malformed flag surfaces only when the JVM itself rejects
/// it at startup, which belongs to the caller that spawns the process.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The working directory path could not be canonicalized.
    #[error("unable to resolve working directory '{path}': {source}")]
    WorkingDirectoryResolution {
        /// The path as supplied by the caller.
        path: String,
        /// The underlying filesystem failure.
        #[source]
        source: io::Error,
    },

    /// The canonicalized path does not refer to an existing directory.
    #[error("working directory '{0}' does not exist")]
    WorkingDirectoryMissing(String),

    /// `build()` was called before a working directory was set.
    #[error("working directory is not set")]
    WorkingDirectoryUnset,

    /// Settings could not be read, parsed, or split into arguments.
    #[error("{0}")]
    Settings(String),
}

/// Result type alias for launch composition operations.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
