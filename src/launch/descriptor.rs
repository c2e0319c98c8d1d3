//! Launch descriptor produced by the builder.

use std::path::{Path, PathBuf};
use std::process::Command;

/// A fully composed, ready-to-start description of a JVM child process.
///
/// The descriptor carries everything the spawning layer needs: the ordered
/// command vector, the canonical working directory, and the stream-merging
/// policy. It deliberately does not start the process; spawning, output
/// draining, and exit-status interpretation belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDescriptor {
    command: Vec<String>,
    working_directory: PathBuf,
    merge_error_stream: bool,
}

impl LaunchDescriptor {
    /// Built by `JavaProcessBuilder::build`, which guarantees a non-empty
    /// command vector (runtime, heap flags, `-jar`, jar path at minimum).
    pub(crate) fn new(
        command: Vec<String>,
        working_directory: PathBuf,
        merge_error_stream: bool,
    ) -> Self {
        Self {
            command,
            working_directory,
            merge_error_stream,
        }
    }

    /// The full command vector, executable first.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// The executable to invoke (first element of the command vector).
    pub fn program(&self) -> &str {
        &self.command[0]
    }

    /// The arguments following the executable.
    pub fn args(&self) -> &[String] {
        &self.command[1..]
    }

    /// The canonical working directory for the child process.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Whether the child's stderr is to be interleaved into its stdout.
    ///
    /// Always true for descriptors built by this crate; the caller observes
    /// one combined stream.
    pub fn merge_error_stream(&self) -> bool {
        self.merge_error_stream
    }

    /// Map this descriptor onto a `std::process::Command`.
    ///
    /// Sets the program, arguments, and working directory. Stream wiring is
    /// left to the caller: `std::process` has no single-pipe equivalent of
    /// merged stdout/stderr, so the spawning layer applies
    /// [`merge_error_stream`](Self::merge_error_stream) with whatever
    /// mechanism it drains output through. The returned command has not been
    /// spawned.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args()).current_dir(&self.working_directory);
        command
    }
}
