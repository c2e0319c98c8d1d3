//! JVM process builder: deterministic argument composition and launch
//! descriptor construction.

use crate::error::{ConfigurationError, Result};
use crate::events::{EventSink, LaunchAction, LaunchEvent, NullSink};
use crate::fs::{Filesystem, HostFilesystem};
use crate::launch::descriptor::LaunchDescriptor;
use crate::settings::JvmSettings;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Builder for one JVM launch.
///
/// Construction fixes the heap sizing, runtime executable, user-supplied JVM
/// flags, and jar path for the life of the builder. The working directory and
/// application arguments accumulate afterwards, and [`build`](Self::build)
/// turns the whole state into a [`LaunchDescriptor`].
///
/// Argument order in the composed vector is load-bearing: the JVM consumes
/// flags that appear before `-jar`, and the application inside the jar
/// receives everything after the jar path. Create one builder per launch;
/// a descriptor describes exactly the state it was built from.
pub struct JavaProcessBuilder {
    xms_mb: u32,
    xmx_mb: u32,
    java_runtime: String,
    user_arguments: Vec<String>,
    runtime_jar: String,
    working_directory: Option<PathBuf>,
    application_arguments: Vec<String>,
    sink: Arc<dyn EventSink>,
    filesystem: Box<dyn Filesystem>,
}

impl std::fmt::Debug for JavaProcessBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaProcessBuilder")
            .field("xms_mb", &self.xms_mb)
            .field("xmx_mb", &self.xmx_mb)
            .field("java_runtime", &self.java_runtime)
            .field("user_arguments", &self.user_arguments)
            .field("runtime_jar", &self.runtime_jar)
            .field("working_directory", &self.working_directory)
            .field("application_arguments", &self.application_arguments)
            .field("sink", &"<dyn EventSink>")
            .field("filesystem", &"<dyn Filesystem>")
            .finish()
    }
}

impl JavaProcessBuilder {
    /// Create a builder from JVM settings and the jar to execute.
    ///
    /// Settings fields are copied here and are immutable for the life of the
    /// builder; later mutation of the original settings has no effect.
    pub fn new(settings: JvmSettings, runtime_jar: impl Into<String>) -> Self {
        Self {
            xms_mb: settings.xms_mb,
            xmx_mb: settings.xmx_mb,
            java_runtime: settings.java_runtime,
            user_arguments: settings.arguments,
            runtime_jar: runtime_jar.into(),
            working_directory: None,
            application_arguments: Vec::new(),
            sink: Arc::new(NullSink),
            filesystem: Box::new(HostFilesystem),
        }
    }

    /// Route diagnostics to the given sink instead of discarding them.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Substitute the filesystem capability used to resolve the working
    /// directory. Production code keeps the default host implementation.
    pub fn with_filesystem(mut self, filesystem: Box<dyn Filesystem>) -> Self {
        self.filesystem = filesystem;
        self
    }

    /// Resolve and store the working directory for the child process.
    ///
    /// The path is canonicalized and must refer to an existing directory.
    /// On failure nothing is stored: a previously set working directory (or
    /// none) survives untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(&mut Self)` - Canonical path stored, for chaining
    /// * `Err(ConfigurationError::WorkingDirectoryResolution)` - Canonicalization failed
    /// * `Err(ConfigurationError::WorkingDirectoryMissing)` - Resolved path is not an existing directory
    pub fn set_working_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        let canonical = self.filesystem.canonicalize(path).map_err(|e| {
            ConfigurationError::WorkingDirectoryResolution {
                path: path.display().to_string(),
                source: e,
            }
        })?;

        if !self.filesystem.is_dir(&canonical) {
            return Err(ConfigurationError::WorkingDirectoryMissing(
                canonical.display().to_string(),
            ));
        }

        self.emit(
            LaunchAction::WorkingDirectory,
            json!({"path": canonical.display().to_string()}),
        );
        self.working_directory = Some(canonical);
        Ok(self)
    }

    /// Append application-level arguments, preserving order across calls.
    ///
    /// These land after the jar path in the composed vector and are consumed
    /// by the program inside the jar, not by the JVM. Content is never
    /// validated.
    pub fn add_arguments<I, S>(&mut self, arguments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.application_arguments
            .extend(arguments.into_iter().map(Into::into));
        self
    }

    /// Compose the full command vector for the current state.
    ///
    /// Pure over the builder's in-memory state: composing twice with no
    /// intervening mutation yields identical vectors. Order:
    /// runtime, `-Xms{N}M`, `-Xmx{N}M`, user JVM flags, `-jar`, jar path,
    /// application arguments.
    pub fn compose_arguments(&self) -> Vec<String> {
        let mut arguments = Vec::with_capacity(
            5 + self.user_arguments.len() + self.application_arguments.len(),
        );
        arguments.push(self.java_runtime.clone());
        arguments.push(format!("-Xms{}M", self.xms_mb));
        arguments.push(format!("-Xmx{}M", self.xmx_mb));
        arguments.extend(self.user_arguments.iter().cloned());
        arguments.push("-jar".to_string());
        arguments.push(self.runtime_jar.clone());
        arguments.extend(self.application_arguments.iter().cloned());

        self.emit(LaunchAction::Compose, json!({"arguments": arguments}));

        arguments
    }

    /// Build the launch descriptor for the accumulated state.
    ///
    /// The child's stderr is flagged for merging into its stdout so the
    /// spawning layer observes one interleaved stream. The process is not
    /// started here.
    ///
    /// # Returns
    ///
    /// * `Ok(LaunchDescriptor)` - Ready-to-start description
    /// * `Err(ConfigurationError::WorkingDirectoryUnset)` - No working directory was set
    pub fn build(&self) -> Result<LaunchDescriptor> {
        let Some(working_directory) = &self.working_directory else {
            return Err(ConfigurationError::WorkingDirectoryUnset);
        };

        let command = self.compose_arguments();

        self.emit(
            LaunchAction::Build,
            json!({
                "command": command,
                "working_directory": working_directory.display().to_string(),
            }),
        );

        Ok(LaunchDescriptor::new(
            command,
            working_directory.clone(),
            true,
        ))
    }

    fn emit(&self, action: LaunchAction, details: Value) {
        self.sink.emit(&LaunchEvent::new(action).with_details(details));
    }
}
