//! JVM settings for forked processes.
//!
//! This module defines the settings object that drives launch composition:
//! heap sizing, the runtime executable to invoke, and raw user-supplied JVM
//! flags. Settings may be constructed directly or loaded from YAML with
//! forward-compatible parsing (unknown fields are ignored) and sensible
//! defaults for every field.
//!
//! Heap sizes and flag contents are deliberately not validated here. The JVM
//! is the authority on what it accepts; this crate only promises to pass
//! values through verbatim and in order.

use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the forked JVM.
///
/// Represents the caller-facing configuration block, typically a fragment of
/// a larger build-tool configuration file:
///
/// ```yaml
/// xms_mb: 512
/// xmx_mb: 1024
/// java_runtime: /usr/bin/java
/// arguments:
///   - "-Dfoo=bar"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JvmSettings {
    /// Initial heap size in megabytes (`-Xms`). Default: 512.
    #[serde(default = "default_heap_mb")]
    pub xms_mb: u32,

    /// Maximum heap size in megabytes (`-Xmx`). Default: 512.
    ///
    /// Not checked against `xms_mb`; keeping the pair consistent is the
    /// caller's contract.
    #[serde(default = "default_heap_mb")]
    pub xmx_mb: u32,

    /// Path to the Java runtime executable. Default: `"java"`, resolved
    /// through `PATH` by the spawning layer.
    #[serde(default = "default_java_runtime")]
    pub java_runtime: String,

    /// Raw user-supplied JVM flags, passed through unmodified and in order.
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl Default for JvmSettings {
    fn default() -> Self {
        Self {
            xms_mb: default_heap_mb(),
            xmx_mb: default_heap_mb(),
            java_runtime: default_java_runtime(),
            arguments: Vec::new(),
        }
    }
}

impl JvmSettings {
    /// Load settings from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(JvmSettings)` - Successfully loaded settings
    /// * `Err(ConfigurationError::Settings)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::Settings(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            ConfigurationError::Settings(format!("failed to parse settings YAML: {}", e))
        })
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ConfigurationError::Settings(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Split a flat flag string into individual arguments and append them.
    ///
    /// Uses shell-words to split into an argv array for deterministic
    /// composition without invoking a shell, so quoted values survive intact
    /// (`-Dname="two words"` stays one argument).
    ///
    /// # Returns
    ///
    /// * `Ok(&mut Self)` - Arguments appended, for chaining
    /// * `Err(ConfigurationError::Settings)` - Unmatched quotes or invalid escapes
    pub fn append_argument_string(&mut self, raw: &str) -> Result<&mut Self> {
        let args = shell_words::split(raw).map_err(|e| {
            ConfigurationError::Settings(format!(
                "failed to parse JVM arguments '{}': {}",
                raw, e
            ))
        })?;

        self.arguments.extend(args);
        Ok(self)
    }
}

fn default_heap_mb() -> u32 {
    512
}

fn default_java_runtime() -> String {
    "java".to_string()
}
