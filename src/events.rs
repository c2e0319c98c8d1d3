//! Launch diagnostics for javelin.
//!
//! Composition emits structured events (argument vectors, working-directory
//! changes) so the orchestrating build tool can surface what will be forked.
//! Events are incidental diagnostics, not part of the functional contract:
//! they carry no return values, sinks may drop them, and a misbehaving sink
//! must never change what `build()` produces.
//!
//! Emission goes through the [`EventSink`] trait rather than a global logger
//! so callers choose where diagnostics land: nowhere ([`NullSink`]), an
//! append-only NDJSON file ([`FileSink`]), or an in-memory buffer
//! ([`MemorySink`]).
//!
//! # Event Format
//!
//! Each event serializes to a single JSON line with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: the composition step (`compose`, `working_directory`, `build`)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `details`: freeform object with action-specific details

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Composition steps that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchAction {
    /// Argument vector composed.
    Compose,
    /// Working directory resolved and stored.
    WorkingDirectory,
    /// Launch descriptor built.
    Build,
}

impl std::fmt::Display for LaunchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchAction::Compose => write!(f, "compose"),
            LaunchAction::WorkingDirectory => write!(f, "working_directory"),
            LaunchAction::Build => write!(f, "build"),
        }
    }
}

/// A diagnostic event describing one composition step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchEvent {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The composition step that was performed.
    pub action: LaunchAction,

    /// The actor who performed the step (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with step-specific information.
    pub details: Value,
}

impl LaunchEvent {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is determined
    /// from the environment (USER@HOSTNAME).
    pub fn new(action: LaunchAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string (NDJSON).
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Destination for launch diagnostics.
///
/// Implementations must be best effort: emission failures are swallowed so
/// that diagnostics can never fail a launch that would otherwise succeed.
pub trait EventSink {
    /// Record one event.
    fn emit(&self, event: &LaunchEvent);
}

/// Sink that discards every event. The default when no sink is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &LaunchEvent) {}
}

/// Sink that appends events as NDJSON lines to a file.
///
/// The file is created on first emission. Write failures are dropped; an
/// unwritable log must not prevent descriptor construction.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink appending to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path events are appended to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl EventSink for FileSink {
    fn emit(&self, event: &LaunchEvent) {
        let Ok(line) = event.to_ndjson_line() else {
            return;
        };

        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) else {
            return;
        };

        let _ = writeln!(file, "{}", line);
    }
}

/// Sink that buffers events in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LaunchEvent>>,
}

impl MemorySink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far, in emission order.
    pub fn events(&self) -> Vec<LaunchEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &LaunchEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn event_serializes_to_single_json_line() {
        let event = LaunchEvent::new(LaunchAction::Compose)
            .with_details(json!({"arguments": ["java", "-jar", "app.jar"]}));

        let line = event.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["action"], "compose");
        assert_eq!(parsed["details"]["arguments"][0], "java");
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = LaunchEvent::new(LaunchAction::Build).with_details(json!({"jar": "app.jar"}));
        let line = event.to_ndjson_line().unwrap();

        let reloaded: LaunchEvent = serde_json::from_str(&line).unwrap();
        assert_eq!(reloaded.action, LaunchAction::Build);
        assert_eq!(reloaded.details["jar"], "app.jar");
    }

    #[test]
    fn actor_string_has_user_at_host_shape() {
        let event = LaunchEvent::new(LaunchAction::Compose);
        assert!(event.actor.contains('@'));
    }

    #[test]
    fn action_display_matches_serde_names() {
        assert_eq!(LaunchAction::Compose.to_string(), "compose");
        assert_eq!(LaunchAction::WorkingDirectory.to_string(), "working_directory");
        assert_eq!(LaunchAction::Build.to_string(), "build");
    }

    #[test]
    fn file_sink_appends_one_line_per_event() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("launch.ndjson");
        let sink = FileSink::new(&log_path);

        sink.emit(&LaunchEvent::new(LaunchAction::Compose));
        sink.emit(&LaunchEvent::new(LaunchAction::Build));

        let content = std::fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let _: LaunchEvent = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn file_sink_swallows_unwritable_path() {
        let sink = FileSink::new("/nonexistent-root-dir/launch.ndjson");
        // Must not panic; diagnostics are best effort.
        sink.emit(&LaunchEvent::new(LaunchAction::Compose));
    }

    #[test]
    fn memory_sink_records_in_emission_order() {
        let sink = MemorySink::new();
        sink.emit(&LaunchEvent::new(LaunchAction::WorkingDirectory));
        sink.emit(&LaunchEvent::new(LaunchAction::Compose));
        sink.emit(&LaunchEvent::new(LaunchAction::Build));

        let actions: Vec<LaunchAction> = sink.events().iter().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![
                LaunchAction::WorkingDirectory,
                LaunchAction::Compose,
                LaunchAction::Build
            ]
        );
    }

    #[test]
    fn null_sink_drops_events() {
        // Compiles and runs without side effects.
        NullSink.emit(&LaunchEvent::new(LaunchAction::Build));
    }
}
