//! Javelin: deterministic JVM launch composition for build-tool process forks.
//!
//! A build-tool plugin that forks a packaged application needs the child JVM
//! configured exactly: heap flags first, user-supplied JVM flags next, then
//! `-jar` and the archive, then the application's own arguments. This crate
//! owns that composition and nothing else. It validates the working
//! directory, assembles the command vector in its load-bearing order, and
//! returns a [`LaunchDescriptor`] with stderr flagged for merging into
//! stdout. Spawning, output draining, timeouts, and exit codes belong to the
//! caller.
//!
//! ```no_run
//! use javelin::{JavaProcessBuilder, JvmSettings};
//!
//! let mut settings = JvmSettings::default();
//! settings.xmx_mb = 1024;
//! settings.arguments.push("-Dfoo=bar".to_string());
//!
//! let mut builder = JavaProcessBuilder::new(settings, "app.jar");
//! builder.set_working_directory("target/work")?;
//! builder.add_arguments(["run", "--quiet"]);
//!
//! let descriptor = builder.build()?;
//! let command = descriptor.to_command();
//! # Ok::<(), javelin::ConfigurationError>(())
//! ```

pub mod error;
pub mod events;
pub mod fs;
pub mod launch;
pub mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ConfigurationError, Result};
pub use launch::{JavaProcessBuilder, LaunchDescriptor};
pub use settings::JvmSettings;
