//! Launch composition for forked JVM processes.
//!
//! This module owns the two halves of a launch: deterministic argument
//! composition ([`JavaProcessBuilder::compose_arguments`]) and descriptor
//! construction ([`JavaProcessBuilder::build`]), which validates the working
//! directory precondition and yields a [`LaunchDescriptor`] the caller can
//! start.

mod builder;
mod descriptor;


// Re-export public API
pub use builder::JavaProcessBuilder;
pub use descriptor::LaunchDescriptor;
