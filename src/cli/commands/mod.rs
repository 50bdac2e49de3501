//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod command;
pub mod probe;

pub use command::{Command, CommandResult};
pub use probe::{ProbeCommand, ReportFormat};
