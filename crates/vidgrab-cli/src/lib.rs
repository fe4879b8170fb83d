//! Terminal front-end for vidgrab.
//!
//! The CLI is the UI collaborator: it owns a [`Coordinator`] on the main
//! task, renders status text through [`presentation::TerminalSurface`] and
//! maps outcomes to exit codes.
//!
//! [`Coordinator`]: vidgrab_runtime::Coordinator

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
