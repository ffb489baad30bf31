//! CLI module for neodb
//!
//! Provides the command-line interface:
//! - inspect: Print one NEO, optionally with its close approaches
//! - query: Filter close approaches and print or save them
//!
//! # Execution Flow (strict order)
//!
//! 1. Parse arguments
//! 2. Resolve configuration (file, then flag overrides)
//! 3. Initialize logging
//! 4. Load NEOs, then close approaches
//! 5. Build and link the database
//! 6. Dispatch the command
//!
//! Any failure before step 6 aborts the run with a coded error.

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, InspectArgs, QueryArgs};
pub use commands::{inspect, open_database, query, run, run_command, NO_MATCH_MESSAGE};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
