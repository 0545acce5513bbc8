//! Friendgraph CLI library
//!
//! Argument parsing, configuration, and the JSON response envelope for the
//! `friendgraph` binary. The binary is a thin consumer of the engine: it
//! parses input into typed arguments, calls one engine operation, and
//! renders the result or error as a response envelope.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod response;

pub use cli::{Cli, Command};
pub use config::CliConfig;
pub use response::ApiResponse;
