//! hh-cli library
//!
//! Command dispatch for the `hh` binary, exported so it can be driven in tests
//! against in-memory storage.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};

#[cfg(test)]
mod tests;
