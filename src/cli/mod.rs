//! CLI module
//!
//! Command-line driver for a live feed server.
//!
//! # Commands
//!
//! - `scroll` - Load pages until the feed is exhausted
//! - `like` / `dislike` - Cast a vote for an item
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, InitialFlags};
pub use runner::Runner;
