//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `get` - Fetch a single object
//! - `list` - Fetch every page of a list endpoint
//! - `insert` - Insert one record
//! - `insert-many` - Insert several records
//! - `delete` - Delete a record

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
