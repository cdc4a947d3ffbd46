//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bobuild API client
#[derive(Parser, Debug)]
#[command(name = "bobuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API host (domain, no scheme)
    #[arg(long, global = true, env = "BOBUILD_HOST")]
    pub host: Option<String>,

    /// API key sent as a bearer token
    #[arg(long, global = true, env = "BOBUILD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Use plain http instead of https
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single object
    Get {
        /// Endpoint path (e.g. /users/123) or absolute URL
        endpoint: String,
    },

    /// Fetch all items of a paginated list endpoint
    List {
        /// Endpoint path or absolute URL
        endpoint: String,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Insert one record
    Insert {
        /// Endpoint path or absolute URL
        endpoint: String,

        /// Record as inline JSON
        #[arg(short, long)]
        data: String,
    },

    /// Insert several records in one request
    InsertMany {
        /// Endpoint path or absolute URL
        endpoint: String,

        /// Records as an inline JSON array
        #[arg(short, long)]
        data: String,
    },

    /// Delete a record
    Delete {
        /// Endpoint path or absolute URL
        endpoint: String,
    },
}
