//! # bobuild client
//!
//! A typed client for the bobuild JSON/REST API.
//!
//! ## Features
//!
//! - **Typed fetches**: GET/POST with JSON decoding into any `DeserializeOwned` type
//! - **Bearer auth**: the API key is sent on every request
//! - **Transparent pagination**: `items`/`total` envelopes aggregated page by page
//! - **Mutation envelopes**: insert, bulk insert and delete responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bobuild_client::{Client, Result};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct User {
//!     id: i64,
//!     name: String,
//! }
//!
//! # async fn run() -> Result<()> {
//! let client = Client::new("api.example.com", "sk_live_123")?;
//!
//! let user: User = client.get("/users/123").await?;
//! let everyone: Vec<User> = client.get_list("/users").await?;
//!
//! let created = client
//!     .insert("/users", &serde_json::json!({"name": "Bob"}))
//!     .await?;
//! println!("{} {} -> {}", user.id, user.name, created.id);
//! # let _ = everyone;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   get · get_list · pages · insert · insert_multiple · delete
//!                 │                          │
//!      pagination: page=N until total    mutation: envelopes
//!                 └────────────┬─────────────┘
//!                 http: URL builder, bearer auth, decode
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::ref_option)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Client configuration
pub mod config;

/// Authenticated JSON requests
pub mod http;

/// Paginated list fetching
pub mod pagination;

/// Insert and delete envelopes
pub mod mutation;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::Client;
pub use mutation::{DeleteResponse, InsertMultipleResponse, InsertResponse};
pub use pagination::{ListResponse, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
