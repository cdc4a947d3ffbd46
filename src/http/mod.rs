//! HTTP client module
//!
//! Single-object fetch: one authenticated GET or POST per call, strict
//! `200 OK` status check, and JSON decoding into a caller-chosen type.
//!
//! # Features
//!
//! - **URL resolution**: relative paths are placed under `scheme://host/_api`
//! - **Bearer auth**: the API key is sent on every request
//! - **Typed decoding**: any `serde::de::DeserializeOwned` result type

mod client;

pub use client::{Client, API_PREFIX};
