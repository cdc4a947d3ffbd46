//! Mutation module
//!
//! Insert, bulk insert and delete are POSTs whose responses come back in a
//! fixed envelope. The envelope is returned as decoded: a `200 OK` carrying
//! `"error": true` is still a successful call at this layer. Use
//! `into_result()` on the envelope to treat it as a failure.

mod operations;
mod types;

pub use types::{DeleteResponse, InsertMultipleResponse, InsertResponse};
