//! Insert and delete operations on [`Client`]

use super::types::{DeleteResponse, InsertMultipleResponse, InsertResponse};
use crate::error::Result;
use crate::http::Client;
use serde::Serialize;

impl Client {
    /// Insert one record
    pub async fn insert<P>(&self, endpoint: &str, payload: &P) -> Result<InsertResponse>
    where
        P: Serialize + ?Sized,
    {
        self.post(endpoint, payload).await
    }

    /// Insert several records in one request
    pub async fn insert_multiple<P>(
        &self,
        endpoint: &str,
        payload: &P,
    ) -> Result<InsertMultipleResponse>
    where
        P: Serialize + ?Sized,
    {
        self.post(endpoint, payload).await
    }

    /// Delete the record addressed by `endpoint`.
    ///
    /// The target is identified by the endpoint alone, so no body is sent.
    pub async fn delete(&self, endpoint: &str) -> Result<DeleteResponse> {
        self.post_empty(endpoint).await
    }
}
