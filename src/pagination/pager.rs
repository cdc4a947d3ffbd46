//! Sequential page walker

use super::types::{page_endpoint, ListResponse, PaginationState};
use crate::error::{Error, Result};
use crate::http::Client;
use futures::Stream;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Lazily fetches the pages of a list endpoint.
///
/// Each call to [`next_page`](Pager::next_page) issues exactly one request.
/// The first call always fetches page 0; afterwards pages are requested until
/// the items received reach the last reported `total`.
pub struct Pager<'a, T> {
    client: &'a Client,
    endpoint: String,
    state: PaginationState,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Pager<'a, T> {
    /// Create a pager over `endpoint`
    pub fn new(client: &'a Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            state: PaginationState::new(),
            _marker: PhantomData,
        }
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Fetch the next page, or `None` once every item has been received
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>> {
        if self.state.done {
            return Ok(None);
        }

        let page = self.state.page;
        let response: ListResponse<T> = self
            .client
            .get(&page_endpoint(&self.endpoint, page))
            .await?;

        let count = response.items.len();

        // An empty page short of the total would otherwise loop forever
        if page > 0 && count == 0 && self.state.total_fetched < response.total {
            self.state.mark_done();
            return Err(Error::Pagination {
                page,
                fetched: self.state.total_fetched,
                total: response.total,
            });
        }

        self.state.record_page(count, response.total);
        debug!(
            endpoint = %self.endpoint,
            page,
            count,
            fetched = self.state.total_fetched,
            total = response.total,
            "Fetched page"
        );

        Ok(Some(response.items))
    }

    /// Fetch all remaining pages and concatenate their items in order.
    ///
    /// Any failure discards the items gathered so far.
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }

    /// Turn the pager into a stream of pages
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<T>>> + 'a
    where
        T: 'a,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok::<_, Error>(page.map(|items| (items, pager)))
        })
    }
}

impl<T> std::fmt::Debug for Pager<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("endpoint", &self.endpoint)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Lazily walk the pages of a list endpoint
    pub fn pages<T: DeserializeOwned>(&self, endpoint: &str) -> Pager<'_, T> {
        Pager::new(self, endpoint)
    }

    /// Fetch every page of a list endpoint and return all items in server order
    pub async fn get_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>> {
        self.pages(endpoint).collect_all().await
    }
}
