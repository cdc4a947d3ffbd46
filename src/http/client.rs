//! Authenticated JSON client
//!
//! Every request carries `Authorization: Bearer <api key>`; POSTs also carry
//! `Content-Type: application/json`. Only a `200 OK` is treated as success,
//! after which the body is decoded into the caller's type.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

/// Path prefix every endpoint lives under
pub const API_PREFIX: &str = "/_api";

/// Client for the bobuild REST API
///
/// Holds an immutable config and a pooled `reqwest` client, so it can be
/// shared freely between tasks (wrap it in an `Arc` or pass `&Client`).
#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a client for `host` with TLS on and the default timeout
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(host, api_key))
    }

    /// Create a client from a full config
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Request)?;

        Ok(Self { inner, config })
    }

    /// The config this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve an endpoint to a full URL.
    ///
    /// Relative endpoints always become `scheme://host/_api<path>`. Absolute
    /// endpoints keep their own scheme and host; `/_api` is inserted after
    /// the host unless their path already starts with it.
    pub fn build_url(&self, endpoint: &str) -> String {
        match split_origin(endpoint) {
            Some((origin, path)) if has_api_prefix(path) => format!("{origin}{path}"),
            Some((origin, path)) => format!("{origin}{API_PREFIX}{path}"),
            None => format!("{}{API_PREFIX}{endpoint}", self.base_url()),
        }
    }

    fn base_url(&self) -> String {
        let host = self.config.host.trim_end_matches('/');
        if has_scheme(host) {
            host.to_string()
        } else {
            format!("{}://{host}", self.config.scheme())
        }
    }

    /// GET `endpoint` and decode the body into `T`
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request_json(Method::GET, endpoint, None).await
    }

    /// POST `payload` as JSON to `endpoint` and decode the body into `T`
    pub async fn post<T, P>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(Error::Encode)?;
        self.request_json(Method::POST, endpoint, Some(body)).await
    }

    /// POST to `endpoint` without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request_json(Method::POST, endpoint, None).await
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let full_url = self.build_url(endpoint);
        let url = Url::parse(&full_url).map_err(|source| Error::InvalidUrl {
            url: full_url.clone(),
            source,
        })?;

        let is_post = method == Method::POST;
        let mut req = self
            .inner
            .request(method.clone(), url)
            .bearer_auth(&self.config.api_key);

        if is_post {
            req = req.header(CONTENT_TYPE, "application/json");
            if let Some(body) = body {
                req = req.body(body);
            }
        }

        let request = req.build().map_err(Error::Request)?;
        debug!(%method, url = %full_url, "Sending request");

        let response = self
            .inner
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            let body = if is_post {
                Some(
                    response
                        .text()
                        .await
                        .map_err(|e| self.transport_error(e))?,
                )
            } else {
                None
            };
            debug!(%method, url = %full_url, status = status.as_u16(), "Request failed");
            return Err(Error::http_status(status.as_u16(), reason, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        trace!(url = %full_url, bytes = bytes.len(), "Received response body");

        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(e)
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn has_scheme(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Split an absolute URL into `scheme://authority` and the rest
fn split_origin(url: &str) -> Option<(&str, &str)> {
    if !has_scheme(url) {
        return None;
    }
    let authority_start = url.find("://")? + 3;
    let end = url[authority_start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |i| authority_start + i);
    Some(url.split_at(end))
}

fn has_api_prefix(path: &str) -> bool {
    path.strip_prefix(API_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?', '#']))
}
