// HTTP client for the siad REST API
//
// Every request carries the `User-Agent: Sia-Agent` header siad requires,
// targets `http://<address><path>`, and expects a JSON body. Transport
// failures propagate to the caller untranslated; there is no retry layer
// here (connection polling lives in `connect`).

pub mod connect;

use std::collections::BTreeMap;

use reqwest::header::USER_AGENT;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// User agent siad's API requires on every request.
pub const SIA_AGENT: &str = "Sia-Agent";

/// One API request: either a bare path or a path with method and query
/// parameters. Bare strings convert via `From`, so call sites can pass
/// `"/daemon/version"` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestSpec {
    Path(String),
    Request {
        url: String,
        method: Method,
        qs: BTreeMap<String, String>,
    },
}

impl RequestSpec {
    /// A GET of `url` with query parameters attached verbatim.
    pub fn with_query(url: impl Into<String>, qs: BTreeMap<String, String>) -> Self {
        RequestSpec::Request {
            url: url.into(),
            method: Method::GET,
            qs,
        }
    }

    /// Resolve into the canonical (path, method, query) triple.
    fn into_parts(self) -> (String, Method, BTreeMap<String, String>) {
        match self {
            RequestSpec::Path(url) => (url, Method::GET, BTreeMap::new()),
            RequestSpec::Request { url, method, qs } => (url, method, qs),
        }
    }
}

impl From<&str> for RequestSpec {
    fn from(path: &str) -> Self {
        RequestSpec::Path(path.to_string())
    }
}

impl From<String> for RequestSpec {
    fn from(path: String) -> Self {
        RequestSpec::Path(path)
    }
}

/// Client bound to one daemon address (`host:port`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    address: String,
    client: Client,
}

impl ApiClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            client: Client::new(),
        }
    }

    /// The `host:port` this client is bound to.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Issue one API call and return the parsed response body.
    ///
    /// siad serves a few endpoints (notably `/daemon/version`) as a bare
    /// string rather than JSON; those come back as a JSON string value.
    pub async fn call(&self, spec: impl Into<RequestSpec>) -> Result<Value> {
        let (path, method, qs) = spec.into().into_parts();
        let url = format!("http://{}{}", self.address, path);
        debug!(%url, %method, "issuing siad API call");

        let mut request = self
            .client
            .request(method, &url)
            .header(USER_AGENT, SIA_AGENT);
        if !qs.is_empty() {
            request = request.query(&qs);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
