//! HTTP transport for the users API.
//!
//! The transport is built once from a parsed base URL and handed to the client,
//! so every request shares the same `reqwest::Client`, user agent, and logging.
//! It does not interpret status codes; callers decide what counts as success.

use anyhow::{Result, anyhow};
use reqwest::{Method, header::CONTENT_TYPE};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Content type sent with every JSON request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    base_url: String,
}

impl ApiTarget {
    /// Parse the API base URL.
    /// # Errors
    /// Returns an error if the value is not an absolute http(s) URL with a host,
    /// or if it carries a query or fragment.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let url = Url::parse(trimmed).map_err(|e| anyhow!("invalid API URL {trimmed}: {e}"))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(anyhow!(
                    "invalid API URL: unsupported scheme {scheme}, expected http(s)://..."
                ));
            }
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(anyhow!("invalid API URL: no host specified"));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(anyhow!(
                "invalid API URL: query or fragment not allowed in base URL"
            ));
        }

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Clone)]
pub struct ApiTransport {
    inner: Arc<ApiTransportInner>,
}

struct ApiTransportInner {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl ApiTransport {
    /// Build a transport from the parsed API target.
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_target(user_agent: &str, target: ApiTarget) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            inner: Arc::new(ApiTransportInner {
                client,
                base_url: target.base_url,
                user_agent: user_agent.to_string(),
            }),
        })
    }

    /// Join the base URL and a path with exactly one `/` between them.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// Send a `GET` and read the body as text.
    /// # Errors
    /// Returns the transport error if the request or reading the body fails.
    pub async fn get(&self, url: &str) -> Result<ApiResponse, reqwest::Error> {
        self.send(Method::GET, url, None).await
    }

    /// Send a `POST` with a JSON body and read the response as text.
    /// # Errors
    /// Returns the transport error if the request or reading the body fails.
    pub async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<ApiResponse, reqwest::Error> {
        self.send(Method::POST, url, Some(body)).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse, reqwest::Error> {
        debug!("api request: {} {}", method, url);

        let mut request = self
            .inner
            .client
            .request(method, url)
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug!("api response: {} {}", status, text);

        Ok(ApiResponse {
            url: url.to_string(),
            status,
            body: text,
        })
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTransport")
            .field("base_url", &self.inner.base_url)
            .field("user_agent", &self.inner.user_agent)
            .finish()
    }
}
