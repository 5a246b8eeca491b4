use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::response::{HttpMethod, ResponseBody};
use crate::Result;

/// Query parameters appended to a request URL. Insertion order is irrelevant;
/// the backend interprets values as PostgREST filters (e.g. `"eq.1"`).
pub type QueryParams = HashMap<String, String>;

/// HTTP client for a Supabase-style REST and auth API.
///
/// Holds the base URL and API key (immutable for the client's lifetime) and
/// the current bearer token (replaceable at any time). Clones share the token
/// cell, so a token set on one clone is visible to all. Each call reads the
/// token when it builds its headers; a concurrent [`Client::set_token`] does
/// not affect requests already past that point.
///
/// # Example
/// ```ignore
/// use supawrap_core::{Client, ClientConfig, HttpMethod};
///
/// let client = Client::new(ClientConfig::new(
///     "https://your-project.supabase.co",
///     "your-anon-key",
/// ))?;
/// let users = client.request(HttpMethod::Get, "rest/v1/users", None, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    token: Arc<RwLock<Option<String>>>,
}

impl Client {
    /// Create a new client from a configuration.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if `base_url` or `api_key`
    /// is blank. Makes no network call.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key).map_err(|e| {
                Error::InvalidConfiguration(format!("invalid API key header: {}", e))
            })?,
        );
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            token: Arc::new(RwLock::new(config.token)),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the bearer token used for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    /// Clear the bearer token; subsequent requests fall back to the API key.
    pub fn clear_token(&self) {
        *self.token.write() = None;
    }

    /// The current bearer token, if one is set.
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Issue a request against the backend and parse the response leniently.
    ///
    /// `endpoint` is either an absolute URL (used verbatim) or a path joined
    /// to the base URL with exactly one slash. Non-empty `query` maps are
    /// URL-encoded and appended. Headers always carry the API key, a bearer
    /// authorization (current token, falling back to the API key so that
    /// unauthenticated calls still present a bearer value), and a JSON
    /// content type. `body` is serialized only for POST/PUT/PATCH.
    ///
    /// A non-2xx status fails with [`Error::RequestFailed`] carrying the raw
    /// response text; a transport failure fails with [`Error::Network`]. On
    /// success the body parses under the [`ResponseBody`] rules: empty
    /// becomes `Json({})`, non-JSON degrades to `Text`.
    pub async fn request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<ResponseBody> {
        let url = self.build_url(endpoint, query)?;
        debug!(%method, url = %url, "issuing request");

        let mut request = self
            .http
            .request(method.into(), url)
            .bearer_auth(self.bearer_value());

        if let (Some(body), true) = (body, method.has_body()) {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::Network)?;
        let status = response.status();
        let text = response.text().await.map_err(Error::Network)?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "request failed");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(ResponseBody::from_text(text))
    }

    /// Issue a POST against an auth endpoint and decode the response strictly.
    ///
    /// The payload is always serialized; the response is contractually JSON,
    /// so a decode failure here is an error rather than a lenient fallback.
    pub async fn auth_request<T, P>(&self, endpoint: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.build_url(endpoint, None)?;
        debug!(url = %url, "issuing auth request");

        let response = self
            .http
            .post(url)
            .bearer_auth(self.bearer_value())
            .json(payload)
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        let text = response.text().await.map_err(Error::Network)?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "auth request failed");
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Current token, falling back to the API key.
    fn bearer_value(&self) -> String {
        self.token
            .read()
            .clone()
            .unwrap_or_else(|| self.api_key.clone())
    }

    /// Resolve an endpoint against the base URL and append query parameters.
    ///
    /// Absolute endpoints pass through untouched; relative ones join with a
    /// single slash regardless of leading slashes on the endpoint. Parameters
    /// append with `?` or `&` depending on whether the endpoint already
    /// carried a query string.
    fn build_url(&self, endpoint: &str, query: Option<&QueryParams>) -> Result<Url> {
        let raw = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        };

        let mut url = Url::parse(&raw)?;
        if let Some(params) = query {
            if !params.is_empty() {
                url.query_pairs_mut().extend_pairs(params.iter());
            }
        }
        Ok(url)
    }
}
