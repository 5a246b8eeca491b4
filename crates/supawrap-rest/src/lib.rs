//! Generic table CRUD for a PostgREST-style API.
//!
//! The [`RestApi`] extension trait adds `get`/`post`/`put`/`patch`/`delete`
//! against arbitrary backend tables to the core [`Client`]. Table names are
//! joined under the `rest/v1/` prefix.
//!
//! # Filter convention
//!
//! `get` and `patch` pass the caller's filter map through unmodified: values
//! must carry their PostgREST operator explicitly (e.g. `{"id": "eq.1"}`).
//! The [`filter`] helpers format operator values so callers don't hand-roll
//! the prefixes. Only the primary-key convenience paths of `put` and
//! `delete` apply `eq.` themselves, since they take a bare value. This keeps
//! exactly one convention and rules out double-prefixing.
//!
//! # Usage
//!
//! ```ignore
//! use supawrap_core::{Client, ClientConfig, QueryParams};
//! use supawrap_rest::{filter, RestApi};
//! use serde_json::json;
//!
//! let client = Client::new(ClientConfig::new(url, anon_key))?;
//!
//! let mut params = QueryParams::new();
//! params.insert("status".into(), filter::eq("active"));
//! let rows = client.get("users", Some(&params)).await?;
//!
//! client.put("users", "id", "1", &json!({"name": "Renamed"})).await?;
//! ```

pub mod api;
pub mod filter;

pub use api::RestApi;

/// Relative root for table endpoints.
pub(crate) const REST_PREFIX: &str = "rest/v1";

/// Join a table name under the REST prefix. Absolute URLs and already
/// prefixed paths pass through so the raw primitive semantics stay reachable.
pub(crate) fn table_endpoint(table: &str) -> String {
    if table.starts_with("http://") || table.starts_with("https://") {
        return table.to_string();
    }
    let trimmed = table.trim_start_matches('/');
    if trimmed.starts_with(REST_PREFIX) {
        return trimmed.to_string();
    }
    format!("{}/{}", REST_PREFIX, trimmed)
}
