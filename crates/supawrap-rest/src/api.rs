use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::debug;

use supawrap_core::{Client, HttpMethod, QueryParams, ResponseBody, Result};

use crate::{filter, table_endpoint};

/// Generic table CRUD, implemented for [`Client`].
///
/// Table names are joined under `rest/v1/`. Filter maps pass through to the
/// backend unmodified; the primary-key paths of [`RestApi::put`] and
/// [`RestApi::delete`] build their own single-entry `eq.` filter from the
/// bare key/value pair. Filter arguments come before the body, uniformly.
#[async_trait]
pub trait RestApi {
    /// Fetch rows, optionally filtered. Filter values carry their operator
    /// (e.g. `{"id": "eq.1"}`; see [`crate::filter`]).
    async fn get(&self, table: &str, filters: Option<&QueryParams>) -> Result<ResponseBody>;

    /// Insert `data` into a table.
    async fn post(&self, table: &str, data: &JsonValue) -> Result<ResponseBody>;

    /// Replace the row whose `pk_name` column equals `pk_value`.
    async fn put(
        &self,
        table: &str,
        pk_name: &str,
        pk_value: &str,
        data: &JsonValue,
    ) -> Result<ResponseBody>;

    /// Update rows matching the caller-supplied filter map.
    async fn patch(
        &self,
        table: &str,
        filters: &QueryParams,
        data: &JsonValue,
    ) -> Result<ResponseBody>;

    /// Delete the row whose `pk_name` column equals `pk_value`.
    async fn delete(&self, table: &str, pk_name: &str, pk_value: &str) -> Result<ResponseBody>;

    /// Alias for [`RestApi::delete`], kept for API parity with client
    /// variants in languages where `delete` is reserved.
    async fn del(&self, table: &str, pk_name: &str, pk_value: &str) -> Result<ResponseBody> {
        self.delete(table, pk_name, pk_value).await
    }
}

/// Single-entry equality filter targeting one record.
fn primary_key_filter(pk_name: &str, pk_value: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.insert(pk_name.to_string(), filter::eq(pk_value));
    params
}

#[async_trait]
impl RestApi for Client {
    async fn get(&self, table: &str, filters: Option<&QueryParams>) -> Result<ResponseBody> {
        self.request(HttpMethod::Get, &table_endpoint(table), None, filters)
            .await
    }

    async fn post(&self, table: &str, data: &JsonValue) -> Result<ResponseBody> {
        self.request(HttpMethod::Post, &table_endpoint(table), Some(data), None)
            .await
    }

    async fn put(
        &self,
        table: &str,
        pk_name: &str,
        pk_value: &str,
        data: &JsonValue,
    ) -> Result<ResponseBody> {
        debug!(table, pk_name, "replacing row");
        let params = primary_key_filter(pk_name, pk_value);
        self.request(
            HttpMethod::Put,
            &table_endpoint(table),
            Some(data),
            Some(&params),
        )
        .await
    }

    async fn patch(
        &self,
        table: &str,
        filters: &QueryParams,
        data: &JsonValue,
    ) -> Result<ResponseBody> {
        self.request(
            HttpMethod::Patch,
            &table_endpoint(table),
            Some(data),
            Some(filters),
        )
        .await
    }

    async fn delete(&self, table: &str, pk_name: &str, pk_value: &str) -> Result<ResponseBody> {
        debug!(table, pk_name, "deleting row");
        let params = primary_key_filter(pk_name, pk_value);
        self.request(
            HttpMethod::Delete,
            &table_endpoint(table),
            None,
            Some(&params),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_filter_applies_eq_prefix() {
        let params = primary_key_filter("id", "1");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id").map(String::as_str), Some("eq.1"));
    }
}
