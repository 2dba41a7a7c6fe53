//! Generic per-entity client surface.
//!
//! Every entity exposes the same generated surface: list, get, create,
//! update, delete, plus criteria search and prefix search. The entity
//! contributes only its collection path and field table; everything else
//! is path interpolation and delegation to the transport.

use std::marker::PhantomData;
use std::sync::Arc;

use erp_core::{Id, Method};
use erp_query::{prefix_search, FieldTable, QueryOptions, SearchCriteria};

use crate::error::Result;
use crate::transport::Transport;

/// Static description of an API entity.
pub trait Resource {
    /// Collection path, e.g. `/customers`.
    const PATH: &'static str;
    /// Criteria-key to wire-name table for this entity.
    const FIELDS: FieldTable;
}

/// Client for one entity's endpoints.
pub struct EntityClient<R: Resource> {
    transport: Arc<dyn Transport>,
    _resource: PhantomData<R>,
}

impl<R: Resource> EntityClient<R> {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }

    /// Raw request against this entity's endpoints, used by the custom
    /// endpoint wrappers.
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        self.transport.request(method, path, body).await
    }

    fn collection_path(options: &QueryOptions) -> Result<String> {
        let query = options.to_query_string()?;
        if query.is_empty() {
            Ok(R::PATH.to_string())
        } else {
            Ok(format!("{}?{}", R::PATH, query))
        }
    }

    /// Fetch a page of rows.
    pub async fn list(&self, options: &QueryOptions) -> Result<serde_json::Value> {
        let path = Self::collection_path(options)?;
        self.call(Method::Get, &path, None).await
    }

    /// Fetch a single row by id.
    pub async fn get(&self, id: Id) -> Result<serde_json::Value> {
        self.call(Method::Get, &format!("{}/{}", R::PATH, id), None)
            .await
    }

    /// Create a row.
    pub async fn create(&self, body: serde_json::Value) -> Result<serde_json::Value> {
        self.call(Method::Post, R::PATH, Some(body)).await
    }

    /// Replace a row.
    pub async fn update(&self, id: Id, body: serde_json::Value) -> Result<serde_json::Value> {
        self.call(Method::Put, &format!("{}/{}", R::PATH, id), Some(body))
            .await
    }

    /// Delete a row.
    pub async fn delete(&self, id: Id) -> Result<serde_json::Value> {
        self.call(Method::Delete, &format!("{}/{}", R::PATH, id), None)
            .await
    }

    /// Fetch rows matching the criteria, compiled through this entity's
    /// field table into the `q` parameter.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
        options: QueryOptions,
    ) -> Result<serde_json::Value> {
        self.list(&options.with_search(criteria, &R::FIELDS)).await
    }

    /// Prefix search on one free-text field: `FIELD like 'text*'`.
    pub async fn search_by(&self, key: &str, text: &str) -> Result<serde_json::Value> {
        let q = prefix_search(key, text, &R::FIELDS);
        self.list(&QueryOptions::new().q(q)).await
    }

    /// Prefix search on the entity's `code` field.
    pub async fn search_by_code(&self, text: &str) -> Result<serde_json::Value> {
        self.search_by("code", text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use erp_query::SortSpec;
    use serde_json::json;

    struct Widgets;

    impl Resource for Widgets {
        const PATH: &'static str = "/widgets";
        const FIELDS: FieldTable = FieldTable::new(&[("code", "CODE"), ("status", "STATUS")]);
    }

    fn client_expecting(
        method: Method,
        path: &'static str,
        want_body: bool,
    ) -> EntityClient<Widgets> {
        let mut mock = MockTransport::new();
        mock.expect_request()
            .withf(move |m, p, b| *m == method && p == path && b.is_some() == want_body)
            .times(1)
            .returning(|_, _, _| Ok(json!({"ok": true})));
        EntityClient::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_list_without_options_hits_bare_path() {
        let client = client_expecting(Method::Get, "/widgets", false);
        client.list(&QueryOptions::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_appends_query_string() {
        let client = client_expecting(
            Method::Get,
            "/widgets?limit=10&offset=0&sort=CODE",
            false,
        );
        client
            .list(
                &QueryOptions::new()
                    .limit(10)
                    .offset(0)
                    .sort(SortSpec::by("CODE")),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_update_delete_paths() {
        let client = client_expecting(Method::Get, "/widgets/42", false);
        client.get(42).await.unwrap();

        let client = client_expecting(Method::Put, "/widgets/42", true);
        client.update(42, json!({"name": "x"})).await.unwrap();

        let client = client_expecting(Method::Delete, "/widgets/42", false);
        client.delete(42).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_posts_body_to_collection() {
        let client = client_expecting(Method::Post, "/widgets", true);
        client.create(json!({"code": "W-1"})).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_compiles_criteria_into_q() {
        let client = client_expecting(
            Method::Get,
            "/widgets?q=CODE+eq+%27ABC%27+and+%28STATUS+eq+1+or+STATUS+eq+2%29",
            false,
        );
        let criteria = SearchCriteria::new()
            .field("code", "ABC")
            .field_in("status", [1, 2]);
        client.search(&criteria, QueryOptions::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_with_empty_criteria_omits_q() {
        let client = client_expecting(Method::Get, "/widgets?limit=5", false);
        client
            .search(&SearchCriteria::new(), QueryOptions::new().limit(5))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_by_code_is_a_prefix_match() {
        let client = client_expecting(Method::Get, "/widgets?q=CODE+like+%27test*%27", false);
        client.search_by_code("test").await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_sort_fails_before_any_request() {
        let mock = MockTransport::new(); // no expectations: must not be called
        let client: EntityClient<Widgets> = EntityClient::new(Arc::new(mock));
        let err = client
            .list(&QueryOptions::new().sort(SortSpec::fields(Vec::<String>::new())))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ApiError::Query(erp_core::QueryError::InvalidSortSpec { .. })
        ));
    }
}
