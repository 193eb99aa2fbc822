//! Catalog API calls.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::types::{Category, Product};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::ids::CategoryId;

/// Errors from catalog requests.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request failed or the backend rejected it.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The backend answered with a body that is not the expected shape.
    #[error("Malformed {resource} response: {source}")]
    Decode {
        /// What was being fetched.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Reads products and categories from the backend.
///
/// Each method comes in two flavours. The `try_` variants return the
/// failure. The plain variants are fail-open: they log the failure and
/// return an empty list, so a caller always has something to render.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: Arc<HttpClient>,
}

impl CatalogClient {
    /// Creates a catalog client sharing `http`.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> Result<T, CatalogError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .build()
            .map_err(HttpError::from)?;
        let response = self.http.request(request).await?;
        response
            .json()
            .map_err(|source| CatalogError::Decode { resource, source })
    }

    /// Fetches the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails or the body is malformed.
    pub async fn try_fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products/", "products").await
    }

    /// Fetches every category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails or the body is malformed.
    pub async fn try_fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.get_json("/categories/", "categories").await
    }

    /// Fetches a single category by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails (including 404 for an
    /// unknown id) or the body is malformed.
    pub async fn fetch_category(&self, id: CategoryId) -> Result<Category, CatalogError> {
        self.get_json(&format!("/categories/{id}"), "category").await
    }

    /// Fetches the full product catalog, returning an empty list on failure.
    pub async fn fetch_products(&self) -> Vec<Product> {
        self.try_fetch_products().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching products");
            Vec::new()
        })
    }

    /// Fetches every category, returning an empty list on failure.
    pub async fn fetch_categories(&self) -> Vec<Category> {
        self.try_fetch_categories().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching categories");
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiBaseUrl, StorefrontConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: &str) -> CatalogClient {
        let config = StorefrontConfig::builder()
            .base_url(ApiBaseUrl::new(url).unwrap())
            .build()
            .unwrap();
        CatalogClient::new(Arc::new(HttpClient::new(&config)))
    }

    #[tokio::test]
    async fn test_fetch_categories_parses_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Books", "description": null},
                {"id": 2, "name": "Electronics", "description": "Gadgets"}
            ])))
            .mount(&server)
            .await;

        let categories = client_for(&server.uri()).fetch_categories().await;
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Books", "Electronics"]);
    }

    #[tokio::test]
    async fn test_fetch_products_fails_open_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        assert!(client.fetch_products().await.is_empty());
        assert!(matches!(
            client.try_fetch_products().await,
            Err(CatalogError::Http(HttpError::Response(_)))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        assert!(matches!(
            client.try_fetch_products().await,
            Err(CatalogError::Decode { resource: "products", .. })
        ));
        assert!(client.fetch_products().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_category_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories/2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 2, "name": "Electronics"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/categories/99"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Category not found"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let category = client.fetch_category(CategoryId(2)).await.unwrap();
        assert_eq!(category.name, "Electronics");

        let error = client.fetch_category(CategoryId(99)).await.unwrap_err();
        assert!(error.to_string().contains("Category not found"));
    }
}
