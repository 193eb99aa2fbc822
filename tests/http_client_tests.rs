//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building,
//! response parsing, and error handling behavior.

use serde_json::json;
use storefront_client::cart::{Cart, CartLine, CartRequest};
use storefront_client::clients::{HttpClient, HttpMethod, HttpRequest};
use storefront_client::{
    ApiBaseUrl, CartId, HttpError, InvalidHttpRequestError, ProductId, StorefrontConfig, UserId,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = StorefrontConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .user_agent_prefix("IntegrationTest/1.0")
        .build()
        .unwrap();
    HttpClient::new(&config)
}

#[tokio::test]
async fn test_full_workflow_config_to_client_to_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cart/"))
        .and(header("Authorization", "Bearer T1"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(
            json!({"user_id": 7, "products": [{"product_id": 3, "quantity": 1}]}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "user_id": 7,
            "created_at": "2024-05-01T08:00:00",
            "products": [{"id": 3, "name": "Lamp", "price": 1500.0, "quantity": 1}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client
        .default_headers()
        .get("User-Agent")
        .unwrap()
        .starts_with("IntegrationTest/1.0 | Storefront Client v"));

    let request = HttpRequest::builder(HttpMethod::Post, "/cart/")
        .json(&CartRequest {
            user_id: UserId(7),
            products: vec![CartLine::single(ProductId(3))],
        })
        .unwrap()
        .bearer_token("T1")
        .build()
        .unwrap();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.bearer_token.as_deref(), Some("T1"));

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());

    let cart: Cart = response.json().unwrap();
    assert_eq!(cart.id, CartId(11));
    assert_eq!(cart.products[0].name, "Lamp");
}

#[tokio::test]
async fn test_invalid_request_produces_correct_error() {
    let result = HttpRequest::builder(HttpMethod::Post, "/cart/").build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));

    let server = MockServer::start().await;
    let request = HttpRequest {
        http_method: HttpMethod::Get,
        path: "/products/".to_string(),
        body: Some(json!({"key": "value"})),
        body_type: None,
        bearer_token: None,
    };
    let error = client_for(&server).request(request).await.unwrap_err();
    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType)
    ));
}

#[tokio::test]
async fn test_validation_error_detail_is_first_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
                {"loc": ["body", "password"], "msg": "field required", "type": "value_error.missing"}
            ]
        })))
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Post, "/auth/register")
        .json(&json!({"email": "nope"}))
        .unwrap()
        .build()
        .unwrap();
    let error = client_for(&server).request(request).await.unwrap_err();

    assert_eq!(error.status(), Some(422));
    assert_eq!(error.detail(), Some("value is not a valid email address"));
}
