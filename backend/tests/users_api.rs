//! Endpoint tests for user registration and listing.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chirp_backend::test_support::InMemorySocialStore;
use serde_json::{Value, json};

use support::social_app;

#[actix_web::test]
async fn create_user_returns_the_stored_profile() {
    let store = Arc::new(InMemorySocialStore::new());
    let app = actix_test::init_service(social_app(store)).await;

    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({"name": "Fulano", "age": 30}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Fulano"));
    assert_eq!(body.get("age").and_then(Value::as_i64), Some(30));
    assert!(body.get("id").and_then(Value::as_i64).is_some());
}

#[actix_web::test]
async fn list_users_returns_every_registered_user() {
    let store = Arc::new(InMemorySocialStore::new());
    store.seed_user("Fulano", 30);
    store.seed_user("Ciclano", 33);
    let app = actix_test::init_service(social_app(store)).await;

    let request = actix_test::TestRequest::get().uri("/users").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let listed = body.as_array().expect("users array");
    assert_eq!(listed.len(), 2);
}

#[actix_web::test]
async fn list_users_is_empty_before_any_registration() {
    let store = Arc::new(InMemorySocialStore::new());
    let app = actix_test::init_service(social_app(store)).await;

    let request = actix_test::TestRequest::get().uri("/users").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}
