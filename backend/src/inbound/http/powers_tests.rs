//! Tests for power handlers.

use super::*;
use crate::inbound::http::test_utils::{seeded_store, test_app};
use crate::outbound::memory::InMemoryCatalogue;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn store() -> InMemoryCatalogue {
    seeded_store()
}

fn custom_header_of(response: &actix_web::dev::ServiceResponse) -> Option<&str> {
    response
        .headers()
        .get("Custom-Header")
        .and_then(|value| value.to_str().ok())
}

async fn fetch_power(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    id: i32,
) -> PowerBody {
    let request = actix_test::TestRequest::get()
        .uri(&format!("/powers/{id}"))
        .to_request();
    actix_test::call_and_read_body_json(app, request).await
}

#[rstest]
#[actix_web::test]
async fn get_power_sets_custom_header(store: InMemoryCatalogue) {
    let app = actix_test::init_service(test_app(&store)).await;

    let request = actix_test::TestRequest::get().uri("/powers/2").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(custom_header_of(&response), Some("Custom Value"));
    let body: PowerBody = actix_test::read_body_json(response).await;
    assert_eq!(body.name, "flight");
}

#[rstest]
#[actix_web::test]
async fn patch_updates_description(store: InMemoryCatalogue) {
    let app = actix_test::init_service(test_app(&store)).await;

    let request = actix_test::TestRequest::patch()
        .uri("/powers/2")
        .set_json(UpdatePowerRequestBody {
            description: "soars above the city skyline".to_owned(),
        })
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(custom_header_of(&response), Some("Updated Custom Value"));
    let body: PowerBody = actix_test::read_body_json(response).await;
    assert_eq!(body.description, "soars above the city skyline");

    let stored = fetch_power(&app, 2).await;
    assert_eq!(stored.description, "soars above the city skyline");
}

#[rstest]
#[case(json!({}))]
#[case(json!({"name": "flight"}))]
#[case(json!({"description": 42}))]
#[case(json!({"description": ""}))]
#[case(json!({"description": "x".repeat(256)}))]
#[case(json!(["description"]))]
#[actix_web::test]
async fn patch_rejects_bad_bodies_and_keeps_description(
    store: InMemoryCatalogue,
    #[case] body: serde_json::Value,
) {
    let app = actix_test::init_service(test_app(&store)).await;
    let before = fetch_power(&app, 2).await;

    let request = actix_test::TestRequest::patch()
        .uri("/powers/2")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(custom_header_of(&response), Some("Error Value"));
    assert_eq!(fetch_power(&app, 2).await, before);
}

#[rstest]
#[case(json!({"description": "anything"}))]
#[case(json!({}))]
#[case(json!({"description": 42}))]
#[actix_web::test]
async fn patch_unknown_power_is_not_found(
    store: InMemoryCatalogue,
    #[case] body: serde_json::Value,
) {
    let app = actix_test::init_service(test_app(&store)).await;

    let request = actix_test::TestRequest::patch()
        .uri("/powers/999")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(custom_header_of(&response), None);
}

#[rstest]
#[actix_web::test]
async fn patch_with_malformed_json_is_bad_request(store: InMemoryCatalogue) {
    let app = actix_test::init_service(test_app(&store)).await;

    let request = actix_test::TestRequest::patch()
        .uri("/powers/2")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"description\": ")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(serde_json::Value::as_str),
        Some("invalid_request")
    );
}
