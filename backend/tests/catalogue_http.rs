//! End-to-end HTTP behaviour over the in-memory store.
//!
//! Each test builds the full catalogue app (trace middleware, extractor
//! configuration, domain services) the way the server does, so the
//! assertions cover adapter and domain rules together.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use superheroes::Trace;
use superheroes::domain::{HeroPowersRepositories, SeedCatalogue};
use superheroes::inbound::http::configure_catalogue;
use superheroes::inbound::http::state::HttpState;
use superheroes::outbound::memory::InMemoryCatalogue;

#[fixture]
fn store() -> InMemoryCatalogue {
    InMemoryCatalogue::seeded(&SeedCatalogue::standard())
}

async fn init_app(
    store: &InMemoryCatalogue,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let shared = Arc::new(store.clone());
    let state = HttpState::from_repositories(HeroPowersRepositories {
        heroes: shared.clone(),
        powers: shared.clone(),
        hero_powers: shared,
    });
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure_catalogue),
    )
    .await
}

fn custom_header(response: &ServiceResponse) -> Option<String> {
    response
        .headers()
        .get("Custom-Header")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn get_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> (StatusCode, Value) {
    let response = test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    (status, test::read_body_json(response).await)
}

#[rstest]
#[actix_web::test]
async fn unknown_hero_is_not_found(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let (status, body) = get_json(&app, "/heroes/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["message"], json!("Hero not found"));
}

#[rstest]
#[actix_web::test]
async fn heroes_and_powers_list_the_catalogue(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let (status, heroes) = get_json(&app, "/heroes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        heroes[0],
        json!({"id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel"})
    );
    assert_eq!(heroes.as_array().map(Vec::len), Some(4));

    let (status, powers) = get_json(&app, "/powers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(powers.as_array().map(Vec::len), Some(4));
    assert!(powers[0].get("description").is_some());
}

#[rstest]
#[actix_web::test]
async fn patch_without_description_is_rejected_and_leaves_power_unchanged(
    store: InMemoryCatalogue,
) {
    let app = init_app(&store).await;
    let (_, before) = get_json(&app, "/powers/1").await;

    let response = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/powers/1")
            .set_json(json!({"name": "renamed"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(custom_header(&response).as_deref(), Some("Error Value"));
    let (_, after) = get_json(&app, "/powers/1").await;
    assert_eq!(before, after);
}

#[rstest]
#[actix_web::test]
async fn patch_with_overlong_description_is_rejected(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let response = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/powers/1")
            .set_json(json!({"description": "a".repeat(256)}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn patch_at_the_length_limit_is_stored(store: InMemoryCatalogue) {
    let app = init_app(&store).await;
    let description = "é".repeat(255);

    let response = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/powers/1")
            .set_json(json!({"description": description}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        custom_header(&response).as_deref(),
        Some("Updated Custom Value")
    );
    let (_, stored) = get_json(&app, "/powers/1").await;
    assert_eq!(stored["description"], json!(description));
}

#[rstest]
#[actix_web::test]
async fn non_integer_strength_is_rejected(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hero_powers")
            .set_json(json!({"hero_id": 1, "power_id": 2, "strength": "abc"}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.hero_power_count(), 4);
}

#[rstest]
#[actix_web::test]
async fn created_link_appears_on_the_hero(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hero_powers")
            .set_json(json!({"hero_id": 1, "power_id": 2, "strength": 4}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        custom_header(&response).as_deref(),
        Some("Created Custom Value")
    );
    let created: Value = test::read_body_json(response).await;
    assert_eq!(created, json!({"hero_id": 1, "power_id": 2, "strength": 4}));

    let (_, hero) = get_json(&app, "/heroes/1").await;
    let power_ids: Vec<i64> = hero["powers"]
        .as_array()
        .map(|powers| powers.iter().filter_map(|p| p["id"].as_i64()).collect())
        .unwrap_or_default();
    assert_eq!(power_ids, vec![2, 4]);
}

#[rstest]
#[actix_web::test]
async fn link_to_missing_hero_is_not_found(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hero_powers")
            .set_json(json!({"hero_id": 404, "power_id": 1, "strength": 3}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.hero_power_count(), 4);
}

#[rstest]
#[actix_web::test]
async fn invalid_stored_description_blocks_the_link(store: InMemoryCatalogue) {
    let broken = store.insert_power("static", &"x".repeat(300));
    let app = init_app(&store).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hero_powers")
            .set_json(json!({"hero_id": 1, "power_id": broken.id().get(), "strength": 3}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        json!("Invalid request: Description validation failed")
    );
    assert_eq!(store.hero_power_count(), 4);
}

#[rstest]
#[actix_web::test]
async fn get_power_carries_custom_and_trace_headers(store: InMemoryCatalogue) {
    let app = init_app(&store).await;

    let response =
        test::call_service(&app, test::TestRequest::get().uri("/powers/3").to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(custom_header(&response).as_deref(), Some("Custom Value"));
    let trace_id = response
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .expect("trace-id header");
    assert!(uuid::Uuid::parse_str(trace_id).is_ok());
}
