//! Tests for the power query and command services.

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockPowerRepository;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

fn flight() -> Power {
    Power::new(
        PowerId::new(2),
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    )
}

#[fixture]
fn repo_with_flight() -> MockPowerRepository {
    let mut repo = MockPowerRepository::new();
    repo.expect_find_power()
        .with(eq(PowerId::new(2)))
        .returning(|_| Ok(Some(flight())));
    repo
}

#[rstest]
#[tokio::test]
async fn get_power_returns_not_found_for_unknown_id() {
    let mut repo = MockPowerRepository::new();
    repo.expect_find_power().times(1).return_once(|_| Ok(None));

    let service = PowersService::new(Arc::new(repo));
    let error = service
        .get_power(PowerId::new(9))
        .await
        .expect_err("unknown power");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Power not found");
}

#[rstest]
#[tokio::test]
async fn update_checks_existence_before_description() {
    let mut repo = MockPowerRepository::new();
    repo.expect_find_power().times(1).return_once(|_| Ok(None));
    repo.expect_update_description().never();

    let service = PowersService::new(Arc::new(repo));
    let error = service
        .update_power(UpdatePowerRequest {
            power_id: PowerId::new(9),
            description: None,
        })
        .await
        .expect_err("unknown power");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_without_description_is_rejected_and_not_stored(
    mut repo_with_flight: MockPowerRepository,
) {
    repo_with_flight.expect_update_description().never();

    let service = PowersService::new(Arc::new(repo_with_flight));
    let error = service
        .update_power(UpdatePowerRequest {
            power_id: PowerId::new(2),
            description: None,
        })
        .await
        .expect_err("missing description");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|d| d.get("code")).and_then(|c| c.as_str()),
        Some("missing_field")
    );
}

#[rstest]
#[case(String::new())]
#[case("x".repeat(256))]
#[tokio::test]
async fn update_with_invalid_description_is_rejected(
    mut repo_with_flight: MockPowerRepository,
    #[case] description: String,
) {
    repo_with_flight.expect_update_description().never();

    let service = PowersService::new(Arc::new(repo_with_flight));
    let error = service
        .update_power(UpdatePowerRequest {
            power_id: PowerId::new(2),
            description: Some(description),
        })
        .await
        .expect_err("invalid description");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn update_stores_valid_description(mut repo_with_flight: MockPowerRepository) {
    repo_with_flight
        .expect_update_description()
        .withf(|id, description| *id == PowerId::new(2) && description == "soars")
        .times(1)
        .return_once(|_, description| Ok(Some(flight().with_description(description))));

    let service = PowersService::new(Arc::new(repo_with_flight));
    let updated = service
        .update_power(UpdatePowerRequest {
            power_id: PowerId::new(2),
            description: Some("soars".to_owned()),
        })
        .await
        .expect("update succeeds");

    assert_eq!(updated.description(), "soars");
    assert_eq!(updated.name(), "flight");
}

#[rstest]
#[tokio::test]
async fn list_powers_maps_connection_errors() {
    let mut repo = MockPowerRepository::new();
    repo.expect_list_powers()
        .times(1)
        .return_once(|| Err(PowerRepositoryError::connection("refused")));

    let service = PowersService::new(Arc::new(repo));
    let error = service.list_powers().await.expect_err("connection failure");
    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
