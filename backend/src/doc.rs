//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every catalogue and health endpoint together with the
//! adapter-layer schema wrappers. Swagger UI serves it in debug builds and
//! `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::hero_powers::{CreateHeroPowerRequestBody, HeroPowerBody};
use crate::inbound::http::heroes::{HeroBody, HeroDetailBody};
use crate::inbound::http::powers::{PowerBody, UpdatePowerRequestBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Superheroes API",
        description = "Read heroes and powers, edit power descriptions, and link heroes to powers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::heroes::list_heroes,
        crate::inbound::http::heroes::get_hero,
        crate::inbound::http::powers::list_powers,
        crate::inbound::http::powers::get_power,
        crate::inbound::http::powers::update_power,
        crate::inbound::http::hero_powers::create_hero_power,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        HeroBody,
        HeroDetailBody,
        PowerBody,
        UpdatePowerRequestBody,
        CreateHeroPowerRequestBody,
        HeroPowerBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "heroes", description = "Hero catalogue"),
        (name = "powers", description = "Power catalogue"),
        (name = "hero_powers", description = "Hero to power associations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    #[rstest]
    #[case("/heroes")]
    #[case("/heroes/{id}")]
    #[case("/powers")]
    #[case("/powers/{id}")]
    #[case("/hero_powers")]
    #[case("/health/ready")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let RefOr::T(Schema::Object(error)) = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema")
        else {
            panic!("expected Object schema");
        };
        assert!(error.properties.contains_key("code"));
        assert!(error.properties.contains_key("message"));
    }
}
