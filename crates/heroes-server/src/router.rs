//! Axum router construction.
//!
//! Builds the application router with the hero and team route groups, the
//! health probe, OpenAPI docs, and middleware layers.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::context::AppContext;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::heroes::create_hero,
        routes::heroes::list_heroes,
        routes::heroes::get_hero,
        routes::heroes::update_hero,
        routes::heroes::delete_hero,
        routes::teams::create_team,
        routes::teams::list_teams,
        routes::teams::get_team,
        routes::teams::update_team,
        routes::teams::delete_team,
    ),
    components(schemas(
        routes::heroes::HeroCreate,
        routes::heroes::HeroUpdate,
        routes::heroes::HeroRead,
        routes::heroes::HeroReadWithTeam,
        routes::teams::TeamCreate,
        routes::teams::TeamUpdate,
        routes::teams::TeamRead,
        routes::teams::TeamReadWithHeroes,
    )),
    tags(
        (name = "heroes", description = "Hero records"),
        (name = "teams", description = "Teams and their heroes"),
    )
)]
pub struct ApiDoc;

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Collections answer with and without the trailing slash.
    let heroes = Router::new()
        .route(
            "/heroes/",
            get(routes::heroes::list_heroes).post(routes::heroes::create_hero),
        )
        .route(
            "/heroes",
            get(routes::heroes::list_heroes).post(routes::heroes::create_hero),
        )
        .route(
            "/heroes/{id}",
            get(routes::heroes::get_hero)
                .patch(routes::heroes::update_hero)
                .delete(routes::heroes::delete_hero),
        );

    let teams = Router::new()
        .route(
            "/teams/",
            get(routes::teams::list_teams).post(routes::teams::create_team),
        )
        .route(
            "/teams",
            get(routes::teams::list_teams).post(routes::teams::create_team),
        )
        .route(
            "/teams/{id}",
            get(routes::teams::get_team)
                .patch(routes::teams::update_team)
                .delete(routes::teams::delete_team),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(heroes)
        .merge(teams)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
