//! Router assembly.

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::trace::TraceLayer;

use atrium_domain::FacilityStore;
use atrium_placement::DoorPositionChecker;

use crate::handlers;
use crate::state::AppState;

/// Builds the full application router.
///
/// Entity routes live under `/api`; the liveness probe sits at the
/// root. Every request is traced by `tower_http`.
pub fn create_router<S, D>(state: AppState<S, D>) -> Router
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let api = Router::new()
        .route(
            "/buildings",
            post(handlers::create_building::<S, D>)
                .get(handlers::list_buildings::<S, D>),
        )
        .route(
            "/floors",
            post(handlers::create_floor::<S, D>)
                .get(handlers::list_floors::<S, D>),
        )
        .route(
            "/rooms",
            post(handlers::create_room::<S, D>)
                .get(handlers::list_rooms::<S, D>),
        )
        .route(
            "/elevators",
            post(handlers::create_elevator::<S, D>)
                .get(handlers::list_elevators::<S, D>),
        )
        .route(
            "/passages",
            post(handlers::create_passage::<S, D>)
                .get(handlers::list_passages::<S, D>),
        )
        .route(
            "/robiseps",
            post(handlers::create_robisep::<S, D>)
                .get(handlers::list_robiseps::<S, D>),
        )
        .route(
            "/robiseps/{id}/disable",
            patch(handlers::disable_robisep::<S, D>),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
