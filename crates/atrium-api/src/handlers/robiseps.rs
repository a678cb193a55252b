//! Robisep endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use atrium_domain::FacilityStore;
use atrium_placement::DoorPositionChecker;

use crate::dto::{CreateRobisepRequest, RobisepResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/robiseps`
pub async fn create_robisep<S, D>(
    State(state): State<AppState<S, D>>,
    Json(request): Json<CreateRobisepRequest>,
) -> Result<(StatusCode, Json<RobisepResponse>), ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let robisep = state
        .robiseps
        .create_robisep(request.into_new_robisep())
        .await?;
    Ok((StatusCode::CREATED, Json(RobisepResponse::from(&robisep))))
}

/// `GET /api/robiseps`
pub async fn list_robiseps<S, D>(
    State(state): State<AppState<S, D>>,
) -> Result<Json<Vec<RobisepResponse>>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let robiseps = state.robiseps.list_robiseps().await?;
    Ok(Json(robiseps.iter().map(RobisepResponse::from).collect()))
}

/// `PATCH /api/robiseps/{id}/disable`
pub async fn disable_robisep<S, D>(
    State(state): State<AppState<S, D>>,
    Path(id): Path<String>,
) -> Result<Json<RobisepResponse>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let robisep = state.robiseps.disable_robisep(&id).await?;
    Ok(Json(RobisepResponse::from(&robisep)))
}
