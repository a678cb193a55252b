//! Elevator and passage endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use atrium_domain::FacilityStore;
use atrium_placement::DoorPositionChecker;

use crate::dto::{
    CreateElevatorRequest, CreatePassageRequest, ElevatorResponse,
    PassageResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/elevators`
pub async fn create_elevator<S, D>(
    State(state): State<AppState<S, D>>,
    Json(request): Json<CreateElevatorRequest>,
) -> Result<(StatusCode, Json<ElevatorResponse>), ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let elevator = state
        .transit
        .create_elevator(request.into_new_elevator())
        .await?;
    Ok((StatusCode::CREATED, Json(ElevatorResponse::from(&elevator))))
}

/// `GET /api/elevators`
pub async fn list_elevators<S, D>(
    State(state): State<AppState<S, D>>,
) -> Result<Json<Vec<ElevatorResponse>>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let elevators = state.transit.list_elevators().await?;
    Ok(Json(elevators.iter().map(ElevatorResponse::from).collect()))
}

/// `POST /api/passages`
pub async fn create_passage<S, D>(
    State(state): State<AppState<S, D>>,
    Json(request): Json<CreatePassageRequest>,
) -> Result<(StatusCode, Json<PassageResponse>), ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let passage = state
        .transit
        .create_passage(request.into_new_passage())
        .await?;
    Ok((StatusCode::CREATED, Json(PassageResponse::from(&passage))))
}

/// `GET /api/passages`
pub async fn list_passages<S, D>(
    State(state): State<AppState<S, D>>,
) -> Result<Json<Vec<PassageResponse>>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let passages = state.transit.list_passages().await?;
    Ok(Json(passages.iter().map(PassageResponse::from).collect()))
}
