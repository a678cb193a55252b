//! Building endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use atrium_domain::FacilityStore;
use atrium_placement::DoorPositionChecker;

use crate::dto::{BuildingResponse, CreateBuildingRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/buildings`
pub async fn create_building<S, D>(
    State(state): State<AppState<S, D>>,
    Json(request): Json<CreateBuildingRequest>,
) -> Result<(StatusCode, Json<BuildingResponse>), ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let building = state
        .buildings
        .create_building(request.into_new_building())
        .await?;
    Ok((StatusCode::CREATED, Json(BuildingResponse::from(&building))))
}

/// `GET /api/buildings`
pub async fn list_buildings<S, D>(
    State(state): State<AppState<S, D>>,
) -> Result<Json<Vec<BuildingResponse>>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let buildings = state.buildings.list_buildings().await?;
    Ok(Json(buildings.iter().map(BuildingResponse::from).collect()))
}
