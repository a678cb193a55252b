//! Floor endpoints.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use atrium_domain::{BuildingId, FacilityStore};
use atrium_placement::DoorPositionChecker;

use crate::dto::{CreateFloorRequest, FloorResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/floors`
pub async fn create_floor<S, D>(
    State(state): State<AppState<S, D>>,
    Json(request): Json<CreateFloorRequest>,
) -> Result<(StatusCode, Json<FloorResponse>), ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let floor = state.floors.create_floor(request.into_new_floor()).await?;
    Ok((StatusCode::CREATED, Json(FloorResponse::from(&floor))))
}

#[derive(Debug, Deserialize)]
pub struct ListFloorsQuery {
    /// Optional building id filter.
    #[serde(default)]
    pub building: Option<String>,
}

/// `GET /api/floors[?building=<id>]`
pub async fn list_floors<S, D>(
    State(state): State<AppState<S, D>>,
    Query(query): Query<ListFloorsQuery>,
) -> Result<Json<Vec<FloorResponse>>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let building = query
        .building
        .as_deref()
        .map(BuildingId::parse)
        .transpose()?;
    let floors = state.floors.list_floors(building).await?;
    Ok(Json(floors.iter().map(FloorResponse::from).collect()))
}
