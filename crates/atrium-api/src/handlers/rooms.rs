//! Room endpoints.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use atrium_domain::{FacilityStore, FloorId};
use atrium_placement::DoorPositionChecker;

use crate::dto::{CreateRoomRequest, RoomResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/rooms`
pub async fn create_room<S, D>(
    State(state): State<AppState<S, D>>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let room = state.rooms.create_room(request.into_new_room()).await?;
    Ok((StatusCode::CREATED, Json(RoomResponse::from(&room))))
}

#[derive(Debug, Deserialize)]
pub struct ListRoomsQuery {
    /// Optional floor id filter.
    #[serde(default)]
    pub floor: Option<String>,
}

/// `GET /api/rooms[?floor=<id>]`
pub async fn list_rooms<S, D>(
    State(state): State<AppState<S, D>>,
    Query(query): Query<ListRoomsQuery>,
) -> Result<Json<Vec<RoomResponse>>, ApiError>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    let floor = query.floor.as_deref().map(FloorId::parse).transpose()?;
    let rooms = state.rooms.list_rooms(floor).await?;
    Ok(Json(rooms.iter().map(RoomResponse::from).collect()))
}
