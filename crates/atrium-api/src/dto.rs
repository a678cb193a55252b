//! Request and response shapes for the JSON contract.
//!
//! Field names are camelCase on the wire. Coordinates deserialize as
//! `i64` so that fractional or string values are rejected at the HTTP
//! boundary while negative values still reach the domain and get its
//! error message.

use serde::{Deserialize, Serialize};

use atrium_domain::{
    Building, Elevator, Floor, Passage, Position, Robisep, Room,
    RoomDimensions,
};
use atrium_service::{NewBuilding, NewElevator, NewFloor, NewPassage, NewRobisep};

// ---------------------------------------------------------------------------
// Shared geometry shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: i64,
    pub y: i64,
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            x: i64::from(position.x()),
            y: i64::from(position.y()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionsDto {
    pub initial_position: PositionDto,
    pub final_position: PositionDto,
}

impl From<RoomDimensions> for DimensionsDto {
    fn from(dimensions: RoomDimensions) -> Self {
        Self {
            initial_position: dimensions.initial().into(),
            final_position: dimensions.final_position().into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub dimensions: DimensionsDto,
    pub door_position: PositionDto,
    pub door_orientation: String,
    pub floor_id: String,
    #[serde(default)]
    pub domain_id: Option<String>,
}

impl CreateRoomRequest {
    /// Flattens the nested JSON shape into the factory's raw payload.
    pub fn into_new_room(self) -> atrium_placement::NewRoom {
        atrium_placement::NewRoom {
            name: self.name,
            description: self.description,
            category: self.category,
            initial_x: self.dimensions.initial_position.x,
            initial_y: self.dimensions.initial_position.y,
            final_x: self.dimensions.final_position.x,
            final_y: self.dimensions.final_position.y,
            door_x: self.door_position.x,
            door_y: self.door_position.y,
            door_orientation: self.door_orientation,
            floor_id: self.floor_id,
            domain_id: self.domain_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub dimensions: DimensionsDto,
    pub door_position: PositionDto,
    pub door_orientation: String,
    pub floor_id: String,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id().to_string(),
            name: room.name().as_str().to_string(),
            description: room.description().as_str().to_string(),
            category: room.category().to_string(),
            dimensions: room.dimensions().into(),
            door_position: room.door_position().into(),
            door_orientation: room.door_orientation().to_string(),
            floor_id: room.floor_id().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildingRequest {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub domain_id: Option<String>,
}

impl CreateBuildingRequest {
    pub fn into_new_building(self) -> NewBuilding {
        NewBuilding {
            code: self.code,
            name: self.name,
            description: self.description,
            domain_id: self.domain_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingResponse {
    pub id: String,
    pub code: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<&Building> for BuildingResponse {
    fn from(building: &Building) -> Self {
        Self {
            id: building.id().to_string(),
            code: building.code().as_str().to_string(),
            name: building.name().map(|n| n.as_str().to_string()),
            description: building.description().map(|d| d.as_str().to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Floors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFloorRequest {
    pub building_id: String,
    pub number: i32,
    #[serde(default)]
    pub description: Option<String>,
    pub width: i64,
    pub length: i64,
    #[serde(default)]
    pub domain_id: Option<String>,
}

impl CreateFloorRequest {
    pub fn into_new_floor(self) -> NewFloor {
        NewFloor {
            building_id: self.building_id,
            number: self.number,
            description: self.description,
            width: self.width,
            length: self.length,
            domain_id: self.domain_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorResponse {
    pub id: String,
    pub building_id: String,
    pub number: i32,
    pub description: Option<String>,
    pub width: u32,
    pub length: u32,
}

impl From<&Floor> for FloorResponse {
    fn from(floor: &Floor) -> Self {
        Self {
            id: floor.id().to_string(),
            building_id: floor.building_id().to_string(),
            number: floor.number(),
            description: floor.description().map(|d| d.as_str().to_string()),
            width: floor.bounds().width(),
            length: floor.bounds().length(),
        }
    }
}

// ---------------------------------------------------------------------------
// Elevators and passages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateElevatorRequest {
    pub floor_ids: Vec<String>,
    pub area: DimensionsDto,
    #[serde(default)]
    pub domain_id: Option<String>,
}

impl CreateElevatorRequest {
    pub fn into_new_elevator(self) -> NewElevator {
        NewElevator {
            floor_ids: self.floor_ids,
            initial_x: self.area.initial_position.x,
            initial_y: self.area.initial_position.y,
            final_x: self.area.final_position.x,
            final_y: self.area.final_position.y,
            domain_id: self.domain_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorResponse {
    pub id: String,
    pub floor_ids: Vec<String>,
    pub area: DimensionsDto,
}

impl From<&Elevator> for ElevatorResponse {
    fn from(elevator: &Elevator) -> Self {
        Self {
            id: elevator.id().to_string(),
            floor_ids: elevator
                .floors()
                .iter()
                .map(ToString::to_string)
                .collect(),
            area: elevator.area().into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePassageRequest {
    pub from_floor_id: String,
    pub to_floor_id: String,
    pub from_area: DimensionsDto,
    pub to_area: DimensionsDto,
    #[serde(default)]
    pub domain_id: Option<String>,
}

impl CreatePassageRequest {
    pub fn into_new_passage(self) -> NewPassage {
        NewPassage {
            from_floor_id: self.from_floor_id,
            to_floor_id: self.to_floor_id,
            from_initial_x: self.from_area.initial_position.x,
            from_initial_y: self.from_area.initial_position.y,
            from_final_x: self.from_area.final_position.x,
            from_final_y: self.from_area.final_position.y,
            to_initial_x: self.to_area.initial_position.x,
            to_initial_y: self.to_area.initial_position.y,
            to_final_x: self.to_area.final_position.x,
            to_final_y: self.to_area.final_position.y,
            domain_id: self.domain_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassageResponse {
    pub id: String,
    pub from_floor_id: String,
    pub to_floor_id: String,
    pub from_area: DimensionsDto,
    pub to_area: DimensionsDto,
}

impl From<&Passage> for PassageResponse {
    fn from(passage: &Passage) -> Self {
        Self {
            id: passage.id().to_string(),
            from_floor_id: passage.from_floor().to_string(),
            to_floor_id: passage.to_floor().to_string(),
            from_area: passage.from_area().into(),
            to_area: passage.to_area().into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Robiseps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRobisepRequest {
    pub code: String,
    pub nickname: String,
    pub serial_number: String,
    #[serde(default)]
    pub description: Option<String>,
    pub room_id: String,
    #[serde(default)]
    pub domain_id: Option<String>,
}

impl CreateRobisepRequest {
    pub fn into_new_robisep(self) -> NewRobisep {
        NewRobisep {
            code: self.code,
            nickname: self.nickname,
            serial_number: self.serial_number,
            description: self.description,
            room_id: self.room_id,
            domain_id: self.domain_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobisepResponse {
    pub id: String,
    pub code: String,
    pub nickname: String,
    pub serial_number: String,
    pub description: Option<String>,
    pub room_id: String,
    pub enabled: bool,
}

impl From<&Robisep> for RobisepResponse {
    fn from(robisep: &Robisep) -> Self {
        Self {
            id: robisep.id().to_string(),
            code: robisep.code().as_str().to_string(),
            nickname: robisep.nickname().as_str().to_string(),
            serial_number: robisep.serial_number().as_str().to_string(),
            description: robisep.description().map(|d| d.as_str().to_string()),
            room_id: robisep.room_id().to_string(),
            enabled: robisep.is_enabled(),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The wire contract uses camelCase keys and nested position
    //! objects. These tests pin the exact JSON shapes, because a rename
    //! regression would break every client.

    use super::*;

    #[test]
    fn test_create_room_request_accepts_contract_shape() {
        let json = r#"{
            "name": "Lab 3",
            "description": "Robotics laboratory",
            "category": "LABORATORY",
            "dimensions": {
                "initialPosition": { "x": 2, "y": 2 },
                "finalPosition": { "x": 6, "y": 5 }
            },
            "doorPosition": { "x": 4, "y": 2 },
            "doorOrientation": "NORTH",
            "floorId": "8e7f9c1a-5b42-4f7e-9f6d-2f3f0a1b2c3d"
        }"#;
        let request: CreateRoomRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Lab 3");
        assert_eq!(request.dimensions.final_position.y, 5);
        assert!(request.domain_id.is_none());

        let new_room = request.into_new_room();
        assert_eq!(new_room.door_x, 4);
        assert_eq!(new_room.door_orientation, "NORTH");
    }

    #[test]
    fn test_fractional_coordinates_fail_deserialization() {
        let json = r#"{ "x": 2.5, "y": 1 }"#;
        let result: Result<PositionDto, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_field_fails_deserialization() {
        let json = r#"{ "name": "Lab 3" }"#;
        let result: Result<CreateRoomRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_room_response_uses_camel_case_keys() {
        let response = RoomResponse {
            id: "r1".into(),
            name: "Lab".into(),
            description: "d".into(),
            category: "OFFICE".into(),
            dimensions: DimensionsDto {
                initial_position: PositionDto { x: 0, y: 0 },
                final_position: PositionDto { x: 2, y: 2 },
            },
            door_position: PositionDto { x: 1, y: 0 },
            door_orientation: "NORTH".into(),
            floor_id: "f1".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(json["doorOrientation"], "NORTH");
        assert_eq!(json["floorId"], "f1");
        assert_eq!(json["dimensions"]["initialPosition"]["x"], 0);
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse {
            code: "INVALID_INPUT".into(),
            message: "Room name must not be blank".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "INVALID_INPUT");
        assert_eq!(json["message"], "Room name must not be blank");
    }
}
