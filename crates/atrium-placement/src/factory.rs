//! The room factory: raw payload in, validated [`Room`] out.

use atrium_domain::{
    DomainError, DomainResult, DoorOrientation, ElevatorRepo, FloorId,
    FloorRepo, PassageRepo, Position, Room, RoomCategory, RoomDescription,
    RoomDimensions, RoomId, RoomName, RoomRepo, ValidationConfig,
};

use crate::area::RoomAreaChecker;
use crate::door::DoorPositionChecker;

/// The raw creation payload, exactly as the client sent it.
///
/// Everything is a primitive; the factory owns all parsing and
/// validation so callers cannot hand it a half-checked room.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub description: String,
    pub category: String,
    pub initial_x: i64,
    pub initial_y: i64,
    pub final_x: i64,
    pub final_y: i64,
    pub door_x: i64,
    pub door_y: i64,
    pub door_orientation: String,
    pub floor_id: String,
    /// Caller-supplied identity; generated when absent.
    pub domain_id: Option<String>,
}

/// Builds validated rooms.
///
/// Validation runs in a fixed order and stops at the first failure:
/// resolve the floor, parse each value object, run the area
/// availability check, then the door position check. Only a payload
/// that survives the whole pipeline becomes a [`Room`].
#[derive(Clone)]
pub struct RoomFactory<S, D> {
    store: S,
    area_checker: RoomAreaChecker<S>,
    door_checker: D,
    config: ValidationConfig,
}

impl<S, D> RoomFactory<S, D>
where
    S: RoomRepo + ElevatorRepo + PassageRepo + FloorRepo + Clone,
    D: DoorPositionChecker,
{
    pub fn new(store: S, door_checker: D, config: ValidationConfig) -> Self {
        Self {
            area_checker: RoomAreaChecker::new(store.clone()),
            store,
            door_checker,
            config,
        }
    }

    /// Turns a raw payload into a valid room, or reports the first
    /// failure encountered. The factory does not persist anything;
    /// saving is the calling service's job.
    pub async fn create_room(&self, input: NewRoom) -> DomainResult<Room> {
        let floor_id = FloorId::parse(&input.floor_id)?;
        let floor = FloorRepo::find_by_id(&self.store, &floor_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found("floor", input.floor_id.clone())
            })?;

        let name = RoomName::parse(&input.name, &self.config)?;
        let description =
            RoomDescription::parse(&input.description, &self.config)?;
        let category = RoomCategory::parse(&input.category)?;

        let initial = Position::try_new(input.initial_x, input.initial_y)?;
        let final_position = Position::try_new(input.final_x, input.final_y)?;
        let dimensions = RoomDimensions::try_new(initial, final_position)?;

        let door = Position::try_new(input.door_x, input.door_y)?;
        let orientation = DoorOrientation::parse(&input.door_orientation)?;

        self.area_checker
            .check_area_available(dimensions, door, orientation, &floor_id)
            .await?;
        self.door_checker
            .is_position_valid(&dimensions, door, orientation, &floor)
            .await?;

        let id = match &input.domain_id {
            Some(raw) => RoomId::parse(raw)?,
            None => RoomId::new(),
        };

        Ok(Room::new(
            id,
            name,
            description,
            category,
            dimensions,
            door,
            orientation,
            floor_id,
        ))
    }
}

// =========================================================================
// Tests
// =========================================================================
