//! Facility entities.
//!
//! Entities are plain data carriers built from already-validated value
//! objects. Construction happens in the services (and, for rooms, the
//! placement factory); nothing here re-validates. Fields are private
//! with accessors so an entity cannot drift from the state it was
//! created in.

use serde::{Deserialize, Serialize};

use crate::{
    BuildingCode, BuildingDescription, BuildingId, BuildingName,
    DomainError, DomainResult, DoorOrientation, ElevatorId, FloorBounds,
    FloorDescription, FloorId, PassageId, Position, RobisepCode,
    RobisepDescription, RobisepId, RobisepNickname, RobisepSerial,
    RoomCategory, RoomDescription, RoomDimensions, RoomId, RoomName,
};

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

/// A building on the campus. Floors reference their owning building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    id: BuildingId,
    code: BuildingCode,
    name: Option<BuildingName>,
    description: Option<BuildingDescription>,
}

impl Building {
    pub fn new(
        id: BuildingId,
        code: BuildingCode,
        name: Option<BuildingName>,
        description: Option<BuildingDescription>,
    ) -> Self {
        Self {
            id,
            code,
            name,
            description,
        }
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn code(&self) -> &BuildingCode {
        &self.code
    }

    pub fn name(&self) -> Option<&BuildingName> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&BuildingDescription> {
        self.description.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Floor
// ---------------------------------------------------------------------------

/// A bounded 2D grid hosting rooms, elevators, and passages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    id: FloorId,
    building_id: BuildingId,
    number: i32,
    description: Option<FloorDescription>,
    bounds: FloorBounds,
}

impl Floor {
    pub fn new(
        id: FloorId,
        building_id: BuildingId,
        number: i32,
        description: Option<FloorDescription>,
        bounds: FloorBounds,
    ) -> Self {
        Self {
            id,
            building_id,
            number,
            description,
            bounds,
        }
    }

    pub fn id(&self) -> FloorId {
        self.id
    }

    pub fn building_id(&self) -> BuildingId {
        self.building_id
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn description(&self) -> Option<&FloorDescription> {
        self.description.as_ref()
    }

    pub fn bounds(&self) -> FloorBounds {
        self.bounds
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A room placed on a floor.
///
/// Invariant: the dimensions and door passed the area-availability and
/// door-position checks at creation time. The entity does not
/// re-validate geometry afterwards; there is no mutation path that
/// could invalidate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: RoomName,
    description: RoomDescription,
    category: RoomCategory,
    dimensions: RoomDimensions,
    door_position: Position,
    door_orientation: DoorOrientation,
    floor_id: FloorId,
}

impl Room {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RoomId,
        name: RoomName,
        description: RoomDescription,
        category: RoomCategory,
        dimensions: RoomDimensions,
        door_position: Position,
        door_orientation: DoorOrientation,
        floor_id: FloorId,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            dimensions,
            door_position,
            door_orientation,
            floor_id,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    pub fn description(&self) -> &RoomDescription {
        &self.description
    }

    pub fn category(&self) -> RoomCategory {
        self.category
    }

    pub fn dimensions(&self) -> RoomDimensions {
        self.dimensions
    }

    pub fn door_position(&self) -> Position {
        self.door_position
    }

    pub fn door_orientation(&self) -> DoorOrientation {
        self.door_orientation
    }

    pub fn floor_id(&self) -> FloorId {
        self.floor_id
    }
}

// ---------------------------------------------------------------------------
// Elevator
// ---------------------------------------------------------------------------

/// An elevator shaft. The footprint rectangle is the same on every
/// floor the elevator serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elevator {
    id: ElevatorId,
    floors: Vec<FloorId>,
    area: RoomDimensions,
}

impl Elevator {
    pub fn new(id: ElevatorId, floors: Vec<FloorId>, area: RoomDimensions) -> Self {
        Self { id, floors, area }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn floors(&self) -> &[FloorId] {
        &self.floors
    }

    pub fn area(&self) -> RoomDimensions {
        self.area
    }

    /// Returns `true` if the elevator stops at the given floor.
    pub fn serves(&self, floor: &FloorId) -> bool {
        self.floors.contains(floor)
    }
}

// ---------------------------------------------------------------------------
// Passage
// ---------------------------------------------------------------------------

/// A passage connecting two floors, occupying one rectangle on each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    id: PassageId,
    from_floor: FloorId,
    to_floor: FloorId,
    from_area: RoomDimensions,
    to_area: RoomDimensions,
}

impl Passage {
    pub fn new(
        id: PassageId,
        from_floor: FloorId,
        to_floor: FloorId,
        from_area: RoomDimensions,
        to_area: RoomDimensions,
    ) -> Self {
        Self {
            id,
            from_floor,
            to_floor,
            from_area,
            to_area,
        }
    }

    pub fn id(&self) -> PassageId {
        self.id
    }

    pub fn from_floor(&self) -> FloorId {
        self.from_floor
    }

    pub fn to_floor(&self) -> FloorId {
        self.to_floor
    }

    pub fn from_area(&self) -> RoomDimensions {
        self.from_area
    }

    pub fn to_area(&self) -> RoomDimensions {
        self.to_area
    }

    /// The passage's footprint on the given floor, if it touches it.
    pub fn footprint_on(&self, floor: &FloorId) -> Option<RoomDimensions> {
        if self.from_floor == *floor {
            Some(self.from_area)
        } else if self.to_floor == *floor {
            Some(self.to_area)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Robisep
// ---------------------------------------------------------------------------

/// A managed robot assigned to a room.
///
/// Robiseps are created enabled and can be disabled once; disabling an
/// already-disabled robisep is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robisep {
    id: RobisepId,
    code: RobisepCode,
    nickname: RobisepNickname,
    serial_number: RobisepSerial,
    description: Option<RobisepDescription>,
    room_id: RoomId,
    enabled: bool,
}

impl Robisep {
    pub fn new(
        id: RobisepId,
        code: RobisepCode,
        nickname: RobisepNickname,
        serial_number: RobisepSerial,
        description: Option<RobisepDescription>,
        room_id: RoomId,
    ) -> Self {
        Self {
            id,
            code,
            nickname,
            serial_number,
            description,
            room_id,
            enabled: true,
        }
    }

    pub fn id(&self) -> RobisepId {
        self.id
    }

    pub fn code(&self) -> &RobisepCode {
        &self.code
    }

    pub fn nickname(&self) -> &RobisepNickname {
        &self.nickname
    }

    pub fn serial_number(&self) -> &RobisepSerial {
        &self.serial_number
    }

    pub fn description(&self) -> Option<&RobisepDescription> {
        self.description.as_ref()
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Takes the robisep out of service.
    pub fn disable(&mut self) -> DomainResult<()> {
        if !self.enabled {
            return Err(DomainError::invalid(format!(
                "robisep {} is already disabled",
                self.code
            )));
        }
        self.enabled = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationConfig;

    fn sample_robisep() -> Robisep {
        let config = ValidationConfig::default();
        Robisep::new(
            RobisepId::new(),
            RobisepCode::parse("RB01", &config).unwrap(),
            RobisepNickname::parse("Scout", &config).unwrap(),
            RobisepSerial::parse("SN100", &config).unwrap(),
            None,
            RoomId::new(),
        )
    }

    #[test]
    fn test_robisep_starts_enabled() {
        assert!(sample_robisep().is_enabled());
    }

    #[test]
    fn test_robisep_disable_once_then_reject() {
        let mut robisep = sample_robisep();
        robisep.disable().unwrap();
        assert!(!robisep.is_enabled());

        let err = robisep.disable().unwrap_err();
        assert!(err.to_string().contains("already disabled"));
    }

    #[test]
    fn test_passage_footprint_per_floor() {
        let from = FloorId::new();
        let to = FloorId::new();
        let area_a = RoomDimensions::try_new(
            Position::try_new(0, 0).unwrap(),
            Position::try_new(1, 1).unwrap(),
        )
        .unwrap();
        let area_b = RoomDimensions::try_new(
            Position::try_new(5, 5).unwrap(),
            Position::try_new(6, 6).unwrap(),
        )
        .unwrap();
        let passage = Passage::new(PassageId::new(), from, to, area_a, area_b);

        assert_eq!(passage.footprint_on(&from), Some(area_a));
        assert_eq!(passage.footprint_on(&to), Some(area_b));
        assert_eq!(passage.footprint_on(&FloorId::new()), None);
    }

    #[test]
    fn test_elevator_serves() {
        let f1 = FloorId::new();
        let f2 = FloorId::new();
        let area = RoomDimensions::try_new(
            Position::try_new(0, 0).unwrap(),
            Position::try_new(1, 1).unwrap(),
        )
        .unwrap();
        let elevator = Elevator::new(ElevatorId::new(), vec![f1, f2], area);
        assert!(elevator.serves(&f1));
        assert!(!elevator.serves(&FloorId::new()));
    }
}
