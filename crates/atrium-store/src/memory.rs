//! The in-memory store.
//!
//! One `HashMap` per collection, keyed by entity id, each behind its
//! own `tokio::sync::RwLock`. Collections are wrapped in `Arc` so the
//! store clones cheaply into every request task; cloning shares the
//! data, it does not copy it.
//!
//! `save` is an upsert, matching document-store semantics: saving an
//! entity with an existing id replaces the stored document. Uniqueness
//! rules beyond the id (room names, robisep codes) belong to the
//! services.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use atrium_domain::{
    Building, BuildingCode, BuildingId, BuildingRepo, DomainResult, Elevator,
    ElevatorId, ElevatorRepo, Floor, FloorId, FloorRepo, Passage, PassageId,
    PassageRepo, Robisep, RobisepCode, RobisepId, RobisepRepo,
    RobisepSerial, Room, RoomDimensions, RoomId, RoomName, RoomRepo,
};

type Collection<K, V> = Arc<RwLock<HashMap<K, V>>>;

/// An in-memory implementation of every Atrium repository.
#[derive(Clone, Default)]
pub struct MemoryStore {
    buildings: Collection<BuildingId, Building>,
    floors: Collection<FloorId, Floor>,
    rooms: Collection<RoomId, Room>,
    elevators: Collection<ElevatorId, Elevator>,
    passages: Collection<PassageId, Passage>,
    robiseps: Collection<RobisepId, Robisep>,
}

impl MemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomRepo for MemoryStore {
    async fn exists_in_area(
        &self,
        floor: &FloorId,
        area: &RoomDimensions,
    ) -> DomainResult<bool> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .values()
            .any(|r| r.floor_id() == *floor && r.dimensions().intersects(area)))
    }

    async fn find_by_floor(&self, floor: &FloorId) -> DomainResult<Vec<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .values()
            .filter(|r| r.floor_id() == *floor)
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &RoomName) -> DomainResult<Option<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms.values().find(|r| r.name() == name).cloned())
    }

    async fn find_by_id(&self, id: &RoomId) -> DomainResult<Option<Room>> {
        Ok(self.rooms.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        Ok(self.rooms.read().await.values().cloned().collect())
    }

    async fn save(&self, room: &Room) -> DomainResult<()> {
        self.rooms.write().await.insert(room.id(), room.clone());
        tracing::debug!(room = %room.id(), "room document saved");
        Ok(())
    }
}

impl ElevatorRepo for MemoryStore {
    async fn exists_in_area(
        &self,
        floor: &FloorId,
        area: &RoomDimensions,
    ) -> DomainResult<bool> {
        let elevators = self.elevators.read().await;
        Ok(elevators
            .values()
            .any(|e| e.serves(floor) && e.area().intersects(area)))
    }

    async fn find_by_id(&self, id: &ElevatorId) -> DomainResult<Option<Elevator>> {
        Ok(self.elevators.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Elevator>> {
        Ok(self.elevators.read().await.values().cloned().collect())
    }

    async fn save(&self, elevator: &Elevator) -> DomainResult<()> {
        self.elevators
            .write()
            .await
            .insert(elevator.id(), elevator.clone());
        tracing::debug!(elevator = %elevator.id(), "elevator document saved");
        Ok(())
    }
}

impl PassageRepo for MemoryStore {
    async fn exists_in_area(
        &self,
        floor: &FloorId,
        area: &RoomDimensions,
    ) -> DomainResult<bool> {
        let passages = self.passages.read().await;
        Ok(passages.values().any(|p| {
            p.footprint_on(floor)
                .is_some_and(|footprint| footprint.intersects(area))
        }))
    }

    async fn find_by_id(&self, id: &PassageId) -> DomainResult<Option<Passage>> {
        Ok(self.passages.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Passage>> {
        Ok(self.passages.read().await.values().cloned().collect())
    }

    async fn save(&self, passage: &Passage) -> DomainResult<()> {
        self.passages
            .write()
            .await
            .insert(passage.id(), passage.clone());
        tracing::debug!(passage = %passage.id(), "passage document saved");
        Ok(())
    }
}

impl FloorRepo for MemoryStore {
    async fn find_by_id(&self, id: &FloorId) -> DomainResult<Option<Floor>> {
        Ok(self.floors.read().await.get(id).cloned())
    }

    async fn find_by_building(
        &self,
        building: &BuildingId,
    ) -> DomainResult<Vec<Floor>> {
        let floors = self.floors.read().await;
        Ok(floors
            .values()
            .filter(|f| f.building_id() == *building)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Floor>> {
        Ok(self.floors.read().await.values().cloned().collect())
    }

    async fn save(&self, floor: &Floor) -> DomainResult<()> {
        self.floors.write().await.insert(floor.id(), floor.clone());
        tracing::debug!(floor = %floor.id(), "floor document saved");
        Ok(())
    }
}

impl BuildingRepo for MemoryStore {
    async fn find_by_id(&self, id: &BuildingId) -> DomainResult<Option<Building>> {
        Ok(self.buildings.read().await.get(id).cloned())
    }

    async fn find_by_code(
        &self,
        code: &BuildingCode,
    ) -> DomainResult<Option<Building>> {
        let buildings = self.buildings.read().await;
        Ok(buildings.values().find(|b| b.code() == code).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Building>> {
        Ok(self.buildings.read().await.values().cloned().collect())
    }

    async fn save(&self, building: &Building) -> DomainResult<()> {
        self.buildings
            .write()
            .await
            .insert(building.id(), building.clone());
        tracing::debug!(building = %building.id(), "building document saved");
        Ok(())
    }
}

impl RobisepRepo for MemoryStore {
    async fn find_by_id(&self, id: &RobisepId) -> DomainResult<Option<Robisep>> {
        Ok(self.robiseps.read().await.get(id).cloned())
    }

    async fn find_by_code(
        &self,
        code: &RobisepCode,
    ) -> DomainResult<Option<Robisep>> {
        let robiseps = self.robiseps.read().await;
        Ok(robiseps.values().find(|r| r.code() == code).cloned())
    }

    async fn find_by_serial(
        &self,
        serial: &RobisepSerial,
    ) -> DomainResult<Option<Robisep>> {
        let robiseps = self.robiseps.read().await;
        Ok(robiseps
            .values()
            .find(|r| r.serial_number() == serial)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Robisep>> {
        Ok(self.robiseps.read().await.values().cloned().collect())
    }

    async fn save(&self, robisep: &Robisep) -> DomainResult<()> {
        self.robiseps
            .write()
            .await
            .insert(robisep.id(), robisep.clone());
        tracing::debug!(robisep = %robisep.id(), "robisep document saved");
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_domain::{
        DoorOrientation, Position, RoomCategory, RoomDescription,
        ValidationConfig,
    };

    fn pos(x: i64, y: i64) -> Position {
        Position::try_new(x, y).unwrap()
    }

    fn rect(x1: i64, y1: i64, x2: i64, y2: i64) -> RoomDimensions {
        RoomDimensions::try_new(pos(x1, y1), pos(x2, y2)).unwrap()
    }

    fn room_on(floor: FloorId, area: RoomDimensions, name: &str) -> Room {
        let config = ValidationConfig::default();
        Room::new(
            RoomId::new(),
            RoomName::parse(name, &config).unwrap(),
            RoomDescription::parse("a room", &config).unwrap(),
            RoomCategory::Office,
            area,
            area.initial(),
            DoorOrientation::North,
            floor,
        )
    }

    // =====================================================================
    // Room area queries
    // =====================================================================

    #[tokio::test]
    async fn test_exists_in_area_detects_every_overlap_shape() {
        let store = MemoryStore::new();
        let floor = FloorId::new();
        RoomRepo::save(&store, &room_on(floor, rect(2, 2, 6, 6), "Anchor"))
            .await
            .unwrap();

        // Partial overlap.
        assert!(RoomRepo::exists_in_area(&store, &floor, &rect(5, 5, 9, 9))
            .await
            .unwrap());
        // Candidate contains the stored room.
        assert!(RoomRepo::exists_in_area(&store, &floor, &rect(0, 0, 9, 9))
            .await
            .unwrap());
        // Stored room contains the candidate.
        assert!(RoomRepo::exists_in_area(&store, &floor, &rect(3, 3, 4, 4))
            .await
            .unwrap());
        // Edge cells shared: inclusive bounds make this a conflict.
        assert!(RoomRepo::exists_in_area(&store, &floor, &rect(6, 2, 9, 6))
            .await
            .unwrap());
        // Cross shape with no corner containment.
        assert!(RoomRepo::exists_in_area(&store, &floor, &rect(0, 3, 9, 4))
            .await
            .unwrap());
        // Disjoint.
        assert!(!RoomRepo::exists_in_area(&store, &floor, &rect(7, 7, 9, 9))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_exists_in_area_scoped_to_floor() {
        let store = MemoryStore::new();
        let floor = FloorId::new();
        RoomRepo::save(&store, &room_on(floor, rect(0, 0, 5, 5), "Here"))
            .await
            .unwrap();

        let other = FloorId::new();
        assert!(!RoomRepo::exists_in_area(&store, &other, &rect(0, 0, 5, 5))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_find_by_name_and_floor() {
        let store = MemoryStore::new();
        let floor_a = FloorId::new();
        let floor_b = FloorId::new();
        let lab = room_on(floor_a, rect(0, 0, 3, 3), "Lab");
        RoomRepo::save(&store, &lab).await.unwrap();
        RoomRepo::save(&store, &room_on(floor_b, rect(0, 0, 3, 3), "Office"))
            .await
            .unwrap();

        let found = store.find_by_name(lab.name()).await.unwrap();
        assert_eq!(found.as_ref().map(Room::id), Some(lab.id()));

        let on_a = store.find_by_floor(&floor_a).await.unwrap();
        assert_eq!(on_a.len(), 1);
        assert_eq!(on_a[0].id(), lab.id());
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let store = MemoryStore::new();
        let floor = FloorId::new();
        let config = ValidationConfig::default();
        let room = room_on(floor, rect(0, 0, 3, 3), "Before");
        RoomRepo::save(&store, &room).await.unwrap();

        let renamed = Room::new(
            room.id(),
            RoomName::parse("After", &config).unwrap(),
            room.description().clone(),
            room.category(),
            room.dimensions(),
            room.door_position(),
            room.door_orientation(),
            room.floor_id(),
        );
        RoomRepo::save(&store, &renamed).await.unwrap();

        let all = RoomRepo::find_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name().as_str(), "After");
    }

    // =====================================================================
    // Elevator and passage area queries
    // =====================================================================

    #[tokio::test]
    async fn test_elevator_area_only_on_served_floors() {
        let store = MemoryStore::new();
        let served = FloorId::new();
        let unserved = FloorId::new();
        let elevator =
            Elevator::new(ElevatorId::new(), vec![served], rect(4, 4, 5, 5));
        ElevatorRepo::save(&store, &elevator).await.unwrap();

        assert!(
            ElevatorRepo::exists_in_area(&store, &served, &rect(3, 3, 6, 6))
                .await
                .unwrap()
        );
        assert!(
            !ElevatorRepo::exists_in_area(&store, &unserved, &rect(3, 3, 6, 6))
                .await
                .unwrap()
        );
        assert!(
            !ElevatorRepo::exists_in_area(&store, &served, &rect(6, 6, 8, 8))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_passage_area_uses_the_matching_side() {
        let store = MemoryStore::new();
        let lower = FloorId::new();
        let upper = FloorId::new();
        let passage = Passage::new(
            PassageId::new(),
            lower,
            upper,
            rect(0, 0, 1, 1),
            rect(8, 8, 9, 9),
        );
        PassageRepo::save(&store, &passage).await.unwrap();

        // The lower-floor footprint conflicts only on the lower floor.
        assert!(
            PassageRepo::exists_in_area(&store, &lower, &rect(0, 0, 2, 2))
                .await
                .unwrap()
        );
        assert!(
            !PassageRepo::exists_in_area(&store, &upper, &rect(0, 0, 2, 2))
                .await
                .unwrap()
        );
        assert!(
            PassageRepo::exists_in_area(&store, &upper, &rect(7, 7, 9, 9))
                .await
                .unwrap()
        );
    }

    // =====================================================================
    // Lookup repos
    // =====================================================================

    #[tokio::test]
    async fn test_building_lookup_by_code() {
        let store = MemoryStore::new();
        let config = ValidationConfig::default();
        let code = BuildingCode::parse("B2", &config).unwrap();
        let building =
            Building::new(BuildingId::new(), code.clone(), None, None);
        BuildingRepo::save(&store, &building).await.unwrap();

        let found = BuildingRepo::find_by_code(&store, &code).await.unwrap();
        assert_eq!(found.map(|b| b.id()), Some(building.id()));

        let missing = BuildingCode::parse("ZZ", &config).unwrap();
        assert!(BuildingRepo::find_by_code(&store, &missing)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_floor_lookup_by_building() {
        let store = MemoryStore::new();
        let building = BuildingId::new();
        let bounds = atrium_domain::FloorBounds::try_new(10, 10).unwrap();
        for number in 0..3 {
            let floor =
                Floor::new(FloorId::new(), building, number, None, bounds);
            FloorRepo::save(&store, &floor).await.unwrap();
        }
        let other =
            Floor::new(FloorId::new(), BuildingId::new(), 0, None, bounds);
        FloorRepo::save(&store, &other).await.unwrap();

        let floors = store.find_by_building(&building).await.unwrap();
        assert_eq!(floors.len(), 3);
    }
}
