//! Room creation and listing.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use atrium_domain::{
    DomainError, DomainResult, FacilityStore, FloorId, Room, RoomRepo,
    ValidationConfig,
};
use atrium_placement::{DoorPositionChecker, NewRoom, RoomFactory};

/// Creates and lists rooms.
///
/// The area-availability check reads live store state, so two
/// concurrent creations on the same floor could both pass their checks
/// and then both save. The service closes that gap by serializing room
/// creation per floor: the factory runs and the room is saved under a
/// lock keyed by the floor id. Creations on different floors do not
/// contend.
#[derive(Clone)]
pub struct RoomService<S, D> {
    store: S,
    factory: RoomFactory<S, D>,
    floor_locks: Arc<Mutex<HashMap<FloorId, Arc<Mutex<()>>>>>,
}

impl<S, D> RoomService<S, D>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    pub fn new(store: S, door_checker: D, config: ValidationConfig) -> Self {
        Self {
            factory: RoomFactory::new(store.clone(), door_checker, config),
            store,
            floor_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Validates and persists a new room.
    ///
    /// Uniqueness rules on top of the factory's validation: the room
    /// name is unique across the whole system, and a caller-supplied id
    /// must not collide with an existing room.
    pub async fn create_room(&self, input: NewRoom) -> DomainResult<Room> {
        let floor_id = FloorId::parse(&input.floor_id)?;
        let floor_lock = {
            let mut locks = self.floor_locks.lock().await;
            Arc::clone(locks.entry(floor_id).or_default())
        };
        let _creation_guard = floor_lock.lock().await;

        let room = self.factory.create_room(input).await?;

        if RoomRepo::find_by_name(&self.store, room.name())
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists("room", "name"));
        }
        if RoomRepo::find_by_id(&self.store, &room.id())
            .await?
            .is_some()
        {
            return Err(DomainError::already_exists("room", "id"));
        }

        RoomRepo::save(&self.store, &room).await?;
        tracing::info!(
            room = %room.id(),
            name = %room.name(),
            floor = %room.floor_id(),
            "room created"
        );
        Ok(room)
    }

    /// Lists all rooms, or only those on one floor.
    pub async fn list_rooms(&self, floor: Option<FloorId>) -> DomainResult<Vec<Room>> {
        match floor {
            Some(floor) => self.store.find_by_floor(&floor).await,
            None => RoomRepo::find_all(&self.store).await,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
