//! Repository contracts implemented by the storage layer.
//!
//! Every method returns a [`DomainResult`]; storage faults surface as
//! [`DomainError::Storage`](crate::DomainError::Storage). The traits
//! declare futures explicitly with a `Send` bound so callers generic
//! over a store can still spawn the work onto the runtime.
//!
//! The area queries (`exists_in_area`) use the symmetric axis-aligned
//! intersection test with inclusive cell bounds: any shared cell is a
//! conflict.

use std::future::Future;

use crate::{
    Building, BuildingCode, BuildingId, DomainResult, Elevator, ElevatorId,
    Floor, FloorId, Passage, PassageId, Robisep, RobisepCode, RobisepId,
    RobisepSerial, Room, RoomDimensions, RoomId, RoomName,
};

/// Storage contract for rooms.
pub trait RoomRepo: Send + Sync {
    /// Returns `true` if any room on the floor overlaps the area.
    fn exists_in_area(
        &self,
        floor: &FloorId,
        area: &RoomDimensions,
    ) -> impl Future<Output = DomainResult<bool>> + Send;

    fn find_by_floor(
        &self,
        floor: &FloorId,
    ) -> impl Future<Output = DomainResult<Vec<Room>>> + Send;

    fn find_by_name(
        &self,
        name: &RoomName,
    ) -> impl Future<Output = DomainResult<Option<Room>>> + Send;

    fn find_by_id(
        &self,
        id: &RoomId,
    ) -> impl Future<Output = DomainResult<Option<Room>>> + Send;

    fn find_all(&self) -> impl Future<Output = DomainResult<Vec<Room>>> + Send;

    fn save(&self, room: &Room) -> impl Future<Output = DomainResult<()>> + Send;
}

/// Storage contract for elevators.
pub trait ElevatorRepo: Send + Sync {
    /// Returns `true` if any elevator serving the floor overlaps the area.
    fn exists_in_area(
        &self,
        floor: &FloorId,
        area: &RoomDimensions,
    ) -> impl Future<Output = DomainResult<bool>> + Send;

    fn find_by_id(
        &self,
        id: &ElevatorId,
    ) -> impl Future<Output = DomainResult<Option<Elevator>>> + Send;

    fn find_all(&self) -> impl Future<Output = DomainResult<Vec<Elevator>>> + Send;

    fn save(&self, elevator: &Elevator) -> impl Future<Output = DomainResult<()>> + Send;
}

/// Storage contract for passages.
pub trait PassageRepo: Send + Sync {
    /// Returns `true` if any passage footprint on the floor overlaps
    /// the area.
    fn exists_in_area(
        &self,
        floor: &FloorId,
        area: &RoomDimensions,
    ) -> impl Future<Output = DomainResult<bool>> + Send;

    fn find_by_id(
        &self,
        id: &PassageId,
    ) -> impl Future<Output = DomainResult<Option<Passage>>> + Send;

    fn find_all(&self) -> impl Future<Output = DomainResult<Vec<Passage>>> + Send;

    fn save(&self, passage: &Passage) -> impl Future<Output = DomainResult<()>> + Send;
}

/// Storage contract for floors.
pub trait FloorRepo: Send + Sync {
    fn find_by_id(
        &self,
        id: &FloorId,
    ) -> impl Future<Output = DomainResult<Option<Floor>>> + Send;

    fn find_by_building(
        &self,
        building: &BuildingId,
    ) -> impl Future<Output = DomainResult<Vec<Floor>>> + Send;

    fn find_all(&self) -> impl Future<Output = DomainResult<Vec<Floor>>> + Send;

    fn save(&self, floor: &Floor) -> impl Future<Output = DomainResult<()>> + Send;
}

/// Storage contract for buildings.
pub trait BuildingRepo: Send + Sync {
    fn find_by_id(
        &self,
        id: &BuildingId,
    ) -> impl Future<Output = DomainResult<Option<Building>>> + Send;

    fn find_by_code(
        &self,
        code: &BuildingCode,
    ) -> impl Future<Output = DomainResult<Option<Building>>> + Send;

    fn find_all(&self) -> impl Future<Output = DomainResult<Vec<Building>>> + Send;

    fn save(&self, building: &Building) -> impl Future<Output = DomainResult<()>> + Send;
}

/// Storage contract for robiseps.
pub trait RobisepRepo: Send + Sync {
    fn find_by_id(
        &self,
        id: &RobisepId,
    ) -> impl Future<Output = DomainResult<Option<Robisep>>> + Send;

    fn find_by_code(
        &self,
        code: &RobisepCode,
    ) -> impl Future<Output = DomainResult<Option<Robisep>>> + Send;

    fn find_by_serial(
        &self,
        serial: &RobisepSerial,
    ) -> impl Future<Output = DomainResult<Option<Robisep>>> + Send;

    fn find_all(&self) -> impl Future<Output = DomainResult<Vec<Robisep>>> + Send;

    fn save(&self, robisep: &Robisep) -> impl Future<Output = DomainResult<()>> + Send;
}

/// Everything a full facility store provides.
///
/// Services and HTTP state are generic over one store type; this
/// supertrait (with a blanket impl) keeps their bounds readable.
pub trait FacilityStore:
    RoomRepo
    + ElevatorRepo
    + PassageRepo
    + FloorRepo
    + BuildingRepo
    + RobisepRepo
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> FacilityStore for T where
    T: RoomRepo
        + ElevatorRepo
        + PassageRepo
        + FloorRepo
        + BuildingRepo
        + RobisepRepo
        + Clone
        + Send
        + Sync
        + 'static
{
}
