//! Shared application state.

use atrium_domain::{FacilityStore, ValidationConfig};
use atrium_placement::DoorPositionChecker;
use atrium_service::{
    BuildingService, FloorService, RobisepService, RoomService,
    TransitService,
};

/// Everything a request handler needs, cloned into each request task.
///
/// Generic over the store and the door checker so the router serves the
/// in-memory store in tests and whatever a deployment wires in.
#[derive(Clone)]
pub struct AppState<S, D> {
    pub buildings: BuildingService<S>,
    pub floors: FloorService<S>,
    pub rooms: RoomService<S, D>,
    pub transit: TransitService<S>,
    pub robiseps: RobisepService<S>,
}

impl<S, D> AppState<S, D>
where
    S: FacilityStore,
    D: DoorPositionChecker + Clone,
{
    /// Wires every service onto one shared store.
    pub fn new(store: S, door_checker: D, config: ValidationConfig) -> Self {
        Self {
            buildings: BuildingService::new(store.clone(), config.clone()),
            floors: FloorService::new(store.clone(), config.clone()),
            rooms: RoomService::new(store.clone(), door_checker, config.clone()),
            transit: TransitService::new(store.clone()),
            robiseps: RobisepService::new(store, config),
        }
    }
}
