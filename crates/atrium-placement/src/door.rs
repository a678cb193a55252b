//! Door position validation.
//!
//! Checks that a door sits where its orientation says it should: on the
//! matching perimeter edge of the room, opening onto a cell that exists
//! on the floor. The check is behind a trait so deployments can replace
//! the shipped grid rules with an external validator without touching
//! the factory.

use std::future::Future;

use atrium_domain::{
    DomainError, DomainResult, DoorOrientation, Floor, Position,
    RoomDimensions,
};

use crate::outcell::out_cell;

/// Validates a door placement against the floor hosting the room.
///
/// `Send + Sync + 'static` so implementations can be shared across
/// request tasks for the lifetime of the server.
pub trait DoorPositionChecker: Send + Sync + 'static {
    /// Returns `Ok(())` if the door placement is consistent, or an
    /// `InvalidInput` failure describing the first rule broken.
    fn is_position_valid(
        &self,
        dimensions: &RoomDimensions,
        door: Position,
        orientation: DoorOrientation,
        floor: &Floor,
    ) -> impl Future<Output = DomainResult<()>> + Send;
}

/// The shipped door checker: pure grid geometry.
///
/// Rules, in order:
/// 1. the room rectangle must lie entirely within the floor bounds;
/// 2. the door must sit on the room's perimeter edge matching its
///    orientation (a north door on the north edge, and so on);
/// 3. the door's out-cell must be a cell of the floor, so the door
///    opens somewhere a robot can stand.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridDoorChecker;

impl DoorPositionChecker for GridDoorChecker {
    async fn is_position_valid(
        &self,
        dimensions: &RoomDimensions,
        door: Position,
        orientation: DoorOrientation,
        floor: &Floor,
    ) -> DomainResult<()> {
        let bounds = floor.bounds();
        if !bounds.contains_area(dimensions) {
            return Err(DomainError::invalid(format!(
                "The room {dimensions} does not fit within the floor bounds {bounds}."
            )));
        }

        let on_matching_edge = dimensions
            .contains_cell(i64::from(door.x()), i64::from(door.y()))
            && match orientation {
                DoorOrientation::North => door.y() == dimensions.initial().y(),
                DoorOrientation::South => {
                    door.y() == dimensions.final_position().y()
                }
                DoorOrientation::West => door.x() == dimensions.initial().x(),
                DoorOrientation::East => {
                    door.x() == dimensions.final_position().x()
                }
            };
        if !on_matching_edge {
            return Err(DomainError::invalid(format!(
                "The door at {door} must sit on the room edge facing {orientation}."
            )));
        }

        let outside = out_cell(door, orientation);
        if !bounds.contains_cell(outside.x, outside.y) {
            return Err(DomainError::invalid(
                "The door must open onto a cell inside the floor.",
            ));
        }

        Ok(())
    }
}
