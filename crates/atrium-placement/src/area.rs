//! Area availability checking.
//!
//! Decides whether a candidate room (rectangle plus door) can legally
//! be placed on a floor, given everything already there.

use atrium_domain::{
    DomainError, DomainResult, DoorOrientation, ElevatorRepo, FloorId,
    PassageRepo, Position, RoomDimensions, RoomRepo,
};

use crate::outcell::out_cell;

/// Checks a candidate placement against the rooms, elevators, and
/// passages already persisted on the same floor.
///
/// The checks short-circuit in a fixed order so the first conflict wins
/// and error messages stay deterministic: room overlap, elevator
/// overlap, passage overlap, then door out-cell conflicts. All queries
/// are read-only; the checker never mutates the store, so calling it
/// twice against unchanged data yields the same answer.
#[derive(Clone)]
pub struct RoomAreaChecker<S> {
    store: S,
}

impl<S> RoomAreaChecker<S>
where
    S: RoomRepo + ElevatorRepo + PassageRepo,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns `Ok(())` if the candidate may be placed, or an
    /// `InvalidInput` failure naming the first conflict found.
    ///
    /// Geometric conflicts depend on persisted state but are still
    /// client errors: the request asked for an unavailable placement.
    pub async fn check_area_available(
        &self,
        dimensions: RoomDimensions,
        door: Position,
        orientation: DoorOrientation,
        floor: &FloorId,
    ) -> DomainResult<()> {
        if RoomRepo::exists_in_area(&self.store, floor, &dimensions).await? {
            tracing::debug!(%floor, area = %dimensions, "candidate overlaps a room");
            return Err(DomainError::invalid(
                "A room already exists in the given area.",
            ));
        }

        if ElevatorRepo::exists_in_area(&self.store, floor, &dimensions).await? {
            tracing::debug!(%floor, area = %dimensions, "candidate overlaps an elevator");
            return Err(DomainError::invalid(
                "An elevator already exists in the given area.",
            ));
        }

        if PassageRepo::exists_in_area(&self.store, floor, &dimensions).await? {
            tracing::debug!(%floor, area = %dimensions, "candidate overlaps a passage");
            return Err(DomainError::invalid(
                "A passage already exists in the given area.",
            ));
        }

        let candidate_out = out_cell(door, orientation);

        // Existing doors must stay usable: their out-cells may neither
        // fall inside the candidate footprint nor coincide with the
        // candidate's own out-cell.
        for existing in self.store.find_by_floor(floor).await? {
            let existing_out =
                out_cell(existing.door_position(), existing.door_orientation());
            if dimensions.contains_cell(existing_out.x, existing_out.y)
                || existing_out == candidate_out
            {
                tracing::debug!(
                    %floor,
                    blocked_room = %existing.id(),
                    "candidate blocks an existing door"
                );
                return Err(DomainError::invalid(
                    "The room is blocking another's door.",
                ));
            }
        }

        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
