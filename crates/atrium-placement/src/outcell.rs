//! Out-cell computation.
//!
//! The out-cell of a door is the single grid cell directly outside it,
//! one unit along the door's facing direction. A robot or person passing
//! through the door stands on that cell, so two rooms whose out-cells
//! collide (or a room footprint covering another door's out-cell) would
//! make a door unusable.

use atrium_domain::{DoorOrientation, Position};

/// A grid cell that may lie outside the floor.
///
/// Signed coordinates: a door on the floor's edge row projects its
/// out-cell to `-1` on that axis. Whether an off-grid out-cell is
/// acceptable is the door-position checker's call, not this type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutCell {
    pub x: i64,
    pub y: i64,
}

/// Returns the cell immediately outside a door.
///
/// Offsets by exactly one unit along the facing direction: north is
/// towards smaller `y`, south towards larger `y`, west towards smaller
/// `x`, east towards larger `x`.
///
/// The function is total: [`DoorOrientation`] cannot hold an invalid
/// orientation, so the unknown-orientation case is rejected earlier, at
/// parse time.
pub fn out_cell(door: Position, orientation: DoorOrientation) -> OutCell {
    let x = i64::from(door.x());
    let y = i64::from(door.y());
    match orientation {
        DoorOrientation::North => OutCell { x, y: y - 1 },
        DoorOrientation::South => OutCell { x, y: y + 1 },
        DoorOrientation::West => OutCell { x: x - 1, y },
        DoorOrientation::East => OutCell { x: x + 1, y },
    }
}
