//! Room placement validation for Atrium.
//!
//! Deciding whether a room may be created on a floor takes three
//! cooperating pieces, composed by [`RoomFactory`]:
//!
//! - [`out_cell`] — the grid cell directly outside a door, in the
//!   direction the door faces. A door is usable only if something can
//!   stand on that cell.
//! - [`RoomAreaChecker`] — rejects candidate rectangles that collide
//!   with rooms, elevators, or passages already on the floor, and
//!   candidate doors that collide with existing doors' out-cells.
//! - [`DoorPositionChecker`] — the perimeter/orientation consistency
//!   check. A trait so deployments can swap the shipped
//!   [`GridDoorChecker`] for an external validator.
//!
//! All checks report through the domain's single failure taxonomy;
//! geometric conflicts are `InvalidInput`, not server faults.

mod area;
mod door;
mod factory;
mod outcell;

pub use area::RoomAreaChecker;
pub use door::{DoorPositionChecker, GridDoorChecker};
pub use factory::{NewRoom, RoomFactory};
pub use outcell::{OutCell, out_cell};
