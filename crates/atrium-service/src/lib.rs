//! Application services for Atrium.
//!
//! Each service owns the orchestration for one entity family: it runs
//! the domain validation, enforces the uniqueness rules a document
//! store cannot express, and persists the result. Services are the only
//! writers; everything below them is either pure validation
//! (`atrium-placement`) or storage (`atrium-store`).
//!
//! # Key types
//!
//! - [`RoomService`] — the full placement pipeline plus the per-floor
//!   creation lock
//! - [`BuildingService`], [`FloorService`] — facility structure
//! - [`TransitService`] — elevators and passages
//! - [`RobisepService`] — the robot fleet

mod facilities;
mod robiseps;
mod rooms;
mod transit;

pub use facilities::{BuildingService, FloorService, NewBuilding, NewFloor};
pub use robiseps::{NewRobisep, RobisepService};
pub use rooms::RoomService;
pub use transit::{NewElevator, NewPassage, TransitService};
