//! Domain model for Atrium.
//!
//! This crate defines the typed core of the facility backend: the value
//! objects that validate themselves at construction time, the entities
//! built from them, and the repository contracts the storage layer
//! implements.
//!
//! # Key types
//!
//! - [`DomainError`] / [`DomainResult`] — the single failure taxonomy
//!   used everywhere
//! - [`Position`], [`RoomDimensions`], [`DoorOrientation`] — placement
//!   geometry
//! - [`RoomName`], [`RoomDescription`] and friends — validated text
//! - [`Room`], [`Floor`], [`Elevator`], [`Passage`], [`Robisep`] —
//!   entities
//! - [`RoomRepo`], [`FloorRepo`], ... — async storage contracts
//!
//! # Architecture
//!
//! The domain layer knows nothing about HTTP or storage engines. It sits
//! below everything else:
//!
//! ```text
//! HTTP (atrium-api) → services (atrium-service) → placement checks
//!     (atrium-placement) → domain (this crate) ← store (atrium-store)
//! ```

mod category;
mod config;
mod entities;
mod error;
mod geometry;
mod ids;
mod repository;
mod text;

pub use category::RoomCategory;
pub use config::ValidationConfig;
pub use entities::{Building, Elevator, Floor, Passage, Robisep, Room};
pub use error::{DomainError, DomainResult};
pub use geometry::{DoorOrientation, FloorBounds, Position, RoomDimensions};
pub use ids::{BuildingId, ElevatorId, FloorId, PassageId, RobisepId, RoomId};
pub use repository::{
    BuildingRepo, ElevatorRepo, FacilityStore, FloorRepo, PassageRepo,
    RobisepRepo, RoomRepo,
};
pub use text::{
    BuildingCode, BuildingDescription, BuildingName, FloorDescription,
    RobisepCode, RobisepDescription, RobisepNickname, RobisepSerial,
    RoomDescription, RoomName,
};
