//! Request handlers, one module per entity family.

mod buildings;
mod floors;
mod health;
mod robiseps;
mod rooms;
mod transit;

pub use buildings::{create_building, list_buildings};
pub use floors::{ListFloorsQuery, create_floor, list_floors};
pub use health::health_check;
pub use robiseps::{create_robisep, disable_robisep, list_robiseps};
pub use rooms::{ListRoomsQuery, create_room, list_rooms};
pub use transit::{
    create_elevator, create_passage, list_elevators, list_passages,
};
