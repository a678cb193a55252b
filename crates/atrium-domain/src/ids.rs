//! Identifier newtypes.
//!
//! Each entity gets its own UUID-backed id type so a `FloorId` can never
//! be passed where a `RoomId` is expected. `#[serde(transparent)]` keeps
//! the wire representation a plain UUID string.
//!
//! Clients may supply their own id on creation (`domain_id` in the HTTP
//! contract); otherwise the service generates one with [`new`](RoomId::new).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DomainError, DomainResult};

/// Identifier of a [`Building`](crate::Building).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(Uuid);

impl BuildingId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a caller-supplied id string.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw, "building id").map(Self)
    }
}

impl Default for BuildingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`Floor`](crate::Floor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(Uuid);

impl FloorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw, "floor id").map(Self)
    }
}

impl Default for FloorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`Room`](crate::Room).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(Uuid);

impl RoomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw, "room id").map(Self)
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an [`Elevator`](crate::Elevator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElevatorId(Uuid);

impl ElevatorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw, "elevator id").map(Self)
    }
}

impl Default for ElevatorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`Passage`](crate::Passage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassageId(Uuid);

impl PassageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw, "passage id").map(Self)
    }
}

impl Default for PassageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`Robisep`](crate::Robisep).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobisepId(Uuid);

impl RobisepId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        parse_uuid(raw, "robisep id").map(Self)
    }
}

impl Default for RobisepId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RobisepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_uuid(raw: &str, what: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| DomainError::invalid(format!("'{raw}' is not a valid {what}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_uuid_strings() {
        let id = RoomId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Transparent serde: just the quoted UUID, no wrapper object.
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = FloorId::new();
        let parsed = FloorId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id = BuildingId::new();
        let parsed = BuildingId::parse(&format!("  {id} ")).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = RobisepId::parse("not-a-uuid").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("robisep id"));
    }
}
