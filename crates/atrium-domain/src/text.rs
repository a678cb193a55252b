//! Text value objects.
//!
//! Names, descriptions, and code variants all share one validation
//! sequence, applied in order with the first failure winning:
//!
//! 1. length within `[1, MAX]` characters (MAX per field, from
//!    [`ValidationConfig`])
//! 2. not whitespace-only
//! 3. alphanumerics and spaces only
//! 4. stored trimmed
//!
//! Each type wraps the validated string and is immutable afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult, ValidationConfig};

/// Runs the shared validation sequence and returns the trimmed string.
fn validated(field: &str, raw: &str, max: usize) -> DomainResult<String> {
    let length = raw.chars().count();
    if length == 0 || length > max {
        return Err(DomainError::invalid(format!(
            "{field} must be between 1 and {max} characters"
        )));
    }
    if raw.trim().is_empty() {
        return Err(DomainError::invalid(format!("{field} must not be blank")));
    }
    if !raw.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(DomainError::invalid(format!(
            "{field} must contain only alphanumeric characters and spaces"
        )));
    }
    Ok(raw.trim().to_string())
}

/// A room's name. Uniqueness across the system is enforced by the room
/// service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomName(String);

impl RoomName {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Room name", raw, config.room_name_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A room's free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomDescription(String);

impl RoomDescription {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Room description", raw, config.room_description_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A floor's free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorDescription(String);

impl FloorDescription {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Floor description", raw, config.floor_description_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FloorDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A building's short code, unique across buildings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingCode(String);

impl BuildingCode {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Building code", raw, config.building_code_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A building's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingName(String);

impl BuildingName {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Building name", raw, config.building_name_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A building's free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingDescription(String);

impl BuildingDescription {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated(
            "Building description",
            raw,
            config.building_description_max,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A robisep's operational code, unique across the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobisepCode(String);

impl RobisepCode {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Robisep code", raw, config.robisep_code_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RobisepCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A robisep's friendly nickname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobisepNickname(String);

impl RobisepNickname {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Robisep nickname", raw, config.robisep_nickname_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RobisepNickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A robisep's manufacturer serial number, unique across the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobisepSerial(String);

impl RobisepSerial {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated("Robisep serial number", raw, config.robisep_serial_max).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RobisepSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A robisep's free-text description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobisepDescription(String);

impl RobisepDescription {
    pub fn parse(raw: &str, config: &ValidationConfig) -> DomainResult<Self> {
        validated(
            "Robisep description",
            raw,
            config.robisep_description_max,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RobisepDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
