//! Room categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult};

/// The functional category of a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomCategory {
    Office,
    Amphitheater,
    Laboratory,
    Other,
}

impl RoomCategory {
    /// Parses a client-supplied category string: trim + uppercase, then
    /// an explicit lookup against the allow-list.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "OFFICE" => Ok(Self::Office),
            "AMPHITHEATER" => Ok(Self::Amphitheater),
            "LABORATORY" => Ok(Self::Laboratory),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::invalid(format!(
                "'{raw}' is not a valid room category"
            ))),
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Office => write!(f, "OFFICE"),
            Self::Amphitheater => write!(f, "AMPHITHEATER"),
            Self::Laboratory => write!(f, "LABORATORY"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(RoomCategory::parse("office").unwrap(), RoomCategory::Office);
        assert_eq!(
            RoomCategory::parse(" Laboratory ").unwrap(),
            RoomCategory::Laboratory
        );
        assert_eq!(
            RoomCategory::parse("AMPHITHEATER").unwrap(),
            RoomCategory::Amphitheater
        );
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = RoomCategory::parse("garage").unwrap_err();
        assert!(err.to_string().contains("not a valid room category"));
    }

    #[test]
    fn test_serializes_uppercase() {
        let json = serde_json::to_string(&RoomCategory::Laboratory).unwrap();
        assert_eq!(json, "\"LABORATORY\"");
    }
}
