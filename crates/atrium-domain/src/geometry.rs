//! Placement geometry: grid positions, room rectangles, floor bounds,
//! and door orientation.
//!
//! A floor is a bounded 2D grid of cells. Rooms occupy axis-aligned
//! rectangles of cells with inclusive corners; doors sit on a room's
//! perimeter and face one of the four cardinal directions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DomainError, DomainResult};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell on a floor grid. Both coordinates are non-negative.
///
/// Constructed through [`try_new`](Self::try_new), which takes signed
/// inputs so that out-of-range client values surface as a domain
/// failure instead of a deserialization panic. Fractional coordinates
/// never reach this type: the HTTP layer deserializes into integers and
/// rejects anything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Validates and builds a position from raw signed coordinates.
    pub fn try_new(x: i64, y: i64) -> DomainResult<Self> {
        if x < 0 || y < 0 {
            return Err(DomainError::invalid(format!(
                "position coordinates must be non-negative, got ({x}, {y})"
            )));
        }
        let x = u32::try_from(x).map_err(|_| coordinate_too_large(x))?;
        let y = u32::try_from(y).map_err(|_| coordinate_too_large(y))?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

fn coordinate_too_large(value: i64) -> DomainError {
    DomainError::invalid(format!(
        "position coordinate {value} exceeds the supported grid size"
    ))
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// RoomDimensions
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle of grid cells with inclusive corners.
///
/// Invariants, enforced at construction:
/// - the corners differ (no single-cell degenerate rectangle),
/// - `initial.x <= final.x` and `initial.y <= final.y`.
///
/// Note the corner-order rule is per-axis non-decreasing, not strictly
/// increasing: a one-cell-wide corridor like `(2,0)..(2,9)` is valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct RoomDimensions {
    initial: Position,
    final_position: Position,
}

impl RoomDimensions {
    /// Validates the corner pair and builds the rectangle.
    pub fn try_new(initial: Position, final_position: Position) -> DomainResult<Self> {
        if initial == final_position {
            return Err(DomainError::invalid(
                "room dimensions must span more than a single cell",
            ));
        }
        if initial.x() > final_position.x() || initial.y() > final_position.y() {
            return Err(DomainError::invalid(format!(
                "the initial corner {initial} must not exceed the final corner {final_position}"
            )));
        }
        Ok(Self {
            initial,
            final_position,
        })
    }

    pub fn initial(&self) -> Position {
        self.initial
    }

    pub fn final_position(&self) -> Position {
        self.final_position
    }

    /// Inclusive containment of a (possibly off-grid) cell.
    pub fn contains_cell(&self, x: i64, y: i64) -> bool {
        x >= i64::from(self.initial.x())
            && x <= i64::from(self.final_position.x())
            && y >= i64::from(self.initial.y())
            && y <= i64::from(self.final_position.y())
    }

    /// Standard axis-aligned rectangle intersection with inclusive
    /// bounds: rectangles that merely share an edge of cells do overlap,
    /// because both would occupy those cells.
    pub fn intersects(&self, other: &RoomDimensions) -> bool {
        !(self.final_position.x() < other.initial.x()
            || self.initial.x() > other.final_position.x()
            || self.final_position.y() < other.initial.y()
            || self.initial.y() > other.final_position.y())
    }
}

impl fmt::Display for RoomDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.initial, self.final_position)
    }
}

// ---------------------------------------------------------------------------
// FloorBounds
// ---------------------------------------------------------------------------

/// The grid extent of a floor: cells `0..width` by `0..length`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct FloorBounds {
    width: u32,
    length: u32,
}

impl FloorBounds {
    pub fn try_new(width: i64, length: i64) -> DomainResult<Self> {
        if width <= 0 || length <= 0 {
            return Err(DomainError::invalid(format!(
                "floor bounds must be positive, got {width} x {length}"
            )));
        }
        let width = u32::try_from(width).map_err(|_| coordinate_too_large(width))?;
        let length = u32::try_from(length).map_err(|_| coordinate_too_large(length))?;
        Ok(Self { width, length })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns `true` if the rectangle lies entirely within the floor.
    pub fn contains_area(&self, area: &RoomDimensions) -> bool {
        area.final_position().x() < self.width && area.final_position().y() < self.length
    }

    /// Inclusive containment of a (possibly off-grid) cell.
    pub fn contains_cell(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.length)
    }
}

impl fmt::Display for FloorBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.length)
    }
}

// ---------------------------------------------------------------------------
// DoorOrientation
// ---------------------------------------------------------------------------

/// The side of a room a door faces.
///
/// North is towards smaller `y`, south towards larger `y`, west towards
/// smaller `x`, east towards larger `x`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DoorOrientation {
    North,
    South,
    East,
    West,
}

impl DoorOrientation {
    /// Parses a client-supplied orientation string.
    ///
    /// One normalization step (trim + uppercase), then an explicit
    /// lookup; anything not in the table is an `InvalidInput` failure.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "NORTH" => Ok(Self::North),
            "SOUTH" => Ok(Self::South),
            "EAST" => Ok(Self::East),
            "WEST" => Ok(Self::West),
            _ => Err(DomainError::invalid(format!(
                "'{raw}' is not a valid door orientation"
            ))),
        }
    }
}

impl fmt::Display for DoorOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "NORTH"),
            Self::South => write!(f, "SOUTH"),
            Self::East => write!(f, "EAST"),
            Self::West => write!(f, "WEST"),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
