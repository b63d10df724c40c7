//! Error types for board operations

use crate::board::geometry::{Coord, Side};
use crate::board::tile::EdgeFeature;
use std::fmt;

/// Main error type for all board operations
///
/// Placement legality is normally reported as a plain `bool`; this type carries
/// the reason when a caller asks for one, and reports misuse of the tracing
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A tile already sits at the target coordinate
    Occupied {
        /// Target coordinate
        coord: Coord,
    },

    /// The target coordinate touches no placed tile
    Detached {
        /// Target coordinate
        coord: Coord,
    },

    /// A placed neighbor's facing edge differs from the candidate's edge
    EdgeMismatch {
        /// Target coordinate
        coord: Coord,
        /// Side of the candidate facing the neighbor
        side: Side,
        /// Edge of the placed neighbor facing the candidate
        placed: EdgeFeature,
        /// Edge of the candidate facing the neighbor
        candidate: EdgeFeature,
    },

    /// No tile at the coordinate a trace was asked to start from
    Unoccupied {
        /// Requested coordinate
        coord: Coord,
    },

    /// The starting side carries no road, or the road has nowhere to go
    NoRoad {
        /// Starting coordinate
        coord: Coord,
        /// Starting side
        side: Side,
    },

    /// A road enters a tile that offers no exit for it
    ///
    /// Only reachable on boards built with unchecked placements.
    BrokenRoad {
        /// Coordinate of the tile the road entered
        coord: Coord,
        /// Side it entered through
        side: Side,
    },

    /// A road walk ran past its step bound without returning to its start
    RoadCycle {
        /// Coordinate the walk started from
        start: Coord,
        /// Number of hops taken before giving up
        steps: usize,
    },

    /// The starting side is not a city edge
    NoCity {
        /// Starting coordinate
        coord: Coord,
        /// Starting side
        side: Side,
    },

    /// Configuration value validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied { coord } => write!(f, "Coordinate {coord} is already occupied"),
            Self::Detached { coord } => {
                write!(f, "Coordinate {coord} is not adjacent to any placed tile")
            }
            Self::EdgeMismatch {
                coord,
                side,
                placed,
                candidate,
            } => write!(
                f,
                "Edge mismatch at {coord}: {side} edge is '{candidate}' but the neighbor shows '{placed}'"
            ),
            Self::Unoccupied { coord } => write!(f, "No tile at {coord}"),
            Self::NoRoad { coord, side } => {
                write!(f, "No road leaves the tile at {coord} through its {side} edge")
            }
            Self::BrokenRoad { coord, side } => write!(
                f,
                "Road entering the tile at {coord} through its {side} edge has no exit"
            ),
            Self::RoadCycle { start, steps } => write!(
                f,
                "Road traced from {start} did not close after {steps} hops"
            ),
            Self::NoCity { coord, side } => {
                write!(f, "The {side} edge of the tile at {coord} is not a city")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BoardError {
    BoardError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
