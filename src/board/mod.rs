//! Board model: tiles, coordinates, placement, and feature tracing
//!
//! This module contains the board core:
//! - Tile features and edge-matching predicates
//! - Coordinate and side arithmetic
//! - Placement validation and frontier bookkeeping
//! - Road and city tracing

/// The standard tile definitions
pub mod catalog;
/// City tracing across tile borders
pub mod cities;
/// Sides, coordinates, and neighbor arithmetic
pub mod geometry;
/// Board storage, frontier, and placement validation
pub mod placement;
/// Road tracing across tile borders
pub mod roads;
/// Tile features and predicates
pub mod tile;

pub use cities::{City, CityFragment};
pub use geometry::{Coord, Exit, Neighbors, Side};
pub use placement::{Board, PlaceMode};
pub use roads::{Road, RoadHop};
pub use tile::{EdgeFeature, MiddleFeature, Tile};
