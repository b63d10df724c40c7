//! Board engine for a tile-placement game
//!
//! Tiles carry a feature on each edge and one in the middle. The board keeps a
//! sparse map of placed tiles on the integer plane, accepts a new tile only
//! where every edge matches its neighbors, and traces roads and cities across
//! tile borders to tell whether they are finished.

#![forbid(unsafe_code)]

/// Tiles, coordinates, placement validation, and feature tracing
pub mod board;
/// Command line, progress display, summaries, and error handling
pub mod io;
/// Random board filling and feature surveys
pub mod simulation;

pub use board::{Board, City, Coord, Exit, PlaceMode, Road, RoadHop, Side, Tile};
pub use io::error::{BoardError, Result};
