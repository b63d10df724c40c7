//! Drivers that exercise a board: random filling and feature surveys

/// Seeded random fill from the tile catalog
pub mod executor;
/// Enumeration of every road and city on a board
pub mod survey;
