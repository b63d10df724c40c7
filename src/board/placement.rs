//! Sparse board storage, frontier bookkeeping, and placement validation
//!
//! The board is a map from coordinate to tile that always holds the starting
//! tile at the origin. Placements are append-only. The frontier (empty
//! coordinates touching at least one tile) is kept in step with every
//! insertion, so validation never has to rebuild it.

use crate::board::catalog::STARTING_TILE;
use crate::board::geometry::{Coord, Neighbors};
use crate::board::tile::Tile;
use crate::io::error::{BoardError, Result};
use std::collections::{HashMap, HashSet};

/// How [`Board::try_place`] treats a candidate tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceMode {
    /// Check legality, insert if legal
    #[default]
    Validate,
    /// Check legality only, never insert
    DryRun,
    /// Insert without any check, overwriting an existing tile
    ///
    /// Meant for trusted bulk setup.
    Unchecked,
}

/// A board of placed tiles on the `i32` integer plane
#[derive(Debug, Clone)]
pub struct Board {
    placements: HashMap<Coord, Tile>,
    frontier: HashSet<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board holding the catalog starting tile at the origin
    pub fn new() -> Self {
        Self::with_origin(STARTING_TILE)
    }

    /// Create a board holding `tile` at the origin
    pub fn with_origin(tile: Tile) -> Self {
        let mut board = Self {
            placements: HashMap::new(),
            frontier: HashSet::new(),
        };
        board.insert(Coord::ORIGIN, tile);
        board
    }

    /// Snapshot of every occupied coordinate
    pub fn coordinates_occupied(&self) -> HashSet<Coord> {
        self.placements.keys().copied().collect()
    }

    /// Number of placed tiles, including the starting tile
    pub fn tile_count(&self) -> usize {
        self.placements.len()
    }

    /// Placed tiles with their coordinates, in no particular order
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> + '_ {
        self.placements.iter().map(|(&coord, tile)| (coord, tile))
    }

    /// The coordinates around `coord`, occupied or not; missing only past the edge of the plane
    pub const fn neighbors_of(coord: Coord) -> Neighbors {
        coord.neighbors()
    }

    /// Empty coordinates adjacent to at least one placed tile
    pub const fn frontier(&self) -> &HashSet<Coord> {
        &self.frontier
    }

    /// Rebuild the frontier from scratch out of the current placements
    ///
    /// The frontier is already maintained on every insertion; a rebuild always
    /// yields the same set.
    pub fn recompute_frontier(&mut self) {
        let mut frontier = HashSet::new();
        for &coord in self.placements.keys() {
            for (_, neighbor) in coord.neighbors().iter() {
                if !self.placements.contains_key(&neighbor) {
                    frontier.insert(neighbor);
                }
            }
        }
        self.frontier = frontier;
    }

    /// Tile at `coord`, if any
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.placements.get(&coord)
    }

    /// Whether a tile sits at `coord`
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.placements.contains_key(&coord)
    }

    /// Check whether `tile` may legally be placed at `coord`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `coord` already holds a tile
    /// - `coord` is not on the frontier
    /// - A placed neighbor's facing edge is not identical to the candidate's
    ///   edge on that side; the first mismatch clockwise from north is reported
    pub fn check_placement(&self, coord: Coord, tile: &Tile) -> Result<()> {
        if self.is_occupied(coord) {
            return Err(BoardError::Occupied { coord });
        }
        if !self.frontier.contains(&coord) {
            return Err(BoardError::Detached { coord });
        }

        for (side, neighbor) in coord.neighbors().iter() {
            let Some(placed) = self.placements.get(&neighbor) else {
                continue;
            };
            let placed_edge = placed.edge(side.opposite());
            let candidate_edge = tile.edge(side);
            // Strict equality: grass+road does not match a bare road
            if placed_edge != candidate_edge {
                return Err(BoardError::EdgeMismatch {
                    coord,
                    side,
                    placed: placed_edge,
                    candidate: candidate_edge,
                });
            }
        }
        Ok(())
    }

    /// Attempt to place `tile` at `coord`
    ///
    /// Returns whether the tile was (or, for [`PlaceMode::DryRun`], would be)
    /// accepted. A rejected placement leaves the board untouched.
    pub fn try_place(&mut self, coord: Coord, tile: Tile, mode: PlaceMode) -> bool {
        if mode == PlaceMode::Unchecked {
            self.insert(coord, tile);
            return true;
        }

        if let Err(reason) = self.check_placement(coord, &tile) {
            log::debug!("Rejected {tile} at {coord}: {reason}");
            return false;
        }

        if mode == PlaceMode::Validate {
            self.insert(coord, tile);
        }
        true
    }

    /// Validate and insert `tile` at `coord`
    pub fn place(&mut self, coord: Coord, tile: Tile) -> bool {
        self.try_place(coord, tile, PlaceMode::Validate)
    }

    /// Whether `tile` could be placed at `coord` right now
    pub fn can_place(&self, coord: Coord, tile: &Tile) -> bool {
        self.check_placement(coord, tile).is_ok()
    }

    /// Insert `tile` at `coord` without validation, replacing any tile there
    pub fn place_unchecked(&mut self, coord: Coord, tile: Tile) {
        self.insert(coord, tile);
    }

    fn insert(&mut self, coord: Coord, tile: Tile) {
        self.placements.insert(coord, tile);
        self.frontier.remove(&coord);
        for (_, neighbor) in coord.neighbors().iter() {
            if !self.placements.contains_key(&neighbor) {
                self.frontier.insert(neighbor);
            }
        }
    }
}
