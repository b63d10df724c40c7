//! City tracing by fixed-point expansion over city fragments
//!
//! A fragment is one city edge of one placed tile. Fragments join inside a tile
//! through a city middle and across a border between two placed tiles. A city
//! is complete only when none of its fragments faces an empty coordinate.

use crate::board::geometry::{Coord, Side};
use crate::board::placement::Board;
use crate::io::error::{BoardError, Result};
use std::collections::BTreeSet;

/// One city-bearing edge of a placed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityFragment {
    /// Tile coordinate
    pub position: Coord,
    /// Edge of the tile
    pub side: Side,
}

impl CityFragment {
    /// Create a fragment
    pub const fn new(position: Coord, side: Side) -> Self {
        Self { position, side }
    }
}

/// A traced city and whether it is closed off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    complete: bool,
    fragments: BTreeSet<CityFragment>,
}

impl City {
    /// Whether no fragment faces an empty coordinate
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Every fragment of the city
    pub const fn fragments(&self) -> &BTreeSet<CityFragment> {
        &self.fragments
    }

    /// Whether the city includes the given edge
    pub fn contains(&self, position: Coord, side: Side) -> bool {
        self.fragments.contains(&CityFragment::new(position, side))
    }

    /// Distinct coordinates the city covers
    pub fn tiles(&self) -> BTreeSet<Coord> {
        self.fragments.iter().map(|fragment| fragment.position).collect()
    }

    /// Number of distinct tiles in the city
    pub fn tile_count(&self) -> usize {
        self.tiles().len()
    }
}

impl Board {
    /// Trace the city on `side` of the tile at `coord`
    ///
    /// Completeness reflects the board at the time of the call; nothing is
    /// cached, so callers trace again after new placements.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `coord` holds no tile
    /// - `side` of that tile is not a city edge
    pub fn trace_city(&self, coord: Coord, side: Side) -> Result<City> {
        let tile = self
            .tile_at(coord)
            .ok_or(BoardError::Unoccupied { coord })?;
        if !tile.has_city(side) {
            return Err(BoardError::NoCity { coord, side });
        }

        let mut fragments = BTreeSet::from([CityFragment::new(coord, side)]);
        let mut complete = true;
        let mut passes = 0_usize;

        loop {
            passes += 1;
            let mut grew = false;
            let snapshot: Vec<CityFragment> = fragments.iter().copied().collect();

            for fragment in snapshot {
                let Some(tile) = self.tile_at(fragment.position) else {
                    continue;
                };

                for other in Side::ALL {
                    if other != fragment.side && tile.cities_connect(fragment.side, other) {
                        grew |= fragments.insert(CityFragment::new(fragment.position, other));
                    }
                }

                match fragment.position.step(fragment.side) {
                    Some(neighbor) if self.is_occupied(neighbor) => {
                        grew |= fragments.insert(CityFragment::new(
                            neighbor,
                            fragment.side.opposite(),
                        ));
                    }
                    // Empty, or past the edge of the plane
                    _ => complete = false,
                }
            }

            if !grew {
                break;
            }
        }

        log::trace!(
            "City from {coord} {side}: {} fragments after {passes} passes, complete: {complete}",
            fragments.len()
        );
        Ok(City {
            complete,
            fragments,
        })
    }
}
