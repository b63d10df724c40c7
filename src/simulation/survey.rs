//! Enumerate every distinct road and city on a board
//!
//! Tiles are scanned in coordinate order and each feature edge is traced at
//! most once: an edge already covered by an earlier trace is skipped.

use crate::board::cities::City;
use crate::board::geometry::{Coord, Exit, Side};
use crate::board::placement::Board;
use crate::board::roads::Road;
use crate::io::error::Result;
use std::collections::HashSet;

/// All roads and cities found on a board
#[derive(Debug, Clone, Default)]
pub struct Survey {
    /// Distinct roads, ordered by their first scanned edge
    pub roads: Vec<Road>,
    /// Distinct cities, ordered by their first scanned edge
    pub cities: Vec<City>,
}

impl Survey {
    /// Number of roads that are loops or end at two middles
    pub fn complete_roads(&self) -> usize {
        self.roads.iter().filter(|road| road.is_complete()).count()
    }

    /// Number of cities with no open border
    pub fn complete_cities(&self) -> usize {
        self.cities.iter().filter(|city| city.is_complete()).count()
    }
}

/// Trace every road and city on `board`
///
/// # Errors
///
/// Returns an error if a road trace fails, which only happens on boards built
/// with unchecked placements of non-catalog tiles
pub fn survey(board: &Board) -> Result<Survey> {
    let mut coords: Vec<Coord> = board.coordinates_occupied().into_iter().collect();
    coords.sort_unstable();

    let mut result = Survey::default();
    let mut seen_roads: HashSet<(Coord, Side)> = HashSet::new();
    let mut seen_cities: HashSet<(Coord, Side)> = HashSet::new();

    for coord in coords {
        let Some(tile) = board.tile_at(coord) else {
            continue;
        };

        for (side, edge) in tile.edges() {
            if edge.has_city() && !seen_cities.contains(&(coord, side)) {
                let city = board.trace_city(coord, side)?;
                seen_cities.extend(
                    city.fragments()
                        .iter()
                        .map(|fragment| (fragment.position, fragment.side)),
                );
                result.cities.push(city);
            }

            if edge.has_road() && !seen_roads.contains(&(coord, side)) {
                let road = board.trace_road(coord, side)?;
                for hop in road.hops() {
                    for end in [hop.enter, hop.exit] {
                        if let Exit::Edge(edge_side) = end {
                            seen_roads.insert((hop.position, edge_side));
                        }
                    }
                }
                result.roads.push(road);
            }
        }
    }

    log::debug!(
        "Surveyed {} tiles: {} roads, {} cities",
        board.tile_count(),
        result.roads.len(),
        result.cities.len()
    );
    Ok(result)
}
