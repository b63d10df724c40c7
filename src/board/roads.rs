//! Road tracing across placed tiles
//!
//! A road is followed hop by hop: leave the current tile through its road exit,
//! enter the neighbor through the opposite side, and ask the neighbor where the
//! road goes next. A walk stops at a crossroads, at an empty coordinate or the edge
//! of the plane, or when it comes back to the tile it started from.

use crate::board::geometry::{Coord, Exit, Side};
use crate::board::placement::Board;
use crate::io::configuration::ROAD_STEPS_PER_TILE;
use crate::io::error::{BoardError, Result};
use std::collections::BTreeSet;

/// One tile visited by a road, with the way in and the way out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoadHop {
    /// Tile coordinate
    pub position: Coord,
    /// Where the road enters the tile
    pub enter: Exit,
    /// Where the road leaves the tile
    pub exit: Exit,
}

impl RoadHop {
    /// The same hop travelled the other way
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            position: self.position,
            enter: self.exit,
            exit: self.enter,
        }
    }
}

/// A traced road, ordered from one end to the other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    hops: Vec<RoadHop>,
    closed: bool,
}

impl Road {
    /// Hops in travel order
    pub fn hops(&self) -> &[RoadHop] {
        &self.hops
    }

    /// Consume the road, keeping its hops
    pub fn into_hops(self) -> Vec<RoadHop> {
        self.hops
    }

    /// Whether the road loops back through its starting tile
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether both ends are finished: a loop, or stops at two middles
    pub fn is_complete(&self) -> bool {
        if self.closed {
            return true;
        }
        let starts_in_middle = self.hops.first().is_some_and(|hop| hop.enter == Exit::Center);
        let ends_in_middle = self.hops.last().is_some_and(|hop| hop.exit == Exit::Center);
        starts_in_middle && ends_in_middle
    }

    /// Distinct coordinates the road passes through
    pub fn tiles(&self) -> BTreeSet<Coord> {
        self.hops.iter().map(|hop| hop.position).collect()
    }

    /// Number of distinct tiles on the road
    pub fn tile_count(&self) -> usize {
        self.tiles().len()
    }
}

impl Board {
    /// Follow a road leaving `start` through `exit` until it ends
    ///
    /// The tile at `start` itself is not recorded unless the road loops back
    /// into it, in which case that closing hop is the last one. An `exit` of
    /// [`Exit::Center`] yields no hops.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start` holds no tile
    /// - The road enters a tile that gives it no exit
    /// - The walk runs past its step bound without closing at `start`
    pub fn trace_one_direction(&self, start: Coord, exit: Exit) -> Result<Vec<RoadHop>> {
        if !self.is_occupied(start) {
            return Err(BoardError::Unoccupied { coord: start });
        }

        // Only loops through `start` are detected; the bound catches the rest
        let step_limit = ROAD_STEPS_PER_TILE * self.tile_count();
        let mut hops = Vec::new();
        let mut current = start;
        let mut heading = exit;

        while let Exit::Edge(side) = heading {
            let Some(next) = current.step(side) else {
                break;
            };
            let Some(tile) = self.tile_at(next) else {
                break;
            };

            let enter = side.opposite();
            let leave = tile.road_exit(enter).ok_or(BoardError::BrokenRoad {
                coord: next,
                side: enter,
            })?;
            hops.push(RoadHop {
                position: next,
                enter: Exit::Edge(enter),
                exit: leave,
            });

            if next == start {
                break;
            }
            if hops.len() >= step_limit {
                return Err(BoardError::RoadCycle {
                    start,
                    steps: hops.len(),
                });
            }

            current = next;
            heading = leave;
        }

        Ok(hops)
    }

    /// Trace the whole road crossing `side` of the tile at `coord`
    ///
    /// The result runs from one end to the other and includes the starting
    /// tile once. For a loop through the starting tile, the list ends with the
    /// starting tile's own hop.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `coord` holds no tile
    /// - `side` carries no road, or the road has no way through the tile
    /// - Either direction of the walk fails (see [`Board::trace_one_direction`])
    pub fn trace_road(&self, coord: Coord, side: Side) -> Result<Road> {
        let tile = self
            .tile_at(coord)
            .ok_or(BoardError::Unoccupied { coord })?;
        if !tile.has_road(side) {
            return Err(BoardError::NoRoad { coord, side });
        }
        let conn = tile
            .road_exit(side)
            .ok_or(BoardError::NoRoad { coord, side })?;

        let own = RoadHop {
            position: coord,
            enter: conn,
            exit: Exit::Edge(side),
        };

        let mut hops: Vec<RoadHop> = self
            .trace_one_direction(coord, conn)?
            .into_iter()
            .rev()
            .map(RoadHop::reversed)
            .collect();

        // Looping back reaches the starting tile first when reversed
        if hops.first() == Some(&own) {
            hops.rotate_left(1);
            log::trace!("Road through {coord} closes on itself after {} hops", hops.len());
            return Ok(Road { hops, closed: true });
        }

        hops.push(own);
        hops.extend(self.trace_one_direction(coord, Exit::Edge(side))?);
        Ok(Road {
            hops,
            closed: false,
        })
    }
}
