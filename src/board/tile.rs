//! Tile features and the edge-matching predicates used by placement and tracing
//!
//! A tile is four edge features and one middle feature. Tiles are plain `Copy`
//! values: rotating one produces a new tile and never touches the original.

use crate::board::geometry::{Exit, Side};
use std::fmt;

/// Content of a single tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeFeature {
    /// Open field
    Grass,
    /// Road without surrounding field
    Road,
    /// City wall
    City,
    /// Road running through field
    GrassRoad,
}

impl EdgeFeature {
    /// Whether a road crosses this edge, alone or with grass
    pub const fn has_road(self) -> bool {
        matches!(self, Self::Road | Self::GrassRoad)
    }

    /// Whether this edge is pure city
    pub const fn has_city(self) -> bool {
        matches!(self, Self::City)
    }

    /// Short lowercase name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Road => "road",
            Self::City => "city",
            Self::GrassRoad => "grass+road",
        }
    }
}

impl fmt::Display for EdgeFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Content of the middle of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MiddleFeature {
    /// Nothing joins the edges
    Grass,
    /// A road passes through
    Road,
    /// A city joins every city edge
    City,
    /// Crossroads: every road ends at the middle
    CityRoad,
}

impl MiddleFeature {
    /// Short lowercase name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Road => "road",
            Self::City => "city",
            Self::CityRoad => "city+road",
        }
    }
}

impl fmt::Display for MiddleFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable tile with one feature per edge and one in the middle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    north: EdgeFeature,
    east: EdgeFeature,
    south: EdgeFeature,
    west: EdgeFeature,
    middle: MiddleFeature,
}

impl Tile {
    /// Build a tile from its edges in clockwise order and its middle
    pub const fn new(
        north: EdgeFeature,
        east: EdgeFeature,
        south: EdgeFeature,
        west: EdgeFeature,
        middle: MiddleFeature,
    ) -> Self {
        Self {
            north,
            east,
            south,
            west,
            middle,
        }
    }

    /// Feature stored on `side`
    pub const fn edge(&self, side: Side) -> EdgeFeature {
        match side {
            Side::North => self.north,
            Side::East => self.east,
            Side::South => self.south,
            Side::West => self.west,
        }
    }

    /// Feature stored in the middle
    pub const fn middle(&self) -> MiddleFeature {
        self.middle
    }

    /// Edges paired with their sides, clockwise from north
    pub fn edges(&self) -> impl Iterator<Item = (Side, EdgeFeature)> + use<> {
        let tile = *self;
        Side::ALL.into_iter().map(move |side| (side, tile.edge(side)))
    }

    /// Whether a road crosses `side`
    pub const fn has_road(&self, side: Side) -> bool {
        self.edge(side).has_road()
    }

    /// Whether `side` is pure city
    pub const fn has_city(&self, side: Side) -> bool {
        self.edge(side).has_city()
    }

    /// Whether roads end at the middle of this tile
    pub const fn has_crossroads(&self) -> bool {
        matches!(self.middle, MiddleFeature::CityRoad)
    }

    /// Where a road entering through `from` leaves this tile
    ///
    /// Crossroads always yield [`Exit::Center`]. Otherwise the first other
    /// road-bearing edge clockwise from north is returned; catalog tiles have at
    /// most one through-road, so there is never more than one candidate. `None`
    /// means no other edge carries a road.
    pub fn road_exit(&self, from: Side) -> Option<Exit> {
        if self.has_crossroads() {
            return Some(Exit::Center);
        }
        Side::ALL
            .into_iter()
            .find(|&side| side != from && self.has_road(side))
            .map(Exit::Edge)
    }

    /// Whether the city on `known` continues to `other` inside this tile
    ///
    /// Only `other` is checked for a city edge: callers pass a side already
    /// known to be part of the city as `known`.
    pub fn cities_connect(&self, known: Side, other: Side) -> bool {
        known == other || (self.has_city(other) && self.middle == MiddleFeature::City)
    }

    /// A new tile turned a quarter clockwise
    ///
    /// Each edge's content moves to the next side clockwise; the middle stays.
    #[must_use]
    pub const fn rotate(&self) -> Self {
        Self::new(self.west, self.north, self.east, self.south, self.middle)
    }

    /// This tile followed by its three successive quarter turns
    pub const fn rotations(&self) -> [Self; 4] {
        let once = self.rotate();
        let twice = once.rotate();
        [*self, once, twice, twice.rotate()]
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[N {} | E {} | S {} | W {} | mid {}]",
            self.north, self.east, self.south, self.west, self.middle
        )
    }
}
