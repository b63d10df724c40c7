//! Compass sides, board coordinates, and the neighbor arithmetic between them
//!
//! The board is the integer plane. North increases `y`, east increases `x`.
//! Every step across a side lands on the neighbor, which is entered through the
//! opposite side. Stepping past `i32::MIN` or `i32::MAX` lands nowhere: such a
//! neighbor does not exist and is treated as permanently empty.

use std::fmt;

/// One of the four edges of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Positive `y`
    North,
    /// Positive `x`
    East,
    /// Negative `y`
    South,
    /// Negative `x`
    West,
}

impl Side {
    /// All sides in clockwise order starting from north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The side a neighbor is entered through after leaving by `self`
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The next side when turning a quarter clockwise
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Where a road enters or leaves a tile: through an edge or at the middle
///
/// Roads that reach a crossroads stop at the middle instead of continuing to
/// another edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Exit {
    /// Through the given edge
    Edge(Side),
    /// At the middle of the tile
    Center,
}

impl Exit {
    /// The edge, if this exit is not the middle
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Edge(side) => Some(side),
            Self::Center => None,
        }
    }
}

impl From<Side> for Exit {
    fn from(side: Side) -> Self {
        Self::Edge(side)
    }
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge(side) => side.fmt(f),
            Self::Center => f.write_str("center"),
        }
    }
}

/// Integer board position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, growing eastward
    pub x: i32,
    /// Row, growing northward
    pub y: i32,
}

impl Coord {
    /// Position of the starting tile
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate across `side`, or `None` past the edge of the plane
    pub const fn step(self, side: Side) -> Option<Self> {
        let (dx, dy) = side.offset();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// The axis-adjacent coordinates, occupied or not
    pub const fn neighbors(self) -> Neighbors {
        Neighbors {
            north: self.step(Side::North),
            east: self.step(Side::East),
            south: self.step(Side::South),
            west: self.step(Side::West),
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The coordinates around a position, one per side
///
/// A side is `None` only at the edge of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    /// Coordinate across the north edge
    pub north: Option<Coord>,
    /// Coordinate across the east edge
    pub east: Option<Coord>,
    /// Coordinate across the south edge
    pub south: Option<Coord>,
    /// Coordinate across the west edge
    pub west: Option<Coord>,
}

impl Neighbors {
    /// Neighbor across `side`
    pub const fn get(&self, side: Side) -> Option<Coord> {
        match side {
            Side::North => self.north,
            Side::East => self.east,
            Side::South => self.south,
            Side::West => self.west,
        }
    }

    /// Pairs of side and existing neighbor, clockwise from north
    pub fn iter(&self) -> impl Iterator<Item = (Side, Coord)> + use<> {
        let neighbors = *self;
        Side::ALL
            .into_iter()
            .filter_map(move |side| neighbors.get(side).map(|coord| (side, coord)))
    }

    /// The side pointing at `coord`, if `coord` is one of these neighbors
    pub fn side_toward(&self, coord: Coord) -> Option<Side> {
        self.iter()
            .find_map(|(side, neighbor)| (neighbor == coord).then_some(side))
    }
}
