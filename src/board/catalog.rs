//! The sixteen standard tile definitions
//!
//! Static data only: the board accepts any [`Tile`], these are simply the ones
//! the base game ships with. Every definition is given in its printed
//! orientation; callers rotate as needed.

use crate::board::tile::{EdgeFeature, MiddleFeature, Tile};

const GRASS: EdgeFeature = EdgeFeature::Grass;
const CITY: EdgeFeature = EdgeFeature::City;
const TRACK: EdgeFeature = EdgeFeature::GrassRoad;

/// City cap to the north over a straight east-west road
pub const CITY_CAP_STRAIGHT_ROAD: Tile = Tile::new(CITY, TRACK, GRASS, TRACK, MiddleFeature::Road);
/// City on three sides, grass to the south
pub const CITY_THREE_SIDES: Tile = Tile::new(CITY, CITY, GRASS, CITY, MiddleFeature::City);
/// Four roads meeting at a crossroads
pub const CROSSROADS_FOUR_WAY: Tile = Tile::new(TRACK, TRACK, TRACK, TRACK, MiddleFeature::CityRoad);
/// City cap to the north, road curving from east to south
pub const CITY_CAP_CURVE_EAST: Tile = Tile::new(CITY, TRACK, TRACK, GRASS, MiddleFeature::Road);
/// City on every side
pub const CITY_FULL: Tile = Tile::new(CITY, CITY, CITY, CITY, MiddleFeature::City);
/// Straight north-south road
pub const STRAIGHT_ROAD: Tile = Tile::new(TRACK, GRASS, TRACK, GRASS, MiddleFeature::Road);
/// Two separate city caps, east and west
pub const CITY_OPPOSITE_CAPS: Tile = Tile::new(GRASS, CITY, GRASS, CITY, MiddleFeature::Grass);
/// City running east to west through the middle
pub const CITY_BRIDGE: Tile = Tile::new(GRASS, CITY, GRASS, CITY, MiddleFeature::City);
/// City filling the north-east corner
pub const CITY_CORNER: Tile = Tile::new(CITY, CITY, GRASS, GRASS, MiddleFeature::City);
/// Three roads meeting at a crossroads, grass to the north
pub const CROSSROADS_THREE_WAY: Tile = Tile::new(GRASS, TRACK, TRACK, TRACK, MiddleFeature::CityRoad);
/// City in the north-west corner, road curving from east to south
pub const CITY_CORNER_ROAD_CURVE: Tile = Tile::new(CITY, TRACK, TRACK, CITY, MiddleFeature::City);
/// City cap to the north, road curving from south to west
pub const CITY_CAP_CURVE_WEST: Tile = Tile::new(CITY, GRASS, TRACK, TRACK, MiddleFeature::Road);
/// City cap to the north over a three-way crossroads
pub const CITY_CAP_CROSSROADS: Tile = Tile::new(CITY, TRACK, TRACK, TRACK, MiddleFeature::CityRoad);
/// Two separate city caps, north and east
pub const CITY_ADJACENT_CAPS: Tile = Tile::new(CITY, CITY, GRASS, GRASS, MiddleFeature::Grass);
/// Road curving from south to west
pub const ROAD_CURVE: Tile = Tile::new(GRASS, GRASS, TRACK, TRACK, MiddleFeature::Road);
/// Single city cap to the north
pub const CITY_CAP: Tile = Tile::new(CITY, GRASS, GRASS, GRASS, MiddleFeature::Grass);

/// Tile placed at the origin of every new board
pub const STARTING_TILE: Tile = CITY_CAP_STRAIGHT_ROAD;

/// All definitions in catalog order
pub const CATALOG: [Tile; 16] = [
    CITY_CAP_STRAIGHT_ROAD,
    CITY_THREE_SIDES,
    CROSSROADS_FOUR_WAY,
    CITY_CAP_CURVE_EAST,
    CITY_FULL,
    STRAIGHT_ROAD,
    CITY_OPPOSITE_CAPS,
    CITY_BRIDGE,
    CITY_CORNER,
    CROSSROADS_THREE_WAY,
    CITY_CORNER_ROAD_CURVE,
    CITY_CAP_CURVE_WEST,
    CITY_CAP_CROSSROADS,
    CITY_ADJACENT_CAPS,
    ROAD_CURVE,
    CITY_CAP,
];
