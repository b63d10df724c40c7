//! Tests for the standard tile definitions

#[cfg(test)]
mod tests {
    use carcassonne::board::catalog::{CATALOG, CITY_CAP_STRAIGHT_ROAD, STARTING_TILE};
    use carcassonne::board::geometry::Side;
    use std::collections::HashSet;

    // Tests the starting tile is the first catalog entry
    #[test]
    fn test_starting_tile() {
        assert_eq!(STARTING_TILE, CITY_CAP_STRAIGHT_ROAD);
        assert_eq!(CATALOG.first(), Some(&STARTING_TILE));
    }

    // Tests every definition is distinct
    // Verified by duplicating an entry
    #[test]
    fn test_catalog_unique() {
        let unique: HashSet<_> = CATALOG.iter().collect();
        assert_eq!(unique.len(), CATALOG.len());
        assert_eq!(CATALOG.len(), 16);
    }

    // Tests non-crossroads tiles carry zero or two road edges in any rotation
    // Verified by adding a third road edge to a through-road tile
    #[test]
    fn test_single_through_road() {
        for tile in CATALOG {
            for rotated in tile.rotations() {
                let roads = Side::ALL
                    .into_iter()
                    .filter(|&side| rotated.has_road(side))
                    .count();
                if rotated.has_crossroads() {
                    assert!(roads >= 3, "crossroads {rotated} should join several roads");
                } else {
                    assert!(roads == 0 || roads == 2, "{rotated} has {roads} road edges");
                }
            }
        }
    }
}
