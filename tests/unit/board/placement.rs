//! Tests for placement validation and frontier bookkeeping

#[cfg(test)]
mod tests {
    use carcassonne::BoardError;
    use carcassonne::board::catalog::{
        CITY_CAP, CROSSROADS_FOUR_WAY, ROAD_CURVE, STARTING_TILE, STRAIGHT_ROAD,
    };
    use carcassonne::board::geometry::{Coord, Side};
    use carcassonne::board::placement::{Board, PlaceMode};
    use carcassonne::board::tile::{EdgeFeature, MiddleFeature, Tile};
    use std::collections::HashSet;

    fn city_facing_south() -> Tile {
        CITY_CAP.rotate().rotate()
    }

    fn assert_frontier_invariant(board: &Board) {
        let occupied = board.coordinates_occupied();
        for coord in board.frontier() {
            assert!(!occupied.contains(coord), "{coord} is both placed and frontier");
            assert!(
                coord.neighbors().iter().any(|(_, n)| occupied.contains(&n)),
                "{coord} touches nothing"
            );
        }
        for coord in &occupied {
            for (_, neighbor) in coord.neighbors().iter() {
                if !occupied.contains(&neighbor) {
                    assert!(board.frontier().contains(&neighbor));
                }
            }
        }
    }

    // Tests a new board holds only the starting tile with four open neighbors
    #[test]
    fn test_new_board() {
        let board = Board::new();

        assert_eq!(board.coordinates_occupied(), HashSet::from([Coord::ORIGIN]));
        assert_eq!(board.tile_at(Coord::ORIGIN), Some(&STARTING_TILE));
        assert_eq!(board.tile_count(), 1);

        let expected: HashSet<Coord> = Coord::ORIGIN.neighbors().iter().map(|(_, c)| c).collect();
        assert_eq!(board.frontier(), &expected);
    }

    // Tests a custom origin tile
    #[test]
    fn test_with_origin() {
        let board = Board::with_origin(ROAD_CURVE);
        assert_eq!(board.tile_at(Coord::ORIGIN), Some(&ROAD_CURVE));
    }

    // Tests empty lookups return nothing rather than failing
    #[test]
    fn test_tile_at_empty() {
        let board = Board::new();
        assert_eq!(board.tile_at(Coord::new(4, 4)), None);
        assert!(!board.is_occupied(Coord::new(0, 1)));
    }

    // Tests neighbor arithmetic ignores occupancy
    #[test]
    fn test_neighbors_of() {
        let neighbors = Board::neighbors_of(Coord::new(10, 10));
        assert_eq!(neighbors.get(Side::South), Some(Coord::new(10, 9)));
        assert_eq!(neighbors.get(Side::East), Some(Coord::new(11, 10)));
    }

    // Tests a city edge must meet a city edge above the starting tile
    // Verified by comparing the candidate's north edge instead of south
    #[test]
    fn test_city_over_city() {
        let mut board = Board::new();
        let target = Coord::new(0, 1);

        assert!(!board.place(target, CITY_CAP));
        assert!(!board.is_occupied(target));
        assert_eq!(
            board.check_placement(target, &CITY_CAP),
            Err(BoardError::EdgeMismatch {
                coord: target,
                side: Side::South,
                placed: EdgeFeature::City,
                candidate: EdgeFeature::Grass,
            })
        );

        assert!(board.place(target, city_facing_south()));
        assert_eq!(board.tile_at(target), Some(&city_facing_south()));
    }

    // Tests edges are compared as exact values, not by shared features
    // Verified by comparing with has_road instead of equality
    #[test]
    fn test_strict_edge_equality() {
        let mut board = Board::new();
        let target = Coord::new(1, 0);
        let bare_road = Tile::new(
            EdgeFeature::Grass,
            EdgeFeature::Road,
            EdgeFeature::Grass,
            EdgeFeature::Road,
            MiddleFeature::Road,
        );

        assert!(!board.place(target, bare_road));
        assert!(board.place(target, STRAIGHT_ROAD.rotate()));
    }

    // Tests placement far from the board is refused without mutation
    #[test]
    fn test_detached_rejected() {
        let mut board = Board::new();
        let before = board.coordinates_occupied();
        let target = Coord::new(5, 5);

        assert!(!board.place(target, CROSSROADS_FOUR_WAY));
        assert_eq!(
            board.check_placement(target, &CROSSROADS_FOUR_WAY),
            Err(BoardError::Detached { coord: target })
        );
        assert_eq!(board.coordinates_occupied(), before);
    }

    // Tests an occupied coordinate cannot be placed on again
    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new();
        assert!(!board.place(Coord::ORIGIN, STARTING_TILE));
        assert_eq!(
            board.check_placement(Coord::ORIGIN, &STARTING_TILE),
            Err(BoardError::Occupied {
                coord: Coord::ORIGIN
            })
        );
    }

    // Tests a dry run reports legality without inserting
    // Verified by inserting during dry runs
    #[test]
    fn test_dry_run() {
        let mut board = Board::new();
        let target = Coord::new(0, 1);

        assert!(board.try_place(target, city_facing_south(), PlaceMode::DryRun));
        assert!(!board.is_occupied(target));
        assert!(board.can_place(target, &city_facing_south()));
        assert!(!board.try_place(target, CITY_CAP, PlaceMode::DryRun));
        assert_eq!(board.tile_count(), 1);
    }

    // Tests unchecked placement ignores every rule and may overwrite
    #[test]
    fn test_unchecked_placement() {
        let mut board = Board::new();

        assert!(board.try_place(Coord::new(9, 9), CITY_CAP, PlaceMode::Unchecked));
        assert_eq!(board.tile_at(Coord::new(9, 9)), Some(&CITY_CAP));
        assert!(board.frontier().contains(&Coord::new(9, 10)));

        board.place_unchecked(Coord::ORIGIN, CROSSROADS_FOUR_WAY);
        assert_eq!(board.tile_at(Coord::ORIGIN), Some(&CROSSROADS_FOUR_WAY));
        assert_eq!(board.tile_count(), 2);
        assert_frontier_invariant(&board);
    }

    // Tests every placed neighbor is checked, not just the first one found
    // Verified by stopping after the first placed neighbor
    #[test]
    fn test_all_neighbors_checked() {
        let mut board = Board::new();
        assert!(board.place(Coord::new(1, 0), STRAIGHT_ROAD.rotate()));
        assert!(board.place(Coord::new(0, 1), city_facing_south()));

        let corner = Coord::new(1, 1);
        // South edge grass meets the straight road, west edge grass meets the cap
        assert!(board.can_place(corner, &CITY_CAP));
        assert!(board.can_place(corner, &CITY_CAP.rotate()));
        // West edge city would face the cap's grass east edge
        assert!(!board.can_place(corner, &CITY_CAP.rotate().rotate().rotate()));
        // South edge road would face the straight road's grass north edge
        assert!(!board.can_place(corner, &ROAD_CURVE));
    }

    // Tests the maintained frontier always equals a full rebuild
    // Verified by skipping frontier removal on insert
    #[test]
    fn test_frontier_matches_recompute() {
        let mut board = Board::new();
        assert!(board.place(Coord::new(1, 0), STRAIGHT_ROAD.rotate()));
        assert!(board.place(Coord::new(0, 1), city_facing_south()));
        assert!(board.place(Coord::new(1, 1), CITY_CAP));
        assert_frontier_invariant(&board);

        let maintained = board.frontier().clone();
        board.recompute_frontier();
        assert_eq!(board.frontier(), &maintained);
        assert!(!maintained.contains(&Coord::new(1, 1)));
        assert!(maintained.contains(&Coord::new(2, 1)));
    }

    // Tests a tile on the edge of the plane keeps only in-range frontier entries
    // Verified by stepping with unchecked addition (overflow panic)
    #[test]
    fn test_unchecked_at_plane_edge() {
        let mut board = Board::new();
        let edge = Coord::new(i32::MAX, 0);
        board.place_unchecked(edge, CITY_CAP);

        assert_eq!(board.tile_at(edge), Some(&CITY_CAP));
        assert!(board.frontier().contains(&Coord::new(i32::MAX - 1, 0)));
        assert!(board.frontier().contains(&Coord::new(i32::MAX, 1)));
        assert!(!board.frontier().contains(&Coord::new(i32::MIN, 0)));
        assert_frontier_invariant(&board);

        let maintained = board.frontier().clone();
        board.recompute_frontier();
        assert_eq!(board.frontier(), &maintained);
    }
}
