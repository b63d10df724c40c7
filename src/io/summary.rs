//! Plain-text board summary for the command line

use crate::board::geometry::Coord;
use crate::board::placement::Board;
use crate::simulation::survey::Survey;

/// Smallest and largest occupied coordinates on each axis
pub fn bounds(board: &Board) -> (Coord, Coord) {
    board.tiles().fold(
        (Coord::ORIGIN, Coord::ORIGIN),
        |(min, max), (coord, _)| {
            (
                Coord::new(min.x.min(coord.x), min.y.min(coord.y)),
                Coord::new(max.x.max(coord.x), max.y.max(coord.y)),
            )
        },
    )
}

/// Describe the board and its surveyed features, one fact per line
pub fn render_summary(board: &Board, survey: &Survey) -> String {
    let (min, max) = bounds(board);
    let mut lines = vec![
        format!("Tiles placed: {}", board.tile_count()),
        format!("Frontier size: {}", board.frontier().len()),
        format!("Bounds: {min} to {max}"),
        format!(
            "Roads: {} ({} complete)",
            survey.roads.len(),
            survey.complete_roads()
        ),
    ];

    lines.extend(survey.roads.iter().map(|road| {
        let state = if road.is_closed() {
            "loop"
        } else if road.is_complete() {
            "complete"
        } else {
            "open"
        };
        let start = road
            .hops()
            .first()
            .map_or(Coord::ORIGIN, |hop| hop.position);
        format!("  road from {start}: {} tiles, {state}", road.tile_count())
    }));

    lines.push(format!(
        "Cities: {} ({} complete)",
        survey.cities.len(),
        survey.complete_cities()
    ));
    lines.extend(survey.cities.iter().map(|city| {
        let state = if city.is_complete() { "complete" } else { "open" };
        let anchor = city.tiles().first().copied().unwrap_or(Coord::ORIGIN);
        format!(
            "  city at {anchor}: {} tiles, {} edges, {state}",
            city.tile_count(),
            city.fragments().len()
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
