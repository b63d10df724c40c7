//! Seeded random fill: grow a board by drawing catalog tiles
//!
//! Each draw picks a catalog tile uniformly, lists every legal
//! (frontier coordinate, rotation) pair in a fixed order, and places one of
//! them at random. A draw with no legal placement is discarded.

use crate::board::catalog::CATALOG;
use crate::board::geometry::Coord;
use crate::board::placement::Board;
use crate::board::tile::Tile;
use crate::io::configuration::{DEFAULT_DRAW_BUDGET_FACTOR, DEFAULT_PLACEMENTS, DEFAULT_SEED};
use crate::io::error::{Result, invalid_parameter};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters controlling a random fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillConfig {
    /// Seed for the random number generator
    pub seed: u64,
    /// Number of tiles to add around the starting tile
    pub placements: usize,
    /// Maximum number of draws, including discarded ones
    pub max_draws: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            placements: DEFAULT_PLACEMENTS,
            max_draws: DEFAULT_PLACEMENTS * DEFAULT_DRAW_BUDGET_FACTOR,
        }
    }
}

impl FillConfig {
    /// Check the configuration for values a fill cannot honor
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `placements` is zero
    /// - `max_draws` is smaller than `placements`
    pub fn validate(&self) -> Result<()> {
        if self.placements == 0 {
            return Err(invalid_parameter(
                "placements",
                &self.placements,
                &"must place at least one tile",
            ));
        }
        if self.max_draws < self.placements {
            return Err(invalid_parameter(
                "max_draws",
                &self.max_draws,
                &format!("must be at least the placement target {}", self.placements),
            ));
        }
        Ok(())
    }
}

/// Outcome of a single draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    /// The drawn tile was placed, rotated as shown
    Placed {
        /// Where it went
        coord: Coord,
        /// Tile as placed
        tile: Tile,
    },
    /// The drawn tile fit nowhere and was set aside
    Discarded {
        /// Tile as drawn
        tile: Tile,
    },
}

/// Random fill executor
pub struct RandomFill {
    board: Board,
    config: FillConfig,
    rng: StdRng,
    draws: usize,
    placed: usize,
    discarded: usize,
}

impl RandomFill {
    /// Create an executor over a fresh board
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: FillConfig) -> Result<Self> {
        Self::with_board(Board::new(), config)
    }

    /// Create an executor that keeps growing an existing board
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_board(board: Board, config: FillConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            board,
            config,
            rng: StdRng::seed_from_u64(config.seed),
            draws: 0,
            placed: 0,
            discarded: 0,
        })
    }

    /// Whether the placement target or the draw budget has been reached
    pub const fn is_finished(&self) -> bool {
        self.placed >= self.config.placements || self.draws >= self.config.max_draws
    }

    /// Draw one tile and place it if it fits anywhere
    ///
    /// Returns `None` once the fill is finished.
    pub fn step(&mut self) -> Option<Draw> {
        if self.is_finished() {
            return None;
        }
        self.draws += 1;

        let index = self.rng.random_range(0..CATALOG.len());
        let drawn = CATALOG.get(index).copied()?;

        let options = legal_placements(&self.board, &drawn);
        if options.is_empty() {
            self.discarded += 1;
            log::debug!("Draw {}: {drawn} fits nowhere, discarded", self.draws);
            return Some(Draw::Discarded { tile: drawn });
        }

        let choice = self.rng.random_range(0..options.len());
        let (coord, tile) = options.get(choice).copied()?;
        if !self.board.place(coord, tile) {
            // Options come from the same board, so this cannot be rejected
            self.discarded += 1;
            return Some(Draw::Discarded { tile: drawn });
        }
        self.placed += 1;
        Some(Draw::Placed { coord, tile })
    }

    /// Draw until finished, reporting each draw to `observe`
    pub fn run(&mut self, mut observe: impl FnMut(&Self, &Draw)) {
        while let Some(draw) = self.step() {
            observe(&*self, &draw);
        }
        log::info!(
            "Fill finished: {} placed, {} discarded over {} draws",
            self.placed,
            self.discarded,
            self.draws
        );
    }

    /// Board in its current state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the executor, keeping the board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Configuration in use
    pub const fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Draws made so far
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Tiles placed so far, not counting the starting tile
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Draws that fit nowhere
    pub const fn discarded(&self) -> usize {
        self.discarded
    }
}

/// Every legal (coordinate, rotation) for `tile`, frontier sorted by coordinate
///
/// Rotations that produce the same tile are listed once per coordinate.
pub fn legal_placements(board: &Board, tile: &Tile) -> Vec<(Coord, Tile)> {
    let mut frontier: Vec<Coord> = board.frontier().iter().copied().collect();
    frontier.sort_unstable();

    let mut rotations: Vec<Tile> = Vec::with_capacity(4);
    for rotated in tile.rotations() {
        if !rotations.contains(&rotated) {
            rotations.push(rotated);
        }
    }

    frontier
        .into_iter()
        .flat_map(|coord| rotations.iter().map(move |&rotated| (coord, rotated)))
        .filter(|(coord, rotated)| board.can_place(*coord, rotated))
        .collect()
}
