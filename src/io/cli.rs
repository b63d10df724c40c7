//! Command-line interface for growing a random board and summarizing it

use crate::io::configuration::{DEFAULT_DRAW_BUDGET_FACTOR, DEFAULT_PLACEMENTS, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::progress::FillProgress;
use crate::io::summary::render_summary;
use crate::simulation::executor::{FillConfig, RandomFill};
use crate::simulation::survey::survey;
use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "carcassonne")]
#[command(
    author,
    version,
    about = "Grow a random tile board and report its roads and cities"
)]
/// Command-line arguments for the random fill
pub struct Cli {
    /// Random seed for reproducible boards
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of tiles to place around the starting tile
    #[arg(short, long, default_value_t = DEFAULT_PLACEMENTS)]
    pub tiles: usize,

    /// Maximum number of draws, including tiles that fit nowhere
    /// (defaults to four per requested tile)
    #[arg(short, long)]
    pub max_draws: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log rejected placements and discarded draws
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Fill parameters derived from the arguments
    pub fn fill_config(&self) -> FillConfig {
        FillConfig {
            seed: self.seed,
            placements: self.tiles,
            max_draws: self
                .max_draws
                .unwrap_or_else(|| self.tiles.saturating_mul(DEFAULT_DRAW_BUDGET_FACTOR)),
        }
    }

    /// Log level matching the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Run a fill as described by `cli` and return the board summary
///
/// # Errors
///
/// Returns an error if the fill configuration is invalid or surveying the
/// finished board fails
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.fill_config();
    let mut fill = RandomFill::new(config)?;

    let progress = if cli.should_show_progress() {
        FillProgress::new(config.placements)
    } else {
        FillProgress::hidden()
    };
    fill.run(|state, draw| progress.record(state, draw));
    progress.finish();

    if fill.placed() < config.placements {
        log::warn!(
            "Draw budget of {} exhausted after placing {} of {} tiles",
            config.max_draws,
            fill.placed(),
            config.placements
        );
    }

    let board = fill.into_board();
    let features = survey(&board)?;
    Ok(render_summary(&board, &features))
}
