//! Board constants and runtime configuration defaults

// Road walks on catalog tiles either close at their start or run off the board
/// Hops allowed per placed tile before a road walk is abandoned
pub const ROAD_STEPS_PER_TILE: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible boards
pub const DEFAULT_SEED: u64 = 42;

/// Default number of tiles to add around the starting tile
pub const DEFAULT_PLACEMENTS: usize = 40;

/// Draws allowed per requested placement before a fill gives up
pub const DEFAULT_DRAW_BUDGET_FACTOR: usize = 4;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
