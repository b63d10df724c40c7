//! Input/output: command line, progress display, summaries, errors, and defaults

/// Command-line arguments and the fill entry point
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error type shared by every board operation
pub mod error;
/// Progress display for random fills
pub mod progress;
/// Plain-text board summaries
pub mod summary;
