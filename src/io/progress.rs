//! Progress display for a random fill

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::simulation::executor::{Draw, RandomFill};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FILL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks placed and discarded tiles on a single progress bar
pub struct FillProgress {
    bar: ProgressBar,
}

impl FillProgress {
    /// Create a visible bar sized to the placement target
    pub fn new(placements: usize) -> Self {
        let bar = ProgressBar::new(placements as u64);
        bar.set_style(FILL_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report one draw
    pub fn record(&self, fill: &RandomFill, draw: &Draw) {
        if matches!(draw, Draw::Placed { .. }) {
            self.bar.set_position(fill.placed() as u64);
        }
        self.bar
            .set_message(format!("({} discarded)", fill.discarded()));
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
