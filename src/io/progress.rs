//! Progress display for sheet assembly and export

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>8}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// One progress bar reused across the stages of a run
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Reset the bar for a new stage with `total` steps
    pub fn start_stage(&self, stage: &str, total: usize) {
        self.bar.set_prefix(stage.to_string());
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Mark one step done, labelled with what was just finished
    pub fn advance(&self, label: &str) {
        self.bar.set_message(label.to_string());
        self.bar.inc(1);
    }

    /// Steps completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the bar has been finished and cleared
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
