//! Per-lane progress bars for a running visualization

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::render::CounterKind;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LANE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}} comparisons, {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows comparisons and swaps of every lane while the sort runs
///
/// Bar length is the expected number of comparisons; it grows if a lane
/// needs more than that.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    lane_bars: Vec<Option<ProgressBar>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager without any lanes
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            lane_bars: Vec::new(),
        }
    }

    /// Add a bar for `lane`, labelled with its algorithm
    pub fn add_lane(&mut self, lane: usize, label: &str, expected_comparisons: u64) {
        if lane >= self.lane_bars.len() {
            self.lane_bars.resize(lane + 1, None);
        }
        let bar = ProgressBar::new(expected_comparisons.max(1));
        bar.set_style(LANE_STYLE.clone());
        bar.set_prefix(label.to_string());
        bar.set_message("0 swaps");
        if let Some(slot) = self.lane_bars.get_mut(lane) {
            *slot = Some(self.multi_progress.add(bar));
        }
    }

    /// Reflect a counter change on the lane's bar
    pub fn record(&self, kind: CounterKind, lane: usize, value: usize) {
        let Some(bar) = self.lane_bars.get(lane).and_then(Option::as_ref) else {
            return;
        };
        match kind {
            CounterKind::Comparisons => {
                let position = value as u64;
                if bar.length().is_some_and(|length| position > length) {
                    bar.set_length(position);
                }
                bar.set_position(position);
            }
            CounterKind::Swaps => bar.set_message(format!("{value} swaps")),
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        for bar in self.lane_bars.iter().flatten() {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
