//! Command-line interface for headless sorting playback

use crate::algorithm::controller::{RunController, RunPhase};
use crate::algorithm::registry::resolve_assignment;
use crate::data::Dataset;
use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_ARRAY_SIZE, DEFAULT_DELAY_POSITION,
    DEFAULT_LEFT_ALGORITHM, DEFAULT_OUTPUT, DEFAULT_RIGHT_ALGORITHM, DEFAULT_SEED,
    DELAY_SLIDER_MAX_POSITION, DELAY_SLIDER_MIN_POSITION, GIF_FRAME_DELAY_MS, LANE_COUNT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::{CounterKind, LaneRenderer};
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sortvis")]
#[command(
    author,
    version,
    about = "Watch two sorting algorithms race on the same data"
)]
/// Command-line arguments for a visualization session
pub struct Cli {
    /// Algorithm for the first lane
    #[arg(short, long, default_value = DEFAULT_LEFT_ALGORITHM)]
    pub left: String,

    /// Algorithm for the second lane, or "none" for a single lane
    #[arg(short, long, default_value = DEFAULT_RIGHT_ALGORITHM)]
    pub right: String,

    /// Number of values to sort
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Delay slider position (1 = no delay, 100 = about one second)
    #[arg(short, long, default_value_t = DEFAULT_DELAY_POSITION)]
    pub delay: f64,

    /// Random seed for reproducible shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Sort the ascending sequence instead of a shuffled one
    #[arg(long)]
    pub no_shuffle: bool,

    /// Single-step this many comparisons before playing the rest
    #[arg(long, default_value_t = 0)]
    pub steps: usize,

    /// Record the playback as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Where to write the animation
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Number of lanes drawn: one in single-lane mode, otherwise all
    pub fn visible_lanes(&self) -> usize {
        if matches!(resolve_assignment(1, &self.right), Ok(None)) {
            1
        } else {
            LANE_COUNT
        }
    }
}

/// Final numbers of one lane after a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSummary {
    /// Lane index
    pub lane: usize,
    /// Algorithm that ran in the lane
    pub algorithm: String,
    /// Complexity label of the algorithm
    pub complexity: &'static str,
    /// Comparisons issued
    pub comparisons: usize,
    /// Swaps performed
    pub swaps: usize,
    /// Whether the lane ended in ascending order
    pub sorted: bool,
}

/// Renderer used by a session: GIF capture and progress bars, both optional
#[derive(Default)]
pub struct SessionRenderer {
    /// Capture for the animation, when requested
    pub capture: Option<VisualizationCapture>,
    /// Terminal progress, unless quiet
    pub progress: Option<ProgressManager>,
}

impl LaneRenderer for SessionRenderer {
    fn render_lane(&mut self, lane: usize, values: &[u32], red: &[usize], green: &[usize]) {
        if let Some(ref mut capture) = self.capture {
            capture.render_lane(lane, values, red, green);
        }
    }

    fn update_counter(&mut self, kind: CounterKind, lane: usize, value: usize) {
        if let Some(ref progress) = self.progress {
            progress.record(kind, lane, value);
        }
    }
}

/// Runs one visualization from the command-line arguments
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Sort, optionally export the animation, and report per-lane results
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The delay position is outside the slider range
    /// - The array size is zero
    /// - A lane is assigned an unknown algorithm, or lane 0 is set to `none`
    /// - The animation cannot be written
    pub fn run(&mut self) -> Result<Vec<LaneSummary>> {
        self.validate()?;

        let dataset = Dataset::new(LANE_COUNT, self.cli.size, self.cli.seed)?;
        let renderer = SessionRenderer {
            capture: self.cli.visualize.then(|| {
                VisualizationCapture::new(self.cli.visible_lanes(), CANVAS_WIDTH, CANVAS_HEIGHT)
            }),
            progress: None,
        };

        let mut controller = RunController::new(dataset, renderer);
        controller.set_algorithm(0, &self.cli.left)?;
        controller.set_algorithm(1, &self.cli.right)?;
        controller.set_delay_position(self.cli.delay);
        if !self.cli.no_shuffle {
            controller.shuffle_arrays();
        }

        if self.cli.should_show_progress() {
            let progress = self.progress_bars(&controller);
            controller.renderer_mut().progress = Some(progress);
        }

        self.play(&mut controller)?;

        if let Some(ref progress) = controller.renderer().progress {
            progress.finish();
        }

        let summaries = Self::summarize(&controller);
        if let Some(ref capture) = controller.renderer().capture {
            capture.export_gif(&self.cli.output, GIF_FRAME_DELAY_MS)?;
        }

        if !self.cli.quiet {
            self.report(&summaries);
        }
        Ok(summaries)
    }

    fn validate(&self) -> Result<()> {
        if !(DELAY_SLIDER_MIN_POSITION..=DELAY_SLIDER_MAX_POSITION).contains(&self.cli.delay) {
            return Err(invalid_parameter(
                "delay",
                &self.cli.delay,
                &format!(
                    "must be between {DELAY_SLIDER_MIN_POSITION} and {DELAY_SLIDER_MAX_POSITION}"
                ),
            ));
        }
        Ok(())
    }

    fn play(&self, controller: &mut RunController<SessionRenderer>) -> Result<()> {
        if self.cli.steps == 0 {
            controller.start()?;
        } else {
            for _ in 0..self.cli.steps {
                controller.step_forward()?;
                controller.poll(Instant::now());
                if controller.phase() == RunPhase::Idle {
                    break;
                }
            }
            controller.pause_resume();
        }
        controller.run_until_settled();
        Ok(())
    }

    fn progress_bars(&self, controller: &RunController<SessionRenderer>) -> ProgressManager {
        let size = self.cli.size as u64;
        let expected = size * size.saturating_sub(1) / 2;
        let mut progress = ProgressManager::new();
        for lane in 0..LANE_COUNT {
            if let Some(algorithm) = controller.assignment(lane) {
                progress.add_lane(lane, algorithm.name(), expected);
            }
        }
        progress
    }

    fn summarize(controller: &RunController<SessionRenderer>) -> Vec<LaneSummary> {
        controller
            .dataset()
            .lanes()
            .iter()
            .enumerate()
            .filter_map(|(index, lane)| {
                controller.assignment(index).map(|algorithm| LaneSummary {
                    lane: index,
                    algorithm: algorithm.name().to_string(),
                    complexity: algorithm.complexity(),
                    comparisons: lane.comparisons(),
                    swaps: lane.swaps(),
                    sorted: lane.values().is_sorted(),
                })
            })
            .collect()
    }

    // Allow print for the end-of-run summary
    #[allow(clippy::print_stderr)]
    fn report(&self, summaries: &[LaneSummary]) {
        for summary in summaries {
            eprintln!(
                "{:>14} {:<11} {:>8} comparisons {:>8} swaps{}",
                summary.algorithm,
                summary.complexity,
                summary.comparisons,
                summary.swaps,
                if summary.sorted { "" } else { " (unfinished)" }
            );
        }
        if self.cli.visualize {
            eprintln!("Animation written to {}", self.cli.output.display());
        }
    }
}
