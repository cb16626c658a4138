//! Visualizer constants and runtime configuration defaults

/// Number of side-by-side sorting lanes
pub const LANE_COUNT: usize = 2;

/// Array size used when none is given
pub const DEFAULT_ARRAY_SIZE: usize = 50;

// Delay slider: linear position mapped logarithmically onto milliseconds
/// Lowest slider position
pub const DELAY_SLIDER_MIN_POSITION: f64 = 1.0;
/// Highest slider position
pub const DELAY_SLIDER_MAX_POSITION: f64 = 100.0;
/// Slider value at the lowest position (one more than the delay in ms)
pub const DELAY_SLIDER_MIN_VALUE: f64 = 1.0;
/// Slider value at the highest position (one more than the delay in ms)
pub const DELAY_SLIDER_MAX_VALUE: f64 = 1001.0;
/// Default slider position, which maps to no delay
pub const DEFAULT_DELAY_POSITION: f64 = 1.0;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;
/// Algorithm assigned to the first lane
pub const DEFAULT_LEFT_ALGORITHM: &str = "bubbleSort";
/// Algorithm assigned to the second lane
pub const DEFAULT_RIGHT_ALGORITHM: &str = "quickSort";

// Canvas geometry
/// Width of the rendered canvas in pixels
pub const CANVAS_WIDTH: u32 = 640;
/// Height of the rendered canvas in pixels
pub const CANVAS_HEIGHT: u32 = 360;
/// Padding around and between lanes in pixels
pub const CANVAS_PADDING: f64 = 16.0;
/// Gap between bars as a fraction of the bar width
pub const BAR_MARGIN_RATIO: f64 = 0.25;

// Bar colours
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Bars without a highlight
pub const BAR_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Bars currently being examined
pub const RED_HIGHLIGHT_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Structurally significant bars such as the pivot range
pub const GREEN_HIGHLIGHT_COLOR: [u8; 4] = [0, 128, 0, 255];

// Output settings
/// Default path of the exported animation
pub const DEFAULT_OUTPUT: &str = "sort.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
// Keeps encoding time and file size bounded for large arrays
/// Upper bound on the number of frames written to a GIF
pub const MAX_GIF_FRAMES: usize = 1500;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
