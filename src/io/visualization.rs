//! Render capture and GIF generation for sorting playback

use crate::io::configuration::{
    BACKGROUND_COLOR, BAR_COLOR, BAR_MARGIN_RATIO, CANVAS_PADDING, GREEN_HIGHLIGHT_COLOR,
    MAX_GIF_FRAMES, RED_HIGHLIGHT_COLOR, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{Result, VisualizerError};
use crate::io::render::{CounterKind, LaneRenderer};
use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

/// Last rendered state of one lane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneView {
    /// Values in drawing order
    pub values: Vec<u32>,
    /// Indices drawn in red
    pub red: Vec<usize>,
    /// Indices drawn in green, taking precedence over red
    pub green: Vec<usize>,
}

/// Captures lane renders for later export as an animation
///
/// Every render updates the lane's view; a snapshot of all visible lanes is
/// kept every `stride` renders. When the snapshot buffer fills up, every
/// other snapshot is dropped and the stride doubles, so memory stays bounded
/// no matter how long the sort runs.
pub struct VisualizationCapture {
    views: Vec<Option<LaneView>>,
    snapshots: Vec<Vec<Option<LaneView>>>,
    stride: usize,
    render_count: usize,
    width: u32,
    height: u32,
}

impl VisualizationCapture {
    /// Capture the first `visible_lanes` lanes onto a `width` x `height` canvas
    ///
    /// Renders for lanes past `visible_lanes` are ignored, which is how
    /// single-lane mode hides the second lane.
    pub fn new(visible_lanes: usize, width: u32, height: u32) -> Self {
        Self {
            views: vec![None; visible_lanes.max(1)],
            snapshots: Vec::new(),
            stride: 1,
            render_count: 0,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Number of renders received for visible lanes
    pub const fn render_count(&self) -> usize {
        self.render_count
    }

    /// Number of snapshots currently kept
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Latest view of a lane, if it was rendered at all
    pub fn view(&self, lane: usize) -> Option<&LaneView> {
        self.views.get(lane).and_then(Option::as_ref)
    }

    /// Draw the current state of every visible lane
    pub fn current_frame(&self) -> RgbaImage {
        self.draw(&self.views)
    }

    /// Export the captured snapshots as a GIF with automatic frame skipping
    ///
    /// Frames are skipped when the requested delay is shorter than viewers
    /// reliably display, keeping the apparent playback speed. The final state
    /// is always the last frame and is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No render was captured
    /// - The output directory or file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.render_count == 0 {
            return Err(VisualizerError::NothingRecorded);
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| VisualizerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| VisualizerError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(frames))
            .map_err(|e| VisualizerError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn record(&mut self, lane: usize, values: &[u32], red: &[usize], green: &[usize]) {
        let Some(view) = self.views.get_mut(lane) else {
            return;
        };
        *view = Some(LaneView {
            values: values.to_vec(),
            red: red.to_vec(),
            green: green.to_vec(),
        });

        self.render_count += 1;
        if self.render_count % self.stride == 0 {
            self.snapshots.push(self.views.clone());
        }

        // Thin out the history once it holds twice the frame budget
        if self.snapshots.len() >= 2 * MAX_GIF_FRAMES {
            let mut index = 0;
            self.snapshots.retain(|_| {
                index += 1;
                index % 2 == 0
            });
            self.stride *= 2;
        }
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let delay = image::Delay::from_numer_denom_ms(delay_ms, 1);
        let mut frames: Vec<Frame> = self
            .snapshots
            .iter()
            .skip(skip_factor - 1)
            .step_by(skip_factor)
            .map(|snapshot| Frame::from_parts(self.draw(snapshot), 0, 0, delay))
            .collect();

        // Final state displays longer for better visibility
        let final_delay = image::Delay::from_numer_denom_ms(delay_ms * 25, 1);
        frames.push(Frame::from_parts(self.current_frame(), 0, 0, final_delay));
        frames
    }

    fn draw(&self, lanes: &[Option<LaneView>]) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(self.width, self.height, Rgba(BACKGROUND_COLOR));
        let lane_count = self.views.len() as f64;
        let canvas_width = f64::from(self.width);
        let canvas_height = f64::from(self.height);
        let bar_height_max =
            (canvas_height - (lane_count + 1.0) * CANVAS_PADDING) / lane_count;

        for (lane, view) in lanes.iter().enumerate() {
            let Some(view) = view.as_ref().filter(|v| !v.values.is_empty()) else {
                continue;
            };
            let count = view.values.len() as f64;

            let bar_width = (canvas_width - 2.0 * CANVAS_PADDING)
                / ((1.0 + BAR_MARGIN_RATIO) * count - BAR_MARGIN_RATIO);
            let bar_margin = BAR_MARGIN_RATIO * bar_width;
            let lane_top = lane as f64 * (bar_height_max + CANVAS_PADDING);

            for (i, &value) in view.values.iter().enumerate() {
                let bar_height = f64::from(value) / count * bar_height_max;
                let color = if view.green.contains(&i) {
                    GREEN_HIGHLIGHT_COLOR
                } else if view.red.contains(&i) {
                    RED_HIGHLIGHT_COLOR
                } else {
                    BAR_COLOR
                };
                fill_rect(
                    &mut img,
                    CANVAS_PADDING + i as f64 * (bar_width + bar_margin),
                    CANVAS_PADDING + (bar_height_max - bar_height) + lane_top,
                    bar_width,
                    bar_height,
                    Rgba(color),
                );
            }
        }
        img
    }
}

// Pixel-snapped rectangle, at least one pixel wide, clipped to the image
fn fill_rect(img: &mut RgbaImage, x: f64, y: f64, width: f64, height: f64, color: Rgba<u8>) {
    if width <= 0.0 || height <= 0.0 {
        return;
    }
    let x0 = x.round().max(0.0) as u32;
    let y0 = y.round().max(0.0) as u32;
    let x1 = ((x + width).round().max(0.0) as u32).max(x0 + 1).min(img.width());
    let y1 = ((y + height).round().max(0.0) as u32).max(y0 + 1).min(img.height());

    for py in y0..y1 {
        for px in x0..x1 {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

impl LaneRenderer for VisualizationCapture {
    fn render_lane(&mut self, lane: usize, values: &[u32], red: &[usize], green: &[usize]) {
        self.record(lane, values, red, green);
    }

    fn update_counter(&mut self, _kind: CounterKind, _lane: usize, _value: usize) {}
}
