//! Tests for render capture and GIF export

#[cfg(test)]
mod tests {
    use sortvis::VisualizerError;
    use sortvis::io::configuration::{
        BACKGROUND_COLOR, BAR_COLOR, GREEN_HIGHLIGHT_COLOR, MAX_GIF_FRAMES, RED_HIGHLIGHT_COLOR,
    };
    use sortvis::io::render::{CounterKind, LaneRenderer};
    use sortvis::io::visualization::{LaneView, VisualizationCapture};

    fn count_pixels(capture: &VisualizationCapture, color: [u8; 4]) -> usize {
        capture
            .current_frame()
            .pixels()
            .filter(|pixel| pixel.0 == color)
            .count()
    }

    // Tests renders update the lane view
    // Verified by storing the first render only
    #[test]
    fn test_render_updates_view() {
        let mut capture = VisualizationCapture::new(2, 64, 32);
        assert!(capture.view(0).is_none());

        capture.render_lane(0, &[2, 1], &[0, 1], &[]);
        capture.render_lane(0, &[1, 2], &[], &[1]);

        assert_eq!(capture.render_count(), 2);
        assert_eq!(
            capture.view(0),
            Some(&LaneView {
                values: vec![1, 2],
                red: vec![],
                green: vec![1],
            })
        );
        assert!(capture.view(1).is_none());
    }

    // Tests renders for hidden lanes are ignored
    // Verified by capturing every lane regardless of mode
    #[test]
    fn test_hidden_lane_ignored() {
        let mut capture = VisualizationCapture::new(1, 64, 32);
        capture.render_lane(1, &[1, 2, 3], &[], &[]);

        assert_eq!(capture.render_count(), 0);
        assert!(capture.view(1).is_none());
    }

    // Tests frames have the canvas size and draw bars
    // Verified by drawing onto a zero-sized image
    #[test]
    fn test_current_frame_draws_bars() {
        let mut capture = VisualizationCapture::new(1, 80, 60);
        let empty = capture.current_frame();
        assert_eq!(empty.dimensions(), (80, 60));
        assert!(empty.pixels().all(|pixel| pixel.0 == BACKGROUND_COLOR));

        capture.render_lane(0, &[3, 1, 2], &[], &[]);
        assert!(count_pixels(&capture, BAR_COLOR) > 0);
    }

    // Tests green takes precedence over red on the same bar
    // Verified by checking red before green
    #[test]
    fn test_green_over_red() {
        let mut capture = VisualizationCapture::new(1, 80, 60);
        capture.render_lane(0, &[2, 2], &[0], &[0]);

        assert!(count_pixels(&capture, GREEN_HIGHLIGHT_COLOR) > 0);
        assert_eq!(count_pixels(&capture, RED_HIGHLIGHT_COLOR), 0);
        assert!(count_pixels(&capture, BAR_COLOR) > 0);
    }

    // Tests counters do not affect the capture
    // Verified by counting counter updates as renders
    #[test]
    fn test_counter_updates_ignored() {
        let mut capture = VisualizationCapture::new(2, 64, 32);
        capture.update_counter(CounterKind::Comparisons, 0, 5);
        assert_eq!(capture.render_count(), 0);
        assert_eq!(capture.snapshot_count(), 0);
    }

    // Tests the snapshot history stays bounded
    // Verified by never thinning the buffer
    #[test]
    fn test_snapshots_are_thinned() {
        let mut capture = VisualizationCapture::new(1, 16, 16);
        for step in 0..(2 * MAX_GIF_FRAMES) {
            capture.render_lane(0, &[1, 2], &[step % 2], &[]);
        }

        assert_eq!(capture.render_count(), 2 * MAX_GIF_FRAMES);
        assert_eq!(capture.snapshot_count(), MAX_GIF_FRAMES);

        for _ in 0..(4 * MAX_GIF_FRAMES) {
            capture.render_lane(0, &[1, 2], &[], &[]);
        }
        assert!(capture.snapshot_count() < 2 * MAX_GIF_FRAMES);
    }

    // Tests export requires at least one render
    // Verified by writing an empty animation
    #[test]
    fn test_export_without_renders_fails() {
        let dir = tempfile::tempdir().unwrap();
        let capture = VisualizationCapture::new(2, 64, 32);

        let result = capture.export_gif(&dir.path().join("empty.gif"), 20);
        assert!(matches!(result, Err(VisualizerError::NothingRecorded)));
        assert!(!dir.path().join("empty.gif").exists());
    }

    // Tests GIF export creates missing directories and a decodable file
    // Verified by skipping directory creation
    #[test]
    fn test_export_gif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sort.gif");

        let mut capture = VisualizationCapture::new(2, 64, 32);
        capture.render_lane(0, &[3, 1, 2], &[0, 1], &[]);
        capture.render_lane(1, &[3, 1, 2], &[0, 2], &[0, 2]);
        capture.render_lane(0, &[1, 3, 2], &[], &[]);

        capture.export_gif(&path, 5).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 32));
    }
}
