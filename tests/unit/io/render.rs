//! Tests for the renderer interface

#[cfg(test)]
mod tests {
    use sortvis::algorithm::controller::RunController;
    use sortvis::data::Dataset;
    use sortvis::io::render::{CounterKind, LaneRenderer, NullRenderer};

    // Tests the null renderer accepts updates for any lane
    // Verified by panicking on unknown lanes
    #[test]
    fn test_null_renderer_accepts_everything() {
        let mut renderer = NullRenderer;
        renderer.render_lane(0, &[1, 2, 3], &[0], &[2]);
        renderer.render_lane(7, &[], &[], &[]);
        renderer.update_counter(CounterKind::Comparisons, 0, 10);
        renderer.update_counter(CounterKind::Swaps, 9, 3);
    }

    // Tests a full run against the null renderer
    // Verified by rendering through a missing lane
    #[test]
    fn test_null_renderer_drives_run() {
        let mut dataset = Dataset::new(2, 1, 0).unwrap();
        dataset.load(&[4, 2, 3, 1]).unwrap();
        let mut controller = RunController::new(dataset, NullRenderer);
        controller.start().unwrap();
        controller.run_until_settled();
        assert_eq!(controller.dataset().lane(0).unwrap().values(), &[1, 2, 3, 4]);
    }

    // Tests counter kinds are distinct
    // Verified by deriving equality on the discriminant only
    #[test]
    fn test_counter_kinds() {
        assert_ne!(CounterKind::Comparisons, CounterKind::Swaps);
        assert_eq!(CounterKind::Swaps, CounterKind::Swaps);
    }
}
