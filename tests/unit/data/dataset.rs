//! Tests for lane arrays, counters, generation and shuffling

#[cfg(test)]
mod tests {
    use sortvis::VisualizerError;
    use sortvis::data::{Dataset, Lane};

    // Tests generation fills every lane with the ascending sequence
    // Verified by generating 0..size
    #[test]
    fn test_new_generates_ascending_lanes() {
        let dataset = Dataset::new(2, 5, 1).unwrap();

        assert_eq!(dataset.lane_count(), 2);
        assert_eq!(dataset.size(), 5);
        for lane in dataset.lanes() {
            assert_eq!(lane.values(), &[1, 2, 3, 4, 5]);
            assert_eq!(lane.comparisons(), 0);
            assert_eq!(lane.swaps(), 0);
        }
    }

    // Tests that an empty array is rejected
    // Verified by accepting size zero
    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Dataset::new(2, 0, 1),
            Err(VisualizerError::InvalidSize { size: 0 })
        ));

        let mut dataset = Dataset::new(2, 3, 1).unwrap();
        assert!(dataset.generate(0).is_err());
        assert!(dataset.load(&[]).is_err());
        assert_eq!(dataset.size(), 3);
    }

    // Tests that shuffling yields a permutation shared by every lane
    // Verified by shuffling each lane with its own draw
    #[test]
    fn test_shuffle_is_shared_permutation() {
        let mut dataset = Dataset::new(2, 50, 3).unwrap();
        dataset.shuffle();

        let first = dataset.lane(0).unwrap().values().to_vec();
        assert_eq!(dataset.lane(1).unwrap().values(), first.as_slice());
        assert_ne!(first, (1..=50).collect::<Vec<u32>>());

        let mut sorted = first;
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=50).collect::<Vec<u32>>());
    }

    // Tests that equal seeds shuffle identically
    // Verified by seeding from entropy
    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Dataset::new(2, 30, 99).unwrap();
        let mut b = Dataset::new(2, 30, 99).unwrap();
        a.shuffle();
        b.shuffle();
        assert_eq!(a.lanes(), b.lanes());

        let mut c = Dataset::new(2, 30, 100).unwrap();
        c.shuffle();
        assert_ne!(a.lanes(), c.lanes());
    }

    // Tests that a one-element array survives shuffling
    // Verified by drawing from an empty range
    #[test]
    fn test_shuffle_single_element() {
        let mut dataset = Dataset::new(2, 1, 5).unwrap();
        dataset.shuffle();
        assert_eq!(dataset.lane(0).unwrap().values(), &[1]);
    }

    // Tests loading replaces the arrays but keeps counters
    // Verified by resetting counters on load
    #[test]
    fn test_load_copies_values() {
        let mut dataset = Dataset::new(2, 3, 1).unwrap();
        dataset.lane_mut(0).unwrap().record_comparison();
        dataset.load(&[9, 4, 4, 1]).unwrap();

        assert_eq!(dataset.size(), 4);
        assert_eq!(dataset.lane(1).unwrap().values(), &[9, 4, 4, 1]);
        assert_eq!(dataset.lane(0).unwrap().comparisons(), 1);
    }

    // Tests counting and resetting
    // Verified by returning the count before incrementing
    #[test]
    fn test_counters() {
        let mut dataset = Dataset::new(2, 3, 1).unwrap();
        let lane = dataset.lane_mut(1).unwrap();

        assert_eq!(lane.record_comparison(), 1);
        assert_eq!(lane.record_comparison(), 2);
        assert_eq!(lane.swap(0, 2), 1);
        assert_eq!(lane.values(), &[3, 2, 1]);

        dataset.reset_counters();
        let lane = dataset.lane(1).unwrap();
        assert_eq!(lane.comparisons(), 0);
        assert_eq!(lane.swaps(), 0);
        assert_eq!(lane.values(), &[3, 2, 1]);
    }

    // Tests the strict greater-than used by every comparison
    // Verified by treating equal values as greater
    #[test]
    fn test_greater() {
        let mut dataset = Dataset::new(1, 1, 1).unwrap();
        dataset.load(&[3, 1, 3]).unwrap();
        let lane = dataset.lane(0).unwrap();

        assert!(lane.greater(0, 1));
        assert!(!lane.greater(1, 0));
        assert!(!lane.greater(0, 2));
        assert!(!lane.greater(5, 0));
    }

    // Tests swaps past the end are ignored
    // Verified by swapping without a bounds check
    #[test]
    fn test_swap_out_of_range() {
        let mut dataset = Dataset::new(1, 3, 1).unwrap();
        let lane = dataset.lane_mut(0).unwrap();
        assert_eq!(lane.swap(0, 3), 0);
        assert_eq!(lane.values(), &[1, 2, 3]);
    }

    // Tests lanes out of range are absent
    // Verified by clamping the index
    #[test]
    fn test_lane_out_of_range() {
        let mut dataset = Dataset::new(2, 3, 1).unwrap();
        assert!(dataset.lane(2).is_none());
        assert!(dataset.lane_mut(2).is_none());
    }

    // Tests the empty default lane
    // Verified by defaulting to one element
    #[test]
    fn test_default_lane() {
        let lane = Lane::default();
        assert!(lane.is_empty());
        assert_eq!(lane.len(), 0);
    }
}
