//! Working arrays and counters for every lane

use crate::io::error::{Result, VisualizerError};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// One sorting context: the values being sorted and what it cost so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lane {
    values: Vec<u32>,
    comparisons: usize,
    swaps: usize,
}

impl Lane {
    /// Current order of the values
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of values in the lane
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the lane holds no values
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Comparisons issued since the last counter reset
    pub const fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Swaps performed since the last counter reset
    pub const fn swaps(&self) -> usize {
        self.swaps
    }

    /// Whether the value at `i` is strictly greater than the value at `j`
    ///
    /// Indices past the end compare as absent values, which are never greater
    /// than a present one.
    pub fn greater(&self, i: usize, j: usize) -> bool {
        self.values.get(i) > self.values.get(j)
    }

    /// Count one more comparison and return the new total
    pub const fn record_comparison(&mut self) -> usize {
        self.comparisons += 1;
        self.comparisons
    }

    /// Exchange two values, count the swap and return the new total
    ///
    /// Indices past the end leave the lane and its counter unchanged.
    pub fn swap(&mut self, i: usize, j: usize) -> usize {
        if i < self.values.len() && j < self.values.len() {
            self.values.swap(i, j);
            self.swaps += 1;
        }
        self.swaps
    }

    /// Zero both counters
    pub const fn reset_counters(&mut self) {
        self.comparisons = 0;
        self.swaps = 0;
    }
}

/// Owns the lanes and the random source used to shuffle them
///
/// Every lane always starts from the same sequence: lane 0 is generated or
/// shuffled and then copied into the others.
#[derive(Debug, Clone)]
pub struct Dataset {
    lanes: Vec<Lane>,
    rng: StdRng,
}

impl Dataset {
    /// Create `lane_count` lanes holding `1..=size` in ascending order
    ///
    /// # Errors
    ///
    /// Returns [`VisualizerError::InvalidSize`] if `size` is zero
    pub fn new(lane_count: usize, size: usize, seed: u64) -> Result<Self> {
        let mut dataset = Self {
            lanes: vec![Lane::default(); lane_count.max(1)],
            rng: StdRng::seed_from_u64(seed),
        };
        dataset.generate(size)?;
        Ok(dataset)
    }

    /// Replace every lane with the ascending sequence `1..=size`
    ///
    /// Counters are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`VisualizerError::InvalidSize`] if `size` is zero
    pub fn generate(&mut self, size: usize) -> Result<()> {
        if size < 1 {
            return Err(VisualizerError::InvalidSize { size });
        }
        let upper = u32::try_from(size)
            .ok()
            .ok_or(VisualizerError::InvalidSize { size })?;
        self.copy_into_lanes((1..=upper).collect());
        Ok(())
    }

    /// Replace every lane with a copy of `values`
    ///
    /// # Errors
    ///
    /// Returns [`VisualizerError::InvalidSize`] if `values` is empty
    pub fn load(&mut self, values: &[u32]) -> Result<()> {
        if values.is_empty() {
            return Err(VisualizerError::InvalidSize { size: 0 });
        }
        self.copy_into_lanes(values.to_vec());
        Ok(())
    }

    /// Fisher-Yates shuffle of lane 0, then copy it into every other lane
    pub fn shuffle(&mut self) {
        let Some(first) = self.lanes.first_mut() else {
            return;
        };
        for i in (1..first.values.len()).rev() {
            let j = self.rng.random_range(0..=i);
            first.values.swap(i, j);
        }
        let shuffled = first.values.clone();
        self.copy_into_lanes(shuffled);
    }

    /// Zero the counters of every lane
    pub fn reset_counters(&mut self) {
        for lane in &mut self.lanes {
            lane.reset_counters();
        }
    }

    /// Number of lanes
    pub const fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Number of values in each lane
    pub fn size(&self) -> usize {
        self.lanes.first().map_or(0, Lane::len)
    }

    /// Lane by index
    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    /// Mutable lane by index
    pub fn lane_mut(&mut self, index: usize) -> Option<&mut Lane> {
        self.lanes.get_mut(index)
    }

    /// All lanes in index order
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    fn copy_into_lanes(&mut self, values: Vec<u32>) {
        for lane in &mut self.lanes {
            lane.values.clone_from(&values);
        }
    }
}
