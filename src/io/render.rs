//! Interface to whatever draws the lanes and their counters

/// Which per-lane counter changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    /// Number of comparisons issued
    Comparisons,
    /// Number of swaps performed
    Swaps,
}

/// Receives every visual update produced while a lane is sorted
///
/// Implementations must accept calls for lanes they do not display, since
/// the engine renders both lanes regardless of whether comparison mode is on.
pub trait LaneRenderer {
    /// Redraw one lane, highlighting `red` indices (under examination) and
    /// `green` indices (structurally significant, such as the pivot range)
    fn render_lane(&mut self, lane: usize, values: &[u32], red: &[usize], green: &[usize]);

    /// Publish a new counter value for a lane
    fn update_counter(&mut self, kind: CounterKind, lane: usize, value: usize);
}

/// Renderer that discards every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl LaneRenderer for NullRenderer {
    fn render_lane(&mut self, _lane: usize, _values: &[u32], _red: &[usize], _green: &[usize]) {}

    fn update_counter(&mut self, _kind: CounterKind, _lane: usize, _value: usize) {}
}
