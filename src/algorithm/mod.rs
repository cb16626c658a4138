/// Counted comparisons that suspend their lane
pub mod comparator;
/// Run controller orchestrating both lanes
pub mod controller;
/// Resumable bubble, selection, insertion and quick sort drivers
pub mod drivers;
/// Algorithm names and driver construction
pub mod registry;
/// Per-lane wait points and shared run flags
pub mod suspension;
