//! Resumable sorting drivers
//!
//! Each driver is a state machine that runs synchronously up to its next
//! comparison and then hands control back with [`DriverStep::Compare`]. The
//! run controller resumes it with the comparison's [`Outcome`] once the lane's
//! suspension resolves. Renders and swaps happen only while a driver is being
//! advanced, never while it is suspended.

use crate::algorithm::comparator::Outcome;
use crate::data::Lane;
use crate::io::render::{CounterKind, LaneRenderer};

/// What a driver needs next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStep {
    /// Compare the values at `i` and `j`, then resume with the outcome
    Compare {
        /// Left operand index
        i: usize,
        /// Right operand index
        j: usize,
    },
    /// The driver has returned, either sorted or terminated
    Finished,
}

/// Mutable view of one lane handed to a driver while it advances
pub struct LaneContext<'a> {
    index: usize,
    lane: &'a mut Lane,
    renderer: &'a mut dyn LaneRenderer,
}

impl<'a> LaneContext<'a> {
    /// Wrap lane `index` and the renderer it reports to
    pub fn new(index: usize, lane: &'a mut Lane, renderer: &'a mut dyn LaneRenderer) -> Self {
        Self {
            index,
            lane,
            renderer,
        }
    }

    /// Index of the lane being sorted
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of values in the lane
    pub const fn len(&self) -> usize {
        self.lane.len()
    }

    /// Whether the lane holds no values
    pub const fn is_empty(&self) -> bool {
        self.lane.is_empty()
    }

    /// Read-only access to the lane
    pub const fn lane(&self) -> &Lane {
        &*self.lane
    }

    /// Redraw the lane with the given highlights
    pub fn render(&mut self, red: &[usize], green: &[usize]) {
        self.renderer
            .render_lane(self.index, self.lane.values(), red, green);
    }

    /// Swap two values and publish the new swap count
    pub fn swap(&mut self, i: usize, j: usize) {
        let count = self.lane.swap(i, j);
        self.renderer
            .update_counter(CounterKind::Swaps, self.index, count);
    }

    pub(crate) fn record_comparison(&mut self) {
        let count = self.lane.record_comparison();
        self.renderer
            .update_counter(CounterKind::Comparisons, self.index, count);
    }
}

/// A sorting routine that can be suspended after every comparison
pub trait SortDriver {
    /// Run from the beginning up to the first comparison
    fn begin(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep;

    /// Continue with the outcome of the comparison last requested
    fn resume(&mut self, ctx: &mut LaneContext<'_>, outcome: Outcome) -> DriverStep;
}

/// Adjacent-pair passes with a shrinking upper bound
///
/// The bound drops to the position of the last swap in each pass, so a pass
/// without swaps ends the sort.
#[derive(Debug, Default, Clone)]
pub struct BubbleSort {
    n: usize,
    newn: usize,
    i: usize,
}

impl BubbleSort {
    fn start_pass(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        if self.n <= 1 {
            return DriverStep::Finished;
        }
        self.newn = 0;
        self.i = 1;
        self.compare_next(ctx)
    }

    fn compare_next(&self, ctx: &mut LaneContext<'_>) -> DriverStep {
        let (i, j) = (self.i - 1, self.i);
        ctx.render(&[i, j], &[]);
        DriverStep::Compare { i, j }
    }
}

impl SortDriver for BubbleSort {
    fn begin(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        self.n = ctx.len();
        self.start_pass(ctx)
    }

    fn resume(&mut self, ctx: &mut LaneContext<'_>, outcome: Outcome) -> DriverStep {
        match outcome {
            Outcome::Terminate => return DriverStep::Finished,
            Outcome::Greater => {
                ctx.swap(self.i - 1, self.i);
                self.newn = self.i;
            }
            Outcome::LessOrEqual => {}
        }

        self.i += 1;
        if self.i < self.n {
            self.compare_next(ctx)
        } else {
            self.n = self.newn;
            self.start_pass(ctx)
        }
    }
}

/// Moves the minimum of the unsorted suffix into place, one position at a time
#[derive(Debug, Default, Clone)]
pub struct SelectionSort {
    len: usize,
    i: usize,
    j: usize,
    jmin: usize,
}

impl SelectionSort {
    fn start_position(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        if self.i + 1 >= self.len {
            return DriverStep::Finished;
        }
        self.jmin = self.i;
        self.j = self.i + 1;
        self.compare_next(ctx)
    }

    fn compare_next(&self, ctx: &mut LaneContext<'_>) -> DriverStep {
        ctx.render(&[self.j, self.i], &[]);
        DriverStep::Compare {
            i: self.jmin,
            j: self.j,
        }
    }
}

impl SortDriver for SelectionSort {
    fn begin(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        self.len = ctx.len();
        self.i = 0;
        self.start_position(ctx)
    }

    fn resume(&mut self, ctx: &mut LaneContext<'_>, outcome: Outcome) -> DriverStep {
        match outcome {
            Outcome::Terminate => return DriverStep::Finished,
            Outcome::Greater => self.jmin = self.j,
            Outcome::LessOrEqual => {}
        }

        self.j += 1;
        if self.j < self.len {
            return self.compare_next(ctx);
        }
        if self.jmin != self.i {
            ctx.swap(self.jmin, self.i);
        }
        self.i += 1;
        self.start_position(ctx)
    }
}

/// Sinks each element backward until it sits after a smaller-or-equal one
#[derive(Debug, Default, Clone)]
pub struct InsertionSort {
    len: usize,
    i: usize,
    j: usize,
}

impl InsertionSort {
    fn start_position(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        if self.i >= self.len {
            return DriverStep::Finished;
        }
        self.j = self.i;
        self.compare_next(ctx)
    }

    fn compare_next(&self, ctx: &mut LaneContext<'_>) -> DriverStep {
        let (i, j) = (self.j - 1, self.j);
        ctx.render(&[i, j], &[]);
        DriverStep::Compare { i, j }
    }
}

impl SortDriver for InsertionSort {
    fn begin(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        self.len = ctx.len();
        self.i = 1;
        self.start_position(ctx)
    }

    fn resume(&mut self, ctx: &mut LaneContext<'_>, outcome: Outcome) -> DriverStep {
        match outcome {
            Outcome::Terminate => DriverStep::Finished,
            Outcome::Greater => {
                ctx.swap(self.j - 1, self.j);
                self.j -= 1;
                if self.j > 0 {
                    self.compare_next(ctx)
                } else {
                    self.i += 1;
                    self.start_position(ctx)
                }
            }
            Outcome::LessOrEqual => {
                self.i += 1;
                self.start_position(ctx)
            }
        }
    }
}

/// Lomuto partitioning around the rightmost element
///
/// Pending sub-ranges live on an explicit stack. The right partition is
/// pushed first so the left one, including everything it spawns, is sorted
/// before the right one starts.
#[derive(Debug, Default, Clone)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    left: usize,
    right: usize,
    store: usize,
    j: usize,
}

impl QuickSort {
    fn next_partition(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        while let Some((left, right)) = self.ranges.pop() {
            if left < right {
                self.left = left;
                self.right = right;
                self.store = left;
                self.j = left;
                return self.compare_next(ctx);
            }
        }
        DriverStep::Finished
    }

    fn compare_next(&self, ctx: &mut LaneContext<'_>) -> DriverStep {
        ctx.render(&[self.j, self.right], &[self.left, self.right]);
        DriverStep::Compare {
            i: self.j,
            j: self.right,
        }
    }

    fn finish_partition(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        let pivot = self.store;
        if pivot != self.right {
            ctx.swap(pivot, self.right);
        }
        if pivot < self.right {
            self.ranges.push((pivot + 1, self.right));
        }
        if pivot > self.left {
            self.ranges.push((self.left, pivot - 1));
        }
        self.next_partition(ctx)
    }
}

impl SortDriver for QuickSort {
    fn begin(&mut self, ctx: &mut LaneContext<'_>) -> DriverStep {
        self.ranges.clear();
        if ctx.len() > 1 {
            self.ranges.push((0, ctx.len() - 1));
        }
        self.next_partition(ctx)
    }

    fn resume(&mut self, ctx: &mut LaneContext<'_>, outcome: Outcome) -> DriverStep {
        match outcome {
            Outcome::Terminate => {
                ctx.render(&[], &[]);
                return DriverStep::Finished;
            }
            Outcome::LessOrEqual => {
                if self.store != self.j {
                    ctx.swap(self.store, self.j);
                }
                self.store += 1;
            }
            Outcome::Greater => {}
        }

        self.j += 1;
        if self.j < self.right {
            self.compare_next(ctx)
        } else {
            self.finish_partition(ctx)
        }
    }
}
