//! Counted, suspending element comparison
//!
//! Opening a comparison counts it and publishes the new total before the
//! lane suspends, so a comparison interrupted by a stop still shows up in the
//! counters. The outcome is read from the array only once the suspension has
//! resolved.

use crate::algorithm::drivers::LaneContext;
use crate::algorithm::suspension::{Permission, RunState, Suspension};
use crate::data::Lane;
use std::time::{Duration, Instant};

/// Three-way result handed back to a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `array[i] > array[j]`
    Greater,
    /// `array[i] <= array[j]`
    LessOrEqual,
    /// The run was stopped; the driver must return without further work
    Terminate,
}

/// A comparison that has been counted and is waiting for permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingComparison {
    /// Left operand index
    pub i: usize,
    /// Right operand index
    pub j: usize,
    suspension: Suspension,
}

impl PendingComparison {
    /// Count a comparison of `i` against `j` and suspend the lane
    pub fn open(
        ctx: &mut LaneContext<'_>,
        i: usize,
        j: usize,
        run: RunState,
        delay: Duration,
        now: Instant,
    ) -> Self {
        ctx.record_comparison();
        Self {
            i,
            j,
            suspension: Suspension::wait_for_permission(run, delay, now),
        }
    }

    /// Outcome of the comparison once its suspension has resolved
    pub fn settle(&mut self, lane: &Lane, run: RunState, now: Instant) -> Option<Outcome> {
        self.suspension
            .poll(run, now)
            .map(|permission| match permission {
                Permission::Terminate => Outcome::Terminate,
                Permission::Continue if lane.greater(self.i, self.j) => Outcome::Greater,
                Permission::Continue => Outcome::LessOrEqual,
            })
    }

    /// Grant or deny the comparison explicitly
    pub const fn resolve(&mut self, permission: Permission) -> bool {
        self.suspension.resolve(permission)
    }

    /// The underlying wait point
    pub const fn suspension(&self) -> &Suspension {
        &self.suspension
    }
}
