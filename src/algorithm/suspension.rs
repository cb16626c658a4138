//! Per-lane wait point that a driver sits in after every comparison
//!
//! A [`Suspension`] is created for each comparison and stays in the lane's
//! pending slot until it resolves. It resolves on its own when playback is
//! running (immediately or once the delay elapses), or through an explicit
//! [`Suspension::resolve`] from the run controller while paused.

use std::time::{Duration, Instant};

/// Answer a suspended driver eventually receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Proceed with the comparison
    Continue,
    /// Unwind without touching the lane again
    Terminate,
}

/// Playback flags shared by both lanes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    /// Set by stop; every suspension evaluated afterwards terminates
    pub stopped: bool,
    /// Set by pause; new suspensions wait for an explicit step or resume
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Resolved(Permission),
    At(Instant),
    Parked,
}

/// Single-use handle for one outstanding comparison
///
/// The first resolution wins. Evaluating a handle while the run is stopped
/// always yields [`Permission::Terminate`], so a stop can never leave a driver
/// parked forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suspension {
    resolution: Resolution,
}

impl Suspension {
    /// Open a wait point under the current run state
    ///
    /// Resolves to terminate right away when stopped. Otherwise a running
    /// state resolves to continue after `delay` (at once for a zero delay)
    /// and a paused state parks until resolved explicitly.
    pub fn wait_for_permission(run: RunState, delay: Duration, now: Instant) -> Self {
        let resolution = if run.stopped {
            Resolution::Resolved(Permission::Terminate)
        } else if run.paused {
            Resolution::Parked
        } else if delay.is_zero() {
            Resolution::Resolved(Permission::Continue)
        } else {
            Resolution::At(now + delay)
        };
        Self { resolution }
    }

    /// Resolve the handle unless it already carries an answer
    ///
    /// A pending timer counts as unanswered. Returns whether this call
    /// decided the outcome.
    pub const fn resolve(&mut self, permission: Permission) -> bool {
        match self.resolution {
            Resolution::Resolved(_) => false,
            Resolution::At(_) | Resolution::Parked => {
                self.resolution = Resolution::Resolved(permission);
                true
            }
        }
    }

    /// Evaluate the handle at `now`
    ///
    /// Returns `None` while the driver must keep waiting.
    pub fn poll(&mut self, run: RunState, now: Instant) -> Option<Permission> {
        if run.stopped {
            self.resolution = Resolution::Resolved(Permission::Terminate);
        }
        match self.resolution {
            Resolution::Resolved(permission) => Some(permission),
            Resolution::At(deadline) if now >= deadline => {
                self.resolution = Resolution::Resolved(Permission::Continue);
                Some(Permission::Continue)
            }
            Resolution::At(_) | Resolution::Parked => None,
        }
    }

    /// When a timed handle will resolve on its own
    pub const fn deadline(&self) -> Option<Instant> {
        match self.resolution {
            Resolution::At(deadline) => Some(deadline),
            Resolution::Resolved(_) | Resolution::Parked => None,
        }
    }

    /// Whether the handle already carries an answer
    pub const fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }

    /// Whether the handle waits for an explicit resolution
    pub const fn is_parked(&self) -> bool {
        matches!(self.resolution, Resolution::Parked)
    }
}
