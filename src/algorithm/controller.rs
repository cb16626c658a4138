//! Playback control across both lanes
//!
//! The controller is a cooperative scheduler. Each lane holds at most one
//! driver and at most one pending comparison. [`RunController::poll`] is the
//! tick: every lane whose comparison has resolved receives the outcome and
//! advances synchronously to its next comparison. Lanes never wait for each
//! other; they only share the [`RunState`] flags.

use crate::algorithm::comparator::PendingComparison;
use crate::algorithm::drivers::{DriverStep, LaneContext, SortDriver};
use crate::algorithm::registry::{Algorithm, NO_ALGORITHM, resolve_assignment};
use crate::algorithm::suspension::{Permission, RunState};
use crate::data::Dataset;
use crate::io::error::{Result, configuration_error, invalid_parameter};
use crate::io::render::{CounterKind, LaneRenderer};
use crate::math::slider::delay_for_position;
use std::time::{Duration, Instant};

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No driver is live, or the run has been stopped
    Idle,
    /// Drivers advance on their own, after the configured delay
    Running,
    /// Drivers wait for an explicit step or resume
    Paused,
    /// Paused, with a granted step not yet taken
    Stepping,
}

#[derive(Default)]
struct LaneSlot {
    assignment: Option<Algorithm>,
    driver: Option<Box<dyn SortDriver>>,
    pending: Option<PendingComparison>,
}

impl LaneSlot {
    const fn is_active(&self) -> bool {
        self.driver.is_some()
    }
}

/// Starts, stops, pauses and steps the drivers of every lane
pub struct RunController<R: LaneRenderer> {
    dataset: Dataset,
    slots: Vec<LaneSlot>,
    run: RunState,
    delay: Duration,
    renderer: R,
}

impl<R: LaneRenderer> RunController<R> {
    /// Take ownership of the dataset and draw every lane once
    ///
    /// Lane 0 is assigned bubble sort and the other lanes start without an
    /// algorithm.
    pub fn new(dataset: Dataset, renderer: R) -> Self {
        let mut slots: Vec<LaneSlot> = (0..dataset.lane_count())
            .map(|_| LaneSlot::default())
            .collect();
        if let Some(first) = slots.first_mut() {
            first.assignment = Some(Algorithm::Bubble);
        }

        let mut controller = Self {
            dataset,
            slots,
            run: RunState::default(),
            delay: Duration::ZERO,
            renderer,
        };
        controller.render_all();
        controller
    }

    /// Assign an algorithm by name to a lane
    ///
    /// # Errors
    ///
    /// Returns an error if the lane does not exist, the name is unknown, or
    /// lane 0 is set to `none`
    pub fn set_algorithm(&mut self, lane: usize, name: &str) -> Result<()> {
        let assignment = resolve_assignment(lane, name)?;
        self.set_assignment(lane, assignment)
    }

    /// Assign an algorithm, or none, to a lane
    ///
    /// Takes effect on the next start or step from idle.
    ///
    /// # Errors
    ///
    /// Returns an error if the lane does not exist or lane 0 is left empty
    pub fn set_assignment(&mut self, lane: usize, assignment: Option<Algorithm>) -> Result<()> {
        if lane == 0 && assignment.is_none() {
            return Err(configuration_error(lane, &NO_ALGORITHM));
        }
        let slot = self.slots.get_mut(lane).ok_or_else(|| {
            invalid_parameter("lane", &lane, &"no such lane")
        })?;
        slot.assignment = assignment;
        Ok(())
    }

    /// Algorithm currently assigned to a lane
    pub fn assignment(&self, lane: usize) -> Option<Algorithm> {
        self.slots.get(lane).and_then(|slot| slot.assignment)
    }

    /// Set the pause between a comparison and its outcome
    pub const fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Set the delay from a position of the logarithmic delay slider
    pub fn set_delay_position(&mut self, position: f64) {
        self.delay = delay_for_position(position);
    }

    /// Configured delay per comparison
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Reset the counters and run every assigned lane from the beginning
    ///
    /// Any live drivers are terminated first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if lane 0 has no algorithm
    pub fn start(&mut self) -> Result<()> {
        self.validate_assignments()?;
        self.halt();
        self.reset_counters();
        self.run = RunState {
            stopped: false,
            paused: false,
        };
        self.launch(Instant::now());
        Ok(())
    }

    /// Ask every lane to terminate at its next suspension point
    pub const fn stop(&mut self) {
        self.run = RunState {
            stopped: true,
            paused: false,
        };
    }

    /// Pause a running playback, or resume a paused one
    ///
    /// Comparisons already waiting on their delay still resolve on time after
    /// a pause. Resuming grants every parked lane its comparison immediately.
    pub fn pause_resume(&mut self) {
        if self.run.paused {
            self.run.paused = false;
            self.grant_all();
        } else if self.phase() == RunPhase::Running {
            self.run.paused = true;
        }
    }

    /// Advance every lane by exactly one comparison
    ///
    /// A running sort is paused in place and keeps its progress and
    /// counters. From idle (no live driver, or stopped) this resets the
    /// counters, starts paused and grants the very first comparison.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a fresh start is needed and lane 0
    /// has no algorithm
    pub fn step_forward(&mut self) -> Result<()> {
        if self.is_active() && !self.run.stopped {
            self.run.paused = true;
            self.grant_all();
            return Ok(());
        }

        self.validate_assignments()?;
        self.halt();
        self.reset_counters();
        self.run = RunState {
            stopped: false,
            paused: true,
        };
        self.launch(Instant::now());
        self.grant_all();
        Ok(())
    }

    /// Stop any run, shuffle lane 0 and copy it into every lane
    pub fn shuffle_arrays(&mut self) {
        self.halt();
        self.dataset.shuffle();
        self.render_all();
    }

    /// Stop any run and regenerate every lane as `1..=size`
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisualizerError::InvalidSize`] if `size` is zero
    pub fn generate_arrays(&mut self, size: usize) -> Result<()> {
        self.halt();
        self.dataset.generate(size)?;
        self.render_all();
        Ok(())
    }

    /// Stop any run and load `values` into every lane
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisualizerError::InvalidSize`] if `values` is empty
    pub fn load_arrays(&mut self, values: &[u32]) -> Result<()> {
        self.halt();
        self.dataset.load(values)?;
        self.render_all();
        Ok(())
    }

    /// Deliver every resolved comparison and advance its lane
    ///
    /// Each lane moves by at most one comparison per call. Returns how many
    /// lanes advanced.
    pub fn poll(&mut self, now: Instant) -> usize {
        let Self {
            dataset,
            slots,
            run,
            delay,
            renderer,
        } = self;

        let mut advanced = 0;
        for (index, slot) in slots.iter_mut().enumerate() {
            let Some(lane) = dataset.lane_mut(index) else {
                continue;
            };
            let Some(pending) = slot.pending.as_mut() else {
                continue;
            };
            let Some(outcome) = pending.settle(lane, *run, now) else {
                continue;
            };
            slot.pending = None;

            let mut ctx = LaneContext::new(index, lane, &mut *renderer);
            if let Some(driver) = slot.driver.as_mut() {
                let step = driver.resume(&mut ctx, outcome);
                Self::apply_step(slot, &mut ctx, step, *run, *delay, now);
            }
            advanced += 1;
        }
        advanced
    }

    /// Tick with wall-clock time until nothing more can happen on its own
    ///
    /// Sleeps until the next comparison delay expires whenever no lane is
    /// ready. Returns once every driver has finished or every live lane is
    /// parked on a paused comparison.
    pub fn run_until_settled(&mut self) {
        while self.is_active() {
            let now = Instant::now();
            if self.poll(now) > 0 {
                continue;
            }
            match self.next_deadline() {
                Some(deadline) => std::thread::sleep(deadline.saturating_duration_since(now)),
                None => break,
            }
        }
    }

    /// Current playback state
    pub fn phase(&self) -> RunPhase {
        if self.run.stopped || !self.is_active() {
            RunPhase::Idle
        } else if !self.run.paused {
            RunPhase::Running
        } else if self.slots.iter().any(|slot| {
            slot.pending
                .is_some_and(|pending| pending.suspension().is_resolved())
        }) {
            RunPhase::Stepping
        } else {
            RunPhase::Paused
        }
    }

    /// Whether any lane still has a live driver
    pub fn is_active(&self) -> bool {
        self.slots.iter().any(LaneSlot::is_active)
    }

    /// Whether a specific lane still has a live driver
    pub fn is_lane_active(&self, lane: usize) -> bool {
        self.slots.get(lane).is_some_and(LaneSlot::is_active)
    }

    /// Earliest moment a delayed comparison resolves on its own
    pub fn next_deadline(&self) -> Option<Instant> {
        self.slots
            .iter()
            .filter_map(|slot| slot.pending.and_then(|pending| pending.suspension().deadline()))
            .min()
    }

    /// Current playback flags
    pub const fn run_state(&self) -> RunState {
        self.run
    }

    /// The lanes and their counters
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The renderer receiving updates
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer
    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Give up the controller and keep the renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn validate_assignments(&self) -> Result<()> {
        match self.slots.first() {
            Some(slot) if slot.assignment.is_some() => Ok(()),
            _ => Err(configuration_error(0, &NO_ALGORITHM)),
        }
    }

    // Terminate live drivers before the lanes are touched. Stopped handles
    // resolve on the first poll, so a single pass drains everything.
    fn halt(&mut self) {
        if !self.is_active() {
            return;
        }
        self.stop();
        let now = Instant::now();
        while self.is_active() {
            if self.poll(now) == 0 {
                self.abandon_drivers();
            }
        }
    }

    // Lanes without a pending comparison cannot observe the stop
    fn abandon_drivers(&mut self) {
        for slot in &mut self.slots {
            if slot.pending.is_none() {
                slot.driver = None;
            }
        }
    }

    fn launch(&mut self, now: Instant) {
        let Self {
            dataset,
            slots,
            run,
            delay,
            renderer,
        } = self;

        for (index, slot) in slots.iter_mut().enumerate() {
            slot.pending = None;
            slot.driver = None;
            let Some(algorithm) = slot.assignment else {
                continue;
            };
            let Some(lane) = dataset.lane_mut(index) else {
                continue;
            };

            let mut driver = algorithm.driver();
            let mut ctx = LaneContext::new(index, lane, &mut *renderer);
            let step = driver.begin(&mut ctx);
            slot.driver = Some(driver);
            Self::apply_step(slot, &mut ctx, step, *run, *delay, now);
        }
    }

    fn apply_step(
        slot: &mut LaneSlot,
        ctx: &mut LaneContext<'_>,
        step: DriverStep,
        run: RunState,
        delay: Duration,
        now: Instant,
    ) {
        match step {
            DriverStep::Compare { i, j } => {
                slot.pending = Some(PendingComparison::open(ctx, i, j, run, delay, now));
            }
            DriverStep::Finished => {
                slot.driver = None;
                ctx.render(&[], &[]);
            }
        }
    }

    fn grant_all(&mut self) {
        for slot in &mut self.slots {
            if let Some(pending) = slot.pending.as_mut() {
                pending.resolve(Permission::Continue);
            }
        }
    }

    fn reset_counters(&mut self) {
        self.dataset.reset_counters();
        for index in 0..self.dataset.lane_count() {
            self.renderer
                .update_counter(CounterKind::Comparisons, index, 0);
            self.renderer.update_counter(CounterKind::Swaps, index, 0);
        }
    }

    fn render_all(&mut self) {
        for (index, lane) in self.dataset.lanes().iter().enumerate() {
            self.renderer.render_lane(index, lane.values(), &[], &[]);
        }
    }
}
