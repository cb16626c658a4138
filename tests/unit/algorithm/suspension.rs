//! Tests for the per-comparison wait point and its resolution rules

#[cfg(test)]
mod tests {
    use sortvis::algorithm::suspension::{Permission, RunState, Suspension};
    use std::time::{Duration, Instant};

    const RUNNING: RunState = RunState {
        stopped: false,
        paused: false,
    };
    const PAUSED: RunState = RunState {
        stopped: false,
        paused: true,
    };
    const STOPPED: RunState = RunState {
        stopped: true,
        paused: false,
    };

    // Tests that a stopped run terminates at once
    // Verified by opening a parked handle while stopped
    #[test]
    fn test_stopped_resolves_to_terminate() {
        let now = Instant::now();
        let mut suspension = Suspension::wait_for_permission(STOPPED, Duration::ZERO, now);

        assert!(suspension.is_resolved());
        assert_eq!(suspension.poll(STOPPED, now), Some(Permission::Terminate));
    }

    // Tests that zero delay continues immediately while running
    // Verified by always arming a timer
    #[test]
    fn test_running_without_delay_continues() {
        let now = Instant::now();
        let mut suspension = Suspension::wait_for_permission(RUNNING, Duration::ZERO, now);

        assert!(suspension.is_resolved());
        assert_eq!(suspension.deadline(), None);
        assert_eq!(suspension.poll(RUNNING, now), Some(Permission::Continue));
    }

    // Tests that a delay resolves exactly when it has elapsed
    // Verified by comparing against the creation time instead of the deadline
    #[test]
    fn test_delay_resolves_at_deadline() {
        let now = Instant::now();
        let delay = Duration::from_millis(30);
        let mut suspension = Suspension::wait_for_permission(RUNNING, delay, now);

        assert_eq!(suspension.deadline(), Some(now + delay));
        assert_eq!(suspension.poll(RUNNING, now), None);
        assert_eq!(
            suspension.poll(RUNNING, now + Duration::from_millis(29)),
            None
        );
        assert_eq!(
            suspension.poll(RUNNING, now + delay),
            Some(Permission::Continue)
        );
        assert!(suspension.is_resolved());
    }

    // Tests that paused handles wait for an explicit answer
    // Verified by resolving parked handles on poll
    #[test]
    fn test_paused_parks_until_resolved() {
        let now = Instant::now();
        let mut suspension = Suspension::wait_for_permission(PAUSED, Duration::ZERO, now);

        assert!(suspension.is_parked());
        assert_eq!(suspension.deadline(), None);
        assert_eq!(suspension.poll(PAUSED, now + Duration::from_secs(3600)), None);

        assert!(suspension.resolve(Permission::Continue));
        assert!(!suspension.is_parked());
        assert_eq!(suspension.poll(PAUSED, now), Some(Permission::Continue));
    }

    // Tests that the first resolution wins
    // Verified by letting later resolutions overwrite earlier ones
    #[test]
    fn test_resolution_is_single_use() {
        let now = Instant::now();
        let mut suspension = Suspension::wait_for_permission(PAUSED, Duration::ZERO, now);

        assert!(suspension.resolve(Permission::Continue));
        assert!(!suspension.resolve(Permission::Terminate));
        assert_eq!(suspension.poll(PAUSED, now), Some(Permission::Continue));
    }

    // Tests that a pending timer can be answered early
    // Verified by treating timers as resolved
    #[test]
    fn test_timer_counts_as_unanswered() {
        let now = Instant::now();
        let mut suspension =
            Suspension::wait_for_permission(RUNNING, Duration::from_secs(60), now);

        assert!(suspension.resolve(Permission::Continue));
        assert_eq!(suspension.deadline(), None);
        assert_eq!(suspension.poll(RUNNING, now), Some(Permission::Continue));
    }

    // Tests that stop overrides every state, including a granted step
    // Verified by honoring the stored answer after a stop
    #[test]
    fn test_stop_overrides_any_resolution() {
        let now = Instant::now();

        let mut granted = Suspension::wait_for_permission(PAUSED, Duration::ZERO, now);
        granted.resolve(Permission::Continue);
        assert_eq!(granted.poll(STOPPED, now), Some(Permission::Terminate));

        let mut parked = Suspension::wait_for_permission(PAUSED, Duration::ZERO, now);
        assert_eq!(parked.poll(STOPPED, now), Some(Permission::Terminate));

        let mut timed = Suspension::wait_for_permission(RUNNING, Duration::from_secs(60), now);
        assert_eq!(timed.poll(STOPPED, now), Some(Permission::Terminate));
    }

    // Tests the default run state
    // Verified by defaulting to stopped
    #[test]
    fn test_run_state_default_is_idle_running() {
        let state = RunState::default();
        assert!(!state.stopped);
        assert!(!state.paused);
    }
}
