use std::sync::Once;

use meter_core::{
    cost_per_second, AverageSalary, FixedClock, MeetingSession, MilestoneTracker, SalaryConfig,
    SessionError, SessionPhase, SharedSession, StartOutcome, MILESTONES,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(meter_logging::initialize_for_tests);
}

fn config(attendees: u32) -> SalaryConfig {
    SalaryConfig::Average(AverageSalary {
        attendees,
        annual_salary: 80_000.0,
        hours_per_week: 40.0,
    })
}

#[test]
fn start_refuses_zero_rate() {
    init_logging();
    let mut session = MeetingSession::new();
    let result = session.start(&config(0), &FixedClock(1_000));

    assert_eq!(result, Err(SessionError::Configuration));
    assert!(!session.is_running());
    assert_eq!(session.start_epoch_millis(), None);
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn fresh_start_stamps_clock_and_resume_does_not() {
    init_logging();
    let mut session = MeetingSession::new();
    assert_eq!(
        session.start(&config(5), &FixedClock(1_000)),
        Ok(StartOutcome::Fresh)
    );
    assert_eq!(session.start_epoch_millis(), Some(1_000));
    assert_eq!(
        session.start(&config(5), &FixedClock(2_000)),
        Ok(StartOutcome::AlreadyRunning)
    );

    session.tick();
    session.tick();
    session.pause();
    assert_eq!(session.phase(), SessionPhase::Paused);

    assert_eq!(
        session.start(&config(5), &FixedClock(90_000)),
        Ok(StartOutcome::Resumed)
    );
    assert_eq!(session.start_epoch_millis(), Some(1_000));
    assert_eq!(session.elapsed_seconds(), 2);
}

#[test]
fn ticks_accrue_rate_each_second() {
    init_logging();
    let mut session = MeetingSession::new();
    session.start(&config(5), &FixedClock(0)).unwrap();
    let rate = cost_per_second(&config(5));

    for _ in 0..10 {
        session.tick();
    }

    assert_eq!(session.elapsed_seconds(), 10);
    assert!((session.accumulated_cost() - 10.0 * rate).abs() < 1e-9);
}

#[test]
fn tick_after_pause_is_ignored() {
    init_logging();
    let mut session = MeetingSession::new();
    session.start(&config(5), &FixedClock(0)).unwrap();
    session.tick();
    session.pause();
    let before = session.clone();

    assert_eq!(session.tick(), None);
    assert_eq!(session, before);
}

#[test]
fn pausing_twice_equals_pausing_once() {
    init_logging();
    let mut session = MeetingSession::new();
    session.start(&config(5), &FixedClock(0)).unwrap();
    session.tick();

    session.pause();
    let once = session.clone();
    session.pause();

    assert_eq!(session, once);
}

#[test]
fn config_change_while_paused_only_affects_future_accrual() {
    init_logging();
    let mut session = MeetingSession::new();
    session.start(&config(5), &FixedClock(0)).unwrap();
    session.tick();
    session.pause();
    let cost_before = session.accumulated_cost();

    session.start(&config(10), &FixedClock(5_000)).unwrap();
    assert_eq!(session.accumulated_cost(), cost_before);
    session.tick();

    let expected = cost_before + cost_per_second(&config(10));
    assert!((session.accumulated_cost() - expected).abs() < 1e-12);
}

#[test]
fn restore_with_zero_elapsed_runs_without_milestone() {
    init_logging();
    let mut session = MeetingSession::new();
    session.restore_from_elapsed(0.05, 0).unwrap();

    assert!(session.is_running());
    assert_eq!(session.accumulated_cost(), 0.0);
    assert_eq!(session.milestones().last_index(), None);

    assert_eq!(session.tick(), None);
    assert!((session.accumulated_cost() - 0.05).abs() < 1e-12);
}

#[test]
fn restore_with_zero_rate_does_not_run() {
    init_logging();
    let mut session = MeetingSession::new();
    assert_eq!(
        session.restore_from_elapsed(0.0, 30),
        Err(SessionError::Configuration)
    );
    assert!(!session.is_running());
    assert_eq!(session.elapsed_seconds(), 30);
}

#[test]
fn large_jump_reports_one_milestone_per_check() {
    init_logging();
    let mut tracker = MilestoneTracker::new();
    let reached = tracker.check(100.0).expect("first milestone");
    assert_eq!(reached.threshold, 15.0);
    assert_eq!(tracker.last_index(), Some(0));

    let reached = tracker.check(100.0).expect("second milestone");
    assert_eq!(reached.threshold, 75.0);
    assert_eq!(tracker.check(100.0), None);
    assert_eq!(tracker.last_reached(), Some(&MILESTONES[1]));
}

#[test]
fn catch_up_surfaces_milestones_one_tick_at_a_time() {
    init_logging();
    let mut session = MeetingSession::new();
    session.restore_from_elapsed(1.0, 100).unwrap();
    assert_eq!(session.accumulated_cost(), 100.0);
    assert_eq!(session.milestones().last_index(), None);

    assert_eq!(session.tick().map(|m| m.threshold), Some(15.0));
    assert_eq!(session.tick().map(|m| m.threshold), Some(75.0));
    assert_eq!(session.tick(), None);
}

#[test]
fn milestones_are_never_announced_twice() {
    init_logging();
    let mut tracker = MilestoneTracker::new();
    assert!(tracker.check(14.99).is_none());
    assert!(tracker.check(15.0).is_some());
    assert!(tracker.check(16.0).is_none());
    assert!(tracker.check(74.0).is_none());
    assert_eq!(tracker.last_index(), Some(0));
}

#[test]
fn restore_shared_reconstructs_from_wall_clock() {
    init_logging();
    let shared = SharedSession {
        config: config(5),
        start_epoch_millis: 1_000,
    };
    let mut session = MeetingSession::new();
    session
        .restore_shared(&shared, &FixedClock(61_999))
        .unwrap();

    assert!(session.is_running());
    assert_eq!(session.start_epoch_millis(), Some(1_000));
    assert_eq!(session.elapsed_seconds(), 60);
    let expected = 60.0 * cost_per_second(&config(5));
    assert!((session.accumulated_cost() - expected).abs() < 1e-9);
}

#[test]
fn restore_shared_from_the_future_starts_at_zero() {
    init_logging();
    let shared = SharedSession {
        config: config(5),
        start_epoch_millis: 50_000,
    };
    let mut session = MeetingSession::new();
    session.restore_shared(&shared, &FixedClock(10_000)).unwrap();

    assert_eq!(session.elapsed_seconds(), 0);
    assert_eq!(session.accumulated_cost(), 0.0);
}
