use meter_logging::{meter_debug, meter_info, meter_warn};

use crate::clock::Clock;
use crate::milestone::{Milestone, MilestoneTracker};
use crate::rate::cost_per_second;
use crate::salary::SalaryConfig;
use crate::share::SharedSession;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("meeting settings produce no cost; configure attendees and salaries first")]
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// What a successful `start` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Was already running; nothing changed.
    AlreadyRunning,
    /// Started from zero cost and stamped a new start time.
    Fresh,
    /// Resumed a paused meeting.
    Resumed,
}

/// Live meeting timer state.
///
/// The host calls `tick` once per second while `is_running()`; the session
/// never schedules anything itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeetingSession {
    running: bool,
    accumulated_cost: f64,
    elapsed_seconds: u64,
    start_epoch_millis: Option<i64>,
    rate_per_second: f64,
    milestones: MilestoneTracker,
}

impl MeetingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn accumulated_cost(&self) -> f64 {
        self.accumulated_cost
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn start_epoch_millis(&self) -> Option<i64> {
        self.start_epoch_millis
    }

    /// Rate captured at the most recent start or restore.
    pub fn rate_per_second(&self) -> f64 {
        self.rate_per_second
    }

    pub fn milestones(&self) -> &MilestoneTracker {
        &self.milestones
    }

    pub fn phase(&self) -> SessionPhase {
        if self.running {
            SessionPhase::Running
        } else if self.elapsed_seconds == 0 && self.accumulated_cost == 0.0 {
            SessionPhase::Idle
        } else {
            SessionPhase::Paused
        }
    }

    /// Starts or resumes accrual at the rate `config` currently yields.
    pub fn start(
        &mut self,
        config: &SalaryConfig,
        clock: &dyn Clock,
    ) -> Result<StartOutcome, SessionError> {
        if self.running {
            return Ok(StartOutcome::AlreadyRunning);
        }
        let rate = cost_per_second(config);
        if rate <= 0.0 {
            meter_warn!("Refusing to start meeting: rate is zero");
            return Err(SessionError::Configuration);
        }

        let fresh = self.accumulated_cost == 0.0;
        if fresh {
            let now = clock.now_millis();
            self.start_epoch_millis = Some(now);
            self.elapsed_seconds = 0;
            self.milestones.reset();
            meter_info!("Meeting started at {} with rate {:.5}/s", now, rate);
        } else {
            meter_info!(
                "Meeting resumed at {}s, cost {:.2}, rate {:.5}/s",
                self.elapsed_seconds,
                self.accumulated_cost,
                rate
            );
        }
        self.rate_per_second = rate;
        self.running = true;
        Ok(if fresh {
            StartOutcome::Fresh
        } else {
            StartOutcome::Resumed
        })
    }

    /// Stops accrual. Values are kept as they are; pausing twice is a no-op.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        meter_info!(
            "Meeting paused at {}s, cost {:.2}",
            self.elapsed_seconds,
            self.accumulated_cost
        );
    }

    /// Advances one second. Returns the milestone reached by this tick, if any.
    pub fn tick(&mut self) -> Option<&'static Milestone> {
        if !self.running {
            meter_debug!("Ignoring tick while paused");
            return None;
        }
        self.accumulated_cost += self.rate_per_second;
        self.elapsed_seconds += 1;
        let reached = self.milestones.check(self.accumulated_cost);
        if let Some(milestone) = reached {
            meter_info!(
                "Milestone {:.0} reached at {}s",
                milestone.threshold,
                self.elapsed_seconds
            );
        }
        reached
    }

    /// Jumps straight to `elapsed_seconds * rate` and enters Running.
    ///
    /// No milestone is checked here; the next `tick` reports the first one due.
    /// A zero rate leaves the catch-up values in place but does not run.
    pub fn restore_from_elapsed(
        &mut self,
        rate: f64,
        elapsed_seconds: u64,
    ) -> Result<(), SessionError> {
        self.elapsed_seconds = elapsed_seconds;
        self.accumulated_cost = elapsed_seconds as f64 * rate.max(0.0);
        self.rate_per_second = rate.max(0.0);
        if self.rate_per_second <= 0.0 {
            self.running = false;
            meter_warn!("Restored meeting has no cost rate; not running");
            return Err(SessionError::Configuration);
        }
        self.running = true;
        meter_info!(
            "Meeting restored at {}s, cost {:.2}",
            elapsed_seconds,
            self.accumulated_cost
        );
        Ok(())
    }

    /// Reconstructs a shared meeting from its start anchor and the current time.
    pub fn restore_shared(
        &mut self,
        shared: &SharedSession,
        clock: &dyn Clock,
    ) -> Result<(), SessionError> {
        let elapsed_ms = clock.now_millis().saturating_sub(shared.start_epoch_millis);
        let elapsed_seconds = u64::try_from(elapsed_ms / 1000).unwrap_or(0);
        self.start_epoch_millis = Some(shared.start_epoch_millis);
        self.milestones.reset();
        self.restore_from_elapsed(cost_per_second(&shared.config), elapsed_seconds)
    }
}
