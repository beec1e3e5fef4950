//! Cost-per-second model.
//!
//! Annual salaries are converted with 52 working weeks of `hours_per_week`
//! hours each. The older 252 working days x 8 hours annualization is not
//! supported.
use crate::salary::{RateKind, SalaryConfig, DEFAULT_HOURS_PER_WEEK};

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Total cost per second for everyone in the meeting.
///
/// Returns exactly `0.0` when nothing is configured (no attendees, no salary,
/// or no positive individual entry); callers treat that as "not configured".
pub fn cost_per_second(config: &SalaryConfig) -> f64 {
    hourly_rate(config) / SECONDS_PER_HOUR
}

/// Total cost per hour for everyone in the meeting.
pub fn hourly_rate(config: &SalaryConfig) -> f64 {
    match config {
        SalaryConfig::Average(avg) => {
            if avg.attendees == 0 || !avg.annual_salary.is_finite() || avg.annual_salary <= 0.0 {
                return 0.0;
            }
            let hours = effective_hours(avg.hours_per_week);
            avg.annual_salary / WEEKS_PER_YEAR / hours * f64::from(avg.attendees)
        }
        SalaryConfig::Individual(ind) => {
            let hours = effective_hours(ind.hours_per_week);
            ind.salaries
                .positive()
                .map(|entry| match ind.rate_kind {
                    RateKind::Annual => entry / WEEKS_PER_YEAR / hours,
                    RateKind::Hourly => entry,
                })
                .sum()
        }
    }
}

/// Falls back to the 40 hour week when the configured value is unusable.
pub fn effective_hours(hours_per_week: f64) -> f64 {
    if hours_per_week.is_finite() && hours_per_week > 0.0 {
        hours_per_week
    } else {
        DEFAULT_HOURS_PER_WEEK
    }
}
