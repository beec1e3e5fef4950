//! Meeting meter core: cost model, live session state machine, share-link
//! codec and the pure `update` loop a host drives.
mod calculator;
mod clock;
mod effect;
mod format;
mod inputs;
mod milestone;
mod msg;
mod rate;
mod salary;
mod session;
mod share;
mod state;
mod update;
mod view_model;

pub use calculator::{static_cost, DurationError, DurationSelection, DURATION_OPTIONS};
pub use clock::{Clock, FixedClock};
pub use effect::Effect;
pub use format::{format_clock, format_currency, format_duration_label, parse_currency};
pub use inputs::{SalaryInputs, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
pub use milestone::{Milestone, MilestoneTracker, MILESTONES};
pub use msg::Msg;
pub use rate::{cost_per_second, effective_hours, hourly_rate, SECONDS_PER_HOUR, WEEKS_PER_YEAR};
pub use salary::{
    AverageSalary, CalculationMode, IndividualSalaries, RateKind, SalaryConfig, SalaryList,
    SalaryListError, DEFAULT_ANNUAL_SALARY, DEFAULT_ATTENDEES, DEFAULT_HOURS_PER_WEEK,
};
pub use session::{MeetingSession, SessionError, SessionPhase, StartOutcome};
pub use share::{
    decode, encode, share_url, ShareError, ShareParams, SharedSession, PARAM_ATTENDEES,
    PARAM_HOURS, PARAM_MODE, PARAM_RATE_KIND, PARAM_SALARIES, PARAM_SALARY, PARAM_START,
};
pub use state::{AppMode, AppState};
pub use update::{update, CONFIGURE_FIRST};
pub use view_model::{AppViewModel, DurationButtonView, SalaryRowView};
