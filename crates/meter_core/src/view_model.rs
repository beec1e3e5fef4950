use serde::Serialize;

use crate::calculator::{static_cost, DURATION_OPTIONS};
use crate::format::{format_clock, format_currency, format_duration_label};
use crate::rate::hourly_rate;
use crate::session::SessionPhase;
use crate::{AppMode, AppState, CalculationMode, RateKind};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AppViewModel {
    pub app_mode: AppMode,
    pub calculation_mode: CalculationMode,
    pub phase: SessionPhase,
    pub live_cost: String,
    pub live_time: String,
    pub milestone: Option<String>,
    pub toggle_label: String,
    pub hourly_rate: String,
    pub static_cost: String,
    pub durations: Vec<DurationButtonView>,
    pub attendees: String,
    pub salary_slider: u32,
    pub salary_text: String,
    pub hours_per_week: String,
    pub rate_kind: RateKind,
    pub individual_salaries: Vec<SalaryRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationButtonView {
    pub minutes: u32,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryRowView {
    pub index: usize,
    pub placeholder: String,
    /// Empty for unfilled slots.
    pub value: String,
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let session = state.session();
        let config = state.salary_config();
        let duration = state.duration();

        let toggle_label = match session.phase() {
            SessionPhase::Running => "Pause Meeting",
            _ if session.accumulated_cost() > 0.0 => "Resume Meeting",
            _ => "Start Meeting",
        };

        let durations = DURATION_OPTIONS
            .iter()
            .map(|minutes| DurationButtonView {
                minutes: *minutes,
                label: format_duration_label(*minutes),
                active: duration.is_selected(*minutes),
            })
            .collect();

        let individual_salaries = state
            .salaries()
            .entries()
            .iter()
            .enumerate()
            .map(|(index, salary)| SalaryRowView {
                index,
                placeholder: format!("Attendee {} Salary/Rate", index + 1),
                value: if *salary > 0.0 {
                    salary.to_string()
                } else {
                    String::new()
                },
            })
            .collect();

        Self {
            app_mode: state.app_mode(),
            calculation_mode: state.calculation_mode(),
            phase: session.phase(),
            live_cost: format_currency(session.accumulated_cost(), 2),
            live_time: format_clock(session.elapsed_seconds()),
            milestone: state.milestone_text().map(ToOwned::to_owned),
            toggle_label: toggle_label.to_string(),
            hourly_rate: format_currency(hourly_rate(&config), 2),
            static_cost: format_currency(static_cost(&config, duration), 2),
            durations,
            attendees: state.attendees_text().to_string(),
            salary_slider: state.salary_inputs().slider(),
            salary_text: state.salary_inputs().text().to_string(),
            hours_per_week: state.hours_text().to_string(),
            rate_kind: state.rate_kind(),
            individual_salaries,
        }
    }
}
