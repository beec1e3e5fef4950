use meter_core::{AppViewModel, CalculationMode, SessionPhase};

use super::effects::Notice;

pub fn live_line(view: &AppViewModel) -> String {
    format!(
        "[{}] {}  ({} per hour)",
        view.live_time, view.live_cost, view.hourly_rate
    )
}

pub fn summary(view: &AppViewModel) -> String {
    let phase = match view.phase {
        SessionPhase::Idle => "not started",
        SessionPhase::Running => "running",
        SessionPhase::Paused => "paused",
    };
    format!(
        "Meeting {}: {} elapsed, {} spent",
        phase, view.live_time, view.live_cost
    )
}

pub fn estimate_report(view: &AppViewModel) -> String {
    let selected = view
        .durations
        .iter()
        .find(|button| button.active)
        .map_or("?", |button| button.label.as_str());
    let basis = match view.calculation_mode {
        CalculationMode::Average => format!(
            "{} attendees at {} per year",
            view.attendees, view.salary_text
        ),
        CalculationMode::Individual => {
            let count = view
                .individual_salaries
                .iter()
                .filter(|row| !row.value.is_empty())
                .count();
            format!("{count} individual salaries")
        }
    };
    format!(
        "A {} meeting costs {}\n{}, {} hours/week ({} per hour)",
        selected, view.static_cost, basis, view.hours_per_week, view.hourly_rate
    )
}

pub fn notice(notice: &Notice) -> String {
    match notice {
        Notice::Alert(text) => format!("! {text}"),
        Notice::ShareLink(url) => format!("Live ticker link: {url}"),
    }
}
