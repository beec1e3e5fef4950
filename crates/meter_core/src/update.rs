use meter_logging::{meter_debug, meter_warn};

use crate::clock::Clock;
use crate::session::{SessionError, StartOutcome};
use crate::share::{self, ShareError, ShareParams};
use crate::{AppMode, AppState, Effect, Msg};

pub const CONFIGURE_FIRST: &str = "Please configure meeting settings (salaries, etc.) first.";

/// Pure update function: applies a message to state and returns any effects.
///
/// `clock` is only read when a meeting starts fresh or is restored from a link.
pub fn update(mut state: AppState, msg: Msg, clock: &dyn Clock) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppModeSelected(mode) => {
            // Switching views always stops the ticker, as leaving the live view would.
            let effects = stop_ticker(&mut state);
            state.set_app_mode(mode);
            state.mark_dirty();
            effects
        }
        Msg::ToggleMeetingClicked => {
            if state.session().is_running() {
                stop_ticker(&mut state)
            } else {
                let config = state.salary_config();
                match state.session_mut().start(&config, clock) {
                    Ok(outcome) => {
                        if outcome == StartOutcome::Fresh {
                            state.set_milestone_text(None);
                        }
                        state.mark_dirty();
                        vec![Effect::StartTicker]
                    }
                    Err(SessionError::Configuration) => {
                        vec![Effect::Alert(CONFIGURE_FIRST.to_string())]
                    }
                }
            }
        }
        Msg::Tick => {
            if state.session().is_running() {
                if let Some(milestone) = state.session_mut().tick() {
                    state.set_milestone_text(Some(milestone.announcement()));
                }
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ShareClicked { page_url } => {
            let config = state.salary_config();
            match share::encode(state.session(), &config)
                .and_then(|params| share::share_url(&page_url, &params))
            {
                Ok(url) => vec![Effect::PublishShareLink {
                    url: url.to_string(),
                }],
                Err(ShareError::NotStarted) => vec![Effect::Alert(
                    "Start the meeting first to generate a shareable live link.".to_string(),
                )],
                Err(err) => vec![Effect::Alert(err.to_string())],
            }
        }
        Msg::RestoreFromLink(link) => {
            let params = ShareParams::from_link(&link);
            match share::decode(&params) {
                Ok(shared) => {
                    let mut effects = stop_ticker(&mut state);
                    state.set_app_mode(AppMode::Live);
                    state.apply_shared(&shared);
                    state.set_milestone_text(None);
                    state.mark_dirty();
                    match state.session_mut().restore_shared(&shared, clock) {
                        Ok(()) => effects.push(Effect::StartTicker),
                        Err(SessionError::Configuration) => {
                            effects.push(Effect::Alert(CONFIGURE_FIRST.to_string()));
                        }
                    }
                    effects
                }
                Err(err) => {
                    meter_debug!("Nothing to restore from link: {}", err);
                    Vec::new()
                }
            }
        }
        Msg::CalculationModeSelected(mode) => {
            state.set_calculation_mode(mode);
            state.mark_dirty();
            Vec::new()
        }
        Msg::AttendeesChanged(text) => {
            state.set_attendees_text(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SalarySliderMoved(value) => {
            state.salary_inputs_mut().slider_moved(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SalaryTextChanged(text) => {
            state.salary_inputs_mut().text_edited(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::HoursPerWeekChanged(text) => {
            state.set_hours_text(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::RateKindSelected(kind) => {
            state.set_rate_kind(kind);
            state.mark_dirty();
            Vec::new()
        }
        Msg::IndividualSalaryChanged { index, raw } => {
            let value = raw.trim().parse::<f64>().unwrap_or(0.0);
            match state.salaries_mut().set(index, value) {
                Ok(_) => state.mark_dirty(),
                Err(err) => meter_warn!("Ignoring salary edit: {}", err),
            }
            Vec::new()
        }
        Msg::DurationSelected(minutes) => {
            match state.duration_mut().select(minutes) {
                Ok(()) => state.mark_dirty(),
                Err(err) => meter_warn!("Ignoring duration selection: {}", err),
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn stop_ticker(state: &mut AppState) -> Vec<Effect> {
    if state.session().is_running() {
        state.session_mut().pause();
        state.mark_dirty();
        vec![Effect::CancelTicker]
    } else {
        Vec::new()
    }
}
