use std::fs;
use std::path::Path;

use anyhow::Context;
use meter_core::{format_currency, CalculationMode, Msg, RateKind};
use meter_logging::{meter_debug, meter_info};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_URL: &str = "https://meeting-meter.local/";

/// Meeting defaults read from the RON settings file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: CalculationMode,
    pub attendees: Option<u32>,
    pub salary: Option<f64>,
    pub hours_per_week: Option<f64>,
    pub rate_kind: RateKind,
    pub salaries: Vec<f64>,
    pub duration_minutes: Option<u32>,
    pub page_url: Option<String>,
}

impl AppConfig {
    pub fn page_url(&self) -> &str {
        self.page_url.as_deref().unwrap_or(DEFAULT_PAGE_URL)
    }

    /// Input messages that put a fresh `AppState` into this configuration.
    pub fn settings_messages(&self) -> Vec<Msg> {
        let mut msgs = vec![Msg::CalculationModeSelected(self.mode)];
        if let Some(attendees) = self.attendees {
            msgs.push(Msg::AttendeesChanged(attendees.to_string()));
        }
        if let Some(salary) = self.salary {
            msgs.push(Msg::SalaryTextChanged(format_currency(salary, 0)));
        }
        if let Some(hours) = self.hours_per_week {
            msgs.push(Msg::HoursPerWeekChanged(hours.to_string()));
        }
        msgs.push(Msg::RateKindSelected(self.rate_kind));
        // Each filled slot appends the next one, so positive entries land at 0, 1, 2...
        msgs.extend(
            self.salaries
                .iter()
                .filter(|salary| **salary > 0.0)
                .enumerate()
                .map(|(index, salary)| Msg::IndividualSalaryChanged {
                    index,
                    raw: salary.to_string(),
                }),
        );
        if let Some(minutes) = self.duration_minutes {
            msgs.push(Msg::DurationSelected(minutes));
        }
        msgs
    }
}

/// Reads the settings file. A missing file yields defaults; a malformed one is an error.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            meter_debug!("No settings file at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read settings from {path:?}"));
        }
    };

    let config: AppConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse settings in {path:?}"))?;
    meter_info!("Loaded settings from {:?}", path);
    Ok(config)
}
