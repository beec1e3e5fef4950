use crate::format::format_duration_label;
use crate::rate::cost_per_second;
use crate::salary::SalaryConfig;

/// Meeting lengths offered by the static calculator, in minutes.
pub const DURATION_OPTIONS: [u32; 9] = [15, 30, 45, 60, 75, 90, 105, 120, 135];

const DEFAULT_DURATION_INDEX: usize = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("{0} minutes is not one of the offered durations")]
    Unsupported(u32),
}

/// The one selected duration; defaults to 30 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationSelection {
    index: usize,
}

impl Default for DurationSelection {
    fn default() -> Self {
        Self {
            index: DEFAULT_DURATION_INDEX,
        }
    }
}

impl DurationSelection {
    pub fn minutes(&self) -> u32 {
        DURATION_OPTIONS[self.index]
    }

    pub fn label(&self) -> String {
        format_duration_label(self.minutes())
    }

    pub fn select(&mut self, minutes: u32) -> Result<(), DurationError> {
        let index = DURATION_OPTIONS
            .iter()
            .position(|option| *option == minutes)
            .ok_or(DurationError::Unsupported(minutes))?;
        self.index = index;
        Ok(())
    }

    pub fn is_selected(&self, minutes: u32) -> bool {
        self.minutes() == minutes
    }
}

/// Cost of a meeting that lasts exactly `selection`.
pub fn static_cost(config: &SalaryConfig, selection: DurationSelection) -> f64 {
    f64::from(selection.minutes()) * 60.0 * cost_per_second(config)
}
