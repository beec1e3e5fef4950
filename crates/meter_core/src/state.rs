use serde::Serialize;

use crate::calculator::DurationSelection;
use crate::inputs::SalaryInputs;
use crate::rate::effective_hours;
use crate::salary::{
    AverageSalary, CalculationMode, IndividualSalaries, RateKind, SalaryConfig, SalaryList,
    DEFAULT_ATTENDEES, DEFAULT_HOURS_PER_WEEK,
};
use crate::session::MeetingSession;
use crate::share::SharedSession;
use crate::view_model::AppViewModel;

/// Which half of the UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AppMode {
    #[default]
    Live,
    Calculator,
}

/// Everything the host displays or edits, owned by the host and threaded
/// through `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    app_mode: AppMode,
    calculation_mode: CalculationMode,
    attendees_text: String,
    salary: SalaryInputs,
    hours_text: String,
    rate_kind: RateKind,
    salaries: SalaryList,
    duration: DurationSelection,
    session: MeetingSession,
    milestone_text: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            app_mode: AppMode::Live,
            calculation_mode: CalculationMode::Average,
            attendees_text: DEFAULT_ATTENDEES.to_string(),
            salary: SalaryInputs::default(),
            hours_text: DEFAULT_HOURS_PER_WEEK.to_string(),
            rate_kind: RateKind::Annual,
            salaries: SalaryList::new(),
            duration: DurationSelection::default(),
            session: MeetingSession::new(),
            milestone_text: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self)
    }

    /// Salary configuration the current inputs describe.
    ///
    /// Attendees read their leading digits ("5.0" is 5, "3 people" is 3, none is 0);
    /// unusable hours fall back to 40.
    pub fn salary_config(&self) -> SalaryConfig {
        let hours_per_week = effective_hours(self.hours_text.trim().parse().unwrap_or(0.0));
        match self.calculation_mode {
            CalculationMode::Average => SalaryConfig::Average(AverageSalary {
                attendees: leading_count(&self.attendees_text),
                annual_salary: self.salary.salary(),
                hours_per_week,
            }),
            CalculationMode::Individual => SalaryConfig::Individual(IndividualSalaries {
                salaries: self.salaries.clone(),
                rate_kind: self.rate_kind,
                hours_per_week,
            }),
        }
    }

    pub fn session(&self) -> &MeetingSession {
        &self.session
    }

    pub fn app_mode(&self) -> AppMode {
        self.app_mode
    }

    pub fn calculation_mode(&self) -> CalculationMode {
        self.calculation_mode
    }

    pub fn attendees_text(&self) -> &str {
        &self.attendees_text
    }

    pub fn salary_inputs(&self) -> &SalaryInputs {
        &self.salary
    }

    pub fn hours_text(&self) -> &str {
        &self.hours_text
    }

    pub fn rate_kind(&self) -> RateKind {
        self.rate_kind
    }

    pub fn salaries(&self) -> &SalaryList {
        &self.salaries
    }

    pub fn duration(&self) -> DurationSelection {
        self.duration
    }

    pub fn milestone_text(&self) -> Option<&str> {
        self.milestone_text.as_deref()
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn session_mut(&mut self) -> &mut MeetingSession {
        &mut self.session
    }

    pub(crate) fn set_app_mode(&mut self, mode: AppMode) {
        self.app_mode = mode;
    }

    pub(crate) fn set_calculation_mode(&mut self, mode: CalculationMode) {
        self.calculation_mode = mode;
    }

    pub(crate) fn set_attendees_text(&mut self, text: String) {
        self.attendees_text = text;
    }

    pub(crate) fn salary_inputs_mut(&mut self) -> &mut SalaryInputs {
        &mut self.salary
    }

    pub(crate) fn set_hours_text(&mut self, text: String) {
        self.hours_text = text;
    }

    pub(crate) fn set_rate_kind(&mut self, kind: RateKind) {
        self.rate_kind = kind;
    }

    pub(crate) fn salaries_mut(&mut self) -> &mut SalaryList {
        &mut self.salaries
    }

    pub(crate) fn duration_mut(&mut self) -> &mut DurationSelection {
        &mut self.duration
    }

    pub(crate) fn set_milestone_text(&mut self, text: Option<String>) {
        self.milestone_text = text;
    }

    /// Mirrors a decoded link into the editable inputs.
    pub(crate) fn apply_shared(&mut self, shared: &SharedSession) {
        self.calculation_mode = shared.config.mode();
        self.hours_text = shared.config.hours_per_week().to_string();
        match &shared.config {
            SalaryConfig::Average(avg) => {
                self.attendees_text = avg.attendees.to_string();
                self.salary.set_salary(avg.annual_salary);
            }
            SalaryConfig::Individual(ind) => {
                self.rate_kind = ind.rate_kind;
                self.salaries = ind.salaries.clone();
            }
        }
    }
}

fn leading_count(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let digits = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed, |end| &trimmed[..end]);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}
