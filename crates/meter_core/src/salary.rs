use serde::{Deserialize, Serialize};

pub const DEFAULT_HOURS_PER_WEEK: f64 = 40.0;
pub const DEFAULT_ATTENDEES: u32 = 5;
pub const DEFAULT_ANNUAL_SALARY: f64 = 80_000.0;

/// Whether individual entries are annual salaries or hourly rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    #[default]
    Annual,
    Hourly,
}

impl RateKind {
    pub fn as_param(self) -> &'static str {
        match self {
            RateKind::Annual => "annual",
            RateKind::Hourly => "hourly",
        }
    }

    /// Unknown values fall back to `Annual`.
    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "hourly" => RateKind::Hourly,
            _ => RateKind::Annual,
        }
    }
}

/// Which salary input drives the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    #[default]
    Average,
    Individual,
}

impl CalculationMode {
    pub fn as_param(self) -> &'static str {
        match self {
            CalculationMode::Average => "average",
            CalculationMode::Individual => "individual",
        }
    }

    /// Unknown values fall back to `Average`.
    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "individual" => CalculationMode::Individual,
            _ => CalculationMode::Average,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AverageSalary {
    pub attendees: u32,
    pub annual_salary: f64,
    pub hours_per_week: f64,
}

impl Default for AverageSalary {
    fn default() -> Self {
        Self {
            attendees: DEFAULT_ATTENDEES,
            annual_salary: DEFAULT_ANNUAL_SALARY,
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndividualSalaries {
    pub salaries: SalaryList,
    pub rate_kind: RateKind,
    pub hours_per_week: f64,
}

impl Default for IndividualSalaries {
    fn default() -> Self {
        Self {
            salaries: SalaryList::new(),
            rate_kind: RateKind::Annual,
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
        }
    }
}

/// Salary configuration the rate is computed from.
#[derive(Debug, Clone, PartialEq)]
pub enum SalaryConfig {
    Average(AverageSalary),
    Individual(IndividualSalaries),
}

impl Default for SalaryConfig {
    fn default() -> Self {
        SalaryConfig::Average(AverageSalary::default())
    }
}

impl SalaryConfig {
    pub fn mode(&self) -> CalculationMode {
        match self {
            SalaryConfig::Average(_) => CalculationMode::Average,
            SalaryConfig::Individual(_) => CalculationMode::Individual,
        }
    }

    pub fn hours_per_week(&self) -> f64 {
        match self {
            SalaryConfig::Average(avg) => avg.hours_per_week,
            SalaryConfig::Individual(ind) => ind.hours_per_week,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SalaryListError {
    #[error("salary slot {index} does not exist (list has {len} slots)")]
    SlotOutOfRange { index: usize, len: usize },
}

/// Editable per-attendee salary list.
///
/// The last slot is always an empty placeholder (0). Filling it appends a new
/// placeholder, so the list grows as the user types.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryList {
    entries: Vec<f64>,
}

impl Default for SalaryList {
    fn default() -> Self {
        Self::new()
    }
}

impl SalaryList {
    pub fn new() -> Self {
        Self { entries: vec![0.0] }
    }

    /// Builds a list from entered values and appends the trailing placeholder.
    /// Non-finite values are stored as 0.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut entries: Vec<f64> = values.into_iter().map(sanitize).collect();
        entries.push(0.0);
        Self { entries }
    }

    /// Sets slot `index`. Returns `true` when a new placeholder was appended.
    pub fn set(&mut self, index: usize, value: f64) -> Result<bool, SalaryListError> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(SalaryListError::SlotOutOfRange { index, len })?;
        *slot = sanitize(value);
        if index == len - 1 && *slot > 0.0 {
            self.entries.push(0.0);
            return Ok(true);
        }
        Ok(false)
    }

    /// All slots, placeholder included, in input order.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Entries that count towards the rate.
    pub fn positive(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().copied().filter(|value| *value > 0.0)
    }

    pub fn has_positive(&self) -> bool {
        self.positive().next().is_some()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
