use crate::format::{format_currency, parse_currency};
use crate::salary::DEFAULT_ANNUAL_SALARY;

pub const SLIDER_MIN: u32 = 10_000;
pub const SLIDER_MAX: u32 = 500_000;
pub const SLIDER_STEP: u32 = 1_000;

/// Average-salary slider and its text box, kept in step with each other.
///
/// The text is authoritative for the rate; the slider mirrors it within its
/// range and step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryInputs {
    slider: u32,
    text: String,
}

impl Default for SalaryInputs {
    fn default() -> Self {
        let slider = DEFAULT_ANNUAL_SALARY as u32;
        Self {
            slider,
            text: format_currency(f64::from(slider), 0),
        }
    }
}

impl SalaryInputs {
    pub fn slider(&self) -> u32 {
        self.slider
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Salary the text currently expresses; 0 when it holds nothing numeric.
    pub fn salary(&self) -> f64 {
        parse_currency(&self.text).unwrap_or(0.0)
    }

    pub fn slider_moved(&mut self, value: u32) {
        self.slider = clamp_to_slider(f64::from(value));
        self.text = format_currency(f64::from(self.slider), 0);
    }

    pub fn text_edited(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.slider = clamp_to_slider(parse_currency(&self.text).unwrap_or(0.0));
    }

    /// Applies an exact salary (e.g. from a link) without snapping it to the slider.
    pub fn set_salary(&mut self, salary: f64) {
        self.text = format_currency(salary, 0);
        self.slider = clamp_to_slider(salary);
    }
}

fn clamp_to_slider(value: f64) -> u32 {
    if !value.is_finite() {
        return SLIDER_MIN;
    }
    let stepped = (value / f64::from(SLIDER_STEP)).round() * f64::from(SLIDER_STEP);
    stepped.clamp(f64::from(SLIDER_MIN), f64::from(SLIDER_MAX)) as u32
}
