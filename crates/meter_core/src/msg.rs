use crate::{AppMode, CalculationMode, RateKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User switched between the live ticker and the static calculator.
    AppModeSelected(AppMode),
    /// User clicked Start/Pause/Resume.
    ToggleMeetingClicked,
    /// One second of meeting time elapsed (host scheduler).
    Tick,
    /// User asked for a share link; `page_url` is the page the link points at.
    ShareClicked { page_url: String },
    /// Page opened with a link (full URL or bare query string).
    RestoreFromLink(String),
    /// User toggled between average and individual salaries.
    CalculationModeSelected(CalculationMode),
    /// Raw text of the attendee count input.
    AttendeesChanged(String),
    /// Average-salary slider moved.
    SalarySliderMoved(u32),
    /// Raw text of the average-salary text input.
    SalaryTextChanged(String),
    /// Raw text of the hours-per-week input.
    HoursPerWeekChanged(String),
    /// Annual/hourly toggle for individual entries.
    RateKindSelected(RateKind),
    /// Raw text typed into individual salary slot `index`.
    IndividualSalaryChanged { index: usize, raw: String },
    /// Static calculator duration button.
    DurationSelected(u32),
}
