//! Share-link codec.
//!
//! A link carries the salary configuration and the wall-clock start of the
//! meeting. The receiver recomputes elapsed time and cost on its own clock;
//! nothing live is synchronized between viewers.
use std::collections::BTreeMap;
use std::str::FromStr;

use meter_logging::meter_debug;
use url::{form_urlencoded, Url};

use crate::rate::effective_hours;
use crate::salary::{
    AverageSalary, CalculationMode, IndividualSalaries, RateKind, SalaryConfig, SalaryList,
    DEFAULT_ANNUAL_SALARY, DEFAULT_ATTENDEES, DEFAULT_HOURS_PER_WEEK,
};
use crate::session::MeetingSession;

pub const PARAM_MODE: &str = "mode";
pub const PARAM_HOURS: &str = "hours";
pub const PARAM_START: &str = "start";
pub const PARAM_ATTENDEES: &str = "attendees";
pub const PARAM_SALARY: &str = "salary";
pub const PARAM_RATE_KIND: &str = "type";
pub const PARAM_SALARIES: &str = "salaries";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShareError {
    /// The link carries no usable start time, so there is nothing to restore.
    #[error("link has no meeting start time")]
    MissingStart,
    #[error("start the meeting first to generate a shareable live link")]
    NotStarted,
    #[error("invalid page url {url}: {message}")]
    InvalidPageUrl { url: String, message: String },
}

/// Configuration and start anchor decoded from a link.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedSession {
    pub config: SalaryConfig,
    pub start_epoch_millis: i64,
}

/// Flat, order-independent key/value set carried in a link's query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareParams {
    values: BTreeMap<String, String>,
}

impl ShareParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses `a=1&b=2`, with or without a leading `?`. Later duplicates win.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let values = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { values }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }

    /// Accepts either a full link or a bare query string.
    pub fn from_link(link: &str) -> Self {
        match Url::parse(link) {
            Ok(url) => Self::from_url(&url),
            Err(_) => Self::from_query(link),
        }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Snapshot of `session` and `config` as link parameters.
pub fn encode(session: &MeetingSession, config: &SalaryConfig) -> Result<ShareParams, ShareError> {
    let start = session.start_epoch_millis().ok_or(ShareError::NotStarted)?;

    let mut params = ShareParams::new();
    params.insert(PARAM_MODE, config.mode().as_param());
    params.insert(
        PARAM_HOURS,
        format_number(effective_hours(config.hours_per_week())),
    );
    params.insert(PARAM_START, start.to_string());

    match config {
        SalaryConfig::Average(avg) => {
            params.insert(PARAM_ATTENDEES, avg.attendees.to_string());
            params.insert(PARAM_SALARY, format_number(avg.annual_salary));
        }
        SalaryConfig::Individual(ind) => {
            params.insert(PARAM_RATE_KIND, ind.rate_kind.as_param());
            let joined = ind
                .salaries
                .positive()
                .map(format_number)
                .collect::<Vec<_>>()
                .join(",");
            if !joined.is_empty() {
                params.insert(PARAM_SALARIES, joined);
            }
        }
    }
    Ok(params)
}

/// Rebuilds configuration and start time from link parameters.
///
/// Only the start time is mandatory; every other malformed or missing field
/// falls back to its default.
pub fn decode(params: &ShareParams) -> Result<SharedSession, ShareError> {
    let start_epoch_millis = params
        .get(PARAM_START)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .ok_or(ShareError::MissingStart)?;

    let hours_per_week = positive_or(params, PARAM_HOURS, DEFAULT_HOURS_PER_WEEK);
    let mode = params
        .get(PARAM_MODE)
        .map_or(CalculationMode::Average, CalculationMode::from_param);

    let config = match mode {
        CalculationMode::Average => SalaryConfig::Average(AverageSalary {
            attendees: parse_or(params, PARAM_ATTENDEES, DEFAULT_ATTENDEES),
            annual_salary: finite_or(params, PARAM_SALARY, DEFAULT_ANNUAL_SALARY),
            hours_per_week,
        }),
        CalculationMode::Individual => {
            let salaries = params
                .get(PARAM_SALARIES)
                .map(parse_salary_list)
                .unwrap_or_default();
            SalaryConfig::Individual(IndividualSalaries {
                salaries: SalaryList::from_values(salaries),
                rate_kind: params
                    .get(PARAM_RATE_KIND)
                    .map_or(RateKind::Annual, RateKind::from_param),
                hours_per_week,
            })
        }
    };

    Ok(SharedSession {
        config,
        start_epoch_millis,
    })
}

/// Full link on `page_url`, replacing any query or fragment it had.
pub fn share_url(page_url: &str, params: &ShareParams) -> Result<Url, ShareError> {
    let mut url = Url::parse(page_url).map_err(|err| ShareError::InvalidPageUrl {
        url: page_url.to_string(),
        message: err.to_string(),
    })?;
    url.set_fragment(None);
    url.set_query(Some(&params.to_query_string()));
    Ok(url)
}

fn parse_salary_list(raw: &str) -> Vec<f64> {
    raw.split(',')
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect()
}

fn parse_or<T: FromStr>(params: &ShareParams, key: &str, default: T) -> T {
    match params.get(key).map(|raw| raw.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            meter_debug!("Malformed link field {}; using default", key);
            default
        }
        None => default,
    }
}

fn positive_or(params: &ShareParams, key: &str, default: f64) -> f64 {
    let value = parse_or(params, key, default);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

/// Keeps zero and negative values; a zero salary must decode to a zero rate.
fn finite_or(params: &ShareParams, key: &str, default: f64) -> f64 {
    let value = parse_or(params, key, default);
    if value.is_finite() {
        value
    } else {
        default
    }
}

// f64's Display is the shortest form that parses back to the same value.
fn format_number(value: f64) -> String {
    format!("{value}")
}
