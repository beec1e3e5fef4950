use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::config::AppConfig;
use super::logging::LogDestination;
use meter_core::{CalculationMode, RateKind};

#[derive(Debug, Parser)]
#[command(name = "meeting-meter", version, about = "What is this meeting costing?")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Settings file (RON). Missing file means built-in defaults.
    #[arg(long, global = true, default_value = "meeting_meter.ron")]
    pub config: PathBuf,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogArg::Terminal)]
    pub log: LogArg,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the final view as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the live ticker (default).
    Live(LiveArgs),
    /// Print the cost of a meeting of fixed length.
    Estimate(EstimateArgs),
}

#[derive(Debug, Default, Args)]
pub struct LiveArgs {
    /// Shared link (or bare query string) to pick up a running meeting.
    #[arg(long)]
    pub link: Option<String>,

    /// Stop after this many seconds instead of running until interrupted.
    #[arg(long)]
    pub seconds: Option<u64>,

    /// Print a share link once the meeting runs.
    #[arg(long)]
    pub share: bool,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Meeting length in minutes (15, 30, ... 135).
    #[arg(long)]
    pub duration: Option<u32>,
}

#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    /// Number of attendees (average mode).
    #[arg(long, global = true)]
    pub attendees: Option<u32>,

    /// Average annual salary; `$80,000` and `80000` both work.
    #[arg(long, global = true)]
    pub salary: Option<String>,

    /// Working hours per week.
    #[arg(long, global = true)]
    pub hours: Option<f64>,

    /// Comma-separated individual salaries; switches to individual mode.
    #[arg(long, global = true, value_delimiter = ',')]
    pub individual: Option<Vec<f64>>,

    /// Individual entries are hourly rates instead of annual salaries.
    #[arg(long, global = true)]
    pub hourly: bool,

    /// Page the share link points at.
    #[arg(long, global = true)]
    pub page_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
        }
    }
}

impl SettingsArgs {
    /// Command-line values win over the settings file.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(attendees) = self.attendees {
            config.attendees = Some(attendees);
        }
        if let Some(salary) = &self.salary {
            config.salary = meter_core::parse_currency(salary);
        }
        if let Some(hours) = self.hours {
            config.hours_per_week = Some(hours);
        }
        if let Some(salaries) = &self.individual {
            config.mode = CalculationMode::Individual;
            config.salaries = salaries.clone();
        }
        if self.hourly {
            config.rate_kind = RateKind::Hourly;
        }
        if let Some(page_url) = &self.page_url {
            config.page_url = Some(page_url.clone());
        }
    }
}
