use std::io::Write;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::bail;
use meter_core::{update, AppMode, AppState, AppViewModel, Clock, Msg};
use meter_logging::{meter_info, meter_warn};

use super::cli::LiveArgs;
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::render;

/// Terminal host: owns the state, the clock, the ticker and the output.
pub struct Host<C: Clock, W: Write> {
    state: AppState,
    clock: C,
    out: W,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    last_milestone: Option<String>,
}

impl<C: Clock, W: Write> Host<C, W> {
    pub fn new(clock: C, out: W, tick_interval: Duration) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        Self {
            state: AppState::new(),
            clock,
            out,
            runner: EffectRunner::new(msg_tx, tick_interval),
            msg_rx,
            last_milestone: None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn apply_settings(&mut self, config: &AppConfig) -> anyhow::Result<()> {
        for msg in config.settings_messages() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    pub fn run_estimate(&mut self, duration: Option<u32>) -> anyhow::Result<()> {
        self.dispatch(Msg::AppModeSelected(AppMode::Calculator))?;
        if let Some(minutes) = duration {
            self.dispatch(Msg::DurationSelected(minutes))?;
        }
        writeln!(self.out, "{}", render::estimate_report(&self.state.view()))?;
        Ok(())
    }

    /// Runs the live ticker until `args.seconds` ticks have passed, or forever.
    pub fn run_live(&mut self, args: &LiveArgs, page_url: &str) -> anyhow::Result<()> {
        if let Some(link) = &args.link {
            self.dispatch(Msg::RestoreFromLink(link.clone()))?;
            if !self.state.session().is_running() {
                meter_warn!("Link did not restore a running meeting; starting a new one");
            }
        }
        if !self.state.session().is_running() {
            self.dispatch(Msg::ToggleMeetingClicked)?;
        }
        if !self.runner.ticker_running() {
            bail!("the meeting could not be started");
        }
        if args.share {
            self.dispatch(Msg::ShareClicked {
                page_url: page_url.to_string(),
            })?;
        }

        let mut ticks = 0u64;
        while let Ok(msg) = self.msg_rx.recv() {
            let is_tick = msg == Msg::Tick;
            self.dispatch(msg)?;
            if !is_tick {
                continue;
            }
            ticks += 1;
            if args.seconds.is_some_and(|limit| ticks >= limit) {
                self.dispatch(Msg::ToggleMeetingClicked)?;
                break;
            }
        }

        writeln!(self.out, "{}", render::summary(&self.state.view()))?;
        meter_info!("Live run finished after {} ticks", ticks);
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let is_tick = msg == Msg::Tick;
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg, &self.clock);
        let was_dirty = state.consume_dirty();
        self.state = state;

        for notice in self.runner.run(effects) {
            writeln!(self.out, "{}", render::notice(&notice))?;
        }

        if was_dirty && is_tick {
            let view = self.state.view();
            writeln!(self.out, "{}", render::live_line(&view))?;
            if view.milestone.is_some() && view.milestone != self.last_milestone {
                if let Some(text) = &view.milestone {
                    writeln!(self.out, "  {text}")?;
                }
                self.last_milestone = view.milestone;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_core::{FixedClock, SessionPhase};

    fn host() -> Host<FixedClock, Vec<u8>> {
        Host::new(FixedClock(1_000), Vec::new(), Duration::from_millis(5))
    }

    #[test]
    fn live_run_stops_after_requested_seconds() {
        let mut host = host();
        let args = LiveArgs {
            seconds: Some(3),
            share: true,
            ..LiveArgs::default()
        };
        host.run_live(&args, "https://meter.example/").unwrap();

        let view = host.view();
        assert_eq!(view.phase, SessionPhase::Paused);
        assert_eq!(view.live_time, "00:03");

        let output = String::from_utf8(host.into_output()).unwrap();
        assert!(output.contains("Live ticker link: https://meter.example/?"));
        assert!(output.contains("start=1000"));
        assert!(output.contains("[00:03]"));
        assert!(output.ends_with("Meeting paused: 00:03 elapsed, $0.16 spent\n"));
    }

    #[test]
    fn live_run_without_rate_fails() {
        let mut host = host();
        let config = AppConfig {
            attendees: Some(0),
            ..AppConfig::default()
        };
        host.apply_settings(&config).unwrap();

        assert!(host.run_live(&LiveArgs::default(), "https://meter.example/").is_err());
        let output = String::from_utf8(host.into_output()).unwrap();
        assert!(output.contains("Please configure meeting settings"));
    }

    #[test]
    fn live_run_resumes_shared_link() {
        let mut host = host();
        let args = LiveArgs {
            link: Some(
                "https://meter.example/?start=0&mode=average&attendees=3&salary=60000".to_string(),
            ),
            seconds: Some(2),
            ..LiveArgs::default()
        };
        host.run_live(&args, "https://meter.example/").unwrap();

        let view = host.view();
        assert_eq!(view.attendees, "3");
        assert_eq!(view.salary_text, "$60,000");
        // One second restored from the link plus two ticks.
        assert_eq!(view.live_time, "00:03");

        let output = String::from_utf8(host.into_output()).unwrap();
        assert!(output.contains("[00:02]"));
        assert!(output.ends_with("Meeting paused: 00:03 elapsed, $0.07 spent\n"));
    }

    #[test]
    fn live_run_with_unusable_link_fails() {
        let mut host = host();
        let args = LiveArgs {
            link: Some("https://meter.example/?start=0&mode=individual".to_string()),
            seconds: Some(1),
            ..LiveArgs::default()
        };

        assert!(host.run_live(&args, "https://meter.example/").is_err());
        let output = String::from_utf8(host.into_output()).unwrap();
        assert_eq!(output.matches("Please configure meeting settings").count(), 2);
    }

    #[test]
    fn json_view_has_no_change_flag() {
        let json = serde_json::to_value(host().view()).unwrap();
        assert!(json.get("dirty").is_none());
        assert_eq!(json["live_time"], "00:00");
    }

    #[test]
    fn estimate_uses_configured_duration() {
        let mut host = host();
        let config = AppConfig {
            attendees: Some(10),
            duration_minutes: Some(60),
            ..AppConfig::default()
        };
        host.apply_settings(&config).unwrap();
        host.run_estimate(None).unwrap();

        let output = String::from_utf8(host.into_output()).unwrap();
        assert!(output.starts_with("A 1h meeting costs $384.62\n"));
    }
}
