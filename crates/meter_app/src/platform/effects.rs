use std::sync::mpsc;
use std::time::Duration;

use meter_core::{Effect, Msg};
use meter_logging::{meter_info, meter_warn};

use super::ticker::Ticker;

/// Something the user should see that is not part of the live display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    ShareLink(String),
}

/// Carries out the effects `update` asks for.
pub struct EffectRunner {
    ticker: Ticker,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, tick_interval: Duration) -> Self {
        Self {
            ticker: Ticker::new(tick_interval),
            msg_tx,
        }
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartTicker => self.ticker.start(self.msg_tx.clone()),
                Effect::CancelTicker => self.ticker.cancel(),
                Effect::Alert(text) => {
                    meter_warn!("Alert: {}", text);
                    notices.push(Notice::Alert(text));
                }
                Effect::PublishShareLink { url } => {
                    meter_info!("Share link url_len={}", url.len());
                    notices.push(Notice::ShareLink(url));
                }
            }
        }
        notices
    }
}
