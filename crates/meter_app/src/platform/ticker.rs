use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use meter_core::Msg;
use meter_logging::meter_debug;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Repeating one-second scheduler that posts `Msg::Tick`.
///
/// At most one ticker thread exists at a time. `cancel` joins the thread, so
/// no tick is sent after it returns.
pub struct Ticker {
    interval: Duration,
    running: Option<RunningTicker>,
}

struct RunningTicker {
    cancel_tx: mpsc::Sender<()>,
    thread: JoinHandle<()>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn start(&mut self, msg_tx: mpsc::Sender<Msg>) {
        if self.running.is_some() {
            return;
        }
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let interval = self.interval;
        let thread = thread::spawn(move || loop {
            match cancel_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if msg_tx.send(Msg::Tick).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        meter_debug!("Ticker started");
        self.running = Some(RunningTicker { cancel_tx, thread });
    }

    pub fn cancel(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.cancel_tx.send(());
            let _ = running.thread.join();
            meter_debug!("Ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
