//! Auto-advance timer service.
//!
//! Emits [`Trigger::Tick`] at a fixed interval. The host pauses it while the
//! pointer is over the mask and restarts it on exit or after a pagination
//! click; every restart begins a fresh interval.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::trigger::Trigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerControl {
    Running,
    Paused,
    Restart,
    Shutdown,
}

/// Control side of a running [`AutoAdvance`]
#[derive(Debug, Clone)]
pub struct AutoAdvanceHandle {
    control: watch::Sender<TimerControl>,
}

impl AutoAdvanceHandle {
    fn send(&self, state: TimerControl) {
        if self.control.send(state).is_err() {
            debug!("Auto-advance already stopped, ignoring {:?}", state);
        }
    }

    /// Pointer entered the mask
    pub fn pause(&self) {
        self.send(TimerControl::Paused);
    }

    /// Pointer left the mask
    pub fn resume(&self) {
        self.send(TimerControl::Running);
    }

    /// Start a fresh interval, e.g. after a pagination click
    pub fn restart(&self) {
        self.send(TimerControl::Restart);
    }

    pub fn shutdown(&self) {
        self.send(TimerControl::Shutdown);
    }

    pub fn is_paused(&self) -> bool {
        *self.control.borrow() == TimerControl::Paused
    }
}

pub struct AutoAdvance {
    interval: Option<Duration>,
    trigger_tx: mpsc::UnboundedSender<Trigger>,
}

impl AutoAdvance {
    /// `interval` of `None` disables auto-advance
    pub fn new(interval: Option<Duration>, trigger_tx: mpsc::UnboundedSender<Trigger>) -> Self {
        Self {
            interval,
            trigger_tx,
        }
    }

    /// Spawn the timer on the current runtime
    pub fn spawn(self) -> (AutoAdvanceHandle, JoinHandle<()>) {
        let (control, rx) = watch::channel(TimerControl::Running);
        let task = tokio::spawn(self.run(rx));
        (AutoAdvanceHandle { control }, task)
    }

    fn ticker(period: Duration) -> Interval {
        // First tick one full period from now
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }

    /// Tick until shutdown or until the trigger receiver is dropped
    pub async fn run(self, mut control: watch::Receiver<TimerControl>) {
        let Some(period) = self.interval.filter(|p| !p.is_zero()) else {
            info!("Auto-advance disabled");
            while control.changed().await.is_ok() {
                if *control.borrow_and_update() == TimerControl::Shutdown {
                    break;
                }
            }
            return;
        };

        info!("Starting slider interval: {:?}", period);
        let mut ticker = Self::ticker(period);
        let mut paused = *control.borrow_and_update() == TimerControl::Paused;

        loop {
            tokio::select! {
                changed = control.changed() => {
                    if changed.is_err() {
                        debug!("Auto-advance handle dropped");
                        break;
                    }
                    match *control.borrow_and_update() {
                        TimerControl::Shutdown => {
                            info!("Auto-advance received shutdown signal");
                            break;
                        }
                        TimerControl::Paused => {
                            debug!("Pointer over mask, stopping auto-advance");
                            paused = true;
                        }
                        TimerControl::Running | TimerControl::Restart => {
                            debug!("Restarting auto-advance interval");
                            paused = false;
                            ticker = Self::ticker(period);
                        }
                    }
                }

                _ = ticker.tick(), if !paused => {
                    if self.trigger_tx.send(Trigger::Tick).is_err() {
                        warn!("Failed to send auto-advance tick: receiver dropped");
                        break;
                    }
                }
            }
        }
    }
}
