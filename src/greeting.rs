use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;

/// Time-of-day greeting shown above the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl Greeting {
    /// Greeting for an hour of the day (0-23)
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Greeting::Morning,
            12..=16 => Greeting::Afternoon,
            17..=21 => Greeting::Evening,
            _ => Greeting::LateNight,
        }
    }

    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::for_hour(clock.hour())
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning",
            Greeting::Afternoon => "Good afternoon",
            Greeting::Evening => "Good evening",
            Greeting::LateNight => "Still up late",
        }
    }

    /// Full header line, personalised when a name is configured
    pub fn headline(&self, name: Option<&str>) -> String {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("{}, {}", self.text(), name),
            None => self.text().to_string(),
        }
    }
}

/// Periodic greeting refresh owned by the host screen
///
/// Sends `message()` on `tx` every `period`. The task is aborted when the
/// refresher is dropped, so nothing is delivered to an unmounted screen.
pub struct GreetingRefresher {
    handle: JoinHandle<()>,
}

impl GreetingRefresher {
    pub fn spawn<M, F>(period: Duration, tx: mpsc::UnboundedSender<M>, message: F) -> Self
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the screen already has a greeting
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(message()).is_err() {
                    tracing::debug!("GREETING: Receiver dropped, stopping refresh");
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for GreetingRefresher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
