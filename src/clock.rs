use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Source of the current wall-clock time
///
/// Injected wherever "today" matters so window generation and greetings can be
/// driven by a fixed clock in tests.
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current calendar day with the time of day dropped
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current hour of the day (0-23)
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Clock backed by the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant
///
/// The default is frozen at the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Fixed at midday of `date`
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self(date.and_hms_opt(hour, minute, 0).unwrap_or_else(|| date.and_time(Default::default())))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Type-erased clock shared between the controller and the host screen
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}
