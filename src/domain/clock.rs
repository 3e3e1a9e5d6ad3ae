//! Wall-clock abstraction used to date generated articles

use chrono::{DateTime, Days, Duration, FixedOffset, Local, SecondsFormat, TimeZone};
use std::fmt::Display;

/// Source of the current time
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// Reads the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    type Tz = FixedOffset;

    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Format `now` minus `days` calendar days as an RFC 3339 timestamp.
///
/// Subtraction keeps the local wall-clock time; if that time does not exist on
/// the target day the result falls back to exact 24 hour steps.
pub fn days_ago<Tz>(now: &DateTime<Tz>, days: u64) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = now
        .clone()
        .checked_sub_days(Days::new(days))
        .unwrap_or_else(|| now.clone() - Duration::days(days as i64));
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
