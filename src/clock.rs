use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use std::fmt::Display;

use crate::{face::format_digital, Error, Result};

/// Wall-clock reading in some timezone, 24-hour.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct WallTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Display for WallTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_digital(self.hours, self.minutes, self.seconds))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Clock {
    tz: Tz,
}

impl Display for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.now())
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}

impl Clock {
    pub fn new(timezone: &str) -> Result<Self> {
        let tz = timezone
            .parse::<Tz>()
            .map_err(|_| Error::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { tz })
    }

    pub fn now(&self) -> WallTime {
        self.at(Utc::now())
    }

    pub fn at<T: TimeZone>(&self, instant: DateTime<T>) -> WallTime {
        let local = instant.with_timezone(&self.tz);
        WallTime {
            hours: local.hour(),
            minutes: local.minute(),
            // leap seconds are carried in the nanoseconds, so this stays below 60
            seconds: local.second(),
        }
    }
}

/// Current wall-clock time in `timezone`. Not cached.
pub fn current_time(timezone: &str) -> Result<WallTime> {
    Ok(Clock::new(timezone)?.now())
}
