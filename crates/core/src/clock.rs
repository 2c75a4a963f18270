// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_domain::DomainError;
use chrono::Datelike;
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime};

/// Source of "today" and "now" for the calendar service.
pub trait Clock {
    /// The business calendar date.
    fn today(&self) -> Date;

    /// The instant used to timestamp audit events.
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock, with "today" taken in the business timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Builds a clock from an IANA timezone name such as `America/Vancouver`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is not recognised.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let tz: Tz = name
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self::new(tz))
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let local = chrono::Utc::now().with_timezone(&self.tz).date_naive();
        // Fall back to the UTC date only if the conversion is out of range.
        u8::try_from(local.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .zip(u8::try_from(local.day()).ok())
            .and_then(|(month, day)| Date::from_calendar_date(local.year(), month, day).ok())
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock pinned to a fixed date and instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
    now: OffsetDateTime,
}

impl FixedClock {
    /// Pins "today" to `today`, with "now" at midnight UTC of that day.
    #[must_use]
    pub const fn on(today: Date) -> Self {
        Self {
            today,
            now: today.midnight().assume_utc(),
        }
    }

    #[must_use]
    pub const fn new(today: Date, now: OffsetDateTime) -> Self {
        Self { today, now }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }

    fn now(&self) -> OffsetDateTime {
        self.now
    }
}
