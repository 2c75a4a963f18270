// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Renders a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.to_string()
}

/// Renders a date as `YYYY.MM.DD` for display.
#[must_use]
pub fn format_date_simple(date: Date) -> String {
    format!(
        "{:04}.{:02}.{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Serde adapter storing a `time::Date` as a `YYYY-MM-DD` string.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes the date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    /// Deserializes a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid calendar date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Highest volume number storage can hold.
pub const MAX_VOLUME: u32 = i32::MAX.unsigned_abs();

/// Rejects volume number zero and numbers above `MAX_VOLUME`.
///
/// # Errors
///
/// Returns `DomainError::InvalidVolume` for out-of-range numbers.
pub const fn validate_volume(volume: u32) -> Result<u32, DomainError> {
    if volume == 0 || volume > MAX_VOLUME {
        return Err(DomainError::InvalidVolume(volume));
    }
    Ok(volume)
}

/// Whether an issue has been released or is still scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
    /// Scheduled but not yet released.
    #[default]
    Planned,
    /// Released to readers.
    Published,
}

impl VolumeStatus {
    /// Converts this status to its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Published => "published",
        }
    }

    #[must_use]
    pub const fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

impl FromStr for VolumeStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "published" => Ok(Self::Published),
            _ => Err(DomainError::InvalidVolumeStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The publication date and status of one magazine issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeEntry {
    /// Calendar date the issue is (or was) released.
    #[serde(rename = "date", with = "iso_date")]
    pub publish_date: Date,
    pub status: VolumeStatus,
}

impl VolumeEntry {
    #[must_use]
    pub const fn new(publish_date: Date, status: VolumeStatus) -> Self {
        Self {
            publish_date,
            status,
        }
    }

    #[must_use]
    pub const fn planned(publish_date: Date) -> Self {
        Self::new(publish_date, VolumeStatus::Planned)
    }

    #[must_use]
    pub const fn published(publish_date: Date) -> Self {
        Self::new(publish_date, VolumeStatus::Published)
    }

    /// Returns a copy with a different date and the same status.
    #[must_use]
    pub const fn with_date(self, publish_date: Date) -> Self {
        Self::new(publish_date, self.status)
    }

    /// Returns a copy with a different status and the same date.
    #[must_use]
    pub const fn with_status(self, status: VolumeStatus) -> Self {
        Self::new(self.publish_date, status)
    }
}

/// A customer's contracted volume window.
///
/// Either bound may be unknown. A window with both bounds is "known".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContractWindow {
    pub start_volume: Option<u32>,
    pub end_volume: Option<u32>,
}

impl ContractWindow {
    /// Builds a window, treating volume zero as unknown.
    #[must_use]
    pub fn new(start_volume: Option<u32>, end_volume: Option<u32>) -> Self {
        Self {
            start_volume: start_volume.filter(|v| *v > 0),
            end_volume: end_volume.filter(|v| *v > 0),
        }
    }

    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            start_volume: None,
            end_volume: None,
        }
    }

    /// A single-issue contract.
    #[must_use]
    pub fn single(volume: u32) -> Self {
        Self::new(Some(volume), Some(volume))
    }

    #[must_use]
    pub fn range(start_volume: u32, end_volume: u32) -> Self {
        Self::new(Some(start_volume), Some(end_volume))
    }

    /// Number of issues covered, `end - start + 1`, when both bounds are known
    /// and the window is not inverted.
    #[must_use]
    pub fn issue_count(&self) -> Option<u32> {
        match (self.start_volume, self.end_volume) {
            (Some(start), Some(end)) if end >= start => Some((end - start).saturating_add(1)),
            _ => None,
        }
    }

    /// Whether the volume falls inside the window. Unknown windows contain nothing.
    #[must_use]
    pub fn contains(&self, volume: u32) -> bool {
        match (self.start_volume, self.end_volume) {
            (Some(start), Some(end)) => (start..=end).contains(&volume),
            _ => false,
        }
    }
}

/// Price, contracted total and amount received for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmounts {
    pub price_per_issue: f64,
    pub total_contracted_amount: f64,
    pub amount_received: f64,
}

impl MoneyAmounts {
    /// Derives the contracted total from the window and per-issue price.
    ///
    /// # Arguments
    ///
    /// * `window` - The contracted volume window
    /// * `price_per_issue` - Price charged per issue
    /// * `amount_received` - Amount collected so far
    #[must_use]
    pub fn for_window(window: &ContractWindow, price_per_issue: f64, amount_received: f64) -> Self {
        Self {
            price_per_issue,
            total_contracted_amount: crate::ad_row::calculate_total_amount(window, price_per_issue),
            amount_received,
        }
    }

    /// Outstanding balance. Negative when the customer overpaid.
    #[must_use]
    pub fn unpaid(&self) -> f64 {
        self.total_contracted_amount - self.amount_received
    }

    /// Percentage of the total received, or 0 when the total is not positive.
    #[must_use]
    pub fn collection_rate(&self) -> f64 {
        if self.total_contracted_amount > 0.0 {
            self.amount_received / self.total_contracted_amount * 100.0
        } else {
            0.0
        }
    }
}
