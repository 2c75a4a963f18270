// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Volume ↔ date lookups over the effective schedule.
//!
//! A `VolumeCalendar` is an explicit value: it is built from the defaults and
//! the current overrides, and callers rebuild it after every write.

use crate::config::CalendarConfig;
use crate::contract_status::ContractStatus;
use crate::schedule::{Schedule, ScheduleOverrides};
use crate::types::{VolumeStatus, format_date_simple, iso_date};
use serde::Serialize;
use time::Date;

/// Publish date and duration of a contract window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContractDates {
    #[serde(with = "option_iso_date")]
    pub start_date: Option<Date>,
    #[serde(with = "option_iso_date")]
    pub end_date: Option<Date>,
    pub duration_days: Option<i64>,
}

/// One scheduled issue inside a volume range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeDate {
    pub volume: u32,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub status: VolumeStatus,
}

/// The issue after the current one and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingVolume {
    pub volume: u32,
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Negative when the date is already behind us.
    pub days_until: i64,
    pub status: VolumeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishingCycleKind {
    Biweekly,
    Triweekly,
}

impl PublishingCycleKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Biweekly => "biweekly",
            Self::Triweekly => "triweekly",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Biweekly => "Biweekly issue",
            Self::Triweekly => "Three-week gap",
        }
    }
}

/// Gap between a volume and its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishingCycle {
    pub cycle: PublishingCycleKind,
    pub label: &'static str,
    pub days: i64,
    pub is_regular: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

/// Contract lifecycle judged on calendar days instead of issue numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedContractStatus {
    pub status: ContractStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_end: Option<i64>,
}

const IRREGULAR_CYCLE_REASON: &str = "holiday or special schedule";

/// Read-only view of the effective schedule plus its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeCalendar {
    schedule: Schedule,
    config: CalendarConfig,
}

impl VolumeCalendar {
    /// Builds the calendar from a default table and the stored overrides.
    ///
    /// # Arguments
    ///
    /// * `defaults` - The builtin schedule
    /// * `overrides` - Operator edits layered on top
    /// * `config` - Calendar tunables
    #[must_use]
    pub fn new(defaults: &Schedule, overrides: &ScheduleOverrides, config: CalendarConfig) -> Self {
        Self {
            schedule: defaults.merged_with(overrides),
            config,
        }
    }

    /// Calendar over the builtin defaults and the given overrides.
    #[must_use]
    pub fn with_builtin_defaults(overrides: &ScheduleOverrides, config: CalendarConfig) -> Self {
        Self::new(&Schedule::builtin(), overrides, config)
    }

    #[must_use]
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Defaults merged with overrides, override winning per volume.
    #[must_use]
    pub const fn effective_schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The most recently published volume as of `today`.
    ///
    /// Picks the published entry with the latest date on or before `today`,
    /// the higher volume winning a tie. Falls back to the configured volume
    /// when nothing qualifies.
    #[must_use]
    pub fn current_volume(&self, today: Date) -> u32 {
        self.schedule
            .iter()
            .filter(|(_, entry)| entry.status.is_published() && entry.publish_date <= today)
            .max_by_key(|(volume, entry)| (entry.publish_date, *volume))
            .map_or(self.config.fallback_volume(), |(volume, _)| volume)
    }

    #[must_use]
    pub fn volume_date(&self, volume: u32) -> Option<Date> {
        self.schedule.get(volume).map(|entry| entry.publish_date)
    }

    /// Start and end publish dates of a window.
    ///
    /// All fields are `None` unless both volumes are scheduled.
    #[must_use]
    pub fn contract_dates(&self, start_volume: Option<u32>, end_volume: Option<u32>) -> ContractDates {
        let start_date: Option<Date> = start_volume.and_then(|v| self.volume_date(v));
        let end_date: Option<Date> = end_volume.and_then(|v| self.volume_date(v));
        match (start_date, end_date) {
            (Some(start), Some(end)) => ContractDates {
                start_date: Some(start),
                end_date: Some(end),
                duration_days: Some((end - start).whole_days()),
            },
            _ => ContractDates::default(),
        }
    }

    /// Every scheduled volume in `[start, end]`, ascending. Gaps are skipped.
    #[must_use]
    pub fn volume_range_dates(
        &self,
        start_volume: Option<u32>,
        end_volume: Option<u32>,
    ) -> Vec<VolumeDate> {
        let (Some(start), Some(end)) = (start_volume, end_volume) else {
            return Vec::new();
        };
        if start == 0 || end < start {
            return Vec::new();
        }
        self.schedule
            .iter()
            .filter(|(volume, _)| (start..=end).contains(volume))
            .map(|(volume, entry)| VolumeDate {
                volume,
                date: entry.publish_date,
                status: entry.status,
            })
            .collect()
    }

    /// The entry for `current + 1`, if scheduled.
    #[must_use]
    pub fn next_volume(&self, current_volume: u32, today: Date) -> Option<UpcomingVolume> {
        let volume: u32 = current_volume.checked_add(1)?;
        let entry = self.schedule.get(volume)?;
        Some(UpcomingVolume {
            volume,
            date: entry.publish_date,
            days_until: (entry.publish_date - today).whole_days(),
            status: entry.status,
        })
    }

    /// Classifies the gap between `volume` and `volume - 1`.
    #[must_use]
    pub fn analyze_publishing_cycle(&self, volume: u32) -> Option<PublishingCycle> {
        let current: Date = self.volume_date(volume)?;
        let previous: Date = self.volume_date(volume.checked_sub(1)?)?;
        let days: i64 = (current - previous).whole_days();

        if days <= self.config.irregular_cycle_threshold_days() {
            let cycle = PublishingCycleKind::Biweekly;
            Some(PublishingCycle {
                cycle,
                label: cycle.label(),
                days,
                is_regular: true,
                reason: None,
            })
        } else {
            let cycle = PublishingCycleKind::Triweekly;
            Some(PublishingCycle {
                cycle,
                label: cycle.label(),
                days,
                is_regular: false,
                reason: Some(IRREGULAR_CYCLE_REASON),
            })
        }
    }

    /// Contract lifecycle by comparing `today` with the window's publish dates.
    #[must_use]
    pub fn contract_status_by_date(
        &self,
        start_volume: Option<u32>,
        end_volume: Option<u32>,
        today: Date,
    ) -> DatedContractStatus {
        let (Some(start), Some(end)) = (start_volume, end_volume) else {
            return dated_unknown("No volume info");
        };
        let (Some(start_date), Some(end_date)) = (self.volume_date(start), self.volume_date(end))
        else {
            return dated_unknown("Schedule not set");
        };

        if today < start_date {
            let days: i64 = (start_date - today).whole_days();
            return DatedContractStatus {
                status: ContractStatus::Upcoming,
                label: "Contract upcoming",
                color: ContractStatus::Upcoming.color(),
                description: Some(format!(
                    "Starts in {days} days ({})",
                    format_date_simple(start_date)
                )),
                days_until_start: Some(days),
                days_remaining: None,
                days_since_end: None,
            };
        }

        if today <= end_date {
            let days: i64 = (end_date - today).whole_days();
            return DatedContractStatus {
                status: ContractStatus::Active,
                label: "Ad running",
                color: ContractStatus::Active.color(),
                description: Some(format!(
                    "{days} days left (until {})",
                    format_date_simple(end_date)
                )),
                days_until_start: None,
                days_remaining: Some(days),
                days_since_end: None,
            };
        }

        let days: i64 = (today - end_date).whole_days();
        DatedContractStatus {
            status: ContractStatus::Expired,
            label: "Contract expired",
            color: ContractStatus::Expired.color(),
            description: Some(format!(
                "Expired {days} days ago ({})",
                format_date_simple(end_date)
            )),
            days_until_start: None,
            days_remaining: None,
            days_since_end: Some(days),
        }
    }
}

fn dated_unknown(label: &'static str) -> DatedContractStatus {
    DatedContractStatus {
        status: ContractStatus::Unknown,
        label,
        color: ContractStatus::Unknown.color(),
        description: None,
        days_until_start: None,
        days_remaining: None,
        days_since_end: None,
    }
}

mod option_iso_date {
    use serde::Serializer;
    use time::Date;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => crate::types::iso_date::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }
}
