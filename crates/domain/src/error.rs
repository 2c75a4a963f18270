// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::MAX_VOLUME;

/// Errors raised by the volume calendar and its supporting types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Volume number outside `1..=MAX_VOLUME`.
    InvalidVolume(u32),
    /// Failed to parse a date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A status string was neither `planned` nor `published`.
    InvalidVolumeStatus(String),
    /// A timezone name is not a recognised IANA zone.
    InvalidTimezone(String),
    /// A calendar configuration value is out of range.
    InvalidCalendarConfig {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The volume is not present in the effective schedule.
    VolumeNotFound(u32),
    /// The volume has no operator override to clear.
    OverrideNotFound(u32),
    /// The requested edit would leave the entry unchanged.
    NoChange {
        /// The volume the edit targeted.
        volume: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVolume(volume) => {
                write!(
                    f,
                    "Invalid volume number {volume}: volumes run from 1 to {MAX_VOLUME}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidVolumeStatus(value) => {
                write!(
                    f,
                    "Invalid volume status '{value}': expected 'planned' or 'published'"
                )
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: {name}"),
            Self::InvalidCalendarConfig { field, reason } => {
                write!(f, "Invalid calendar configuration for {field}: {reason}")
            }
            Self::VolumeNotFound(volume) => write!(f, "Volume {volume} is not in the schedule"),
            Self::OverrideNotFound(volume) => {
                write!(f, "Volume {volume} has no schedule override")
            }
            Self::NoChange { volume } => {
                write!(f, "Volume {volume} already has the requested entry")
            }
        }
    }
}

impl std::error::Error for DomainError {}
