// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Volume reported when no published issue is on or before today.
pub const DEFAULT_FALLBACK_VOLUME: u32 = 553;

/// Largest gap in days still counted as the regular biweekly cadence.
pub const DEFAULT_IRREGULAR_CYCLE_THRESHOLD_DAYS: i64 = 16;

/// Tunables for the volume calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    fallback_volume: u32,
    irregular_cycle_threshold_days: i64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            fallback_volume: DEFAULT_FALLBACK_VOLUME,
            irregular_cycle_threshold_days: DEFAULT_IRREGULAR_CYCLE_THRESHOLD_DAYS,
        }
    }
}

impl CalendarConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `fallback_volume` - Current volume when nothing is published yet
    /// * `irregular_cycle_threshold_days` - Gap above which a cycle is irregular
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarConfig` if either value is below 1.
    pub fn new(
        fallback_volume: u32,
        irregular_cycle_threshold_days: i64,
    ) -> Result<Self, DomainError> {
        if fallback_volume == 0 {
            return Err(DomainError::InvalidCalendarConfig {
                field: "fallback_volume",
                reason: String::from("must be at least 1"),
            });
        }
        if irregular_cycle_threshold_days < 1 {
            return Err(DomainError::InvalidCalendarConfig {
                field: "irregular_cycle_threshold_days",
                reason: format!("must be at least 1, got {irregular_cycle_threshold_days}"),
            });
        }
        Ok(Self {
            fallback_volume,
            irregular_cycle_threshold_days,
        })
    }

    #[must_use]
    pub const fn fallback_volume(&self) -> u32 {
        self.fallback_volume
    }

    #[must_use]
    pub const fn irregular_cycle_threshold_days(&self) -> i64 {
        self.irregular_cycle_threshold_days
    }
}
