// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Builtin volume table and the sparse operator overrides layered over it.

use crate::types::{VolumeEntry, VolumeStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use time::macros::date;

/// Settings key under which the override map is persisted.
pub const OVERRIDES_STORAGE_KEY: &str = "volumeSchedule";

const DEFAULT_VOLUME_SCHEDULE: &[(u32, Date, VolumeStatus)] = &[
    (540, date!(2025 - 07 - 15), VolumeStatus::Published),
    (541, date!(2025 - 08 - 01), VolumeStatus::Published),
    (542, date!(2025 - 08 - 15), VolumeStatus::Published),
    (543, date!(2025 - 09 - 01), VolumeStatus::Published),
    (544, date!(2025 - 09 - 15), VolumeStatus::Published),
    (545, date!(2025 - 10 - 01), VolumeStatus::Published),
    (546, date!(2025 - 10 - 15), VolumeStatus::Published),
    (547, date!(2025 - 11 - 01), VolumeStatus::Published),
    (548, date!(2025 - 11 - 15), VolumeStatus::Published),
    (549, date!(2025 - 12 - 01), VolumeStatus::Published),
    (550, date!(2025 - 12 - 15), VolumeStatus::Published),
    (551, date!(2026 - 01 - 05), VolumeStatus::Published),
    (552, date!(2026 - 01 - 20), VolumeStatus::Published),
    (553, date!(2026 - 02 - 05), VolumeStatus::Published),
    (554, date!(2026 - 02 - 20), VolumeStatus::Planned),
    (555, date!(2026 - 03 - 05), VolumeStatus::Planned),
    (556, date!(2026 - 03 - 19), VolumeStatus::Planned),
    (557, date!(2026 - 04 - 02), VolumeStatus::Planned),
    (558, date!(2026 - 04 - 16), VolumeStatus::Planned),
    (559, date!(2026 - 05 - 07), VolumeStatus::Planned),
    (560, date!(2026 - 05 - 21), VolumeStatus::Planned),
    (561, date!(2026 - 06 - 04), VolumeStatus::Planned),
    (562, date!(2026 - 06 - 18), VolumeStatus::Planned),
    (563, date!(2026 - 07 - 02), VolumeStatus::Planned),
    (564, date!(2026 - 07 - 16), VolumeStatus::Planned),
    (565, date!(2026 - 08 - 06), VolumeStatus::Planned),
    (566, date!(2026 - 08 - 20), VolumeStatus::Planned),
    (567, date!(2026 - 09 - 03), VolumeStatus::Planned),
    (568, date!(2026 - 09 - 17), VolumeStatus::Planned),
    (569, date!(2026 - 10 - 01), VolumeStatus::Planned),
    (570, date!(2026 - 10 - 15), VolumeStatus::Planned),
    (571, date!(2026 - 11 - 05), VolumeStatus::Planned),
    (572, date!(2026 - 11 - 19), VolumeStatus::Planned),
    (573, date!(2026 - 12 - 03), VolumeStatus::Planned),
    (574, date!(2026 - 12 - 17), VolumeStatus::Planned),
];

/// An ordered volume → entry mapping.
///
/// Used both for the builtin defaults and for the effective schedule
/// (defaults with overrides applied).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<u32, VolumeEntry>,
}

impl Schedule {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The immutable default table shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        DEFAULT_VOLUME_SCHEDULE
            .iter()
            .map(|(volume, date, status)| (*volume, VolumeEntry::new(*date, *status)))
            .collect()
    }

    #[must_use]
    pub fn get(&self, volume: u32) -> Option<&VolumeEntry> {
        self.entries.get(&volume)
    }

    #[must_use]
    pub fn contains(&self, volume: u32) -> bool {
        self.entries.contains_key(&volume)
    }

    /// Inserts or replaces an entry, returning the previous one.
    pub fn insert(&mut self, volume: u32, entry: VolumeEntry) -> Option<VolumeEntry> {
        self.entries.insert(volume, entry)
    }

    /// Entries in ascending volume order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &VolumeEntry)> {
        self.entries.iter().map(|(volume, entry)| (*volume, entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the overrides on top of this schedule. Override entries win.
    #[must_use]
    pub fn merged_with(&self, overrides: &ScheduleOverrides) -> Self {
        let mut merged: Self = self.clone();
        for (volume, entry) in overrides.iter() {
            merged.insert(volume, *entry);
        }
        merged
    }
}

impl FromIterator<(u32, VolumeEntry)> for Schedule {
    fn from_iter<I: IntoIterator<Item = (u32, VolumeEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// One key-scoped change to the override map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverrideMutation {
    /// Store this entry for the volume.
    Upsert { volume: u32, entry: VolumeEntry },
    /// Drop the volume's override, falling back to the default.
    Remove { volume: u32 },
    /// Drop every override.
    Clear,
}

impl OverrideMutation {
    /// Builds the mutation that makes `volume` resolve to `entry`.
    ///
    /// An entry identical to the builtin default becomes a `Remove`, so the
    /// override map never holds redundant copies of defaults.
    #[must_use]
    pub fn for_entry(volume: u32, entry: VolumeEntry, defaults: &Schedule) -> Self {
        if defaults.get(volume) == Some(&entry) {
            Self::Remove { volume }
        } else {
            Self::Upsert { volume, entry }
        }
    }

    /// The targeted volume, or `None` for `Clear`.
    #[must_use]
    pub const fn volume(&self) -> Option<u32> {
        match self {
            Self::Upsert { volume, .. } | Self::Remove { volume } => Some(*volume),
            Self::Clear => None,
        }
    }
}

/// Sparse operator edits over the builtin schedule.
///
/// Holds only volumes whose entry differs from the default, or volumes the
/// default table does not know.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleOverrides {
    entries: BTreeMap<u32, VolumeEntry>,
}

impl ScheduleOverrides {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, volume: u32) -> Option<&VolumeEntry> {
        self.entries.get(&volume)
    }

    #[must_use]
    pub fn contains(&self, volume: u32) -> bool {
        self.entries.contains_key(&volume)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &VolumeEntry)> {
        self.entries.iter().map(|(volume, entry)| (*volume, entry))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies one mutation. Only the named key is touched.
    pub fn apply(&mut self, mutation: &OverrideMutation) {
        match mutation {
            OverrideMutation::Upsert { volume, entry } => {
                self.entries.insert(*volume, *entry);
            }
            OverrideMutation::Remove { volume } => {
                self.entries.remove(volume);
            }
            OverrideMutation::Clear => self.entries.clear(),
        }
    }
}

impl FromIterator<(u32, VolumeEntry)> for ScheduleOverrides {
    fn from_iter<I: IntoIterator<Item = (u32, VolumeEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
