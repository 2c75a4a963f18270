// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_audit::ScheduleAction;
use adsales_domain::VolumeEntry;
use time::Date;

/// A command represents an operator's schedule edit as data only.
///
/// Commands are the only way to change the override table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a volume or replace its entry outright.
    SetVolumeEntry {
        /// The volume to set.
        volume: u32,
        /// The entry it should resolve to.
        entry: VolumeEntry,
    },
    /// Move a volume's publish date, keeping its status.
    UpdatePublishDate {
        /// The volume to move.
        volume: u32,
        /// The new publish date.
        date: Date,
    },
    /// Flag a volume as published, keeping its date.
    MarkPublished {
        /// The volume that went out.
        volume: u32,
    },
    /// Drop one override so the volume reverts to its default.
    ClearOverride {
        /// The volume to revert.
        volume: u32,
    },
    /// Drop every override.
    ResetOverrides,
}

impl Command {
    /// The audit action recorded for this command.
    #[must_use]
    pub const fn action(&self) -> ScheduleAction {
        match self {
            Self::SetVolumeEntry { .. } => ScheduleAction::SetVolumeEntry,
            Self::UpdatePublishDate { .. } => ScheduleAction::UpdatePublishDate,
            Self::MarkPublished { .. } => ScheduleAction::MarkPublished,
            Self::ClearOverride { .. } => ScheduleAction::ClearOverride,
            Self::ResetOverrides => ScheduleAction::ResetOverrides,
        }
    }
}
