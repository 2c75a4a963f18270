// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use adsales_domain::{
    ContractDates, DatedContractStatus, PublishingCycle, Schedule, ScheduleOverrides,
    UpcomingVolume, VolumeDate, VolumeEntry, VolumeStatus,
};
use serde::{Deserialize, Serialize};

use crate::ad_import::ExportFormat;

/// One row of the effective schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntryInfo {
    pub volume: u32,
    /// Publish date (`YYYY-MM-DD`).
    pub date: String,
    pub status: VolumeStatus,
    /// Whether the entry comes from the override table.
    pub is_override: bool,
}

/// API response listing the effective schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListScheduleResponse {
    pub today: String,
    pub current_volume: u32,
    pub override_count: usize,
    pub entries: Vec<ScheduleEntryInfo>,
}

/// API response describing the current and next issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentVolumeResponse {
    pub today: String,
    pub current_volume: u32,
    /// Publish date of the current volume, if scheduled.
    pub current_date: Option<String>,
    pub next: Option<UpcomingVolume>,
}

/// A contract window given by its first and last volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractWindowRequest {
    pub start_volume: Option<u32>,
    pub end_volume: Option<u32>,
}

/// API response with every scheduled issue of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRangeResponse {
    pub start_volume: Option<u32>,
    pub end_volume: Option<u32>,
    pub volumes: Vec<VolumeDate>,
}

/// API response with the calendar view of a contract window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractOverviewResponse {
    pub dates: ContractDates,
    pub status: DatedContractStatus,
}

/// API response with the publishing cycle ending at a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishingCycleResponse {
    pub volume: u32,
    /// `None` when the volume or its predecessor is unscheduled.
    pub cycle: Option<PublishingCycle>,
}

/// A schedule edit as submitted by an editor.
///
/// Dates and statuses arrive as strings and are validated by the handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScheduleEdit {
    #[serde(rename_all = "camelCase")]
    SetVolumeEntry {
        volume: u32,
        date: String,
        status: String,
    },
    #[serde(rename_all = "camelCase")]
    UpdatePublishDate { volume: u32, date: String },
    #[serde(rename_all = "camelCase")]
    MarkPublished { volume: u32 },
    #[serde(rename_all = "camelCase")]
    ClearOverride { volume: u32 },
    ResetOverrides,
}

/// API request to edit the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEditRequest {
    /// Who is making the edit.
    pub editor: String,
    /// Optional free-text reason, recorded in the change log.
    #[serde(default)]
    pub reason: Option<String>,
    pub edit: ScheduleEdit,
}

/// One change-log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogEntryInfo {
    pub event_id: Option<i64>,
    pub volume: Option<u32>,
    pub action: String,
    pub before: Option<VolumeEntry>,
    pub after: Option<VolumeEntry>,
    pub date_changed: bool,
    pub actor_id: String,
    pub actor_type: String,
    pub reason: String,
    /// RFC 3339 timestamp.
    pub recorded_at: String,
}

/// API response for a successful schedule edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEditResponse {
    pub change: ChangeLogEntryInfo,
    pub current_volume: u32,
    pub message: String,
}

/// API response listing change-log entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogResponse {
    pub entries: Vec<ChangeLogEntryInfo>,
}

/// API response after clearing the change log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearChangeLogResponse {
    pub removed: usize,
}

/// Downloadable schedule document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExportResponse {
    pub schedule: Schedule,
    pub overrides: ScheduleOverrides,
    pub change_log: Vec<ChangeLogEntryInfo>,
    pub exported_at: String,
}

/// API request carrying an ad-details ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDetailsRequest {
    pub csv: String,
    #[serde(default)]
    pub format: ExportFormat,
}

/// A rendered customer sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSheetResponse {
    pub content_type: &'static str,
    pub customer_count: usize,
    pub body: String,
}
