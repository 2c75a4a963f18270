// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the volume calendar.
//!
//! Handlers are plain functions over a [`adsales::VolumeCalendarService`] that
//! take request DTOs and return response DTOs. Transport concerns live in the
//! server crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod ad_import;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use ad_import::{
    AdDetailsPreview, AdImportError, AdImportSummary, AdPreviewRow, ExportFormat, PREAMBLE_ROWS,
    SHEET_FIRST_VOLUME, SHEET_LAST_VOLUME, export_customer_sheet, parse_ad_details,
    preview_ad_details,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    MAX_CHANGE_LOG_LIMIT, change_log_entry, clear_change_log, edit_schedule, evaluate_customer,
    export_ad_import, export_schedule, get_change_log, get_contract_overview, get_current_volume,
    get_publishing_cycle, get_volume_range, list_schedule, preview_ad_import,
};
pub use request_response::{
    AdDetailsRequest, ChangeLogEntryInfo, ChangeLogResponse, ClearChangeLogResponse,
    ContractOverviewResponse, ContractWindowRequest, CurrentVolumeResponse, CustomerSheetResponse,
    ListScheduleResponse, PublishingCycleResponse, ScheduleEdit, ScheduleEditRequest,
    ScheduleEditResponse, ScheduleEntryInfo, ScheduleExportResponse, VolumeRangeResponse,
};
