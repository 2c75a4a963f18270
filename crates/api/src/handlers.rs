// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler validates its request, calls into the service or calendar
//! and shapes the result into a response DTO. Handlers never touch storage
//! directly.

use adsales::{
    Clock, Command, DEFAULT_CHANGE_LOG_LIMIT, OverrideStore, ScheduleExport, VolumeCalendarService,
};
use adsales_audit::{Actor, AuditEvent, Cause};
use adsales_domain::{
    AccountReport, AdRow, VolumeCalendar, VolumeEntry, VolumeStatus, format_iso_date,
    parse_iso_date, validate_volume,
};
use time::Date;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::ad_import::{
    AdDetailsPreview, export_customer_sheet, parse_ad_details, preview_ad_details,
};
use crate::error::ApiError;
use crate::request_response::{
    AdDetailsRequest, ChangeLogEntryInfo, ChangeLogResponse, ClearChangeLogResponse,
    ContractOverviewResponse, ContractWindowRequest, CurrentVolumeResponse, CustomerSheetResponse,
    ListScheduleResponse, PublishingCycleResponse, ScheduleEdit, ScheduleEditRequest,
    ScheduleEditResponse, ScheduleEntryInfo, ScheduleExportResponse, VolumeRangeResponse,
};

/// Largest change-log page a caller may request.
pub const MAX_CHANGE_LOG_LIMIT: usize = 500;

fn validate_optional_volume(field: &str, volume: Option<u32>) -> Result<Option<u32>, ApiError> {
    volume
        .map(validate_volume)
        .transpose()
        .map_err(|e| ApiError::InvalidInput {
            field: field.to_string(),
            message: e.to_string(),
        })
}

fn validate_window(request: &ContractWindowRequest) -> Result<(Option<u32>, Option<u32>), ApiError> {
    Ok((
        validate_optional_volume("startVolume", request.start_volume)?,
        validate_optional_volume("endVolume", request.end_volume)?,
    ))
}

/// Converts a stored audit event into its API shape.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn change_log_entry(event: &AuditEvent) -> Result<ChangeLogEntryInfo, ApiError> {
    let recorded_at: String = event
        .recorded_at
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })?;

    Ok(ChangeLogEntryInfo {
        event_id: event.event_id,
        volume: event.change.volume,
        action: event.action.as_str().to_string(),
        before: event.change.before,
        after: event.change.after,
        date_changed: event.change.date_changed(),
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        reason: event.cause.description.clone(),
        recorded_at,
    })
}

fn change_log_entries(events: &[AuditEvent]) -> Result<Vec<ChangeLogEntryInfo>, ApiError> {
    events.iter().map(change_log_entry).collect()
}

/// Lists the effective schedule, marking overridden volumes.
#[must_use]
pub fn list_schedule<S: OverrideStore, C: Clock>(
    service: &VolumeCalendarService<S, C>,
) -> ListScheduleResponse {
    let entries: Vec<ScheduleEntryInfo> = service
        .calendar()
        .effective_schedule()
        .iter()
        .map(|(volume, entry)| ScheduleEntryInfo {
            volume,
            date: format_iso_date(entry.publish_date),
            status: entry.status,
            is_override: service.overrides().contains(volume),
        })
        .collect();

    ListScheduleResponse {
        today: format_iso_date(service.today()),
        current_volume: service.current_volume(),
        override_count: service.overrides().len(),
        entries,
    }
}

/// Current volume as of today and the issue after it.
#[must_use]
pub fn get_current_volume<S: OverrideStore, C: Clock>(
    service: &VolumeCalendarService<S, C>,
) -> CurrentVolumeResponse {
    let today: Date = service.today();
    let calendar: &VolumeCalendar = service.calendar();
    let current_volume: u32 = calendar.current_volume(today);

    CurrentVolumeResponse {
        today: format_iso_date(today),
        current_volume,
        current_date: calendar.volume_date(current_volume).map(format_iso_date),
        next: calendar.next_volume(current_volume, today),
    }
}

/// Every scheduled issue inside a contract window.
///
/// # Errors
///
/// Returns an error if either volume is zero.
pub fn get_volume_range(
    calendar: &VolumeCalendar,
    request: &ContractWindowRequest,
) -> Result<VolumeRangeResponse, ApiError> {
    let (start_volume, end_volume) = validate_window(request)?;
    Ok(VolumeRangeResponse {
        start_volume,
        end_volume,
        volumes: calendar.volume_range_dates(start_volume, end_volume),
    })
}

/// Publish dates, duration and date-based status of a contract window.
///
/// # Errors
///
/// Returns an error if either volume is zero.
pub fn get_contract_overview<S: OverrideStore, C: Clock>(
    service: &VolumeCalendarService<S, C>,
    request: &ContractWindowRequest,
) -> Result<ContractOverviewResponse, ApiError> {
    let (start_volume, end_volume) = validate_window(request)?;
    let calendar: &VolumeCalendar = service.calendar();
    Ok(ContractOverviewResponse {
        dates: calendar.contract_dates(start_volume, end_volume),
        status: calendar.contract_status_by_date(start_volume, end_volume, service.today()),
    })
}

/// Gap between `volume` and its predecessor.
///
/// # Errors
///
/// Returns an error if the volume is zero.
pub fn get_publishing_cycle(
    calendar: &VolumeCalendar,
    volume: u32,
) -> Result<PublishingCycleResponse, ApiError> {
    let volume: u32 = validate_volume(volume)?;
    Ok(PublishingCycleResponse {
        volume,
        cycle: calendar.analyze_publishing_cycle(volume),
    })
}

fn parse_status(raw: &str) -> Result<VolumeStatus, ApiError> {
    raw.parse::<VolumeStatus>().map_err(ApiError::from)
}

fn to_command(edit: &ScheduleEdit) -> Result<Command, ApiError> {
    let command: Command = match edit {
        ScheduleEdit::SetVolumeEntry {
            volume,
            date,
            status,
        } => Command::SetVolumeEntry {
            volume: *volume,
            entry: VolumeEntry::new(parse_iso_date(date)?, parse_status(status)?),
        },
        ScheduleEdit::UpdatePublishDate { volume, date } => Command::UpdatePublishDate {
            volume: *volume,
            date: parse_iso_date(date)?,
        },
        ScheduleEdit::MarkPublished { volume } => Command::MarkPublished { volume: *volume },
        ScheduleEdit::ClearOverride { volume } => Command::ClearOverride { volume: *volume },
        ScheduleEdit::ResetOverrides => Command::ResetOverrides,
    };
    Ok(command)
}

/// Applies a schedule edit and records it in the change log.
///
/// # Arguments
///
/// * `service` - The calendar service
/// * `request` - The edit and who is making it
/// * `request_id` - Identifier of the triggering request, stored as the cause id
///
/// # Errors
///
/// Returns an error if:
/// - The editor is blank
/// - A date or status does not parse
/// - The edit violates a schedule rule
/// - The store fails
pub fn edit_schedule<S: OverrideStore, C: Clock>(
    service: &mut VolumeCalendarService<S, C>,
    request: &ScheduleEditRequest,
    request_id: &str,
) -> Result<ScheduleEditResponse, ApiError> {
    let editor: &str = request.editor.trim();
    if editor.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("editor"),
            message: String::from("Editor must not be empty"),
        });
    }

    let command: Command = to_command(&request.edit)?;
    let actor: Actor = Actor::operator(editor);
    let cause: Cause = Cause::from_reason(request_id, request.reason.as_deref());

    let event: AuditEvent = service.execute(command, actor, cause)?;
    let change: ChangeLogEntryInfo = change_log_entry(&event)?;
    let message: String = match change.volume {
        Some(volume) => format!("Volume {volume} updated ({})", change.action),
        None => String::from("Schedule reset to defaults"),
    };

    Ok(ScheduleEditResponse {
        change,
        current_volume: service.current_volume(),
        message,
    })
}

/// Change-log entries, newest first.
///
/// # Arguments
///
/// * `limit` - Page size; defaults to 50 and is capped at 500
///
/// # Errors
///
/// Returns an error if the limit is zero or the store fails.
pub fn get_change_log<S: OverrideStore, C: Clock>(
    service: &mut VolumeCalendarService<S, C>,
    limit: Option<usize>,
) -> Result<ChangeLogResponse, ApiError> {
    let limit: usize = limit.unwrap_or(DEFAULT_CHANGE_LOG_LIMIT);
    if limit == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("limit"),
            message: String::from("Limit must be at least 1"),
        });
    }
    let events: Vec<AuditEvent> = service.change_log(limit.min(MAX_CHANGE_LOG_LIMIT))?;
    Ok(ChangeLogResponse {
        entries: change_log_entries(&events)?,
    })
}

/// Deletes the change log.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn clear_change_log<S: OverrideStore, C: Clock>(
    service: &mut VolumeCalendarService<S, C>,
) -> Result<ClearChangeLogResponse, ApiError> {
    let removed: usize = service.clear_change_log()?;
    Ok(ClearChangeLogResponse { removed })
}

/// Effective schedule, overrides and recent changes in one document.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn export_schedule<S: OverrideStore, C: Clock>(
    service: &mut VolumeCalendarService<S, C>,
) -> Result<ScheduleExportResponse, ApiError> {
    let export: ScheduleExport = service.export(DEFAULT_CHANGE_LOG_LIMIT)?;
    let exported_at: String = export
        .exported_at
        .format(&Rfc3339)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to format timestamp: {e}"),
        })?;

    Ok(ScheduleExportResponse {
        change_log: change_log_entries(&export.change_log)?,
        schedule: export.schedule,
        overrides: export.overrides,
        exported_at,
    })
}

/// Full contract and payment evaluation of one ledger row.
#[must_use]
pub fn evaluate_customer<S: OverrideStore, C: Clock>(
    service: &VolumeCalendarService<S, C>,
    row: &AdRow,
) -> AccountReport {
    service.evaluate_account(row)
}

/// Parses and evaluates an uploaded ledger without storing it.
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed.
pub fn preview_ad_import<S: OverrideStore, C: Clock>(
    service: &VolumeCalendarService<S, C>,
    request: &AdDetailsRequest,
) -> Result<AdDetailsPreview, ApiError> {
    Ok(preview_ad_details(&request.csv, service.current_volume())?)
}

/// Converts an uploaded ledger into a customer sheet.
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed or the sheet cannot be written.
pub fn export_ad_import(request: &AdDetailsRequest) -> Result<CustomerSheetResponse, ApiError> {
    let rows: Vec<AdRow> = parse_ad_details(&request.csv)?
        .into_iter()
        .map(|(_, row)| row)
        .collect();
    let body: String = export_customer_sheet(&rows, request.format)?;
    info!(customers = rows.len(), format = ?request.format, "Customer sheet exported");

    Ok(CustomerSheetResponse {
        content_type: request.format.content_type(),
        customer_count: rows.len(),
        body,
    })
}
