// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ScheduleState, TransitionResult};
use adsales_audit::{Actor, AuditEvent, Cause, ScheduleChange};
use adsales_domain::{DomainError, OverrideMutation, VolumeEntry, VolumeStatus, validate_volume};
use time::OffsetDateTime;

/// Applies a command to the schedule state, producing the mutation to persist
/// and its audit event.
///
/// The state is not modified. The caller commits the returned mutation.
///
/// # Arguments
///
/// * `state` - The current defaults and overrides (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `recorded_at` - Timestamp for the audit event
///
/// # Errors
///
/// Returns an error if:
/// - The volume number is zero
/// - The volume is not in the effective schedule (date and publish edits)
/// - The volume has no override to clear
/// - The edit would not change anything
pub fn apply(
    state: &ScheduleState,
    command: Command,
    actor: Actor,
    cause: Cause,
    recorded_at: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let action = command.action();

    let (mutation, change): (OverrideMutation, ScheduleChange) = match command {
        Command::SetVolumeEntry { volume, entry } => {
            validate_volume(volume)?;
            let before: Option<VolumeEntry> = state.effective_entry(volume);
            if before == Some(entry) {
                return Err(DomainError::NoChange { volume }.into());
            }
            (
                OverrideMutation::for_entry(volume, entry, &state.defaults),
                ScheduleChange::for_volume(volume, before, Some(entry)),
            )
        }
        Command::UpdatePublishDate { volume, date } => {
            let before: VolumeEntry = existing_entry(state, volume)?;
            if before.publish_date == date {
                return Err(DomainError::NoChange { volume }.into());
            }
            let after: VolumeEntry = before.with_date(date);
            (
                OverrideMutation::for_entry(volume, after, &state.defaults),
                ScheduleChange::for_volume(volume, Some(before), Some(after)),
            )
        }
        Command::MarkPublished { volume } => {
            let before: VolumeEntry = existing_entry(state, volume)?;
            if before.status.is_published() {
                return Err(DomainError::NoChange { volume }.into());
            }
            let after: VolumeEntry = before.with_status(VolumeStatus::Published);
            (
                OverrideMutation::for_entry(volume, after, &state.defaults),
                ScheduleChange::for_volume(volume, Some(before), Some(after)),
            )
        }
        Command::ClearOverride { volume } => {
            validate_volume(volume)?;
            let Some(before) = state.overrides.get(volume).copied() else {
                return Err(DomainError::OverrideNotFound(volume).into());
            };
            (
                OverrideMutation::Remove { volume },
                ScheduleChange::for_volume(volume, Some(before), state.defaults.get(volume).copied()),
            )
        }
        Command::ResetOverrides => (OverrideMutation::Clear, ScheduleChange::whole_schedule()),
    };

    Ok(TransitionResult {
        mutation,
        audit_event: AuditEvent::new(actor, cause, action, change, recorded_at),
    })
}

fn existing_entry(state: &ScheduleState, volume: u32) -> Result<VolumeEntry, CoreError> {
    validate_volume(volume)?;
    state
        .effective_entry(volume)
        .ok_or_else(|| DomainError::VolumeNotFound(volume).into())
}
