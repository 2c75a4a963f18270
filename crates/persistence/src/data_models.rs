// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_audit::{Actor, AuditEvent, Cause, ScheduleAction, ScheduleChange};
use adsales_domain::VolumeEntry;
use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{schedule_change_log, settings};
use crate::error::PersistenceError;

/// A row of the `settings` key/value table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SettingRow {
    pub setting_key: String,
    pub value_json: String,
    pub updated_at: String,
}

/// A stored change-log entry.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schedule_change_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChangeLogRow {
    pub event_id: i64,
    pub volume: Option<i32>,
    pub action_name: String,
    pub before_json: Option<String>,
    pub after_json: Option<String>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub reason: String,
    pub recorded_at: String,
}

/// A change-log entry waiting for its event id.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schedule_change_log)]
pub struct NewChangeLogRow {
    pub volume: Option<i32>,
    pub action_name: String,
    pub before_json: Option<String>,
    pub after_json: Option<String>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub reason: String,
    pub recorded_at: String,
}

fn entry_to_json(entry: Option<&VolumeEntry>) -> Result<Option<String>, PersistenceError> {
    entry
        .map(serde_json::to_string)
        .transpose()
        .map_err(PersistenceError::from)
}

impl NewChangeLogRow {
    /// Flattens an audit event into column values.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume does not fit a column or serialization fails.
    pub fn from_event(event: &AuditEvent) -> Result<Self, PersistenceError> {
        let volume: Option<i32> = event
            .change
            .volume
            .map(i32::try_from)
            .transpose()
            .map_err(|e| PersistenceError::Encoding(e.to_string()))?;

        Ok(Self {
            volume,
            action_name: event.action.as_str().to_string(),
            before_json: entry_to_json(event.change.before.as_ref())?,
            after_json: entry_to_json(event.change.after.as_ref())?,
            actor_id: event.actor.id.clone(),
            actor_type: event.actor.actor_type.clone(),
            cause_id: event.cause.id.clone(),
            reason: event.cause.description.clone(),
            recorded_at: event.recorded_at.format(&Rfc3339)?,
        })
    }
}

impl ChangeLogRow {
    fn corrupt(&self, reason: &impl std::fmt::Display) -> PersistenceError {
        PersistenceError::CorruptRecord {
            event_id: self.event_id,
            reason: reason.to_string(),
        }
    }

    fn parse_entry(&self, json: Option<&str>) -> Result<Option<VolumeEntry>, PersistenceError> {
        json.map(serde_json::from_str::<VolumeEntry>)
            .transpose()
            .map_err(|e| self.corrupt(&e))
    }

    /// Rebuilds the audit event this row was written from.
    ///
    /// # Errors
    ///
    /// Returns `CorruptRecord` if any column fails to decode.
    pub fn into_event(self) -> Result<AuditEvent, PersistenceError> {
        let volume: Option<u32> = self
            .volume
            .map(u32::try_from)
            .transpose()
            .map_err(|e| self.corrupt(&e))?;
        let action: ScheduleAction = self
            .action_name
            .parse::<ScheduleAction>()
            .map_err(|e| self.corrupt(&e))?;
        let before: Option<VolumeEntry> = self.parse_entry(self.before_json.as_deref())?;
        let after: Option<VolumeEntry> = self.parse_entry(self.after_json.as_deref())?;
        let recorded_at: OffsetDateTime =
            OffsetDateTime::parse(&self.recorded_at, &Rfc3339).map_err(|e| self.corrupt(&e))?;

        let change: ScheduleChange = match volume {
            Some(volume) => ScheduleChange::for_volume(volume, before, after),
            None => ScheduleChange::whole_schedule(),
        };

        Ok(AuditEvent::new(
            Actor::new(self.actor_id, self.actor_type),
            Cause::new(self.cause_id, self.reason),
            action,
            change,
            recorded_at,
        )
        .with_event_id(self.event_id))
    }
}
