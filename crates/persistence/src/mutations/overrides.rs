// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_audit::AuditEvent;
use adsales_domain::{OVERRIDES_STORAGE_KEY, OverrideMutation, ScheduleOverrides};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::data_models::SettingRow;
use crate::diesel_schema::settings;
use crate::error::PersistenceError;
use crate::mutations::change_log::append_change;
use crate::queries::settings::load_overrides;

/// Inserts or replaces the JSON stored under a settings key.
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub fn store_setting(
    conn: &mut SqliteConnection,
    key: &str,
    value_json: &str,
    updated_at: OffsetDateTime,
) -> Result<(), PersistenceError> {
    let row: SettingRow = SettingRow {
        setting_key: key.to_string(),
        value_json: value_json.to_string(),
        updated_at: updated_at.format(&Rfc3339)?,
    };

    diesel::insert_into(settings::table)
        .values(&row)
        .on_conflict(settings::setting_key)
        .do_update()
        .set((
            settings::value_json.eq(&row.value_json),
            settings::updated_at.eq(&row.updated_at),
        ))
        .execute(conn)?;
    Ok(())
}

/// Applies one override mutation and records its audit event atomically.
///
/// The override blob is re-read inside a `BEGIN IMMEDIATE` transaction, so
/// the mutation lands on whatever other writers have committed, touching
/// only its own volume.
///
/// # Returns
///
/// The event with its assigned ID.
///
/// # Errors
///
/// Returns an error if any step fails. The transaction is rolled back then.
pub fn commit_schedule_edit(
    conn: &mut SqliteConnection,
    mutation: &OverrideMutation,
    event: &AuditEvent,
) -> Result<AuditEvent, PersistenceError> {
    conn.immediate_transaction::<AuditEvent, PersistenceError, _>(|conn| {
        let mut overrides: ScheduleOverrides = load_overrides(conn)?;
        overrides.apply(mutation);

        let json: String = serde_json::to_string(&overrides)?;
        store_setting(conn, OVERRIDES_STORAGE_KEY, &json, event.recorded_at)?;

        let event_id: i64 = append_change(conn, event)?;
        Ok(event.clone().with_event_id(event_id))
    })
}
