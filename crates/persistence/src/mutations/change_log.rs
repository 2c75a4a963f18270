// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_audit::AuditEvent;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewChangeLogRow;
use crate::diesel_schema::schedule_change_log;
use crate::error::PersistenceError;

/// Appends one audit event to the change log.
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn append_change(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let row: NewChangeLogRow = NewChangeLogRow::from_event(event)?;

    diesel::insert_into(schedule_change_log::table)
        .values(&row)
        .execute(conn)?;

    let event_id: i64 = get_last_insert_rowid(conn)?;
    debug!(event_id, action = %event.action, "Change log entry appended");
    Ok(event_id)
}

/// Deletes every change-log entry.
///
/// # Returns
///
/// The number of entries removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear_changes(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let removed: usize = diesel::delete(schedule_change_log::table).execute(conn)?;
    Ok(removed)
}
