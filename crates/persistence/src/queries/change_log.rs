// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_audit::AuditEvent;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::data_models::ChangeLogRow;
use crate::diesel_schema::schedule_change_log;
use crate::error::PersistenceError;

/// Most recent change-log entries first.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `limit` - Maximum number of entries to return
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn recent_changes(
    conn: &mut SqliteConnection,
    limit: usize,
) -> Result<Vec<AuditEvent>, PersistenceError> {
    let limit: i64 = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows: Vec<ChangeLogRow> = schedule_change_log::table
        .order(schedule_change_log::event_id.desc())
        .limit(limit)
        .select(ChangeLogRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ChangeLogRow::into_event).collect()
}

/// Number of entries in the change log.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_changes(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    let count: i64 = schedule_change_log::table.count().get_result(conn)?;
    Ok(count)
}
