// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_domain::{OVERRIDES_STORAGE_KEY, ScheduleOverrides};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::diesel_schema::settings;
use crate::error::PersistenceError;

/// Reads the raw JSON stored under a settings key.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_setting(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<String>, PersistenceError> {
    let value: Option<String> = settings::table
        .filter(settings::setting_key.eq(key))
        .select(settings::value_json)
        .first::<String>(conn)
        .optional()?;
    Ok(value)
}

/// Reads the override table.
///
/// A missing blob is an empty table.
///
/// # Errors
///
/// Returns an error if the query fails or the blob is not valid JSON.
pub fn load_overrides(conn: &mut SqliteConnection) -> Result<ScheduleOverrides, PersistenceError> {
    match load_setting(conn, OVERRIDES_STORAGE_KEY)? {
        Some(json) => serde_json::from_str::<ScheduleOverrides>(&json).map_err(|e| {
            PersistenceError::MalformedSetting {
                key: OVERRIDES_STORAGE_KEY.to_string(),
                reason: e.to_string(),
            }
        }),
        None => Ok(ScheduleOverrides::new()),
    }
}
