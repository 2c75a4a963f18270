// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for the volume schedule.
//!
//! ## Storage layout
//!
//! - `settings`: key/value JSON blobs. The override table lives under the
//!   `volumeSchedule` key as a sparse map of volume to entry.
//! - `schedule_change_log`: one row per successful schedule edit.
//!
//! Writes go through [`Persistence::commit`], which re-reads the override blob
//! inside an immediate transaction and changes only the edited volume.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use adsales::{OverrideStore, StoreError};
use adsales_audit::AuditEvent;
use adsales_domain::{OverrideMutation, ScheduleOverrides};
use diesel::SqliteConnection;
use tracing::{info, warn};

pub use error::PersistenceError;

/// Global counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for schedule overrides and the change log.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_adsales_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path
            .as_ref()
            .to_str()
            .ok_or(PersistenceError::InvalidPath)?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        let journal_mode: String = backend::sqlite::enable_wal_mode(&mut conn)?;
        if !journal_mode.eq_ignore_ascii_case("wal") {
            warn!(journal_mode = %journal_mode, "SQLite did not switch to WAL mode");
        }

        Ok(Self { conn })
    }

    /// Reads the override table.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be read or decoded.
    pub fn load_overrides(&mut self) -> Result<ScheduleOverrides, PersistenceError> {
        queries::load_overrides(&mut self.conn)
    }

    /// Raw JSON stored under a settings key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load_setting(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        queries::load_setting(&mut self.conn, key)
    }

    /// Applies one override mutation and appends its audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails. Nothing is written then.
    pub fn commit(
        &mut self,
        mutation: &OverrideMutation,
        event: &AuditEvent,
    ) -> Result<AuditEvent, PersistenceError> {
        let stored: AuditEvent = mutations::commit_schedule_edit(&mut self.conn, mutation, event)?;
        info!(
            event_id = ?stored.event_id,
            volume = ?mutation.volume(),
            "Persisted schedule edit"
        );
        Ok(stored)
    }

    /// Most recent change-log entries first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    pub fn recent_changes(&mut self, limit: usize) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::recent_changes(&mut self.conn, limit)
    }

    /// Number of change-log entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_changes(&mut self) -> Result<i64, PersistenceError> {
        queries::count_changes(&mut self.conn)
    }

    /// Deletes the change log.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_changes(&mut self) -> Result<usize, PersistenceError> {
        let removed: usize = mutations::clear_changes(&mut self.conn)?;
        info!(removed, "Cleared schedule change log");
        Ok(removed)
    }
}

impl OverrideStore for Persistence {
    fn load_overrides(&mut self) -> Result<ScheduleOverrides, StoreError> {
        Ok(Self::load_overrides(self)?)
    }

    fn commit(
        &mut self,
        mutation: &OverrideMutation,
        event: &AuditEvent,
    ) -> Result<AuditEvent, StoreError> {
        Ok(Self::commit(self, mutation, event)?)
    }

    fn recent_changes(&mut self, limit: usize) -> Result<Vec<AuditEvent>, StoreError> {
        Ok(Self::recent_changes(self, limit)?)
    }

    fn clear_changes(&mut self) -> Result<usize, StoreError> {
        Ok(Self::clear_changes(self)?)
    }
}
