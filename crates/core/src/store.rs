// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use adsales_audit::AuditEvent;
use adsales_domain::{OverrideMutation, ScheduleOverrides};

/// Default number of change-log entries returned by listings.
pub const DEFAULT_CHANGE_LOG_LIMIT: usize = 50;

/// Durable home of the override table and its change log.
///
/// `commit` must apply the mutation to the *stored* table, not to a copy the
/// caller read earlier, and must do so atomically with appending the event.
pub trait OverrideStore {
    /// Reads the current override table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or decoded.
    fn load_overrides(&mut self) -> Result<ScheduleOverrides, StoreError>;

    /// Applies one key-scoped mutation and records its audit event.
    ///
    /// Returns the event with its storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails. Nothing is written then.
    fn commit(
        &mut self,
        mutation: &OverrideMutation,
        event: &AuditEvent,
    ) -> Result<AuditEvent, StoreError>;

    /// Most recent change-log entries first.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read.
    fn recent_changes(&mut self, limit: usize) -> Result<Vec<AuditEvent>, StoreError>;

    /// Deletes the change log, returning how many entries were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be cleared.
    fn clear_changes(&mut self) -> Result<usize, StoreError>;
}

/// Process-local store, used in tests and when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    overrides: ScheduleOverrides,
    log: Vec<AuditEvent>,
    next_event_id: i64,
}

impl InMemoryOverrideStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing override table.
    #[must_use]
    pub fn with_overrides(overrides: ScheduleOverrides) -> Self {
        Self {
            overrides,
            ..Self::default()
        }
    }
}

impl OverrideStore for InMemoryOverrideStore {
    fn load_overrides(&mut self) -> Result<ScheduleOverrides, StoreError> {
        Ok(self.overrides.clone())
    }

    fn commit(
        &mut self,
        mutation: &OverrideMutation,
        event: &AuditEvent,
    ) -> Result<AuditEvent, StoreError> {
        self.overrides.apply(mutation);
        self.next_event_id += 1;
        let stored: AuditEvent = event.clone().with_event_id(self.next_event_id);
        self.log.push(stored.clone());
        Ok(stored)
    }

    fn recent_changes(&mut self, limit: usize) -> Result<Vec<AuditEvent>, StoreError> {
        Ok(self.log.iter().rev().take(limit).cloned().collect())
    }

    fn clear_changes(&mut self) -> Result<usize, StoreError> {
        let removed: usize = self.log.len();
        self.log.clear();
        Ok(removed)
    }
}
