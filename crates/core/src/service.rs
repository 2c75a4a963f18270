// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::clock::Clock;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ScheduleState, TransitionResult};
use crate::store::OverrideStore;
use adsales_audit::{Actor, AuditEvent, Cause};
use adsales_domain::{
    AccountReport, AdRow, CalendarConfig, Schedule, ScheduleOverrides, VolumeCalendar,
    evaluate_account,
};
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

/// Snapshot of the schedule and its edit history, for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleExport {
    pub schedule: Schedule,
    pub overrides: ScheduleOverrides,
    pub change_log: Vec<AuditEvent>,
    pub exported_at: OffsetDateTime,
}

/// Owns the volume calendar and keeps it in step with the override store.
///
/// The calendar is rebuilt from storage on construction, on `reload`, and
/// after every successful command.
pub struct VolumeCalendarService<S: OverrideStore, C: Clock> {
    store: S,
    clock: C,
    defaults: Schedule,
    overrides: ScheduleOverrides,
    calendar: VolumeCalendar,
}

impl<S: OverrideStore, C: Clock> VolumeCalendarService<S, C> {
    /// Creates the service over the builtin default table.
    ///
    /// # Arguments
    ///
    /// * `store` - Where overrides and the change log live
    /// * `clock` - Source of today's date
    /// * `config` - Calendar tunables
    ///
    /// # Errors
    ///
    /// Returns an error if the overrides cannot be loaded.
    pub fn new(store: S, clock: C, config: CalendarConfig) -> Result<Self, CoreError> {
        Self::with_defaults(store, clock, config, Schedule::builtin())
    }

    /// Creates the service over a custom default table.
    ///
    /// # Errors
    ///
    /// Returns an error if the overrides cannot be loaded.
    pub fn with_defaults(
        mut store: S,
        clock: C,
        config: CalendarConfig,
        defaults: Schedule,
    ) -> Result<Self, CoreError> {
        let overrides: ScheduleOverrides = store.load_overrides()?;
        let calendar: VolumeCalendar = VolumeCalendar::new(&defaults, &overrides, config);
        info!(
            override_count = overrides.len(),
            default_count = defaults.len(),
            "Volume calendar loaded"
        );
        Ok(Self {
            store,
            clock,
            defaults,
            overrides,
            calendar,
        })
    }

    /// Re-reads the overrides and rebuilds the calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if the overrides cannot be loaded.
    pub fn reload(&mut self) -> Result<(), CoreError> {
        self.overrides = self.store.load_overrides()?;
        self.calendar = VolumeCalendar::new(&self.defaults, &self.overrides, *self.calendar.config());
        debug!(override_count = self.overrides.len(), "Volume calendar reloaded");
        Ok(())
    }

    #[must_use]
    pub const fn calendar(&self) -> &VolumeCalendar {
        &self.calendar
    }

    #[must_use]
    pub const fn overrides(&self) -> &ScheduleOverrides {
        &self.overrides
    }

    #[must_use]
    pub const fn defaults(&self) -> &Schedule {
        &self.defaults
    }

    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Current volume as of the clock's today.
    #[must_use]
    pub fn current_volume(&self) -> u32 {
        self.calendar.current_volume(self.clock.today())
    }

    /// Validates a command against freshly loaded state and commits it.
    ///
    /// Returns the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the command violates a schedule rule or the store fails.
    pub fn execute(
        &mut self,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<AuditEvent, CoreError> {
        self.reload()?;

        let state: ScheduleState = ScheduleState::new(self.defaults.clone(), self.overrides.clone());
        let TransitionResult {
            mutation,
            audit_event,
        } = apply(&state, command, actor, cause, self.clock.now())?;

        let stored: AuditEvent = self.store.commit(&mutation, &audit_event)?;
        self.reload()?;

        info!(
            action = %stored.action,
            volume = ?stored.change.volume,
            actor = %stored.actor.id,
            reason = %stored.cause.description,
            event_id = ?stored.event_id,
            "Schedule updated"
        );
        Ok(stored)
    }

    /// Most recent change-log entries first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn change_log(&mut self, limit: usize) -> Result<Vec<AuditEvent>, CoreError> {
        Ok(self.store.recent_changes(limit)?)
    }

    /// Deletes the change log.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn clear_change_log(&mut self) -> Result<usize, CoreError> {
        let removed: usize = self.store.clear_changes()?;
        info!(removed, "Change log cleared");
        Ok(removed)
    }

    /// Effective schedule, overrides and change log in one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the change log cannot be read.
    pub fn export(&mut self, change_log_limit: usize) -> Result<ScheduleExport, CoreError> {
        let change_log: Vec<AuditEvent> = self.store.recent_changes(change_log_limit)?;
        Ok(ScheduleExport {
            schedule: self.calendar.effective_schedule().clone(),
            overrides: self.overrides.clone(),
            change_log,
            exported_at: self.clock.now(),
        })
    }

    /// Evaluates a ledger row against the current volume.
    #[must_use]
    pub fn evaluate_account(&self, row: &AdRow) -> AccountReport {
        evaluate_account(row, self.current_volume())
    }

    /// Mutable access to the store, for maintenance outside the command path.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
