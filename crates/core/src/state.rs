// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_audit::AuditEvent;
use adsales_domain::{OverrideMutation, Schedule, ScheduleOverrides, VolumeEntry};

/// The two schedule layers a command is validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleState {
    /// The builtin default table.
    pub defaults: Schedule,
    /// The sparse operator edits.
    pub overrides: ScheduleOverrides,
}

impl ScheduleState {
    #[must_use]
    pub const fn new(defaults: Schedule, overrides: ScheduleOverrides) -> Self {
        Self {
            defaults,
            overrides,
        }
    }

    /// The entry a volume currently resolves to.
    #[must_use]
    pub fn effective_entry(&self, volume: u32) -> Option<VolumeEntry> {
        self.overrides
            .get(volume)
            .or_else(|| self.defaults.get(volume))
            .copied()
    }
}

/// The result of applying a command.
///
/// Carries the single-key mutation to persist, never a whole new table,
/// so concurrent writers touching other volumes are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The key-scoped change to the override table.
    pub mutation: OverrideMutation,
    /// The audit event describing the edit.
    pub audit_event: AuditEvent,
}
