// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, InMemoryOverrideStore, ScheduleState, VolumeCalendarService};
use adsales_audit::{Actor, Cause};
use adsales_domain::{CalendarConfig, Schedule, ScheduleOverrides};
use time::macros::{date, datetime};
use time::OffsetDateTime;

pub fn create_test_actor() -> Actor {
    Actor::operator("desk-1")
}

pub fn create_test_cause() -> Cause {
    Cause::from_reason("req-456", Some("printer moved the run"))
}

pub fn test_instant() -> OffsetDateTime {
    datetime!(2026-02-10 09:30 UTC)
}

pub fn create_test_state() -> ScheduleState {
    ScheduleState::new(Schedule::builtin(), ScheduleOverrides::new())
}

pub fn create_test_service() -> VolumeCalendarService<InMemoryOverrideStore, FixedClock> {
    VolumeCalendarService::new(
        InMemoryOverrideStore::new(),
        FixedClock::new(date!(2026 - 02 - 10), test_instant()),
        CalendarConfig::default(),
    )
    .unwrap()
}
