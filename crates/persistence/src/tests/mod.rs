// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use adsales_audit::{Actor, AuditEvent, Cause, ScheduleAction, ScheduleChange};
use adsales_domain::{OverrideMutation, VolumeEntry};
use diesel::SqliteConnection;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::Persistence;
use crate::backend::sqlite::initialize_database;

pub fn create_test_actor() -> Actor {
    Actor::operator("desk-1")
}

pub fn create_test_cause() -> Cause {
    Cause::from_reason("req-1", Some("printer moved the run"))
}

pub fn test_instant() -> OffsetDateTime {
    datetime!(2026-02-10 09:30 UTC)
}

/// An upsert plus the event describing it.
pub fn upsert_edit(volume: u32, entry: VolumeEntry) -> (OverrideMutation, AuditEvent) {
    let event: AuditEvent = AuditEvent::new(
        create_test_actor(),
        create_test_cause(),
        ScheduleAction::SetVolumeEntry,
        ScheduleChange::for_volume(volume, None, Some(entry)),
        test_instant(),
    );
    (OverrideMutation::Upsert { volume, entry }, event)
}

/// Two adapters sharing one in-memory database, as two writers would.
pub fn open_shared_pair(name: &str) -> (Persistence, Persistence) {
    let url: String = format!("file:{name}?mode=memory&cache=shared");
    let first: SqliteConnection = initialize_database(&url).unwrap();
    let second: SqliteConnection = initialize_database(&url).unwrap();
    (Persistence { conn: first }, Persistence { conn: second })
}
