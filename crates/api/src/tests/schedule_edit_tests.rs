// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adsales_domain::VolumeEntry;
use time::macros::date;

use crate::tests::helpers::{create_test_service, edit_request};
use crate::{
    ApiError, ScheduleEdit, ScheduleEditRequest, clear_change_log, edit_schedule,
    export_schedule, get_change_log, list_schedule,
};

#[test]
fn test_edit_schedule_records_change() {
    let mut service = create_test_service();
    let response = edit_schedule(
        &mut service,
        &edit_request(ScheduleEdit::UpdatePublishDate {
            volume: 554,
            date: String::from("2026-02-27"),
        }),
        "req-1",
    )
    .unwrap();

    assert_eq!(response.change.event_id, Some(1));
    assert_eq!(response.change.volume, Some(554));
    assert_eq!(response.change.action, "UpdatePublishDate");
    assert_eq!(
        response.change.after,
        Some(VolumeEntry::planned(date!(2026 - 02 - 27)))
    );
    assert!(response.change.date_changed);
    assert_eq!(response.change.reason, "printer moved the run");
    assert_eq!(response.change.recorded_at, "2026-02-10T09:30:00Z");
    assert_eq!(response.message, "Volume 554 updated (UpdatePublishDate)");

    let listing = list_schedule(&service);
    assert_eq!(listing.override_count, 1);
    assert!(listing.entries.iter().any(|e| e.volume == 554 && e.is_override));
}

#[test]
fn test_edit_schedule_set_entry_publishes_and_moves_current_volume() {
    let mut service = create_test_service();
    let response = edit_schedule(
        &mut service,
        &edit_request(ScheduleEdit::SetVolumeEntry {
            volume: 554,
            date: String::from("2026-02-09"),
            status: String::from("published"),
        }),
        "req-2",
    )
    .unwrap();
    assert_eq!(response.current_volume, 554);
    assert!(response.change.date_changed);

    let response = edit_schedule(
        &mut service,
        &edit_request(ScheduleEdit::MarkPublished { volume: 555 }),
        "req-9",
    )
    .unwrap();
    assert!(!response.change.date_changed);
}

#[test]
fn test_edit_schedule_rejects_bad_input() {
    let mut service = create_test_service();

    let blank_editor = ScheduleEditRequest {
        editor: String::from("  "),
        reason: None,
        edit: ScheduleEdit::MarkPublished { volume: 554 },
    };
    let err = edit_schedule(&mut service, &blank_editor, "req-3").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "editor"));

    let bad_date = edit_request(ScheduleEdit::UpdatePublishDate {
        volume: 554,
        date: String::from("2026-02-31"),
    });
    let err = edit_schedule(&mut service, &bad_date, "req-4").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "date"));

    let bad_status = edit_request(ScheduleEdit::SetVolumeEntry {
        volume: 575,
        date: String::from("2027-01-07"),
        status: String::from("printed"),
    });
    let err = edit_schedule(&mut service, &bad_status, "req-5").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "status"));

    let huge_volume = edit_request(ScheduleEdit::SetVolumeEntry {
        volume: 3_000_000_000,
        date: String::from("2027-01-07"),
        status: String::from("planned"),
    });
    let err = edit_schedule(&mut service, &huge_volume, "req-8").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "volume"));

    assert!(get_change_log(&mut service, None).unwrap().entries.is_empty());
}

#[test]
fn test_edit_schedule_maps_rule_violations() {
    let mut service = create_test_service();

    let err = edit_schedule(
        &mut service,
        &edit_request(ScheduleEdit::ClearOverride { volume: 554 }),
        "req-6",
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));

    let err = edit_schedule(
        &mut service,
        &edit_request(ScheduleEdit::MarkPublished { volume: 553 }),
        "req-7",
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::DomainRuleViolation { ref rule, .. } if rule == "edit_must_change_entry"));
}

#[test]
fn test_reset_message_and_change_log_paging() {
    let mut service = create_test_service();
    for volume in [554, 555, 556] {
        edit_schedule(
            &mut service,
            &edit_request(ScheduleEdit::MarkPublished { volume }),
            "req-8",
        )
        .unwrap();
    }
    let reset = edit_schedule(&mut service, &edit_request(ScheduleEdit::ResetOverrides), "req-9")
        .unwrap();
    assert_eq!(reset.message, "Schedule reset to defaults");
    assert_eq!(reset.change.volume, None);

    let page = get_change_log(&mut service, Some(2)).unwrap();
    assert_eq!(page.entries.len(), 2);
    assert_eq!(page.entries[0].action, "ResetOverrides");
    assert!(get_change_log(&mut service, Some(0)).is_err());

    assert_eq!(clear_change_log(&mut service).unwrap().removed, 4);
    assert!(get_change_log(&mut service, None).unwrap().entries.is_empty());
}

#[test]
fn test_export_schedule_document() {
    let mut service = create_test_service();
    edit_schedule(
        &mut service,
        &edit_request(ScheduleEdit::MarkPublished { volume: 554 }),
        "req-10",
    )
    .unwrap();

    let export = export_schedule(&mut service).unwrap();
    assert_eq!(export.exported_at, "2026-02-10T09:30:00Z");
    assert_eq!(export.overrides.len(), 1);
    assert_eq!(export.change_log.len(), 1);

    let json = serde_json::to_value(&export).unwrap();
    assert_eq!(json["overrides"]["554"]["status"], "published");
    assert_eq!(json["schedule"]["554"]["date"], "2026-02-20");
    assert_eq!(json["changeLog"][0]["actorId"], "desk-1");
}

#[test]
fn test_edit_request_json_shape() {
    let request: ScheduleEditRequest = serde_json::from_str(
        r#"{"editor":"desk-2","edit":{"kind":"updatePublishDate","volume":554,"date":"2026-02-27"}}"#,
    )
    .unwrap();
    assert_eq!(request.reason, None);
    assert_eq!(
        request.edit,
        ScheduleEdit::UpdatePublishDate {
            volume: 554,
            date: String::from("2026-02-27"),
        }
    );
}
