// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidVolume(0);
    assert_eq!(
        format!("{err}"),
        "Invalid volume number 0: volumes run from 1 to 2147483647"
    );

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2026-13-01"),
        error: String::from("bad month"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2026-13-01': bad month"
    );

    let err: DomainError = DomainError::InvalidVolumeStatus(String::from("draft"));
    assert_eq!(
        format!("{err}"),
        "Invalid volume status 'draft': expected 'planned' or 'published'"
    );

    let err: DomainError = DomainError::InvalidTimezone(String::from("Mars/Base"));
    assert_eq!(format!("{err}"), "Invalid timezone: Mars/Base");

    let err: DomainError = DomainError::VolumeNotFound(999);
    assert_eq!(format!("{err}"), "Volume 999 is not in the schedule");

    let err: DomainError = DomainError::OverrideNotFound(560);
    assert_eq!(format!("{err}"), "Volume 560 has no schedule override");

    let err: DomainError = DomainError::NoChange { volume: 554 };
    assert_eq!(
        format!("{err}"),
        "Volume 554 already has the requested entry"
    );
}

#[test]
fn test_calendar_config_errors_name_the_field() {
    let err: DomainError = DomainError::InvalidCalendarConfig {
        field: "fallback_volume",
        reason: String::from("must be at least 1"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid calendar configuration for fallback_volume: must be at least 1"
    );
}
