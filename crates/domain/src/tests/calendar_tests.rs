// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalendarConfig, ContractStatus, PublishingCycleKind, Schedule, ScheduleOverrides,
    VolumeCalendar, VolumeEntry, VolumeStatus,
};
use time::macros::date;
use time::{Date, Duration};

fn builtin_calendar() -> VolumeCalendar {
    VolumeCalendar::with_builtin_defaults(&ScheduleOverrides::new(), CalendarConfig::default())
}

fn calendar_with(overrides: &[(u32, VolumeEntry)]) -> VolumeCalendar {
    let overrides: ScheduleOverrides = overrides.iter().copied().collect();
    VolumeCalendar::with_builtin_defaults(&overrides, CalendarConfig::default())
}

#[test]
fn test_current_volume_is_latest_published_on_or_before_today() {
    let calendar: VolumeCalendar = builtin_calendar();
    assert_eq!(calendar.current_volume(date!(2026 - 02 - 05)), 553);
    assert_eq!(calendar.current_volume(date!(2026 - 02 - 04)), 552);
    assert_eq!(calendar.current_volume(date!(2025 - 12 - 20)), 550);
}

#[test]
fn test_current_volume_ignores_planned_entries() {
    let calendar: VolumeCalendar = builtin_calendar();
    assert_eq!(calendar.current_volume(date!(2026 - 10 - 16)), 553);
}

#[test]
fn test_current_volume_falls_back_when_nothing_published() {
    let calendar: VolumeCalendar = builtin_calendar();
    assert_eq!(calendar.current_volume(date!(2025 - 01 - 01)), 553);

    let config: CalendarConfig = CalendarConfig::new(540, 16).unwrap();
    let calendar: VolumeCalendar = VolumeCalendar::with_builtin_defaults(&ScheduleOverrides::new(), config);
    assert_eq!(calendar.current_volume(date!(2025 - 01 - 01)), 540);
}

#[test]
fn test_current_volume_follows_published_override() {
    let calendar: VolumeCalendar = calendar_with(&[(
        554,
        VolumeEntry::published(date!(2026 - 02 - 20)),
    )]);
    assert_eq!(calendar.current_volume(date!(2026 - 03 - 01)), 554);
    assert_eq!(calendar.current_volume(date!(2026 - 02 - 19)), 553);
}

#[test]
fn test_current_volume_tie_goes_to_higher_volume() {
    let calendar: VolumeCalendar = calendar_with(&[(
        554,
        VolumeEntry::published(date!(2026 - 02 - 05)),
    )]);
    assert_eq!(calendar.current_volume(date!(2026 - 02 - 10)), 554);
}

#[test]
fn test_current_volume_is_monotonic_in_today() {
    let calendar: VolumeCalendar = calendar_with(&[
        (554, VolumeEntry::published(date!(2026 - 02 - 20))),
        (555, VolumeEntry::published(date!(2026 - 03 - 05))),
    ]);
    // Before the first publication the fallback applies, which is not ordered.
    let mut day: Date = date!(2025 - 07 - 15);
    let mut previous: u32 = 0;
    while day <= date!(2027 - 01 - 31) {
        let current: u32 = calendar.current_volume(day);
        assert!(current >= previous, "regressed on {day}");
        previous = current;
        day += Duration::days(1);
    }
}

#[test]
fn test_volume_date_lookup() {
    let calendar: VolumeCalendar = builtin_calendar();
    assert_eq!(calendar.volume_date(553), Some(date!(2026 - 02 - 05)));
    assert_eq!(calendar.volume_date(700), None);
}

#[test]
fn test_contract_dates_whole_days() {
    let calendar: VolumeCalendar = builtin_calendar();
    let dates = calendar.contract_dates(Some(552), Some(557));
    assert_eq!(dates.start_date, Some(date!(2026 - 01 - 20)));
    assert_eq!(dates.end_date, Some(date!(2026 - 04 - 02)));
    assert_eq!(dates.duration_days, Some(72));
}

#[test]
fn test_contract_dates_all_absent_when_either_end_unscheduled() {
    let calendar: VolumeCalendar = builtin_calendar();
    let dates = calendar.contract_dates(Some(552), Some(600));
    assert_eq!(dates.start_date, None);
    assert_eq!(dates.end_date, None);
    assert_eq!(dates.duration_days, None);

    let dates = calendar.contract_dates(None, Some(560));
    assert_eq!(dates.duration_days, None);
}

#[test]
fn test_volume_range_dates_skips_gaps_and_matches_lookup() {
    let calendar: VolumeCalendar = builtin_calendar();
    let range = calendar.volume_range_dates(Some(572), Some(578));
    let volumes: Vec<u32> = range.iter().map(|d| d.volume).collect();
    assert_eq!(volumes, vec![572, 573, 574]);

    for item in calendar.volume_range_dates(Some(540), Some(574)) {
        assert_eq!(calendar.volume_date(item.volume), Some(item.date));
    }
}

#[test]
fn test_volume_range_dates_empty_for_missing_or_inverted_bounds() {
    let calendar: VolumeCalendar = builtin_calendar();
    assert!(calendar.volume_range_dates(None, Some(560)).is_empty());
    assert!(calendar.volume_range_dates(Some(560), Some(555)).is_empty());
}

#[test]
fn test_next_volume_days_until() {
    let calendar: VolumeCalendar = builtin_calendar();
    let next = calendar.next_volume(553, date!(2026 - 02 - 10)).unwrap();
    assert_eq!(next.volume, 554);
    assert_eq!(next.date, date!(2026 - 02 - 20));
    assert_eq!(next.days_until, 10);
    assert_eq!(next.status, VolumeStatus::Planned);

    let late = calendar.next_volume(553, date!(2026 - 03 - 01)).unwrap();
    assert_eq!(late.days_until, -9);

    assert!(calendar.next_volume(574, date!(2026 - 12 - 20)).is_none());
}

#[test]
fn test_publishing_cycle_biweekly() {
    let calendar: VolumeCalendar = builtin_calendar();
    let cycle = calendar.analyze_publishing_cycle(556).unwrap();
    assert_eq!(cycle.cycle, PublishingCycleKind::Biweekly);
    assert_eq!(cycle.days, 14);
    assert!(cycle.is_regular);
    assert_eq!(cycle.reason, None);
}

#[test]
fn test_publishing_cycle_triweekly() {
    let calendar: VolumeCalendar = builtin_calendar();
    let cycle = calendar.analyze_publishing_cycle(559).unwrap();
    assert_eq!(cycle.cycle, PublishingCycleKind::Triweekly);
    assert_eq!(cycle.days, 21);
    assert!(!cycle.is_regular);
    assert_eq!(cycle.reason, Some("holiday or special schedule"));
}

#[test]
fn test_publishing_cycle_threshold_is_configurable() {
    let config: CalendarConfig = CalendarConfig::new(553, 21).unwrap();
    let calendar: VolumeCalendar = VolumeCalendar::with_builtin_defaults(&ScheduleOverrides::new(), config);
    let cycle = calendar.analyze_publishing_cycle(559).unwrap();
    assert!(cycle.is_regular);
}

#[test]
fn test_publishing_cycle_requires_both_volumes() {
    let calendar: VolumeCalendar = builtin_calendar();
    assert!(calendar.analyze_publishing_cycle(540).is_none());
    assert!(calendar.analyze_publishing_cycle(600).is_none());
    assert!(calendar.analyze_publishing_cycle(0).is_none());
}

#[test]
fn test_contract_status_by_date() {
    let calendar: VolumeCalendar = builtin_calendar();

    let upcoming = calendar.contract_status_by_date(Some(560), Some(565), date!(2026 - 05 - 01));
    assert_eq!(upcoming.status, ContractStatus::Upcoming);
    assert_eq!(upcoming.days_until_start, Some(20));

    let active = calendar.contract_status_by_date(Some(560), Some(565), date!(2026 - 06 - 10));
    assert_eq!(active.status, ContractStatus::Active);
    assert_eq!(active.days_remaining, Some(57));
    assert_eq!(
        active.description.as_deref(),
        Some("57 days left (until 2026.08.06)")
    );

    let expired = calendar.contract_status_by_date(Some(560), Some(565), date!(2026 - 09 - 01));
    assert_eq!(expired.status, ContractStatus::Expired);
    assert_eq!(expired.days_since_end, Some(26));
}

#[test]
fn test_contract_status_by_date_unknown_cases() {
    let calendar: VolumeCalendar = builtin_calendar();
    let today: Date = date!(2026 - 06 - 10);

    let missing = calendar.contract_status_by_date(None, Some(565), today);
    assert_eq!(missing.status, ContractStatus::Unknown);
    assert_eq!(missing.label, "No volume info");

    let unscheduled = calendar.contract_status_by_date(Some(560), Some(600), today);
    assert_eq!(unscheduled.status, ContractStatus::Unknown);
    assert_eq!(unscheduled.label, "Schedule not set");
}

#[test]
fn test_effective_schedule_matches_merge() {
    let defaults: Schedule = Schedule::builtin();
    let overrides: ScheduleOverrides =
        [(560, VolumeEntry::planned(date!(2026 - 05 - 28)))].into_iter().collect();
    let calendar: VolumeCalendar = VolumeCalendar::new(&defaults, &overrides, CalendarConfig::default());
    assert_eq!(calendar.effective_schedule(), &defaults.merged_with(&overrides));
    assert_eq!(calendar.volume_date(560), Some(date!(2026 - 05 - 28)));
}
