// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use adsales::{FixedClock, InMemoryOverrideStore, VolumeCalendarService};
use adsales_domain::CalendarConfig;
use time::macros::{date, datetime};

use crate::{ScheduleEdit, ScheduleEditRequest};

pub type TestService = VolumeCalendarService<InMemoryOverrideStore, FixedClock>;

pub fn create_test_service() -> TestService {
    VolumeCalendarService::new(
        InMemoryOverrideStore::new(),
        FixedClock::new(date!(2026 - 02 - 10), datetime!(2026-02-10 09:30 UTC)),
        CalendarConfig::default(),
    )
    .unwrap()
}

pub fn edit_request(edit: ScheduleEdit) -> ScheduleEditRequest {
    ScheduleEditRequest {
        editor: String::from("desk-1"),
        reason: Some(String::from("printer moved the run")),
        edit,
    }
}

/// A ledger export: six preamble rows, then customers.
pub const SAMPLE_LEDGER: &str = "\
ADVERTISEMENT DETAILS,,,,,,,,,
Vol 553,,,,,,,,,
,,,,,,,,,
Printed 2026-02-05,,,,,,,,,
,,,,,,,,,
No,CUSTOMER,Address,Tel,Page No,Size,Price,Received,Have Collect,Remarks
1,Maple Dental,12 Main St,555-0100 / 555-0199,4,FC,\"$1,200\",\"$7,200\",$0,550~555
2,Harbor Deli,8 Pier Rd,555-0111,9,1/4,$100,$200,$300,552~557
3,,,,,,,,,
4,Lucky Flea,,555-0122,30,FLEA,$20,$0,$0,560
";
