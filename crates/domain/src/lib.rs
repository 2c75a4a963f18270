// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod account;
mod ad_row;
mod calendar;
mod config;
mod contract_status;
mod error;
mod money;
mod next_action;
mod payment_status;
mod schedule;
mod types;

#[cfg(test)]
mod tests;

pub use account::{AccountReport, evaluate_account};
pub use ad_row::{
    AdRow, CustomerType, PhoneNumbers, calculate_total_amount, parse_phone_numbers, parse_price,
    parse_volume_range,
};
pub use calendar::{
    ContractDates, DatedContractStatus, PublishingCycle, PublishingCycleKind, UpcomingVolume,
    VolumeCalendar, VolumeDate,
};
pub use config::{CalendarConfig, DEFAULT_FALLBACK_VOLUME, DEFAULT_IRREGULAR_CYCLE_THRESHOLD_DAYS};
pub use contract_status::{
    ContractStatus, ContractStatusReport, classify_contract_status, contract_progress_percent,
};
pub use error::DomainError;
pub use money::format_currency;
pub use next_action::{ActionPriority, NextAction, RENEWAL_WINDOW_ISSUES, recommend_next_action};
pub use payment_status::{
    FULL_PREPAID_RATE_PERCENT, IN_PROGRESS_RATE_PERCENT, ON_PACE_COLLECTION_PERCENT,
    PARTIAL_PREPAID_COLLECTION_PERCENT, PaymentStatus, PaymentStatusReport, PaymentType,
    classify_payment_status,
};
pub use schedule::{OVERRIDES_STORAGE_KEY, OverrideMutation, Schedule, ScheduleOverrides};
pub use types::{
    ContractWindow, MAX_VOLUME, MoneyAmounts, VolumeEntry, VolumeStatus, format_date_simple, format_iso_date,
    iso_date, parse_iso_date, validate_volume,
};
