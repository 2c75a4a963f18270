// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment behaviour classification.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. no usable total → `Unknown`
//! 2. nothing outstanding → `PaidInFull`
//! 3. contract active → prepaid / pay-per-issue / delayed, by collection pace
//! 4. contract expired with a balance → `Overdue`
//! 5. contract upcoming with money received → `PrepaidBeforeStart`
//! 6. otherwise `InProgress` or `LowCollection` by overall rate

use crate::contract_status::{ContractStatus, classify_contract_status, issue_counts};
use crate::money::{format_currency, whole_issues};
use serde::{Deserialize, Serialize};

/// Share of the total that, received during an active contract, counts as fully prepaid.
pub const FULL_PREPAID_RATE_PERCENT: f64 = 80.0;
/// Collection against published issues above which the customer is ahead of schedule.
pub const PARTIAL_PREPAID_COLLECTION_PERCENT: f64 = 120.0;
/// Collection against published issues below which payments are late.
pub const ON_PACE_COLLECTION_PERCENT: f64 = 80.0;
/// Overall rate separating `InProgress` from `LowCollection`.
pub const IN_PROGRESS_RATE_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unknown,
    PaidInFull,
    FullPrepaid,
    PartialPrepaid,
    PayPerIssue,
    Delayed,
    Overdue,
    PrepaidBeforeStart,
    InProgress,
    LowCollection,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::PaidInFull => "PAID_IN_FULL",
            Self::FullPrepaid => "FULL_PREPAID",
            Self::PartialPrepaid => "PARTIAL_PREPAID",
            Self::PayPerIssue => "PAY_PER_ISSUE",
            Self::Delayed => "DELAYED",
            Self::Overdue => "OVERDUE",
            Self::PrepaidBeforeStart => "PREPAID_BEFORE_START",
            Self::InProgress => "IN_PROGRESS",
            Self::LowCollection => "LOW_COLLECTION",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "No payment info",
            Self::PaidInFull => "Paid in full",
            Self::FullPrepaid => "Fully prepaid",
            Self::PartialPrepaid => "Partially prepaid",
            Self::PayPerIssue => "Pay per issue",
            Self::Delayed => "Payment delayed",
            Self::Overdue => "Overdue",
            Self::PrepaidBeforeStart => "Prepaid before start",
            Self::InProgress => "Collecting",
            Self::LowCollection => "Collection needed",
        }
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Unknown => "#9e9e9e",
            Self::PaidInFull | Self::PayPerIssue => "#4caf50",
            Self::FullPrepaid => "#1565c0",
            Self::PartialPrepaid | Self::PrepaidBeforeStart => "#2196F3",
            Self::Delayed | Self::InProgress => "#ff9800",
            Self::Overdue | Self::LowCollection => "#f44336",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Unknown => "❓",
            Self::PaidInFull => "✅",
            Self::FullPrepaid => "💰💰",
            Self::PartialPrepaid | Self::PrepaidBeforeStart => "💰",
            Self::PayPerIssue => "📅",
            Self::Delayed | Self::InProgress => "⏳",
            Self::Overdue => "🚨",
            Self::LowCollection => "🔴",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer has been paying.
///
/// Mirrors `PaymentStatus` except for settled accounts, where it records
/// whether the balance was cleared up front or over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Unknown,
    FullPrepaid,
    /// Settled below 100% of the total. Only reachable through rounding.
    Completed,
    PartialPrepaid,
    PayPerIssue,
    Delayed,
    Overdue,
    PrepaidBeforeStart,
    InProgress,
    LowCollection,
}

impl From<PaymentStatus> for PaymentType {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Unknown => Self::Unknown,
            PaymentStatus::PaidInFull | PaymentStatus::FullPrepaid => Self::FullPrepaid,
            PaymentStatus::PartialPrepaid => Self::PartialPrepaid,
            PaymentStatus::PayPerIssue => Self::PayPerIssue,
            PaymentStatus::Delayed => Self::Delayed,
            PaymentStatus::Overdue => Self::Overdue,
            PaymentStatus::PrepaidBeforeStart => Self::PrepaidBeforeStart,
            PaymentStatus::InProgress => Self::InProgress,
            PaymentStatus::LowCollection => Self::LowCollection,
        }
    }
}

/// Result of payment classification, with the figures behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusReport {
    pub status: PaymentStatus,
    pub payment_type: PaymentType,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: String,
    /// Received as a percentage of the total. 0 when the total is unusable.
    pub payment_rate: f64,
    pub unpaid: f64,
    pub total_issues: Option<u32>,
    pub published_issues: Option<u32>,
    /// Received as a percentage of what the published issues are worth.
    pub collection_vs_published: Option<f64>,
    pub prepaid_issues: Option<u32>,
    pub delayed_issues: Option<u32>,
    pub overdue_issues: Option<u32>,
}

impl PaymentStatusReport {
    fn new(status: PaymentStatus, description: String, payment_rate: f64, unpaid: f64) -> Self {
        Self {
            status,
            payment_type: PaymentType::from(status),
            label: status.label(),
            color: status.color(),
            icon: status.icon(),
            description,
            payment_rate,
            unpaid,
            total_issues: None,
            published_issues: None,
            collection_vs_published: None,
            prepaid_issues: None,
            delayed_issues: None,
            overdue_issues: None,
        }
    }
}

/// Classifies how a customer is paying for a contract.
///
/// # Arguments
///
/// * `total_amount` - Contracted total
/// * `received` - Amount collected so far
/// * `start_volume` - First contracted volume, if known
/// * `end_volume` - Last contracted volume, if known
/// * `current_volume` - The volume treated as "now"
#[must_use]
pub fn classify_payment_status(
    total_amount: f64,
    received: f64,
    start_volume: Option<u32>,
    end_volume: Option<u32>,
    current_volume: u32,
) -> PaymentStatusReport {
    if !(total_amount.is_finite() && total_amount > 0.0) {
        return PaymentStatusReport::new(
            PaymentStatus::Unknown,
            String::from("No contract amount on record"),
            0.0,
            0.0,
        );
    }

    let received: f64 = if received.is_finite() { received } else { 0.0 };
    let unpaid: f64 = total_amount - received;
    let payment_rate: f64 = received / total_amount * 100.0;

    if unpaid <= 0.0 {
        let mut report = PaymentStatusReport::new(
            PaymentStatus::PaidInFull,
            String::from("Paid in full"),
            payment_rate,
            unpaid,
        );
        if payment_rate < 100.0 {
            report.payment_type = PaymentType::Completed;
        }
        return report;
    }

    let contract = classify_contract_status(start_volume, end_volume, current_volume);

    let active_counts: Option<(u32, u32)> = match (contract.status, start_volume, end_volume) {
        (ContractStatus::Active, Some(start), Some(end)) => {
            issue_counts(start, end, current_volume)
        }
        _ => None,
    };

    if let Some((total_issues, published)) = active_counts {
        return classify_active(
            total_amount,
            received,
            unpaid,
            payment_rate,
            total_issues,
            published,
        );
    }

    if contract.status == ContractStatus::Expired {
        let overdue: u32 = contract.expired_issues.unwrap_or_default();
        let mut report = PaymentStatusReport::new(
            PaymentStatus::Overdue,
            format!(
                "Contract ended {overdue} issues ago, {} outstanding",
                format_currency(unpaid)
            ),
            payment_rate,
            unpaid,
        );
        report.overdue_issues = Some(overdue);
        return report;
    }

    if contract.status == ContractStatus::Upcoming && received > 0.0 {
        return PaymentStatusReport::new(
            PaymentStatus::PrepaidBeforeStart,
            format!("{} received before the contract starts", format_currency(received)),
            payment_rate,
            unpaid,
        );
    }

    if payment_rate >= IN_PROGRESS_RATE_PERCENT {
        PaymentStatusReport::new(
            PaymentStatus::InProgress,
            format!("{payment_rate:.1}% collected"),
            payment_rate,
            unpaid,
        )
    } else {
        PaymentStatusReport::new(
            PaymentStatus::LowCollection,
            format!("{payment_rate:.1}% collected, large balance outstanding"),
            payment_rate,
            unpaid,
        )
    }
}

fn classify_active(
    total_amount: f64,
    received: f64,
    unpaid: f64,
    payment_rate: f64,
    total_issues: u32,
    published: u32,
) -> PaymentStatusReport {
    let price_per_issue: f64 = total_amount / f64::from(total_issues);
    let expected: f64 = f64::from(published) * price_per_issue;
    let collection: f64 = if expected > 0.0 {
        received / expected * 100.0
    } else {
        0.0
    };
    let paid_issues: u32 = whole_issues(received, price_per_issue);

    let mut report = if payment_rate >= FULL_PREPAID_RATE_PERCENT {
        PaymentStatusReport::new(
            PaymentStatus::FullPrepaid,
            format!(
                "{total_issues} issues, {published} published, {payment_rate:.0}% paid in advance"
            ),
            payment_rate,
            unpaid,
        )
    } else if collection > PARTIAL_PREPAID_COLLECTION_PERCENT {
        let mut report = PaymentStatusReport::new(
            PaymentStatus::PartialPrepaid,
            format!(
                "{paid_issues} of {total_issues} issues paid in advance ({published} published)"
            ),
            payment_rate,
            unpaid,
        );
        report.prepaid_issues = Some(paid_issues);
        report
    } else if collection >= ON_PACE_COLLECTION_PERCENT {
        PaymentStatusReport::new(
            PaymentStatus::PayPerIssue,
            format!("{published} issues published, {published} issues paid (on pace)"),
            payment_rate,
            unpaid,
        )
    } else {
        let delayed: u32 = published.saturating_sub(paid_issues);
        let mut report = PaymentStatusReport::new(
            PaymentStatus::Delayed,
            format!("{published} issues published, {delayed} issues unpaid"),
            payment_rate,
            unpaid,
        );
        report.delayed_issues = Some(delayed);
        report
    };

    report.total_issues = Some(total_issues);
    report.published_issues = Some(published);
    report.collection_vs_published = Some(collection);
    report
}
