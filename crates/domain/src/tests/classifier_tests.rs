// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionPriority, ContractStatus, PaymentStatus, PaymentType, classify_contract_status,
    classify_payment_status, contract_progress_percent, recommend_next_action,
};

#[test]
fn test_contract_active_counts_current_issue() {
    let report = classify_contract_status(Some(560), Some(565), 562);
    assert_eq!(report.status, ContractStatus::Active);
    assert_eq!(report.remaining_issues, Some(4));
    assert_eq!(report.description, "4 issues left (current Vol 562)");
    assert_eq!(report.color, "#4caf50");
}

#[test]
fn test_contract_expired_counts_issues_since_end() {
    let report = classify_contract_status(Some(560), Some(565), 570);
    assert_eq!(report.status, ContractStatus::Expired);
    assert_eq!(report.expired_issues, Some(5));
    assert_eq!(report.remaining_issues, None);
}

#[test]
fn test_contract_upcoming_and_unknown() {
    let upcoming = classify_contract_status(Some(560), Some(565), 553);
    assert_eq!(upcoming.status, ContractStatus::Upcoming);
    assert_eq!(upcoming.description, "Starts at Vol 560");

    assert_eq!(
        classify_contract_status(None, Some(565), 553).status,
        ContractStatus::Unknown
    );
    assert_eq!(
        classify_contract_status(Some(560), None, 553).status,
        ContractStatus::Unknown
    );
}

#[test]
fn test_contract_status_partitions_volume_axis() {
    for start in 540..=560 {
        for end in start..=570 {
            for current in 530..=580 {
                let status = classify_contract_status(Some(start), Some(end), current).status;
                let expected = if current < start {
                    ContractStatus::Upcoming
                } else if current <= end {
                    ContractStatus::Active
                } else {
                    ContractStatus::Expired
                };
                assert_eq!(status, expected, "({start}, {end}, {current})");
            }
        }
    }
}

#[test]
fn test_progress_percent() {
    assert!((contract_progress_percent(Some(560), Some(565), 562) - 50.0).abs() < 1e-9);
    assert!(contract_progress_percent(Some(560), Some(565), 553).abs() < f64::EPSILON);
    assert!((contract_progress_percent(Some(560), Some(565), 600) - 100.0).abs() < f64::EPSILON);
    assert!(contract_progress_percent(None, Some(565), 562).abs() < f64::EPSILON);
}

#[test]
fn test_payment_unknown_without_total() {
    let report = classify_payment_status(0.0, 0.0, Some(560), Some(565), 562);
    assert_eq!(report.status, PaymentStatus::Unknown);
    assert_eq!(report.payment_type, PaymentType::Unknown);

    let report = classify_payment_status(f64::NAN, 10.0, None, None, 562);
    assert_eq!(report.status, PaymentStatus::Unknown);

    let report = classify_payment_status(-100.0, 10.0, None, None, 562);
    assert_eq!(report.status, PaymentStatus::Unknown);
}

#[test]
fn test_payment_paid_in_full() {
    let report = classify_payment_status(1000.0, 1000.0, Some(560), Some(565), 562);
    assert_eq!(report.status, PaymentStatus::PaidInFull);
    assert_eq!(report.payment_type, PaymentType::FullPrepaid);
    assert_eq!(report.icon, "✅");

    let overpaid = classify_payment_status(1000.0, 1200.0, None, None, 562);
    assert_eq!(overpaid.status, PaymentStatus::PaidInFull);
    assert!(overpaid.unpaid < 0.0);
}

#[test]
fn test_paid_in_full_iff_received_covers_total() {
    for total in [100.0, 550.0, 1000.0] {
        for step in 0..=30 {
            let received: f64 = f64::from(step) * 50.0;
            let report = classify_payment_status(total, received, Some(560), Some(565), 562);
            assert_eq!(
                report.status == PaymentStatus::PaidInFull,
                received >= total,
                "total {total}, received {received}"
            );
        }
    }
}

#[test]
fn test_payment_active_full_prepaid() {
    let report = classify_payment_status(600.0, 500.0, Some(560), Some(565), 562);
    assert_eq!(report.status, PaymentStatus::FullPrepaid);
    assert_eq!(report.total_issues, Some(6));
    assert_eq!(report.published_issues, Some(3));
    assert_eq!(report.description, "6 issues, 3 published, 83% paid in advance");
}

#[test]
fn test_payment_active_partial_prepaid() {
    let report = classify_payment_status(600.0, 400.0, Some(560), Some(565), 562);
    assert_eq!(report.status, PaymentStatus::PartialPrepaid);
    assert_eq!(report.prepaid_issues, Some(4));
}

#[test]
fn test_payment_active_pay_per_issue() {
    let report = classify_payment_status(600.0, 300.0, Some(560), Some(565), 562);
    assert_eq!(report.status, PaymentStatus::PayPerIssue);
    let collection: f64 = report.collection_vs_published.unwrap();
    assert!((collection - 100.0).abs() < 1e-9);
}

#[test]
fn test_payment_pay_per_issue_band_is_inclusive() {
    // 3 of 6 issues published at $100 each, so $300 is on pace.
    let at_floor = classify_payment_status(600.0, 240.0, Some(560), Some(565), 562);
    assert_eq!(at_floor.status, PaymentStatus::PayPerIssue);

    let at_ceiling = classify_payment_status(600.0, 360.0, Some(560), Some(565), 562);
    assert_eq!(at_ceiling.status, PaymentStatus::PayPerIssue);

    let above_ceiling = classify_payment_status(600.0, 361.0, Some(560), Some(565), 562);
    assert_eq!(above_ceiling.status, PaymentStatus::PartialPrepaid);

    let below_floor = classify_payment_status(600.0, 239.0, Some(560), Some(565), 562);
    assert_eq!(below_floor.status, PaymentStatus::Delayed);
}

#[test]
fn test_payment_active_delayed() {
    let report = classify_payment_status(600.0, 100.0, Some(560), Some(565), 562);
    assert_eq!(report.status, PaymentStatus::Delayed);
    assert_eq!(report.delayed_issues, Some(2));
    assert_eq!(report.description, "3 issues published, 2 issues unpaid");
}

#[test]
fn test_payment_overdue_after_expiry() {
    let report = classify_payment_status(600.0, 200.0, Some(560), Some(565), 570);
    assert_eq!(report.status, PaymentStatus::Overdue);
    assert_eq!(report.overdue_issues, Some(5));
    assert!((report.unpaid - 400.0).abs() < f64::EPSILON);
    assert_eq!(
        report.description,
        "Contract ended 5 issues ago, $400 outstanding"
    );
}

#[test]
fn test_payment_prepaid_before_start() {
    let report = classify_payment_status(600.0, 100.0, Some(560), Some(565), 555);
    assert_eq!(report.status, PaymentStatus::PrepaidBeforeStart);
    assert_eq!(
        report.description,
        "$100 received before the contract starts"
    );

    let nothing = classify_payment_status(600.0, 0.0, Some(560), Some(565), 555);
    assert_eq!(nothing.status, PaymentStatus::LowCollection);
}

#[test]
fn test_payment_rate_buckets_without_window() {
    let half = classify_payment_status(500.0, 250.0, None, None, 553);
    assert_eq!(half.status, PaymentStatus::InProgress);

    let report = classify_payment_status(500.0, 300.0, None, None, 553);
    assert_eq!(report.status, PaymentStatus::InProgress);
    assert_eq!(report.description, "60.0% collected");

    let report = classify_payment_status(500.0, 100.0, None, None, 553);
    assert_eq!(report.status, PaymentStatus::LowCollection);
}

#[test]
fn test_next_action_contact_immediately() {
    let contract = classify_contract_status(Some(560), Some(565), 570);
    let payment = classify_payment_status(600.0, 200.0, Some(560), Some(565), 570);
    let action = recommend_next_action(&contract, &payment, 400.0);
    assert_eq!(action.priority, ActionPriority::High);
    assert_eq!(action.action, "Contact immediately");
    assert!(action.message.contains("$400"));
}

#[test]
fn test_next_action_collection_follow_up() {
    let contract = classify_contract_status(Some(560), Some(565), 562);
    let payment = classify_payment_status(500.0, 100.0, None, None, 562);
    let action = recommend_next_action(&contract, &payment, 400.0);
    assert_eq!(action.priority, ActionPriority::Medium);
    assert_eq!(action.action, "Collection follow-up");
}

#[test]
fn test_next_action_propose_renewal_uses_remaining_issues() {
    let contract = classify_contract_status(Some(560), Some(565), 564);
    assert_eq!(contract.remaining_issues, Some(2));
    let payment = classify_payment_status(600.0, 500.0, Some(560), Some(565), 564);
    let action = recommend_next_action(&contract, &payment, 100.0);
    assert_eq!(action.priority, ActionPriority::Medium);
    assert_eq!(action.action, "Propose renewal");

    let early = classify_contract_status(Some(560), Some(565), 562);
    let payment = classify_payment_status(600.0, 300.0, Some(560), Some(565), 562);
    let action = recommend_next_action(&early, &payment, 300.0);
    assert_eq!(action.action, "Routine management");
}

#[test]
fn test_next_action_thanks_paid_customers() {
    let contract = classify_contract_status(Some(540), Some(545), 553);
    let payment = classify_payment_status(600.0, 600.0, Some(540), Some(545), 553);
    let action = recommend_next_action(&contract, &payment, 0.0);
    assert_eq!(action.priority, ActionPriority::Low);
    assert_eq!(action.action, "Thank customer");
}
