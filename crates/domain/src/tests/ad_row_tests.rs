// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ActionPriority, AdRow, ContractStatus, ContractWindow, CustomerType, PaymentStatus,
    calculate_total_amount, evaluate_account, parse_phone_numbers, parse_price,
    parse_volume_range,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_parse_price_strips_currency_formatting() {
    assert!(approx(parse_price("$1,200.50"), 1200.5));
    assert!(approx(parse_price("  $300 "), 300.0));
    assert!(approx(parse_price("-$50"), -50.0));
    assert!(approx(parse_price("1.2.3"), 1.2));
}

#[test]
fn test_parse_price_unreadable_is_zero() {
    assert!(approx(parse_price(""), 0.0));
    assert!(approx(parse_price("n/a"), 0.0));
    assert!(approx(parse_price("--5"), 0.0));
}

#[test]
fn test_parse_volume_range() {
    assert_eq!(parse_volume_range("552~557"), ContractWindow::range(552, 557));
    assert_eq!(
        parse_volume_range("renewed 549 ~ 560 monthly"),
        ContractWindow::range(549, 560)
    );
    assert_eq!(parse_volume_range("553!"), ContractWindow::single(553));
    assert_eq!(parse_volume_range("monthly~Jul'26"), ContractWindow::unknown());
    assert_eq!(parse_volume_range(""), ContractWindow::unknown());
    assert_eq!(parse_volume_range("0~0"), ContractWindow::unknown());
}

#[test]
fn test_parse_phone_numbers() {
    let numbers = parse_phone_numbers("604-111-2222 / 778-333-4444");
    assert_eq!(numbers.phone, "604-111-2222");
    assert_eq!(numbers.mobile, "778-333-4444");

    let numbers = parse_phone_numbers(";; 604-555-0000");
    assert_eq!(numbers.phone, "604-555-0000");
    assert_eq!(numbers.mobile, "");

    let numbers = parse_phone_numbers("");
    assert_eq!(numbers.phone, "");
}

#[test]
fn test_customer_type_from_size() {
    assert_eq!(
        CustomerType::from_size("fc"),
        Some(CustomerType::LargeAdvertiser)
    );
    assert_eq!(
        CustomerType::from_size("1/2 page"),
        Some(CustomerType::MediumAdvertiser)
    );
    assert_eq!(
        CustomerType::from_size("1/4"),
        Some(CustomerType::SmallAdvertiser)
    );
    assert_eq!(
        CustomerType::from_size("Yellow Page"),
        Some(CustomerType::YellowPages)
    );
    assert_eq!(
        CustomerType::from_size("flea"),
        Some(CustomerType::FleaMarket)
    );
    assert_eq!(CustomerType::from_size("FC+"), Some(CustomerType::Other));
    assert_eq!(CustomerType::from_size("   "), None);
}

#[test]
fn test_calculate_total_amount() {
    assert!(approx(
        calculate_total_amount(&ContractWindow::range(560, 565), 100.0),
        600.0
    ));
    assert!(approx(
        calculate_total_amount(&ContractWindow::unknown(), 100.0),
        100.0
    ));
}

#[test]
fn test_ad_row_from_fields_pads_missing_cells() {
    let row: AdRow = AdRow::from_fields(["1", "Maple Dental", "123 Main St"]);
    assert_eq!(row.customer, "Maple Dental");
    assert_eq!(row.remarks, "");
    assert!(row.has_customer());

    let blank: AdRow = AdRow::from_fields(["2", "  "]);
    assert!(!blank.has_customer());
}

#[test]
fn test_evaluate_account_active_on_pace() {
    let row: AdRow = AdRow::from_fields([
        "1",
        "Maple Dental",
        "123 Main St",
        "604-111-2222, 778-333-4444",
        "12",
        "1/4",
        "$100",
        "$300",
        "$300",
        "560~565",
    ]);

    let report = evaluate_account(&row, 562);
    assert_eq!(report.customer, "Maple Dental");
    assert_eq!(report.customer_type, Some(CustomerType::SmallAdvertiser));
    assert_eq!(report.phone_numbers.mobile, "778-333-4444");
    assert!(approx(report.amounts.total_contracted_amount, 600.0));
    assert!(approx(report.unpaid, 300.0));
    assert!(approx(report.collection_rate, 50.0));
    assert!(approx(report.progress_percent, 50.0));
    assert_eq!(report.contract.status, ContractStatus::Active);
    assert_eq!(report.payment.status, PaymentStatus::PayPerIssue);
    assert_eq!(report.next_action.priority, ActionPriority::Low);
}

#[test]
fn test_evaluate_account_expired_with_balance() {
    let row: AdRow = AdRow::from_fields([
        "7", "Harbour Cafe", "", "", "", "FC", "$1,000", "$2,000", "", "545~548",
    ]);
    let report = evaluate_account(&row, 553);
    assert_eq!(report.contract.status, ContractStatus::Expired);
    assert_eq!(report.payment.status, PaymentStatus::Overdue);
    assert_eq!(report.next_action.priority, ActionPriority::High);
    assert!(approx(report.unpaid, 2000.0));
}
