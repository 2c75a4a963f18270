// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ad_row::{AdRow, CustomerType, PhoneNumbers};
use crate::contract_status::{
    ContractStatusReport, classify_contract_status, contract_progress_percent,
};
use crate::next_action::{NextAction, recommend_next_action};
use crate::payment_status::{PaymentStatusReport, classify_payment_status};
use crate::types::{ContractWindow, MoneyAmounts};
use serde::Serialize;

/// Everything the customer card shows for one ledger row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountReport {
    pub customer: String,
    pub customer_type: Option<CustomerType>,
    pub phone_numbers: PhoneNumbers,
    pub window: ContractWindow,
    pub amounts: MoneyAmounts,
    pub unpaid: f64,
    pub collection_rate: f64,
    pub current_volume: u32,
    pub contract: ContractStatusReport,
    pub payment: PaymentStatusReport,
    pub progress_percent: f64,
    pub next_action: NextAction,
}

/// Runs the full classification pipeline for one ledger row.
///
/// # Arguments
///
/// * `row` - The parsed ledger row
/// * `current_volume` - The volume treated as "now", normally the calendar's current volume
#[must_use]
pub fn evaluate_account(row: &AdRow, current_volume: u32) -> AccountReport {
    let window: ContractWindow = row.contract_window();
    let amounts: MoneyAmounts =
        MoneyAmounts::for_window(&window, row.price_per_issue(), row.amount_received());
    let unpaid: f64 = amounts.unpaid();

    let contract = classify_contract_status(window.start_volume, window.end_volume, current_volume);
    let payment = classify_payment_status(
        amounts.total_contracted_amount,
        amounts.amount_received,
        window.start_volume,
        window.end_volume,
        current_volume,
    );
    let next_action = recommend_next_action(&contract, &payment, unpaid);

    AccountReport {
        customer: row.customer.trim().to_string(),
        customer_type: row.customer_type(),
        phone_numbers: row.phone_numbers(),
        window,
        amounts,
        unpaid,
        collection_rate: amounts.collection_rate(),
        current_volume,
        progress_percent: contract_progress_percent(
            window.start_volume,
            window.end_volume,
            current_volume,
        ),
        contract,
        payment,
        next_action,
    }
}
