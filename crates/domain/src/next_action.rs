// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contract_status::{ContractStatus, ContractStatusReport};
use crate::money::format_currency;
use crate::payment_status::{PaymentStatus, PaymentStatusReport};
use serde::Serialize;

/// Remaining issues at or below which a renewal should be proposed.
pub const RENEWAL_WINDOW_ISSUES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

impl ActionPriority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// What the sales desk should do next for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextAction {
    pub priority: ActionPriority,
    pub action: &'static str,
    pub message: String,
    pub icon: &'static str,
}

/// Picks the next action from the contract and payment classifications.
///
/// # Arguments
///
/// * `contract` - Contract lifecycle classification
/// * `payment` - Payment behaviour classification
/// * `unpaid` - Outstanding balance, quoted in the overdue message
#[must_use]
pub fn recommend_next_action(
    contract: &ContractStatusReport,
    payment: &PaymentStatusReport,
    unpaid: f64,
) -> NextAction {
    if contract.status == ContractStatus::Expired && payment.status == PaymentStatus::Overdue {
        return NextAction {
            priority: ActionPriority::High,
            action: "Contact immediately",
            message: format!(
                "Contract has ended with {} outstanding. Collect immediately.",
                format_currency(unpaid)
            ),
            icon: "🚨",
        };
    }

    if contract.status == ContractStatus::Active {
        if payment.status == PaymentStatus::LowCollection {
            return NextAction {
                priority: ActionPriority::Medium,
                action: "Collection follow-up",
                message: String::from(
                    "Contract is running but collection is low. Follow up on payment.",
                ),
                icon: "⚠️",
            };
        }

        if contract
            .remaining_issues
            .is_some_and(|remaining| remaining <= RENEWAL_WINDOW_ISSUES)
        {
            return NextAction {
                priority: ActionPriority::Medium,
                action: "Propose renewal",
                message: String::from("Contract is about to end. Propose a renewal."),
                icon: "📞",
            };
        }
    }

    if payment.status == PaymentStatus::PaidInFull {
        return NextAction {
            priority: ActionPriority::Low,
            action: "Thank customer",
            message: String::from("Paid in full. Thank the customer and discuss renewal."),
            icon: "🎉",
        };
    }

    NextAction {
        priority: ActionPriority::Low,
        action: "Routine management",
        message: String::from("Account is in good standing."),
        icon: "✅",
    }
}
