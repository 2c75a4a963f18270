// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of the "ADVERTISEMENT DETAILS" ledger rows.
//!
//! Every parser here is total: unreadable input becomes an empty string,
//! zero, or an unknown window.

use crate::types::ContractWindow;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static VOLUME_RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*~\s*(\d+)").ok());
static SINGLE_VOLUME: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d{3}").ok());
static LEADING_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^-?(?:\d+\.?\d*|\.\d+)").ok());

/// One ledger row, in sheet column order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRow {
    pub no: String,
    pub customer: String,
    pub address: String,
    pub tel: String,
    pub page_no: String,
    pub size: String,
    pub price: String,
    pub received: String,
    pub have_collect: String,
    pub remarks: String,
}

impl AdRow {
    /// Builds a row from positional cells. Missing trailing cells are empty.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = fields.into_iter().map(str::to_string);
        let mut next = || cells.next().unwrap_or_default();
        Self {
            no: next(),
            customer: next(),
            address: next(),
            tel: next(),
            page_no: next(),
            size: next(),
            price: next(),
            received: next(),
            have_collect: next(),
            remarks: next(),
        }
    }

    /// Rows without a customer name are filler and get skipped on import.
    #[must_use]
    pub fn has_customer(&self) -> bool {
        !self.customer.trim().is_empty()
    }

    #[must_use]
    pub fn contract_window(&self) -> ContractWindow {
        parse_volume_range(&self.remarks)
    }

    #[must_use]
    pub fn price_per_issue(&self) -> f64 {
        parse_price(&self.price)
    }

    #[must_use]
    pub fn amount_received(&self) -> f64 {
        parse_price(&self.received)
    }

    /// Balance the ledger itself records as still to collect.
    #[must_use]
    pub fn recorded_unpaid(&self) -> f64 {
        parse_price(&self.have_collect)
    }

    #[must_use]
    pub fn phone_numbers(&self) -> PhoneNumbers {
        parse_phone_numbers(&self.tel)
    }

    #[must_use]
    pub fn customer_type(&self) -> Option<CustomerType> {
        CustomerType::from_size(&self.size)
    }
}

/// Extracts the contracted window from free-text remarks.
///
/// `552~557` is a range; otherwise the first three-digit number is a
/// single-issue window; otherwise the window is unknown.
#[must_use]
pub fn parse_volume_range(remarks: &str) -> ContractWindow {
    if let Some(caps) = VOLUME_RANGE.as_ref().and_then(|re| re.captures(remarks)) {
        let start: Option<u32> = caps.get(1).and_then(|m| m.as_str().parse().ok());
        let end: Option<u32> = caps.get(2).and_then(|m| m.as_str().parse().ok());
        return ContractWindow::new(start, end);
    }

    SINGLE_VOLUME
        .as_ref()
        .and_then(|re| re.find(remarks))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map_or_else(ContractWindow::unknown, ContractWindow::single)
}

/// Reads a currency string such as `$1,200.50`.
///
/// Everything except digits, `.` and `-` is discarded, then the longest
/// leading decimal number is taken. Anything unreadable is 0.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    LEADING_NUMBER
        .as_ref()
        .and_then(|re| re.find(&cleaned))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneNumbers {
    pub phone: String,
    pub mobile: String,
}

/// Splits a telephone cell on `;`, `/` or `,` into landline and mobile.
#[must_use]
pub fn parse_phone_numbers(tel: &str) -> PhoneNumbers {
    let mut numbers = tel
        .split([';', '/', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty());
    PhoneNumbers {
        phone: numbers.next().unwrap_or_default().to_string(),
        mobile: numbers.next().unwrap_or_default().to_string(),
    }
}

/// Advertiser segment derived from the booked ad size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    LargeAdvertiser,
    MediumAdvertiser,
    SmallAdvertiser,
    YellowPages,
    FleaMarket,
    Other,
}

impl CustomerType {
    /// Classifies an ad size cell. Empty cells have no type.
    #[must_use]
    pub fn from_size(size: &str) -> Option<Self> {
        let size: String = size.trim().to_uppercase();
        if size.is_empty() {
            return None;
        }
        let customer_type = if size == "FC" {
            Self::LargeAdvertiser
        } else if size.contains("1/2") {
            Self::MediumAdvertiser
        } else if size.contains("1/4") {
            Self::SmallAdvertiser
        } else if size.contains("YELLOW") {
            Self::YellowPages
        } else if size.contains("FLEA") {
            Self::FleaMarket
        } else {
            Self::Other
        };
        Some(customer_type)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LargeAdvertiser => "large_advertiser",
            Self::MediumAdvertiser => "medium_advertiser",
            Self::SmallAdvertiser => "small_advertiser",
            Self::YellowPages => "yellow_pages",
            Self::FleaMarket => "flea_market",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LargeAdvertiser => "Large advertiser",
            Self::MediumAdvertiser => "Medium advertiser",
            Self::SmallAdvertiser => "Small advertiser",
            Self::YellowPages => "Yellow pages",
            Self::FleaMarket => "Flea market",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Contracted total: price × issues when the window is known, else the price.
#[must_use]
pub fn calculate_total_amount(window: &ContractWindow, price_per_issue: f64) -> f64 {
    window
        .issue_count()
        .map_or(price_per_issue, |issues| price_per_issue * f64::from(issues))
}
