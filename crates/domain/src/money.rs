// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use num_traits::ToPrimitive;

/// Formats a dollar amount with thousands separators, e.g. `$12,500` or `$99.5`.
///
/// Amounts are rounded to cents and trailing zero cents are dropped.
/// Non-finite input renders as `$0`. Amounts too large to count in cents
/// render ungrouped with two decimals.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::from("$0");
    }

    let Some(cents) = (amount.abs() * 100.0).round().to_i64() else {
        let sign: &str = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}${:.2}", amount.abs());
    };
    let whole: String = (cents / 100).to_string();
    let fraction: i64 = cents % 100;

    let mut grouped: String = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign: &str = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}${grouped}")
    } else if fraction % 10 == 0 {
        format!("{sign}${grouped}.{}", fraction / 10)
    } else {
        format!("{sign}${grouped}.{fraction:02}")
    }
}

/// Whole issues covered by `amount` at `price_per_issue`, floored and never negative.
pub(crate) fn whole_issues(amount: f64, price_per_issue: f64) -> u32 {
    if price_per_issue <= 0.0 || !price_per_issue.is_finite() {
        return 0;
    }
    (amount / price_per_issue)
        .floor()
        .max(0.0)
        .to_u32()
        .unwrap_or(u32::MAX)
}
