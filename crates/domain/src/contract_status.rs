// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Where a contract sits relative to the current volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    /// Start or end volume missing.
    Unknown,
    /// The first contracted issue is still ahead.
    Upcoming,
    /// The current issue is inside the window.
    Active,
    /// The last contracted issue is behind us.
    Expired,
}

impl ContractStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Upcoming => "UPCOMING",
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
        }
    }

    /// Hex colour used when rendering the status.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Unknown => "#9e9e9e",
            Self::Upcoming => "#2196F3",
            Self::Active => "#4caf50",
            Self::Expired => "#f44336",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "No volume info",
            Self::Upcoming => "Contract upcoming",
            Self::Active => "Ad running",
            Self::Expired => "Contract expired",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a contract window against the current volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractStatusReport {
    pub status: ContractStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub description: String,
    /// Issues still to run, counting the current one. Set only when active.
    pub remaining_issues: Option<u32>,
    /// Issues published since the window closed. Set only when expired.
    pub expired_issues: Option<u32>,
}

impl ContractStatusReport {
    fn new(status: ContractStatus, description: String) -> Self {
        Self {
            status,
            label: status.label(),
            color: status.color(),
            description,
            remaining_issues: None,
            expired_issues: None,
        }
    }
}

/// Classifies a contract window relative to `current_volume`.
///
/// # Arguments
///
/// * `start_volume` - First contracted volume, if known
/// * `end_volume` - Last contracted volume, if known
/// * `current_volume` - The volume treated as "now"
#[must_use]
pub fn classify_contract_status(
    start_volume: Option<u32>,
    end_volume: Option<u32>,
    current_volume: u32,
) -> ContractStatusReport {
    let (Some(start), Some(end)) = (start_volume, end_volume) else {
        return ContractStatusReport::new(
            ContractStatus::Unknown,
            String::from("No contracted volume range on record"),
        );
    };

    if current_volume < start {
        return ContractStatusReport::new(
            ContractStatus::Upcoming,
            format!("Starts at Vol {start}"),
        );
    }

    if current_volume <= end {
        let remaining: u32 = (end - current_volume).saturating_add(1);
        let mut report = ContractStatusReport::new(
            ContractStatus::Active,
            format!("{remaining} issues left (current Vol {current_volume})"),
        );
        report.remaining_issues = Some(remaining);
        return report;
    }

    let expired: u32 = current_volume - end;
    let mut report = ContractStatusReport::new(
        ContractStatus::Expired,
        format!("Ended at Vol {end} ({expired} issues ago)"),
    );
    report.expired_issues = Some(expired);
    report
}

/// Issues in the window and how many of them are published as of `current_volume`.
///
/// Returns `None` for an unknown or inverted window.
pub(crate) fn issue_counts(start: u32, end: u32, current_volume: u32) -> Option<(u32, u32)> {
    if end < start {
        return None;
    }
    let total: u32 = (end - start).saturating_add(1);
    let published: u32 = current_volume.min(end).saturating_add(1).saturating_sub(start);
    Some((total, published))
}

/// Percentage of the window already published, clamped to `[0, 100]`.
///
/// Unknown windows report 0.
#[must_use]
pub fn contract_progress_percent(
    start_volume: Option<u32>,
    end_volume: Option<u32>,
    current_volume: u32,
) -> f64 {
    let (Some(start), Some(end)) = (start_volume, end_volume) else {
        return 0.0;
    };
    issue_counts(start, end, current_volume).map_or(0.0, |(total, published)| {
        (f64::from(published) / f64::from(total) * 100.0).clamp(0.0, 100.0)
    })
}
