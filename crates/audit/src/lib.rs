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
    clippy::all
)]

use adsales_domain::VolumeEntry;
use std::str::FromStr;
use time::OffsetDateTime;

/// Reason recorded when an editor gives none.
pub const DEFAULT_REASON: &str = "(no reason)";

/// Represents the entity performing an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "operator", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// A person editing the schedule.
    #[must_use]
    pub fn operator(id: &str) -> Self {
        Self::new(id.to_string(), String::from("operator"))
    }
}

/// Why an edit was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// Identifier of the triggering request.
    pub id: String,
    /// Free-text reason given by the editor.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - Why the edit was made
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }

    /// Builds a cause from an optional editor-supplied reason.
    ///
    /// Blank or missing reasons are recorded as `(no reason)`.
    #[must_use]
    pub fn from_reason(id: &str, reason: Option<&str>) -> Self {
        let description: String = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_REASON)
            .to_string();
        Self::new(id.to_string(), description)
    }
}

/// The kind of schedule edit performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleAction {
    SetVolumeEntry,
    UpdatePublishDate,
    MarkPublished,
    ClearOverride,
    ResetOverrides,
}

impl ScheduleAction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SetVolumeEntry => "SetVolumeEntry",
            Self::UpdatePublishDate => "UpdatePublishDate",
            Self::MarkPublished => "MarkPublished",
            Self::ClearOverride => "ClearOverride",
            Self::ResetOverrides => "ResetOverrides",
        }
    }
}

impl std::fmt::Display for ScheduleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored action name did not match any known edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownActionError(pub String);

impl std::fmt::Display for UnknownActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown schedule action: {}", self.0)
    }
}

impl std::error::Error for UnknownActionError {}

impl FromStr for ScheduleAction {
    type Err = UnknownActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SetVolumeEntry" => Ok(Self::SetVolumeEntry),
            "UpdatePublishDate" => Ok(Self::UpdatePublishDate),
            "MarkPublished" => Ok(Self::MarkPublished),
            "ClearOverride" => Ok(Self::ClearOverride),
            "ResetOverrides" => Ok(Self::ResetOverrides),
            _ => Err(UnknownActionError(s.to_string())),
        }
    }
}

/// The effective entry of one volume before and after an edit.
///
/// `volume` is `None` for edits spanning the whole schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleChange {
    pub volume: Option<u32>,
    pub before: Option<VolumeEntry>,
    pub after: Option<VolumeEntry>,
}

impl ScheduleChange {
    #[must_use]
    pub const fn for_volume(
        volume: u32,
        before: Option<VolumeEntry>,
        after: Option<VolumeEntry>,
    ) -> Self {
        Self {
            volume: Some(volume),
            before,
            after,
        }
    }

    #[must_use]
    pub const fn whole_schedule() -> Self {
        Self {
            volume: None,
            before: None,
            after: None,
        }
    }

    /// Whether the publish date moved.
    #[must_use]
    pub fn date_changed(&self) -> bool {
        match (self.before, self.after) {
            (Some(before), Some(after)) => before.publish_date != after.publish_date,
            _ => false,
        }
    }
}

/// An immutable record of one successful schedule edit.
///
/// Every successful edit produces exactly one event, capturing:
/// - Who made it (actor)
/// - Why (cause)
/// - What kind of edit it was (action)
/// - The volume entry before and after (change)
/// - When it was recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Assigned by storage. `None` until persisted.
    pub event_id: Option<i64>,
    pub actor: Actor,
    pub cause: Cause,
    pub action: ScheduleAction,
    pub change: ScheduleChange,
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new, not yet persisted `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - Who made the edit
    /// * `cause` - Why it was made
    /// * `action` - What kind of edit it was
    /// * `change` - The before and after entries
    /// * `recorded_at` - When the edit happened
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: ScheduleAction,
        change: ScheduleChange,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            change,
            recorded_at,
        }
    }

    /// Attaches the storage-assigned identifier.
    #[must_use]
    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adsales_domain::VolumeStatus;
    use time::macros::{date, datetime};

    #[test]
    fn test_actor_constructors() {
        let actor: Actor = Actor::operator("desk-1");
        assert_eq!(actor.id, "desk-1");
        assert_eq!(actor.actor_type, "operator");

        let importer: Actor = Actor::new(String::from("sheet-sync"), String::from("import"));
        assert_eq!(importer.actor_type, "import");
    }

    #[test]
    fn test_cause_defaults_blank_reason() {
        let cause: Cause = Cause::from_reason("req-1", None);
        assert_eq!(cause.description, DEFAULT_REASON);

        let cause: Cause = Cause::from_reason("req-2", Some("   "));
        assert_eq!(cause.description, DEFAULT_REASON);

        let cause: Cause = Cause::from_reason("req-3", Some(" printer delay "));
        assert_eq!(cause.description, "printer delay");
    }

    #[test]
    fn test_action_names_round_trip() {
        for action in [
            ScheduleAction::SetVolumeEntry,
            ScheduleAction::UpdatePublishDate,
            ScheduleAction::MarkPublished,
            ScheduleAction::ClearOverride,
            ScheduleAction::ResetOverrides,
        ] {
            assert_eq!(ScheduleAction::from_str(action.as_str()), Ok(action));
        }
        assert_eq!(
            ScheduleAction::from_str("SubmitBid"),
            Err(UnknownActionError(String::from("SubmitBid")))
        );
    }

    #[test]
    fn test_change_detects_date_move() {
        let before: VolumeEntry = VolumeEntry::planned(date!(2026 - 02 - 20));
        let moved: ScheduleChange =
            ScheduleChange::for_volume(554, Some(before), Some(before.with_date(date!(2026 - 02 - 27))));
        assert!(moved.date_changed());

        let published: ScheduleChange = ScheduleChange::for_volume(
            554,
            Some(before),
            Some(before.with_status(VolumeStatus::Published)),
        );
        assert!(!published.date_changed());
        assert!(!ScheduleChange::whole_schedule().date_changed());
    }

    #[test]
    fn test_event_id_assigned_after_persist() {
        let event: AuditEvent = AuditEvent::new(
            Actor::operator("desk-1"),
            Cause::from_reason("req-1", Some("reset")),
            ScheduleAction::ResetOverrides,
            ScheduleChange::whole_schedule(),
            datetime!(2026-02-10 09:30 UTC),
        );
        assert_eq!(event.event_id, None);

        let stored: AuditEvent = event.clone().with_event_id(7);
        assert_eq!(stored.event_id, Some(7));
        assert_eq!(stored.action, event.action);
    }
}
